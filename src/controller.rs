//! A stateful pagination controller built on [`crate::pager`].
//!
//! The controller owns the current [`Pager`] descriptor and the pagination
//! configuration, validates page transitions, and notifies the embedding
//! application with the current page's item slice through a change
//! callback. The source collection itself stays with the caller; the
//! controller only ever borrows it for slicing.
//!
//! Recomputation is driven explicitly: the owner calls
//! [`Model::on_items_changed`] when the identity of the source collection
//! changes (new data arrived), not on every redraw.

use crate::key::{self, KeyMap as KeyMapTrait};
use crate::pager::{compute_pager, Pager, DEFAULT_PAGE_SIZE};
use bubbletea_rs::{KeyMsg, Msg};
use crossterm::event::KeyCode;
use thiserror::Error;

/// Change callback invoked with the current page's item slice.
///
/// Fires synchronously, exactly once per successful page transition, after
/// the controller's descriptor has been replaced (so re-entrant navigation
/// from inside the callback operates on settled state).
pub type ChangeFunc<T> = Box<dyn FnMut(&[T]) + Send>;

/// Invalid pagination configuration, rejected at construction time.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The page size was zero; at least one item per page is required.
    #[error("page size must be at least 1")]
    ZeroPageSize,
    /// The initial page was zero; pages are 1-indexed.
    #[error("initial page must be at least 1")]
    ZeroInitialPage,
}

/// Key bindings for pager navigation.
///
/// # Examples
///
/// ```rust
/// use pagewindow::controller::PagerKeyMap;
/// use pagewindow::key;
/// use crossterm::event::KeyCode;
///
/// let mut keymap = PagerKeyMap::default();
///
/// // Rebind next/prev to plain arrows only.
/// keymap.next_page = key::Binding::new(vec![KeyCode::Right]).with_help("→", "next page");
/// keymap.prev_page = key::Binding::new(vec![KeyCode::Left]).with_help("←", "prev page");
/// ```
#[derive(Debug, Clone)]
pub struct PagerKeyMap {
    /// Key binding for jumping to the first page.
    /// Default keys: Home, 'g'
    pub first_page: key::Binding,
    /// Key binding for navigating to the previous page.
    /// Default keys: PageUp, Left Arrow, 'h'
    pub prev_page: key::Binding,
    /// Key binding for navigating to the next page.
    /// Default keys: PageDown, Right Arrow, 'l'
    pub next_page: key::Binding,
    /// Key binding for jumping to the last page.
    /// Default keys: End, 'G'
    pub last_page: key::Binding,
}

impl Default for PagerKeyMap {
    fn default() -> Self {
        Self {
            first_page: key::Binding::new(vec![KeyCode::Home, KeyCode::Char('g')])
                .with_help("home/g", "first page"),
            prev_page: key::Binding::new(vec![KeyCode::PageUp, KeyCode::Left, KeyCode::Char('h')])
                .with_help("←/h", "prev page"),
            next_page: key::Binding::new(vec![
                KeyCode::PageDown,
                KeyCode::Right,
                KeyCode::Char('l'),
            ])
            .with_help("→/l", "next page"),
            last_page: key::Binding::new(vec![KeyCode::End, KeyCode::Char('G')])
                .with_help("end/G", "last page"),
        }
    }
}

impl KeyMapTrait for PagerKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.prev_page, &self.next_page]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![&self.first_page, &self.prev_page],
            vec![&self.next_page, &self.last_page],
        ]
    }
}

/// A pagination controller model.
///
/// Owns the mutable "current page" concept for one paginated collection.
/// The collection is element-type-agnostic and is passed to every
/// operation by reference; the controller never copies it beyond slicing.
///
/// # Examples
///
/// ```rust
/// use pagewindow::controller::Model;
/// use std::sync::{Arc, Mutex};
///
/// let seen: Arc<Mutex<Vec<Vec<u32>>>> = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&seen);
///
/// let items: Vec<u32> = (0..25).collect();
/// let mut pager = Model::new(3, 1)
///     .unwrap()
///     .with_on_change(move |page: &[u32]| sink.lock().unwrap().push(page.to_vec()));
///
/// pager.initialize(&items);
/// assert_eq!(seen.lock().unwrap().last().unwrap(), &vec![0, 1, 2]);
///
/// pager.request_page(&items, 9);
/// assert_eq!(seen.lock().unwrap().last().unwrap(), &vec![24]);
/// ```
pub struct Model<T> {
    page_size: usize,
    initial_page: usize,
    pager: Option<Pager>,
    on_change: Option<ChangeFunc<T>>,
    /// Key bindings.
    pub keymap: PagerKeyMap,
}

impl<T> Default for Model<T> {
    /// Creates a controller with the default configuration: 3 items per
    /// page, starting on page 1, no change callback.
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            initial_page: 1,
            pager: None,
            on_change: None,
            keymap: PagerKeyMap::default(),
        }
    }
}

impl<T> Model<T> {
    /// Creates a controller with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `page_size` or `initial_page` is zero;
    /// both are 1-based quantities and a zero value is a caller contract
    /// violation rather than something to silently normalize.
    pub fn new(page_size: usize, initial_page: usize) -> Result<Self, ConfigError> {
        if page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        if initial_page == 0 {
            return Err(ConfigError::ZeroInitialPage);
        }
        Ok(Self {
            page_size,
            initial_page,
            ..Self::default()
        })
    }

    /// Sets the change callback (builder pattern).
    pub fn with_on_change(mut self, f: impl FnMut(&[T]) + Send + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    /// Sets the change callback (mutable version).
    pub fn set_on_change(&mut self, f: impl FnMut(&[T]) + Send + 'static) {
        self.on_change = Some(Box::new(f));
    }

    /// Returns the configured items-per-page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Returns the configured initial page.
    pub fn initial_page(&self) -> usize {
        self.initial_page
    }

    /// Returns the current descriptor, or `None` while uninitialized.
    ///
    /// The controller stays uninitialized until [`Model::initialize`] (or
    /// [`Model::on_items_changed`]) sees a non-empty collection.
    pub fn pager(&self) -> Option<&Pager> {
        self.pager.as_ref()
    }

    /// Returns true if the active page is the first page.
    ///
    /// False while uninitialized.
    pub fn on_first_page(&self) -> bool {
        self.pager.as_ref().map_or(false, Pager::on_first_page)
    }

    /// Returns true if the active page is the last page.
    ///
    /// False while uninitialized.
    pub fn on_last_page(&self) -> bool {
        self.pager.as_ref().map_or(false, Pager::on_last_page)
    }

    /// Returns true if there is more than one page to navigate between.
    ///
    /// False while uninitialized.
    pub fn needs_navigation(&self) -> bool {
        self.pager.as_ref().map_or(false, Pager::needs_navigation)
    }

    /// Establishes pagination over `items`.
    ///
    /// With a non-empty collection this computes the descriptor for the
    /// configured initial page and fires the change callback with the
    /// resulting slice. An empty collection never reaches a "page" state:
    /// the controller stays (or becomes) uninitialized and the callback
    /// does not fire.
    pub fn initialize(&mut self, items: &[T]) {
        if items.is_empty() {
            self.pager = None;
            return;
        }
        self.apply(items, self.initial_page);
    }

    /// Handles a change of the source collection's identity.
    ///
    /// New data arrived: pagination resets to the initial page and is
    /// recomputed exactly as in [`Model::initialize`]. Call this only when
    /// the collection reference actually changed, not on every redraw.
    pub fn on_items_changed(&mut self, items: &[T]) {
        self.initialize(items);
    }

    /// Requests a transition to `page`.
    ///
    /// Out-of-range requests (`page` 0, `page` beyond the previous
    /// descriptor's `total_pages`, or any request while uninitialized)
    /// are dropped silently: no state change, no callback. This models
    /// stale navigation events (a "Next" click racing a shrinking
    /// collection, double-clicks) which should simply disappear.
    ///
    /// A request for the already-active page is in range: it recomputes an
    /// identical descriptor and re-fires the callback with the same slice.
    pub fn request_page(&mut self, items: &[T], page: usize) {
        let total_pages = match &self.pager {
            Some(pager) => pager.total_pages,
            None => return,
        };
        if page < 1 || page > total_pages {
            return;
        }
        self.apply(items, page);
    }

    /// Jumps to the first page. Equivalent to `request_page(items, 1)`.
    pub fn first_page(&mut self, items: &[T]) {
        self.request_page(items, 1);
    }

    /// Moves to the previous page; a no-op on the first page.
    pub fn prev_page(&mut self, items: &[T]) {
        if let Some(current) = self.pager.as_ref().map(|p| p.current_page) {
            self.request_page(items, current.saturating_sub(1));
        }
    }

    /// Moves to the next page; a no-op on the last page.
    pub fn next_page(&mut self, items: &[T]) {
        if let Some(current) = self.pager.as_ref().map(|p| p.current_page) {
            self.request_page(items, current + 1);
        }
    }

    /// Jumps to the last page.
    pub fn last_page(&mut self, items: &[T]) {
        if let Some(total) = self.pager.as_ref().map(|p| p.total_pages) {
            self.request_page(items, total);
        }
    }

    /// Routes key messages to the navigation operations.
    ///
    /// Call this from the embedding application's `update()` with the same
    /// collection the controller was initialized with. Messages that are
    /// not key presses, or keys outside [`PagerKeyMap`], are ignored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pagewindow::controller::Model;
    /// use bubbletea_rs::KeyMsg;
    /// use crossterm::event::{KeyCode, KeyModifiers};
    ///
    /// let items: Vec<u32> = (0..25).collect();
    /// let mut pager: Model<u32> = Model::new(3, 1).unwrap();
    /// pager.initialize(&items);
    ///
    /// let msg: bubbletea_rs::Msg = Box::new(KeyMsg {
    ///     key: KeyCode::Right,
    ///     modifiers: KeyModifiers::NONE,
    /// });
    /// pager.update(&msg, &items);
    /// assert_eq!(pager.pager().unwrap().current_page, 2);
    /// ```
    pub fn update(&mut self, msg: &Msg, items: &[T]) {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.keymap.next_page.matches(key_msg) {
                self.next_page(items);
            } else if self.keymap.prev_page.matches(key_msg) {
                self.prev_page(items);
            } else if self.keymap.first_page.matches(key_msg) {
                self.first_page(items);
            } else if self.keymap.last_page.matches(key_msg) {
                self.last_page(items);
            }
        }
    }

    // Compute-then-assign: the descriptor is replaced whole before the
    // callback fires, so reentrant navigation sees settled state.
    fn apply(&mut self, items: &[T], page: usize) {
        let pager = compute_pager(items.len(), page, self.page_size);
        let page_items = pager.slice(items);
        self.pager = Some(pager);
        if let Some(on_change) = self.on_change.as_mut() {
            on_change(page_items);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use std::sync::{Arc, Mutex};

    type Sink = Arc<Mutex<Vec<Vec<u32>>>>;

    // A controller wired to record every slice the callback receives.
    fn recording_model(page_size: usize, initial_page: usize) -> (Model<u32>, Sink) {
        let seen: Sink = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let model = Model::new(page_size, initial_page)
            .unwrap()
            .with_on_change(move |page: &[u32]| sink.lock().unwrap().push(page.to_vec()));
        (model, seen)
    }

    fn items(n: u32) -> Vec<u32> {
        (0..n).collect()
    }

    fn press(code: KeyCode) -> Msg {
        Box::new(KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_construction_rejects_zero_config() {
        assert_eq!(Model::<u32>::new(0, 1).err(), Some(ConfigError::ZeroPageSize));
        assert_eq!(Model::<u32>::new(3, 0).err(), Some(ConfigError::ZeroInitialPage));
        assert!(Model::<u32>::new(3, 1).is_ok());
    }

    #[test]
    fn test_initialize_fires_callback_with_first_slice() {
        let data = items(25);
        let (mut model, seen) = recording_model(3, 1);

        model.initialize(&data);

        let pager = model.pager().expect("initialized");
        assert_eq!(pager.total_pages, 9);
        assert_eq!((pager.start_page, pager.end_page), (1, 9));
        assert_eq!(*seen.lock().unwrap(), vec![vec![0, 1, 2]]);
    }

    #[test]
    fn test_initialize_with_empty_collection_does_nothing() {
        let data: Vec<u32> = Vec::new();
        let (mut model, seen) = recording_model(3, 1);

        model.initialize(&data);

        assert!(model.pager().is_none());
        assert!(!model.needs_navigation());
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_initialize_respects_initial_page() {
        let data = items(25);
        let (mut model, seen) = recording_model(3, 2);

        model.initialize(&data);

        assert_eq!(model.pager().unwrap().current_page, 2);
        assert_eq!(*seen.lock().unwrap(), vec![vec![3, 4, 5]]);
    }

    #[test]
    fn test_request_page_transitions_and_notifies_once() {
        let data = items(25);
        let (mut model, seen) = recording_model(3, 1);
        model.initialize(&data);

        model.request_page(&data, 9);

        let pager = model.pager().unwrap();
        assert_eq!(pager.current_page, 9);
        assert_eq!(seen.lock().unwrap().len(), 2);
        assert_eq!(seen.lock().unwrap()[1], vec![24]);
    }

    #[test]
    fn test_out_of_range_requests_are_dropped_silently() {
        let data = items(25);
        let (mut model, seen) = recording_model(3, 1);
        model.initialize(&data);
        let before = model.pager().unwrap().clone();

        model.request_page(&data, 0);
        model.request_page(&data, 10); // total_pages is 9

        assert_eq!(model.pager().unwrap(), &before);
        assert_eq!(seen.lock().unwrap().len(), 1); // only the initialize
    }

    #[test]
    fn test_request_while_uninitialized_is_dropped() {
        let data = items(25);
        let (mut model, seen) = recording_model(3, 1);

        model.request_page(&data, 1);

        assert!(model.pager().is_none());
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_requesting_the_active_page_is_idempotent_but_renotifies() {
        let data = items(25);
        let (mut model, seen) = recording_model(3, 1);
        model.initialize(&data);
        let before = model.pager().unwrap().clone();

        model.request_page(&data, 1);

        assert_eq!(model.pager().unwrap(), &before);
        assert_eq!(*seen.lock().unwrap(), vec![vec![0, 1, 2], vec![0, 1, 2]]);
    }

    #[test]
    fn test_navigation_conveniences() {
        let data = items(25);
        let (mut model, _seen) = recording_model(3, 1);
        model.initialize(&data);

        model.next_page(&data);
        assert_eq!(model.pager().unwrap().current_page, 2);

        model.prev_page(&data);
        assert_eq!(model.pager().unwrap().current_page, 1);

        model.last_page(&data);
        assert_eq!(model.pager().unwrap().current_page, 9);
        assert!(model.on_last_page());

        model.first_page(&data);
        assert_eq!(model.pager().unwrap().current_page, 1);
        assert!(model.on_first_page());
    }

    #[test]
    fn test_prev_on_first_and_next_on_last_are_no_ops() {
        let data = items(25);
        let (mut model, seen) = recording_model(3, 1);
        model.initialize(&data);

        model.prev_page(&data);
        assert_eq!(model.pager().unwrap().current_page, 1);

        model.last_page(&data);
        model.next_page(&data);
        assert_eq!(model.pager().unwrap().current_page, 9);

        // initialize + last_page only; the two no-ops never notified.
        assert_eq!(seen.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_items_changed_resets_to_initial_page() {
        // Collection shrinks from 30 to 5 items while on page 5.
        let old = items(30);
        let new = items(5);
        let (mut model, seen) = recording_model(3, 1);

        model.initialize(&old);
        model.request_page(&old, 5);
        assert_eq!(model.pager().unwrap().total_pages, 10);

        model.on_items_changed(&new);

        let pager = model.pager().unwrap();
        assert_eq!(pager.current_page, 1);
        assert_eq!(pager.total_pages, 2);
        assert_eq!((pager.start_page, pager.end_page), (1, 2));
        assert_eq!(seen.lock().unwrap().last().unwrap(), &vec![0, 1, 2]);
    }

    #[test]
    fn test_stale_next_click_after_shrink_is_dropped() {
        let old = items(30);
        let new = items(5);
        let (mut model, seen) = recording_model(3, 1);
        model.initialize(&old);
        model.on_items_changed(&new); // total_pages now 2

        // A click computed against the old descriptor's bounds.
        model.request_page(&new, 10);

        assert_eq!(model.pager().unwrap().current_page, 1);
        assert_eq!(seen.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_items_changed_to_empty_clears_state() {
        let data = items(25);
        let (mut model, seen) = recording_model(3, 1);
        model.initialize(&data);

        model.on_items_changed(&[]);

        assert!(model.pager().is_none());
        assert!(!model.on_first_page());
        assert!(!model.on_last_page());
        assert_eq!(seen.lock().unwrap().len(), 1); // no notification for empty
    }

    #[test]
    fn test_update_routes_key_messages() {
        let data = items(25);
        let (mut model, _seen) = recording_model(3, 1);
        model.initialize(&data);

        model.update(&press(KeyCode::Right), &data);
        assert_eq!(model.pager().unwrap().current_page, 2);

        model.update(&press(KeyCode::Left), &data);
        assert_eq!(model.pager().unwrap().current_page, 1);

        model.update(&press(KeyCode::End), &data);
        assert_eq!(model.pager().unwrap().current_page, 9);

        model.update(&press(KeyCode::Home), &data);
        assert_eq!(model.pager().unwrap().current_page, 1);

        // Unbound keys are ignored.
        model.update(&press(KeyCode::Char('x')), &data);
        assert_eq!(model.pager().unwrap().current_page, 1);

        // Non-key messages are ignored.
        let other: Msg = Box::new(42usize);
        model.update(&other, &data);
        assert_eq!(model.pager().unwrap().current_page, 1);
    }

    #[test]
    fn test_disabled_binding_is_ignored_by_update() {
        let data = items(25);
        let (mut model, _seen) = recording_model(3, 1);
        model.initialize(&data);

        model.keymap.next_page.set_enabled(false);
        model.update(&press(KeyCode::Right), &data);
        assert_eq!(model.pager().unwrap().current_page, 1);
    }

    #[test]
    fn test_keymap_help() {
        let keymap = PagerKeyMap::default();
        assert_eq!(keymap.short_help().len(), 2);
        assert_eq!(keymap.full_help().len(), 2);
        assert_eq!(keymap.prev_page.help().desc, "prev page");
    }

    #[test]
    fn test_default_model_configuration() {
        let model: Model<u32> = Model::default();
        assert_eq!(model.page_size(), DEFAULT_PAGE_SIZE);
        assert_eq!(model.initial_page(), 1);
        assert!(model.pager().is_none());
    }
}
