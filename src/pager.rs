//! Pure pager arithmetic: deriving a complete pagination descriptor from
//! `(total_items, current_page, page_size)`.
//!
//! This module does not hold any state and does not render anything. It
//! answers one question: given a collection size and a cursor position,
//! which pages exist, which page numbers should be offered for direct
//! navigation, and which slice of the collection belongs to the current
//! page. The stateful side (validating transitions, firing change
//! callbacks) lives in [`crate::controller`].

/// Maximum number of page links exposed in the navigation window.
///
/// When there are more pages than this, the window slides with the cursor
/// and always contains exactly this many entries.
pub const MAX_WINDOW: usize = 10;

/// Items per page used when the caller passes a zero page size.
pub const DEFAULT_PAGE_SIZE: usize = 3;

/// Pages kept before the cursor when the window slides.
const WINDOW_LEAD: usize = 5;

/// Pages kept after the cursor when the window slides.
///
/// One less than [`WINDOW_LEAD`], giving the window a slight backward bias:
/// `WINDOW_LEAD + 1 + WINDOW_TRAIL == MAX_WINDOW`.
const WINDOW_TRAIL: usize = 4;

/// A fully derived pagination descriptor.
///
/// Every field is computed from `(total_items, current_page, page_size)` by
/// [`compute_pager`]; the descriptor has no identity of its own and is
/// recomputed wholesale on every page change. Page numbers are 1-indexed,
/// item indices are 0-based.
///
/// When `total_items` is 0 the descriptor is degenerate: `total_pages` is 0,
/// `pages` is empty and [`Pager::slice`] yields an empty slice. `start_page`
/// and `end_page` only satisfy `1 <= start_page <= end_page <= total_pages`
/// when `total_pages > 0`.
///
/// # Examples
///
/// ```rust
/// use pagewindow::pager::compute_pager;
///
/// // 25 items, 3 per page: 9 pages, all of them navigable.
/// let pager = compute_pager(25, 1, 3);
/// assert_eq!(pager.total_pages, 9);
/// assert_eq!(pager.pages, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
/// assert_eq!((pager.start_index, pager.end_index), (0, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    /// Size of the source collection at computation time.
    pub total_items: usize,
    /// The active page, 1-indexed.
    pub current_page: usize,
    /// Items per page.
    pub page_size: usize,
    /// Total number of pages; 0 when the collection is empty.
    pub total_pages: usize,
    /// First page number in the navigation window (inclusive).
    pub start_page: usize,
    /// Last page number in the navigation window (inclusive).
    pub end_page: usize,
    /// 0-based index of the first item on the current page.
    pub start_index: usize,
    /// 0-based index of the last item on the current page (inclusive).
    pub end_index: usize,
    /// The navigable window: every page number from `start_page` through
    /// `end_page`, contiguous and ascending.
    pub pages: Vec<usize>,
}

impl Pager {
    /// Returns true if the active page is the first page.
    ///
    /// This is the disabled condition for "First" and "Previous" controls.
    pub fn on_first_page(&self) -> bool {
        self.current_page == 1
    }

    /// Returns true if the active page is the last page.
    ///
    /// This is the disabled condition for "Next" and "Last" controls.
    pub fn on_last_page(&self) -> bool {
        self.current_page == self.total_pages
    }

    /// Returns true if there is more than one page to navigate between.
    ///
    /// Presentation layers use this to decide whether to render pager
    /// controls at all; a single page (or none) needs no navigation.
    pub fn needs_navigation(&self) -> bool {
        self.pages.len() > 1
    }

    /// Returns the sub-slice of `items` belonging to the current page.
    ///
    /// Bounds are clamped to `items.len()`, so a descriptor computed against
    /// a collection that has since shrunk yields a short or empty slice
    /// rather than panicking.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pagewindow::pager::compute_pager;
    ///
    /// let items: Vec<u32> = (0..25).collect();
    /// let pager = compute_pager(items.len(), 2, 3);
    /// assert_eq!(pager.slice(&items), &[3, 4, 5]);
    /// ```
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.start_index.min(items.len());
        let end = (self.end_index + 1).min(items.len());
        if start >= end {
            &[]
        } else {
            &items[start..end]
        }
    }

    /// Returns the number of items on the current page.
    ///
    /// May be less than `page_size` on the last page.
    pub fn items_on_page(&self) -> usize {
        if self.total_items == 0 {
            return 0;
        }
        (self.end_index + 1).saturating_sub(self.start_index)
    }
}

/// Computes a [`Pager`] descriptor for the given inputs.
///
/// This function is pure and never rejects input. A zero `current_page`
/// falls back to 1 and a zero `page_size` falls back to
/// [`DEFAULT_PAGE_SIZE`]; range-checking `current_page` against the
/// collection is the caller's concern (see
/// [`crate::controller::Model::request_page`]).
///
/// The navigation window is chosen as follows:
///
/// - `total_pages <= 10`: the window spans every page.
/// - cursor within the first 6 pages: window anchored to the front,
///   `[1, 10]`.
/// - cursor within the last 5 pages: window anchored to the back,
///   `[total_pages - 9, total_pages]`.
/// - otherwise: window slides with the cursor, 5 pages before it and 4
///   after.
///
/// So with more than 10 pages there are always exactly 10 visible page
/// links, and the window never leaves `[1, total_pages]`.
///
/// # Examples
///
/// ```rust
/// use pagewindow::pager::compute_pager;
///
/// // Middle of a long collection: the window is centered on the cursor
/// // with a slight backward bias.
/// let pager = compute_pager(100, 50, 1);
/// assert_eq!(pager.total_pages, 100);
/// assert_eq!((pager.start_page, pager.end_page), (45, 54));
/// assert_eq!((pager.start_index, pager.end_index), (49, 49));
/// ```
pub fn compute_pager(total_items: usize, current_page: usize, page_size: usize) -> Pager {
    let current_page = if current_page == 0 { 1 } else { current_page };
    let page_size = if page_size == 0 {
        DEFAULT_PAGE_SIZE
    } else {
        page_size
    };

    let total_pages = total_items.div_ceil(page_size);

    let (start_page, end_page) = if total_pages <= MAX_WINDOW {
        (1, total_pages)
    } else if current_page <= WINDOW_LEAD + 1 {
        (1, MAX_WINDOW)
    } else if current_page + WINDOW_TRAIL >= total_pages {
        (total_pages - (MAX_WINDOW - 1), total_pages)
    } else {
        (current_page - WINDOW_LEAD, current_page + WINDOW_TRAIL)
    };

    let start_index = (current_page - 1) * page_size;
    let end_index = (start_index + page_size - 1).min(total_items.saturating_sub(1));

    Pager {
        total_items,
        current_page,
        page_size,
        total_pages,
        start_page,
        end_page,
        start_index,
        end_index,
        pages: (start_page..=end_page).collect(),
    }
}
