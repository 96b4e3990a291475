#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/pagewindow/")]

//! # pagewindow
//!
//! Windowed pagination state for pager widgets: given an in-memory
//! collection and a page size, derive which slice of items belongs to the
//! current page, expose a bounded window of page numbers for direct
//! navigation, and notify the embedding application whenever the active
//! page changes.
//!
//! The crate deliberately stops short of rendering. It computes everything
//! a pager control needs (the page-number window, the current slice, the
//! disabled conditions for First/Previous/Next/Last) and leaves drawing
//! buttons to the target UI stack. It does not fetch, sort, or filter
//! data, and it does not support remote pagination: the full collection is
//! assumed to be resident in memory and stays owned by the caller.
//!
//! ## Layout
//!
//! - [`pager`]: the pure arithmetic. [`pager::compute_pager`] maps
//!   `(total_items, current_page, page_size)` to a complete [`Pager`]
//!   descriptor. With more than 10 pages the navigation window always
//!   holds exactly 10 entries and slides with the cursor without ever
//!   leaving the valid page range.
//! - [`controller`]: a small stateful [`Controller`] over the arithmetic.
//!   It owns the current descriptor, drops out-of-range page requests
//!   silently (stale clicks), resets when the source collection changes,
//!   and fires a synchronous change callback with the current page's item
//!   slice.
//! - [`key`]: key bindings, so the controller can be driven from a
//!   bubbletea-rs `update()` loop like any other widget.
//!
//! ## Quick Start
//!
//! ```rust
//! use pagewindow::prelude::*;
//!
//! let items: Vec<String> = (1..=25).map(|i| format!("Item {}", i)).collect();
//!
//! let mut pager: Controller<String> = Controller::new(3, 1)
//!     .unwrap()
//!     .with_on_change(|page: &[String]| {
//!         // Hand the visible slice to the rendering layer.
//!         let _ = page;
//!     });
//!
//! pager.initialize(&items);
//!
//! let descriptor = pager.pager().unwrap();
//! assert_eq!(descriptor.total_pages, 9);
//! assert_eq!(descriptor.pages, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
//! assert!(pager.on_first_page()); // "First"/"Previous" render disabled
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! The controller is framework-agnostic (recomputation is driven by an
//! explicit [`Controller::on_items_changed`] call, not by any render
//! cycle) but it speaks `Msg` natively for key-driven navigation:
//!
//! ```rust
//! use pagewindow::prelude::*;
//! use bubbletea_rs::Msg;
//!
//! struct App {
//!     items: Vec<String>,
//!     pager: Controller<String>,
//! }
//!
//! impl App {
//!     fn update(&mut self, msg: Msg) {
//!         self.pager.update(&msg, &self.items);
//!     }
//! }
//! ```

pub mod controller;
pub mod key;
pub mod pager;

pub use controller::{ChangeFunc, ConfigError, Model as Controller, PagerKeyMap};
pub use key::{Binding, Help as KeyHelp, KeyMap};
pub use pager::{compute_pager, Pager, DEFAULT_PAGE_SIZE, MAX_WINDOW};

/// Prelude module for convenient imports.
///
/// ```rust
/// use pagewindow::prelude::*;
/// ```
pub mod prelude {
    pub use crate::controller::{ChangeFunc, ConfigError, Model as Controller, PagerKeyMap};
    pub use crate::key::{Binding, Help as KeyHelp, KeyMap};
    pub use crate::pager::{compute_pager, Pager, DEFAULT_PAGE_SIZE, MAX_WINDOW};
}
