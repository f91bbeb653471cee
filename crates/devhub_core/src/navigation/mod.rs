//! List/detail navigation and title search.
//!
//! # Invariants
//! - Search never mutates the collection or the selection.
//! - Deleting the selected record returns to the list; deleting any other
//!   record leaves the selection alone.

pub mod search;
pub mod selection;

pub use search::SearchFilter;
pub use selection::{SelectionController, ViewState};
