//! Kanban board over the project collection.
//!
//! # Responsibility
//! - Partition projects into the three status lanes.
//! - Turn a finished drag into a status overwrite.
//!
//! # Invariants
//! - Lanes always come out as `Planning`, `In Progress`, `Completed`.
//! - Lane membership is derived from `Project::status`; no lane assignment
//!   is stored anywhere else.
//! - In-lane order is the collection order filtered by status.
//! - A drag never changes `progress` and never reorders the collection.

pub mod board;
pub mod drag;

pub use board::{partition, BoardView, LaneView};
pub use drag::{apply_drag_end, DragEndEvent, DragLocation, DragOutcome};
