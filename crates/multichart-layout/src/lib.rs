//! Single-column pane layout.
//!
//! Panes are stacked top to bottom in creation order, each taking an equal
//! share of the window height and the full width.

pub mod rows;

pub use rows::RowLayout;
