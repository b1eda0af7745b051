//! Application module: the UI-facing model.
//!
//! `App` owns the playlist plus the pieces of state the terminal UI needs:
//! the highlighted row, the path prompt and the current notice line.

mod model;

pub use model::*;
