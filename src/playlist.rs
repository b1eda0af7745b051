//! Playlist store: the ordered track list and its cursor.
//!
//! The playlist owns no playback state; the transport moves the cursor and
//! reads the current track from here.

mod model;
mod scan;

pub use model::*;
