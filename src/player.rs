//! Playback: the engine seam and the transport state machine.
//!
//! `Transport` holds the Stopped/Playing/Paused status and drives an
//! `AudioEngine`. The production engine is `RodioEngine`; tests swap in a
//! recording fake.

mod engine;
mod transport;

pub use engine::{AudioEngine, EngineError, RodioEngine};
pub use transport::{Status, Transport};
