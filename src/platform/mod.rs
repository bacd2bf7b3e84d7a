//! Platform abstraction layer
//!
//! Handles host differences for:
//! - Time (monotonic instants for jump timing)

pub mod time;

pub use time::{Clock, MonotonicClock, SteppedClock};
