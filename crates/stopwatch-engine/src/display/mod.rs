//! Display subsystem.
//!
//! Converts durations into the fixed-width `MM:SS.CC` string and defines the
//! sink contract the refresh machinery writes into.

mod format;
mod sink;

pub use format::{format_elapsed, Elapsed};
pub use sink::{DisplaySink, MemorySink, SinkError};
