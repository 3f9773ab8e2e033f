//! Timekeeping state machine.
//!
//! `Stopwatch` is the single source of truth for elapsed time and running
//! state. Commands are total: each one is defined in every state and reports
//! whether it changed anything.

mod engine;
mod state;

pub use engine::Stopwatch;
pub use state::StopwatchState;
