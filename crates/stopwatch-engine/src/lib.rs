//! Stopwatch engine crate.
//!
//! This crate owns the timekeeping state machine and the single-threaded
//! refresh machinery used by higher layers (UI policy, terminal host).

pub mod time;
pub mod stopwatch;
pub mod display;
pub mod schedule;
pub mod core;

pub mod logging;
