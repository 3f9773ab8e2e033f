//! Scheduling subsystem.
//!
//! Single-threaded, cooperative. `TaskQueue` is the host primitive ("run
//! once after N, or cancel"); `EventLoop` is the in-crate implementation;
//! `RefreshScheduler` builds the display refresh chain on top of any queue.

mod event_loop;
mod queue;
mod refresh;

pub use event_loop::EventLoop;
pub use queue::{Task, TaskId, TaskQueue};
pub use refresh::{RefreshConfig, RefreshScheduler};
