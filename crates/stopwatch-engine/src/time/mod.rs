//! Time subsystem.
//!
//! Provides the monotonic clock abstraction everything else reads from.
//! Intended usage:
//! - `SystemClock` in production hosts
//! - a shared `Rc<ManualClock>` in tests and simulations, advanced by hand

mod clock;

pub use clock::{Clock, ManualClock, SystemClock};
