use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Source of monotonic instants.
///
/// Implementations must never be used across threads by the engine; the
/// whole stopwatch stack runs on one logical sequence.
pub trait Clock {
    /// Returns the current monotonic reading.
    fn now(&self) -> Instant;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for Rc<C> {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

/// Clock backed by `std::time::Instant`.
#[derive(Debug, Copy, Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Hand-driven clock.
///
/// Readings are `origin + offset`; the offset only moves when the owner
/// calls [`advance`](Self::advance) or [`set`](Self::set). `set` may move
/// the offset backwards, which is how clock faults are simulated.
#[derive(Debug, Clone)]
pub struct ManualClock {
    origin: Instant,
    offset: Cell<Duration>,
}

impl ManualClock {
    /// Creates a clock reading its origin (offset zero).
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            offset: Cell::new(Duration::ZERO),
        }
    }

    /// Moves the clock forward by `by`.
    pub fn advance(&self, by: Duration) {
        self.offset.set(self.offset.get().saturating_add(by));
    }

    /// Places the clock at `offset` past its origin (forwards or backwards).
    pub fn set(&self, offset: Duration) {
        self.offset.set(offset);
    }

    /// Current offset past the origin.
    pub fn offset(&self) -> Duration {
        self.offset.get()
    }

    /// The instant corresponding to offset zero.
    pub fn origin(&self) -> Instant {
        self.origin
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.offset.get()
    }
}
