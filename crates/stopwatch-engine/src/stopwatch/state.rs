use std::time::{Duration, Instant};

/// Snapshot of the engine's timing state.
///
/// Elapsed time is `accumulated + (now - segment_start)` while running and
/// `accumulated` otherwise. Equivalently, the running anchor is
/// `segment_start - accumulated`.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct StopwatchState {
    pub(crate) running: bool,
    pub(crate) segment_start: Option<Instant>,
    pub(crate) accumulated: Duration,
}

impl StopwatchState {
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Time banked by completed run segments.
    #[inline]
    pub fn accumulated(&self) -> Duration {
        self.accumulated
    }

    /// Instant the current run segment began, if running.
    #[inline]
    pub fn segment_start(&self) -> Option<Instant> {
        self.segment_start
    }

    /// Elapsed time as of `now`.
    ///
    /// A `now` earlier than the segment start counts as zero for the segment.
    pub fn elapsed_at(&self, now: Instant) -> Duration {
        match (self.running, self.segment_start) {
            (true, Some(start)) => self
                .accumulated
                .saturating_add(now.saturating_duration_since(start)),
            _ => self.accumulated,
        }
    }
}
