use std::time::Duration;

use crate::time::{Clock, SystemClock};

use super::state::StopwatchState;

/// Stopwatch engine.
///
/// Owns its clock and timing state exclusively. All operations are O(1) and
/// never block.
///
/// Elapsed time is derived from the clock on every read, so it keeps
/// advancing while the host process is suspended and never depends on how
/// often anyone polls it.
#[derive(Debug, Clone)]
pub struct Stopwatch<C: Clock = SystemClock> {
    clock: C,
    state: StopwatchState,
}

impl Stopwatch<SystemClock> {
    /// Creates a stopped stopwatch reading the system monotonic clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for Stopwatch<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Stopwatch<C> {
    /// Creates a stopped stopwatch reading `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            state: StopwatchState::default(),
        }
    }

    /// Starts accumulating time. Returns `false` if already running.
    ///
    /// Time accumulated before the call is preserved.
    pub fn start(&mut self) -> bool {
        if self.state.running {
            return false;
        }

        self.state.segment_start = Some(self.clock.now());
        self.state.running = true;

        log::debug!("stopwatch started at {:?}", self.state.accumulated);
        true
    }

    /// Freezes elapsed time. Returns `false` if not running.
    pub fn stop(&mut self) -> bool {
        if !self.state.running {
            return false;
        }

        let now = self.clock.now();
        self.state.accumulated = self.state.elapsed_at(now);
        self.state.segment_start = None;
        self.state.running = false;

        log::debug!("stopwatch stopped at {:?}", self.state.accumulated);
        true
    }

    /// Clears all timing state, whether running or not.
    ///
    /// Returns `false` only if the stopwatch was already stopped at zero.
    pub fn reset(&mut self) -> bool {
        let changed = self.state != StopwatchState::default();
        self.state = StopwatchState::default();

        log::debug!("stopwatch reset");
        changed
    }

    /// Elapsed running time. Never negative, never has side effects.
    pub fn elapsed(&self) -> Duration {
        if !self.state.running {
            return self.state.accumulated;
        }
        self.state.elapsed_at(self.clock.now())
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state.running
    }

    #[inline]
    pub fn state(&self) -> StopwatchState {
        self.state
    }
}
