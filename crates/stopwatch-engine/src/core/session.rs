use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::display::{DisplaySink, Elapsed};
use crate::schedule::{RefreshConfig, RefreshScheduler, TaskQueue};
use crate::stopwatch::Stopwatch;
use crate::time::Clock;

/// Engine + refresh scheduler, driven together.
///
/// Every state-changing command updates the display once immediately, then
/// activates or deactivates the periodic refresh to match the engine.
pub struct Session<C, Q>
where
    C: Clock + 'static,
    Q: TaskQueue + 'static,
{
    engine: Rc<RefCell<Stopwatch<C>>>,
    refresh: RefreshScheduler<C, Q>,
}

impl<C, Q> Session<C, Q>
where
    C: Clock + 'static,
    Q: TaskQueue + 'static,
{
    /// Creates a stopped session and paints the initial `00:00.00`.
    pub fn new(config: RefreshConfig, clock: C, queue: Q, sink: Box<dyn DisplaySink>) -> Self {
        let engine = Rc::new(RefCell::new(Stopwatch::with_clock(clock)));
        let refresh = RefreshScheduler::new(config, Rc::clone(&engine), queue, sink);
        refresh.refresh_now();
        Self { engine, refresh }
    }

    pub fn start(&self) -> bool {
        let changed = self.engine.borrow_mut().start();
        if changed {
            self.refresh.refresh_now();
            self.refresh.activate();
        }
        changed
    }

    pub fn stop(&self) -> bool {
        let changed = self.engine.borrow_mut().stop();
        if changed {
            self.refresh.deactivate();
            self.refresh.refresh_now();
        }
        changed
    }

    /// Always succeeds, running or not. Whether a UI lets the user reach it
    /// while running is that UI's policy.
    pub fn reset(&self) -> bool {
        self.refresh.deactivate();
        let changed = self.engine.borrow_mut().reset();
        self.refresh.refresh_now();
        changed
    }

    /// Starts if stopped, stops if running. Returns the new running state.
    pub fn toggle(&self) -> bool {
        if self.is_running() {
            self.stop();
        } else {
            self.start();
        }
        self.is_running()
    }

    /// Host came back to the foreground: repaint from the clock.
    ///
    /// Elapsed time kept advancing while suspended; nothing else to do.
    pub fn resume(&self) {
        log::debug!("host resumed at {}", Elapsed(self.elapsed()));
        self.refresh.refresh_now();
    }

    /// Host left the foreground. Timing continues; nothing is stopped.
    pub fn suspend(&self) {
        let state = if self.is_running() { "running" } else { "stopped" };
        log::debug!("host suspended while {state}");
    }

    pub fn elapsed(&self) -> Duration {
        self.engine.borrow().elapsed()
    }

    pub fn is_running(&self) -> bool {
        self.engine.borrow().is_running()
    }

    /// Current elapsed time as it would be displayed.
    pub fn display_text(&self) -> String {
        Elapsed(self.elapsed()).to_string()
    }

    pub fn is_refreshing(&self) -> bool {
        self.refresh.is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::MemorySink;
    use crate::schedule::EventLoop;
    use crate::time::ManualClock;

    type TestClock = Rc<ManualClock>;
    type TestLoop = Rc<EventLoop<TestClock>>;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn fixture() -> (TestClock, TestLoop, MemorySink, Session<TestClock, TestLoop>) {
        let clock = Rc::new(ManualClock::new());
        let event_loop = Rc::new(EventLoop::with_clock(Rc::clone(&clock)));
        let sink = MemorySink::new();
        let session = Session::new(
            RefreshConfig::default(),
            Rc::clone(&clock),
            Rc::clone(&event_loop),
            Box::new(sink.clone()),
        );
        (clock, event_loop, sink, session)
    }

    #[test]
    fn construction_paints_zero() {
        let (_clock, event_loop, sink, session) = fixture();
        assert_eq!(sink.history(), vec!["00:00.00"]);
        assert!(!session.is_running());
        assert!(event_loop.is_idle());
    }

    #[test]
    fn start_paints_immediately_and_begins_refreshing() {
        let (clock, event_loop, sink, session) = fixture();
        sink.clear();

        assert!(session.start());
        assert_eq!(sink.writes(), 1);
        assert!(session.is_refreshing());

        clock.advance(ms(10));
        event_loop.run_due();
        assert_eq!(sink.last().as_deref(), Some("00:00.01"));
    }

    #[test]
    fn stop_freezes_display_and_drops_pending_tick() {
        let (clock, event_loop, sink, session) = fixture();
        session.start();
        clock.advance(ms(1_234));
        event_loop.run_due();

        clock.advance(ms(3));
        assert!(session.stop());
        assert_eq!(sink.last().as_deref(), Some("00:01.23"));
        let writes = sink.writes();

        clock.advance(ms(500));
        event_loop.run_due();
        assert_eq!(sink.writes(), writes);
        assert!(!session.is_refreshing());
        assert_eq!(session.display_text(), "00:01.23");
    }

    #[test]
    fn repeated_commands_do_not_repaint() {
        let (_clock, _event_loop, sink, session) = fixture();
        assert!(!session.stop());
        assert_eq!(sink.writes(), 1);

        session.start();
        let writes = sink.writes();
        assert!(!session.start());
        assert_eq!(sink.writes(), writes);
    }

    #[test]
    fn reset_while_running_is_allowed() {
        let (clock, event_loop, sink, session) = fixture();
        session.start();
        clock.advance(ms(2_500));
        event_loop.run_due();

        assert!(session.reset());
        assert!(!session.is_running());
        assert_eq!(session.elapsed(), Duration::ZERO);
        assert_eq!(sink.last().as_deref(), Some("00:00.00"));

        clock.advance(ms(100));
        event_loop.run_due();
        assert_eq!(sink.last().as_deref(), Some("00:00.00"));
        assert!(event_loop.is_idle());
    }

    #[test]
    fn toggle_alternates() {
        let (clock, _event_loop, _sink, session) = fixture();
        assert!(session.toggle());
        clock.advance(ms(5_000));
        assert!(!session.toggle());
        assert_eq!(session.elapsed(), ms(5_000));
        assert!(session.toggle());
        clock.advance(ms(2_500));
        assert_eq!(session.elapsed(), ms(7_500));
    }

    #[test]
    fn resume_repaints_time_spent_suspended() {
        let (clock, _event_loop, sink, session) = fixture();
        session.start();
        session.suspend();

        // No ticks ran while suspended.
        clock.advance(ms(90_000));
        session.resume();
        assert_eq!(sink.last().as_deref(), Some("01:30.00"));
        assert!(session.is_running());
    }
}
