use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;

use crate::display::{DisplaySink, Elapsed};
use crate::stopwatch::Stopwatch;
use crate::time::Clock;

use super::queue::{TaskId, TaskQueue};

/// Refresh cadence.
#[derive(Debug, Clone)]
pub struct RefreshConfig {
    /// Delay between the end of one tick and the start of the next.
    ///
    /// The default matches the display's finest unit (hundredths).
    pub interval: Duration,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(10),
        }
    }
}

/// Periodic display refresh driven by a [`TaskQueue`].
///
/// Idle until [`activate`](Self::activate); while active, each tick reads the
/// engine, writes the formatted time to the sink, and posts exactly one
/// follow-up tick. The displayed value always comes from the clock, so late
/// ticks delay the display but never skew it.
///
/// [`deactivate`](Self::deactivate) cancels the pending tick and bumps a
/// generation counter; a tick that fires anyway sees the stale generation
/// and does nothing.
pub struct RefreshScheduler<C, Q>
where
    C: Clock + 'static,
    Q: TaskQueue + 'static,
{
    inner: Rc<Inner<C, Q>>,
}

struct Inner<C: Clock, Q: TaskQueue> {
    engine: Rc<RefCell<Stopwatch<C>>>,
    queue: Q,
    sink: RefCell<Box<dyn DisplaySink>>,
    interval: Duration,

    active: Cell<bool>,
    generation: Cell<u64>,
    pending: Cell<Option<TaskId>>,
    ticks: Cell<u64>,
}

impl<C, Q> RefreshScheduler<C, Q>
where
    C: Clock + 'static,
    Q: TaskQueue + 'static,
{
    pub fn new(
        config: RefreshConfig,
        engine: Rc<RefCell<Stopwatch<C>>>,
        queue: Q,
        sink: Box<dyn DisplaySink>,
    ) -> Self {
        debug_assert!(!config.interval.is_zero(), "refresh interval must be non-zero");
        Self {
            inner: Rc::new(Inner {
                engine,
                queue,
                sink: RefCell::new(sink),
                interval: config.interval,
                active: Cell::new(false),
                generation: Cell::new(0),
                pending: Cell::new(None),
                ticks: Cell::new(0),
            }),
        }
    }

    /// Idle → Active. Posts the first tick one interval out.
    ///
    /// Calling this while already active does nothing.
    pub fn activate(&self) {
        if self.inner.active.get() {
            return;
        }
        self.inner.active.set(true);
        let generation = self.inner.generation.get().wrapping_add(1);
        self.inner.generation.set(generation);

        Inner::schedule(&self.inner, generation);
        log::debug!("refresh activated (every {:?})", self.inner.interval);
    }

    /// Active → Idle. No tick posted before this call will write to the sink.
    pub fn deactivate(&self) {
        if !self.inner.active.replace(false) {
            return;
        }
        self.inner.generation.set(self.inner.generation.get().wrapping_add(1));
        if let Some(id) = self.inner.pending.take() {
            self.inner.queue.cancel(id);
        }
        log::debug!("refresh deactivated after {} tick(s)", self.inner.ticks.get());
    }

    /// Writes the current elapsed time to the sink once, right now.
    pub fn refresh_now(&self) {
        self.inner.refresh();
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.inner.active.get()
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.inner.interval
    }

    /// Ticks that reached the sink since construction.
    pub fn ticks(&self) -> u64 {
        self.inner.ticks.get()
    }
}

impl<C, Q> Drop for RefreshScheduler<C, Q>
where
    C: Clock + 'static,
    Q: TaskQueue + 'static,
{
    fn drop(&mut self) {
        self.deactivate();
    }
}

impl<C, Q> Inner<C, Q>
where
    C: Clock + 'static,
    Q: TaskQueue + 'static,
{
    fn schedule(this: &Rc<Self>, generation: u64) {
        let weak: Weak<Self> = Rc::downgrade(this);
        let id = this.queue.post_delayed(
            this.interval,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    Inner::tick(&inner, generation);
                }
            }),
        );
        this.pending.set(Some(id));
    }

    fn tick(this: &Rc<Self>, generation: u64) {
        if !this.active.get() || this.generation.get() != generation {
            log::trace!("stale refresh tick dropped");
            return;
        }
        this.pending.set(None);

        if !this.engine.borrow().is_running() {
            log::trace!("refresh tick with engine stopped; going idle");
            this.active.set(false);
            return;
        }

        this.refresh();
        this.ticks.set(this.ticks.get() + 1);
        Inner::schedule(this, generation);
    }

    fn refresh(&self) {
        let elapsed = self.engine.borrow().elapsed();
        let text = Elapsed(elapsed).to_string();
        if let Err(e) = self.sink.borrow_mut().show(&text) {
            log::debug!("display update dropped: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::{MemorySink, SinkError};
    use crate::schedule::EventLoop;
    use crate::time::ManualClock;

    type TestClock = Rc<ManualClock>;
    type TestLoop = Rc<EventLoop<TestClock>>;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    struct Fixture {
        clock: TestClock,
        event_loop: TestLoop,
        engine: Rc<RefCell<Stopwatch<TestClock>>>,
        sink: MemorySink,
        refresh: RefreshScheduler<TestClock, TestLoop>,
    }

    fn fixture() -> Fixture {
        let clock = Rc::new(ManualClock::new());
        let event_loop = Rc::new(EventLoop::with_clock(Rc::clone(&clock)));
        let engine = Rc::new(RefCell::new(Stopwatch::with_clock(Rc::clone(&clock))));
        let sink = MemorySink::new();
        let refresh = RefreshScheduler::new(
            RefreshConfig::default(),
            Rc::clone(&engine),
            Rc::clone(&event_loop),
            Box::new(sink.clone()),
        );
        Fixture {
            clock,
            event_loop,
            engine,
            sink,
            refresh,
        }
    }

    impl Fixture {
        fn step(&self, by: Duration) {
            self.clock.advance(by);
            self.event_loop.run_due();
        }

        fn start(&self) {
            self.engine.borrow_mut().start();
            self.refresh.activate();
        }
    }

    #[test]
    fn idle_scheduler_posts_nothing() {
        let f = fixture();
        assert!(!f.refresh.is_active());
        assert!(f.event_loop.is_idle());
        f.step(ms(100));
        assert_eq!(f.sink.writes(), 0);
    }

    #[test]
    fn active_scheduler_ticks_every_interval() {
        let f = fixture();
        f.start();
        assert_eq!(f.event_loop.pending(), 1);

        for _ in 0..5 {
            f.step(ms(10));
        }

        assert_eq!(f.refresh.ticks(), 5);
        assert_eq!(
            f.sink.history(),
            vec!["00:00.01", "00:00.02", "00:00.03", "00:00.04", "00:00.05"]
        );
        assert_eq!(f.event_loop.pending(), 1);
    }

    #[test]
    fn displayed_value_follows_clock_not_tick_count() {
        let f = fixture();
        f.start();

        // Host stalls for a long time; one tick catches the display up.
        f.step(ms(61_230));
        assert_eq!(f.refresh.ticks(), 1);
        assert_eq!(f.sink.last().as_deref(), Some("01:01.23"));
    }

    #[test]
    fn activate_twice_keeps_one_chain() {
        let f = fixture();
        f.start();
        f.refresh.activate();
        assert_eq!(f.event_loop.pending(), 1);

        f.step(ms(10));
        assert_eq!(f.sink.writes(), 1);
    }

    #[test]
    fn no_update_after_deactivate_with_tick_pending() {
        let f = fixture();
        f.start();
        f.step(ms(10));
        assert_eq!(f.sink.writes(), 1);

        // A tick is queued for t=20ms.
        f.clock.advance(ms(5));
        f.engine.borrow_mut().stop();
        f.refresh.deactivate();

        f.step(ms(100));
        assert_eq!(f.sink.writes(), 1);
        assert!(f.event_loop.is_idle());
    }

    #[test]
    fn stale_tick_is_ignored_even_if_not_cancelled() {
        // Queue that cannot cancel: every posted task eventually runs.
        struct NoCancel(TestLoop);
        impl TaskQueue for NoCancel {
            fn post_delayed(&self, delay: Duration, task: crate::schedule::Task) -> TaskId {
                self.0.post_delayed(delay, task)
            }
            fn cancel(&self, _id: TaskId) -> bool {
                false
            }
        }

        let clock = Rc::new(ManualClock::new());
        let event_loop = Rc::new(EventLoop::with_clock(Rc::clone(&clock)));
        let engine = Rc::new(RefCell::new(Stopwatch::with_clock(Rc::clone(&clock))));
        let sink = MemorySink::new();
        let refresh = RefreshScheduler::new(
            RefreshConfig::default(),
            Rc::clone(&engine),
            NoCancel(Rc::clone(&event_loop)),
            Box::new(sink.clone()),
        );

        engine.borrow_mut().start();
        refresh.activate();
        engine.borrow_mut().stop();
        refresh.deactivate();

        // Restart before the old tick fires: only the new chain may write.
        engine.borrow_mut().start();
        refresh.activate();
        assert_eq!(event_loop.pending(), 2);

        clock.advance(ms(10));
        event_loop.run_due();
        assert_eq!(sink.writes(), 1);
        assert_eq!(event_loop.pending(), 1);
    }

    #[test]
    fn tick_with_engine_stopped_goes_idle() {
        let f = fixture();
        f.start();
        // Engine stopped without telling the scheduler.
        f.engine.borrow_mut().stop();

        f.step(ms(10));
        assert_eq!(f.sink.writes(), 0);
        assert!(!f.refresh.is_active());
        assert!(f.event_loop.is_idle());
    }

    #[test]
    fn sink_failures_do_not_stop_the_chain() {
        struct Flaky {
            calls: Rc<Cell<u32>>,
        }
        impl DisplaySink for Flaky {
            fn show(&mut self, _text: &str) -> Result<(), SinkError> {
                self.calls.set(self.calls.get() + 1);
                Err(SinkError::Write("gone".into()))
            }
        }

        let clock = Rc::new(ManualClock::new());
        let event_loop = Rc::new(EventLoop::with_clock(Rc::clone(&clock)));
        let engine = Rc::new(RefCell::new(Stopwatch::with_clock(Rc::clone(&clock))));
        let calls = Rc::new(Cell::new(0));
        let refresh = RefreshScheduler::new(
            RefreshConfig::default(),
            Rc::clone(&engine),
            Rc::clone(&event_loop),
            Box::new(Flaky { calls: Rc::clone(&calls) }),
        );

        engine.borrow_mut().start();
        refresh.activate();
        for _ in 0..3 {
            clock.advance(ms(10));
            event_loop.run_due();
        }

        assert_eq!(calls.get(), 3);
        assert!(refresh.is_active());
        assert_eq!(engine.borrow().elapsed(), ms(30));
    }

    #[test]
    fn refresh_now_writes_once_without_scheduling() {
        let f = fixture();
        f.refresh.refresh_now();
        assert_eq!(f.sink.history(), vec!["00:00.00"]);
        assert!(f.event_loop.is_idle());
    }

    #[test]
    fn dropping_scheduler_cancels_pending_tick() {
        let f = fixture();
        f.start();
        let Fixture { clock, event_loop, sink, refresh, .. } = f;
        drop(refresh);

        assert!(event_loop.is_idle());
        clock.advance(ms(10));
        event_loop.run_due();
        assert_eq!(sink.writes(), 0);
    }

    #[test]
    fn custom_interval() {
        let f = fixture();
        let refresh = RefreshScheduler::new(
            RefreshConfig { interval: ms(250) },
            Rc::clone(&f.engine),
            Rc::clone(&f.event_loop),
            Box::new(f.sink.clone()),
        );
        f.engine.borrow_mut().start();
        refresh.activate();

        f.step(ms(100));
        assert_eq!(f.sink.writes(), 0);
        f.step(ms(150));
        assert_eq!(f.sink.last().as_deref(), Some("00:00.25"));
        assert_eq!(refresh.interval(), ms(250));
    }
}
