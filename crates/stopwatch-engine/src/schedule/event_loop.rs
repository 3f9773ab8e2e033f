use std::cell::RefCell;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::time::{Duration, Instant};

use crate::time::{Clock, SystemClock};

use super::queue::{Task, TaskId, TaskQueue};

/// Single-threaded deadline queue.
///
/// Tasks run in deadline order, FIFO among equal deadlines. The loop never
/// sleeps on its own: a host asks [`time_until_next`](Self::time_until_next)
/// how long it may block, waits on whatever it waits on, then calls
/// [`run_due`](Self::run_due).
pub struct EventLoop<C: Clock = SystemClock> {
    clock: C,
    queue: RefCell<Queue>,
}

#[derive(Default)]
struct Queue {
    next_id: u64,
    // Cancelled entries stay in the heap until they surface.
    deadlines: BinaryHeap<Reverse<(Instant, u64)>>,
    tasks: HashMap<u64, Task>,
}

impl Queue {
    fn drop_cancelled_head(&mut self) {
        while let Some(Reverse((_, id))) = self.deadlines.peek() {
            if self.tasks.contains_key(id) {
                break;
            }
            self.deadlines.pop();
        }
    }

    /// Pops the next task due at `now` that was posted before `cutoff`.
    fn pop_due(&mut self, now: Instant, cutoff: u64) -> Option<Task> {
        self.drop_cancelled_head();

        let Reverse((deadline, id)) = *self.deadlines.peek()?;
        if deadline > now || id >= cutoff {
            return None;
        }

        self.deadlines.pop();
        self.tasks.remove(&id)
    }
}

impl EventLoop<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for EventLoop<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> EventLoop<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            queue: RefCell::new(Queue::default()),
        }
    }

    /// Runs every task that is due right now.
    ///
    /// Tasks posted while this pass is running wait for the next pass, even
    /// if they are already due. Returns the number of tasks run.
    pub fn run_due(&self) -> usize {
        let now = self.clock.now();
        let cutoff = self.queue.borrow().next_id;

        let mut ran = 0;
        loop {
            // Release the borrow before running: tasks post and cancel.
            let Some(task) = self.queue.borrow_mut().pop_due(now, cutoff) else {
                break;
            };
            task();
            ran += 1;
        }

        if ran > 0 {
            log::trace!("event loop ran {ran} task(s)");
        }
        ran
    }

    /// Time until the earliest live task is due; zero if one is overdue.
    /// `None` when nothing is pending.
    pub fn time_until_next(&self) -> Option<Duration> {
        let mut queue = self.queue.borrow_mut();
        queue.drop_cancelled_head();

        let Reverse((deadline, _)) = *queue.deadlines.peek()?;
        Some(deadline.saturating_duration_since(self.clock.now()))
    }

    /// Number of live (posted, not yet run or cancelled) tasks.
    pub fn pending(&self) -> usize {
        self.queue.borrow().tasks.len()
    }

    pub fn is_idle(&self) -> bool {
        self.pending() == 0
    }
}

impl<C: Clock> TaskQueue for EventLoop<C> {
    fn post_delayed(&self, delay: Duration, task: Task) -> TaskId {
        let deadline = self.clock.now() + delay;

        let mut queue = self.queue.borrow_mut();
        let id = queue.next_id;
        queue.next_id += 1;
        queue.deadlines.push(Reverse((deadline, id)));
        queue.tasks.insert(id, task);

        TaskId(id)
    }

    fn cancel(&self, id: TaskId) -> bool {
        self.queue.borrow_mut().tasks.remove(&id.0).is_some()
    }
}
