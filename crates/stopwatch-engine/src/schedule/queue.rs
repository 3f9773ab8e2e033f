use std::rc::Rc;
use std::time::Duration;

/// Handle to a posted task, used for cancellation.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct TaskId(pub(crate) u64);

/// One-shot callback run on the queue's sequence.
pub type Task = Box<dyn FnOnce() + 'static>;

/// "Run this once after `delay`" plus "cancel it".
///
/// Implementations run every task on the same logical sequence as the
/// caller. Both methods take `&self` so tasks can post and cancel while the
/// queue is executing them.
pub trait TaskQueue {
    /// Schedules `task` to run once, no sooner than `delay` from now.
    fn post_delayed(&self, delay: Duration, task: Task) -> TaskId;

    /// Cancels a pending task. Returns `false` if it already ran or was
    /// cancelled.
    fn cancel(&self, id: TaskId) -> bool;

    fn post(&self, task: Task) -> TaskId {
        self.post_delayed(Duration::ZERO, task)
    }
}

impl<Q: TaskQueue + ?Sized> TaskQueue for Rc<Q> {
    fn post_delayed(&self, delay: Duration, task: Task) -> TaskId {
        (**self).post_delayed(delay, task)
    }

    fn cancel(&self, id: TaskId) -> bool {
        (**self).cancel(id)
    }
}
