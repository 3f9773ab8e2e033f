use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Why a display write did not land.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkError {
    /// The host has no display element to write into.
    Unavailable,
    /// The host display rejected the write.
    Write(String),
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkError::Unavailable => write!(f, "display unavailable"),
            SinkError::Write(msg) => write!(f, "display write failed: {msg}"),
        }
    }
}

impl std::error::Error for SinkError {}

/// Destination for formatted time strings.
///
/// Failures are reported but never affect timing state; callers treat them
/// as dropped frames.
pub trait DisplaySink {
    fn show(&mut self, text: &str) -> Result<(), SinkError>;
}

/// `None` models a host whose display element is missing.
impl<S: DisplaySink> DisplaySink for Option<S> {
    fn show(&mut self, text: &str) -> Result<(), SinkError> {
        match self {
            Some(sink) => sink.show(text),
            None => Err(SinkError::Unavailable),
        }
    }
}

impl<S: DisplaySink + ?Sized> DisplaySink for Box<S> {
    fn show(&mut self, text: &str) -> Result<(), SinkError> {
        (**self).show(text)
    }
}

/// In-memory sink recording every string it is shown.
///
/// Clones share the same history, so one handle can be given to the
/// scheduler while another is inspected.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    history: Rc<RefCell<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent string shown, if any.
    pub fn last(&self) -> Option<String> {
        self.history.borrow().last().cloned()
    }

    /// Number of writes received.
    pub fn writes(&self) -> usize {
        self.history.borrow().len()
    }

    pub fn history(&self) -> Vec<String> {
        self.history.borrow().clone()
    }

    pub fn clear(&self) {
        self.history.borrow_mut().clear();
    }
}

impl DisplaySink for MemorySink {
    fn show(&mut self, text: &str) -> Result<(), SinkError> {
        self.history.borrow_mut().push(text.to_owned());
        Ok(())
    }
}
