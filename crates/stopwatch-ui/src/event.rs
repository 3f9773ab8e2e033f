/// Identifies one of the panel's two controls.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ControlId {
    /// The single button that alternates START / STOP.
    StartStop,
    Reset,
}

/// Input events routed to a [`ControlPanel`](crate::panel::ControlPanel).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// A control was pressed (click, tap, key binding).
    Press(ControlId),
    /// The host returned to the foreground.
    Resume,
    /// The host left the foreground. Timing keeps going.
    Suspend,
}

/// Result returned by [`ControlPanel::on_event`](crate::panel::ControlPanel::on_event).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled.
    Consumed,
    /// Event was not handled, e.g. a press on a disabled control.
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}
