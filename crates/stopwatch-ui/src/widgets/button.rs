use super::{ControlView, Tone};

/// When the reset control may be pressed.
///
/// The engine accepts a reset in any state; this is purely UI policy.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum ResetPolicy {
    /// Reset is grayed out while the stopwatch runs.
    #[default]
    DisabledWhileRunning,
    /// Reset is always available, stopping the stopwatch if it runs.
    AlwaysEnabled,
}

/// The RESET button.
#[derive(Debug, Clone)]
pub struct ResetButton {
    label: String,
    policy: ResetPolicy,
}

impl ResetButton {
    pub fn new() -> Self {
        Self {
            label: "RESET".to_string(),
            policy: ResetPolicy::default(),
        }
    }

    pub fn label(mut self, v: impl Into<String>) -> Self {
        self.label = v.into();
        self
    }

    pub fn policy(mut self, v: ResetPolicy) -> Self {
        self.policy = v;
        self
    }

    /// Whether a press should reach the session.
    pub fn is_enabled(&self, running: bool) -> bool {
        match self.policy {
            ResetPolicy::DisabledWhileRunning => !running,
            ResetPolicy::AlwaysEnabled => true,
        }
    }

    pub fn view(&self, running: bool) -> ControlView {
        let enabled = self.is_enabled(running);
        ControlView {
            label: self.label.clone(),
            enabled,
            tone: if enabled { Tone::Reset } else { Tone::Disabled },
        }
    }
}

impl Default for ResetButton {
    fn default() -> Self {
        Self::new()
    }
}
