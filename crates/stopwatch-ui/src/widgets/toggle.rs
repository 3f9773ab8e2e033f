use super::{ControlView, Tone};

/// The START / STOP button.
///
/// Label and tone follow the session's running state; it is always enabled.
///
/// # Example
/// ```rust,ignore
/// StartStopToggle::new()
///     .start_label("GO")
///     .stop_label("HOLD")
/// ```
#[derive(Debug, Clone)]
pub struct StartStopToggle {
    start_label: String,
    stop_label: String,
}

impl StartStopToggle {
    pub fn new() -> Self {
        Self {
            start_label: "START".to_string(),
            stop_label: "STOP".to_string(),
        }
    }

    pub fn start_label(mut self, v: impl Into<String>) -> Self { self.start_label = v.into(); self }
    pub fn stop_label(mut self, v: impl Into<String>) -> Self { self.stop_label = v.into(); self }

    /// What pressing the toggle would do next, as a view.
    pub fn view(&self, running: bool) -> ControlView {
        if running {
            ControlView { label: self.stop_label.clone(), enabled: true, tone: Tone::Stop }
        } else {
            ControlView { label: self.start_label.clone(), enabled: true, tone: Tone::Start }
        }
    }
}

impl Default for StartStopToggle { fn default() -> Self { Self::new() } }
