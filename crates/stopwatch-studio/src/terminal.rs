use std::io::{self, Write};

use stopwatch_engine::display::{DisplaySink, SinkError};
use stopwatch_ui::prelude::{ControlView, PanelView};

/// Rewrites a single terminal line with the current time.
pub struct TerminalSink<W: Write> {
    out: W,
}

impl TerminalSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplaySink for TerminalSink<W> {
    fn show(&mut self, text: &str) -> Result<(), SinkError> {
        write!(self.out, "\r  {text}  ")
            .and_then(|_| self.out.flush())
            .map_err(|e| SinkError::Write(e.to_string()))
    }
}

/// One-line rendering of the controls, e.g. `[STOP]  [RESET: disabled]`.
pub fn render_controls(view: &PanelView) -> String {
    format!("{}  {}", render_control(&view.toggle), render_control(&view.reset))
}

fn render_control(control: &ControlView) -> String {
    if control.enabled {
        format!("[{}]", control.label)
    } else {
        format!("[{}: disabled]", control.label)
    }
}
