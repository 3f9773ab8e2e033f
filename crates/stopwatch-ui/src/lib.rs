//! Stopwatch UI: presentation policy on top of `stopwatch-engine`.
//!
//! Nothing here draws. Widgets are small models that turn the session's
//! state into labels, enablement and tone, and route presses back to the
//! session. Any renderer (terminal, GUI toolkit, test) reads a
//! [`PanelView`](panel::PanelView) and draws it however it likes.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use stopwatch_ui::prelude::*;
//!
//! let event_loop = Rc::new(EventLoop::new());
//! let mut panel =
//!     ControlPanel::new(PanelConfig::default(), SystemClock, event_loop.clone(), sink);
//!
//! panel.on_event(&UiEvent::Press(ControlId::StartStop));
//! let view = panel.view();
//! println!("{}  [{}]  [{}]", view.time, view.toggle.label, view.reset.label);
//! ```

pub mod event;
pub mod panel;
pub mod widgets;

pub use panel::ControlPanel;

/// Everything a host needs to drive a panel.
pub mod prelude {
    pub use crate::event::{ControlId, EventResult, UiEvent};
    pub use crate::panel::{ControlPanel, PanelConfig, PanelView};
    pub use crate::widgets::{
        button::{ResetButton, ResetPolicy},
        toggle::StartStopToggle,
        ControlView, Tone,
    };

    // Re-export the engine pieces every host touches.
    pub use stopwatch_engine::display::{DisplaySink, MemorySink, SinkError};
    pub use stopwatch_engine::schedule::{EventLoop, RefreshConfig, TaskQueue};
    pub use stopwatch_engine::time::{Clock, ManualClock, SystemClock};
}
