use stopwatch_engine::core::Session;
use stopwatch_engine::display::DisplaySink;
use stopwatch_engine::schedule::{RefreshConfig, TaskQueue};
use stopwatch_engine::time::Clock;

use crate::event::{ControlId, EventResult, UiEvent};
use crate::widgets::button::{ResetButton, ResetPolicy};
use crate::widgets::toggle::StartStopToggle;
use crate::widgets::ControlView;

/// Panel configuration.
#[derive(Debug, Clone)]
pub struct PanelConfig {
    pub title: String,
    pub refresh: RefreshConfig,
    pub reset_policy: ResetPolicy,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            title: "Stopwatch".to_string(),
            refresh: RefreshConfig::default(),
            reset_policy: ResetPolicy::default(),
        }
    }
}

/// Snapshot of everything on screen.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PanelView {
    pub title: String,
    pub time: String,
    pub toggle: ControlView,
    pub reset: ControlView,
}

/// Two-button stopwatch panel: a START/STOP toggle and a RESET button.
///
/// The time display itself is written by the session's refresh chain into
/// the sink given at construction; [`view`](Self::view) is for redrawing
/// the controls after an event.
pub struct ControlPanel<C, Q>
where
    C: Clock + 'static,
    Q: TaskQueue + 'static,
{
    title: String,
    session: Session<C, Q>,
    toggle: StartStopToggle,
    reset: ResetButton,
}

impl<C, Q> ControlPanel<C, Q>
where
    C: Clock + 'static,
    Q: TaskQueue + 'static,
{
    pub fn new(config: PanelConfig, clock: C, queue: Q, sink: Box<dyn DisplaySink>) -> Self {
        Self {
            title: config.title,
            session: Session::new(config.refresh, clock, queue, sink),
            toggle: StartStopToggle::new(),
            reset: ResetButton::new().policy(config.reset_policy),
        }
    }

    /// Replaces the toggle model (e.g. for custom labels).
    pub fn with_toggle(mut self, toggle: StartStopToggle) -> Self {
        self.toggle = toggle;
        self
    }

    /// Replaces the reset model. Its policy overrides the configured one.
    pub fn with_reset(mut self, reset: ResetButton) -> Self {
        self.reset = reset;
        self
    }

    /// Routes one event. Presses on disabled controls are ignored.
    pub fn on_event(&mut self, event: &UiEvent) -> EventResult {
        match event {
            UiEvent::Press(ControlId::StartStop) => {
                let running = self.session.toggle();
                let verb = if running { "started" } else { "stopped" };
                log::info!("{verb} at {}", self.session.display_text());
                EventResult::Consumed
            }
            UiEvent::Press(ControlId::Reset) => {
                if !self.reset.is_enabled(self.session.is_running()) {
                    log::debug!("reset pressed while disabled");
                    return EventResult::Ignored;
                }
                self.session.reset();
                log::info!("reset");
                EventResult::Consumed
            }
            UiEvent::Resume => {
                self.session.resume();
                EventResult::Consumed
            }
            UiEvent::Suspend => {
                self.session.suspend();
                EventResult::Consumed
            }
        }
    }

    pub fn view(&self) -> PanelView {
        let running = self.session.is_running();
        PanelView {
            title: self.title.clone(),
            time: self.session.display_text(),
            toggle: self.toggle.view(running),
            reset: self.reset.view(running),
        }
    }

    pub fn session(&self) -> &Session<C, Q> {
        &self.session
    }
}
