mod config;
mod input;
mod terminal;

use std::io::{self, BufReader, Write};
use std::rc::Rc;
use std::sync::mpsc::{channel, RecvTimeoutError};
use std::time::Duration;

use anyhow::{Context, Result};

use stopwatch_engine::logging::{init_logging, LoggingConfig};
use stopwatch_ui::prelude::*;

use config::StudioConfig;
use input::{spawn_reader, Command};
use terminal::{render_controls, TerminalSink};

/// Upper bound on how long the loop blocks when nothing is scheduled.
const IDLE_WAIT: Duration = Duration::from_millis(500);

fn main() {
    init_logging(LoggingConfig::default());

    if let Err(e) = run() {
        log::error!("stopwatch studio failed: {e:#}");
        eprintln!("stopwatch-studio: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = StudioConfig::from_env().context("failed to read configuration")?;
    log::info!(
        "refresh every {:?}, reset while running: {}",
        config.refresh_interval,
        config.reset_policy == ResetPolicy::AlwaysEnabled
    );

    let panel_config = config.panel_config();
    print_banner(&panel_config.title)?;

    let event_loop = Rc::new(EventLoop::new());
    let mut panel = ControlPanel::new(
        panel_config,
        SystemClock,
        Rc::clone(&event_loop),
        Box::new(TerminalSink::stdout()),
    );
    print_controls(&panel.view())?;

    let (tx, rx) = channel();
    let _reader = spawn_reader(BufReader::new(io::stdin()), tx);

    loop {
        let wait = event_loop.time_until_next().unwrap_or(IDLE_WAIT);

        match rx.recv_timeout(wait) {
            Ok(Command::Quit) | Err(RecvTimeoutError::Disconnected) => break,
            Ok(Command::Ui(event)) => {
                if !panel.on_event(&event).is_consumed() {
                    log::info!("{event:?} ignored");
                }
                print_controls(&panel.view())?;
            }
            Err(RecvTimeoutError::Timeout) => {}
        }

        event_loop.run_due();
    }

    if panel.session().is_running() {
        panel.on_event(&UiEvent::Press(ControlId::StartStop));
    }
    println!();
    log::info!("final time {}", panel.session().display_text());
    Ok(())
}

fn print_banner(title: &str) -> Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "  {title}")?;
    writeln!(out, "  enter: s = start/stop, r = reset, p = suspend, c = resume, q = quit")
        .context("failed to write to terminal")
}

fn print_controls(view: &PanelView) -> Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "\n  {}", render_controls(view)).context("failed to write to terminal")?;
    write!(out, "\r  {}  ", view.time)?;
    out.flush().context("failed to flush terminal")
}
