use std::io::BufRead;
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};

use stopwatch_ui::prelude::{ControlId, UiEvent};

/// A parsed line of terminal input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Ui(UiEvent),
    Quit,
}

/// Maps one input line to a command. Unknown input yields `None`.
pub fn parse_command(line: &str) -> Option<Command> {
    let cmd = match line.trim().to_ascii_lowercase().as_str() {
        "" | "s" | "start" | "stop" => Command::Ui(UiEvent::Press(ControlId::StartStop)),
        "r" | "reset" => Command::Ui(UiEvent::Press(ControlId::Reset)),
        "p" | "suspend" => Command::Ui(UiEvent::Suspend),
        "c" | "resume" => Command::Ui(UiEvent::Resume),
        "q" | "quit" | "exit" => Command::Quit,
        _ => return None,
    };
    Some(cmd)
}

/// Reads `input` line by line on a background thread, forwarding commands.
///
/// The thread ends at EOF (sending `Quit`), on a read error, or once the
/// receiver is gone.
pub fn spawn_reader<R>(input: R, tx: Sender<Command>) -> JoinHandle<()>
where
    R: BufRead + Send + 'static,
{
    thread::spawn(move || {
        for line in input.lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    log::warn!("stdin read failed: {e}");
                    break;
                }
            };

            let Some(cmd) = parse_command(&line) else {
                log::warn!(
                    "unknown command {line:?} (s=start/stop, r=reset, p=suspend, c=resume, q=quit)"
                );
                continue;
            };

            if tx.send(cmd).is_err() {
                return;
            }
        }
        let _ = tx.send(Command::Quit);
    })
}
