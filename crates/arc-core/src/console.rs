use crate::command::{Command, CommandError, HELP_LINES};
use crate::parameter::Param;
use crate::waveform::WaveformState;
use std::collections::VecDeque;

/// First line shown in a fresh console.
pub const WELCOME_LINE: &str = "Type 'list' for available commands.";
const SEPARATOR: &str = "----------------";
/// Oldest lines are dropped past this many entries.
pub const MAX_LOG_LINES: usize = 1000;

/// What the caller has to do after a console line ran.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Nothing beyond what the console already wrote to its log.
    Handled,
    /// A waveform parameter changed. `value` is the clamped value stored.
    Changed { param: Param, value: f64 },
    /// The application should close.
    Quit,
    /// A graph action that has no implementation (`save`, `open`, `reset`).
    NotImplemented(Command),
    /// Show a transient status-bar message.
    Status(String),
    /// The line was rejected; a diagnostic was written to the log.
    Rejected(CommandError),
}

/// Text console: an append-only log plus the command interpreter.
#[derive(Debug, Clone)]
pub struct Console {
    log: VecDeque<String>,
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Console {
    pub fn new() -> Self {
        let mut console = Self {
            log: VecDeque::new(),
        };
        console.print(WELCOME_LINE);
        console
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.log.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    pub fn clear(&mut self) {
        self.log.clear();
    }

    /// Append a line to the log.
    pub fn print(&mut self, line: impl Into<String>) {
        if self.log.len() == MAX_LOG_LINES {
            self.log.pop_front();
        }
        self.log.push_back(line.into());
    }

    /// Echo `line` into the log, then run it against `state`.
    ///
    /// Blank lines are ignored. Every rejected line leaves `state` untouched.
    pub fn submit(&mut self, line: &str, state: &mut WaveformState) -> Outcome {
        if line.trim().is_empty() {
            return Outcome::Handled;
        }
        self.print(line.trim());
        self.execute(line, state)
    }

    /// Run one command line against `state` without echoing it.
    pub fn execute(&mut self, line: &str, state: &mut WaveformState) -> Outcome {
        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(CommandError::Empty) => return Outcome::Handled,
            Err(err @ CommandError::UnknownParam(_)) => return Outcome::Status(err.to_string()),
            Err(err) => {
                self.print(err.to_string());
                return Outcome::Rejected(err);
            }
        };

        match command {
            Command::Clear => {
                self.clear();
                Outcome::Handled
            }
            Command::Info => {
                self.print(SEPARATOR);
                for param in Param::ALL {
                    self.print(format!("{}: {}", param.label(), state.get(param)));
                }
                self.print(SEPARATOR);
                Outcome::Handled
            }
            Command::List => {
                self.print(SEPARATOR);
                for line in HELP_LINES {
                    self.print(*line);
                }
                self.print(SEPARATOR);
                Outcome::Handled
            }
            Command::Quit => Outcome::Quit,
            Command::Save | Command::Open | Command::Reset => {
                self.print(format!("'{}' is not implemented yet.", command.verb()));
                Outcome::NotImplemented(command)
            }
            Command::Set { param, value } => {
                let requested = value as f64;
                let stored = state.set(param, requested);
                if stored == requested {
                    self.print(format!("{} set to {}", param.label(), stored));
                } else {
                    self.print(format!(
                        "{} set to {} (clamped from {})",
                        param.label(),
                        stored,
                        value
                    ));
                }
                Outcome::Changed {
                    param,
                    value: stored,
                }
            }
        }
    }
}
