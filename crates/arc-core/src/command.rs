//! Console command grammar.
//!
//! ```text
//! clear | info | save | open | reset | quit | exit | list | ls
//! set <amplitude|period|phase> <int>
//! ```
//!
//! Verbs and parameter names are matched case-insensitively.

use crate::parameter::Param;
use std::fmt;

/// A parsed console command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Clear,
    Info,
    Save,
    Open,
    Reset,
    Quit,
    List,
    Set { param: Param, value: i64 },
}

/// Why a console line could not be turned into a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The line was blank.
    Empty,
    /// The first word is not a known verb.
    UnknownVerb(String),
    /// `set` named a parameter that does not exist.
    UnknownParam(String),
    /// `set` was given the wrong number of arguments.
    SetUsage,
    /// `set <param>` was followed by something that is not an integer.
    InvalidValue { param: Param, value: String },
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Empty => write!(f, "empty command"),
            CommandError::UnknownVerb(verb) => write!(
                f,
                "Unknown command '{verb}'. Type 'list' for available commands."
            ),
            CommandError::UnknownParam(param) => write!(f, "ERROR: '{param}' value unknown."),
            CommandError::SetUsage => write!(f, "Usage: set <amplitude|period|phase> <int>"),
            CommandError::InvalidValue { param, value } => {
                write!(f, "ERROR: '{value}' is not a valid integer for {}.", param.name())
            }
        }
    }
}

impl std::error::Error for CommandError {}

impl Command {
    /// Parse one console line.
    pub fn parse(line: &str) -> Result<Command, CommandError> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some(first) = words.first() else {
            return Err(CommandError::Empty);
        };
        let verb = first.to_lowercase();

        let simple = match verb.as_str() {
            "clear" => Some(Command::Clear),
            "info" => Some(Command::Info),
            "save" => Some(Command::Save),
            "open" => Some(Command::Open),
            "reset" => Some(Command::Reset),
            "quit" | "exit" => Some(Command::Quit),
            "list" | "ls" => Some(Command::List),
            "set" => None,
            _ => return Err(CommandError::UnknownVerb((*first).to_string())),
        };

        if let Some(cmd) = simple {
            // Bare verbs take no arguments; "clear now" is not "clear".
            return if words.len() == 1 {
                Ok(cmd)
            } else {
                Err(CommandError::UnknownVerb((*first).to_string()))
            };
        }

        if words.len() != 3 {
            return Err(CommandError::SetUsage);
        }
        let param =
            Param::from_name(words[1]).ok_or_else(|| CommandError::UnknownParam(words[1].to_string()))?;
        let value = words[2]
            .parse::<i64>()
            .map_err(|_| CommandError::InvalidValue {
                param,
                value: words[2].to_string(),
            })?;
        Ok(Command::Set { param, value })
    }

    /// The verb as typed by the user, lower-cased.
    pub fn verb(&self) -> &'static str {
        match self {
            Command::Clear => "clear",
            Command::Info => "info",
            Command::Save => "save",
            Command::Open => "open",
            Command::Reset => "reset",
            Command::Quit => "quit",
            Command::List => "list",
            Command::Set { .. } => "set",
        }
    }
}

/// Help text printed by `list`/`ls`.
pub const HELP_LINES: &[&str] = &[
    "set amplitude <int>: sets amplitude to a specified value.",
    "set period <int>: sets period to a specified value.",
    "set phase <int>: sets phase to a specified value.",
    "save: saves current settings to file.",
    "open: opens graph from file.",
    "reset: resets the graph.",
    "info: lists values of all variables.",
    "clear: clears console.",
    "quit: quits the application.",
];
