//! Parsing of interactive input lines.
//!
//! Anything that is not exactly a command is a new title, so ordinary text
//! is never swallowed by a verb.

use thiserror::Error;

/// One user action in interactive mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Submit a new todo with this title.
    Add(String),
    Complete(usize),
    Delete(usize),
    Refresh,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("`{verb}` needs a position, e.g. `{verb} 0`")]
    MissingIndex { verb: &'static str },
}

pub const HELP: &str = "\
commands:
  add <title>   add a task (any other text is added as-is)
  done <n>      mark task n complete
  rm <n>        delete task n
  refresh       re-fetch the list
  help          show this help
  quit          exit";

/// Parse one line. Blank lines yield `None`. `done` and `rm` are commands
/// only when followed by a single position; a bare `done` or `rm` is an
/// error, and anything else is taken as a new title.
pub fn parse(line: &str) -> Result<Option<Action>, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };
    let action = match (verb, rest) {
        ("add", title) => Action::Add(title.to_string()),
        ("done", "") => return Err(ParseError::MissingIndex { verb: "done" }),
        ("rm", "") => return Err(ParseError::MissingIndex { verb: "rm" }),
        ("done", arg) => position(arg).map_or_else(|| Action::Add(line.to_string()), Action::Complete),
        ("rm", arg) => position(arg).map_or_else(|| Action::Add(line.to_string()), Action::Delete),
        ("refresh", "") => Action::Refresh,
        ("help", "") => Action::Help,
        ("quit" | "exit", "") => Action::Quit,
        _ => Action::Add(line.to_string()),
    };
    Ok(Some(action))
}

fn position(arg: &str) -> Option<usize> {
    arg.parse().ok()
}
