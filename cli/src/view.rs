//! Plain-text rendering of the list and the status line.

use std::fmt::Write;

use todo_core::{Operation, Status, Todo};

pub const HEADING: &str = "My to-do list";

const STRIKE_ON: &str = "\x1b[9m";
const STRIKE_OFF: &str = "\x1b[29m";
/// Combining long stroke overlay, for terminals without ANSI styling.
const COMBINING_STROKE: char = '\u{0336}';

/// Whether completed items are struck through with ANSI escapes or with
/// combining characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strike {
    Ansi,
    Combining,
}

pub fn strike(text: &str, mode: Strike) -> String {
    match mode {
        Strike::Ansi => format!("{STRIKE_ON}{text}{STRIKE_OFF}"),
        Strike::Combining => text
            .chars()
            .flat_map(|c| [c, COMBINING_STROKE])
            .collect(),
    }
}

/// One line per item. Completed items are struck through and offer no
/// `done` action.
pub fn render_list(todos: &[Todo], mode: Strike) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{HEADING}");
    if todos.is_empty() {
        let _ = writeln!(out, "  (nothing to do)");
        return out;
    }
    for (i, todo) in todos.iter().enumerate() {
        let _ = writeln!(out, "  {}", render_item(i, todo, mode));
    }
    out
}

/// A single item at its list position, without indentation or newline.
pub fn render_item(index: usize, todo: &Todo, mode: Strike) -> String {
    let title = printable(&todo.title);
    if todo.completed {
        format!("{index}. [x] {}    [rm {index}]", strike(&title, mode))
    } else {
        format!("{index}. [ ] {title}    [rm {index}] [done {index}]")
    }
}

/// Titles come from the server; control characters (ESC, CR, BEL...) are
/// shown escaped so they cannot drive the terminal.
pub fn printable(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_control() {
                c.escape_default().to_string()
            } else {
                c.to_string()
            }
        })
        .collect()
}

/// `None` when there is nothing worth telling the user.
pub fn render_status(status: &Status) -> Option<String> {
    match status {
        Status::Idle => None,
        Status::Done {
            operation: Operation::Fetch,
            ..
        } => None,
        Status::Done {
            message: Some(message),
            ..
        } => Some(format!("ok: {message}")),
        Status::Done { operation, .. } => Some(format!("ok: {operation}")),
        Status::Failed { operation, error } => Some(format!("error: {operation} failed: {error}")),
    }
}

#[cfg(test)]
mod tests {
    use todo_core::ApiError;

    use super::*;

    fn todo(title: &str, completed: bool) -> Todo {
        Todo {
            title: title.to_string(),
            completed,
        }
    }

    #[test]
    fn empty_list_says_so() {
        let out = render_list(&[], Strike::Ansi);
        assert_eq!(out, format!("{HEADING}\n  (nothing to do)\n"));
    }

    #[test]
    fn incomplete_item_offers_done() {
        let out = render_list(&[todo("buy milk", false)], Strike::Ansi);
        assert!(out.contains("0. [ ] buy milk    [rm 0] [done 0]"));
    }

    #[test]
    fn completed_item_is_struck_and_cannot_be_completed_again() {
        let out = render_list(&[todo("a", false), todo("buy milk", true)], Strike::Ansi);
        let line = out.lines().find(|l| l.contains("1.")).unwrap();
        assert!(line.contains("[x] \x1b[9mbuy milk\x1b[29m"));
        assert!(!line.contains("done"));
    }

    #[test]
    fn item_keeps_its_server_position() {
        assert_eq!(
            render_item(4, &todo("walk dog", false), Strike::Combining),
            "4. [ ] walk dog    [rm 4] [done 4]"
        );
    }

    #[test]
    fn control_characters_in_titles_are_escaped() {
        let out = render_list(
            &[todo("\x1b[2Jgone", false), todo("bell\x07\rover", true)],
            Strike::Combining,
        );
        assert!(!out.contains('\x1b'));
        assert!(!out.contains('\x07'));
        assert!(!out.contains('\r'));
        assert!(out.contains("0. [ ] \\u{1b}[2Jgone"));
    }

    #[test]
    fn printable_keeps_ordinary_text() {
        assert_eq!(printable("buy milk ✅ café"), "buy milk ✅ café");
        assert_eq!(printable("tab\there"), "tab\\there");
    }

    #[test]
    fn combining_strike_overlays_every_char() {
        assert_eq!(strike("ab", Strike::Combining), "a\u{0336}b\u{0336}");
        assert_eq!(strike("", Strike::Combining), "");
    }

    #[test]
    fn status_lines() {
        assert_eq!(render_status(&Status::Idle), None);
        assert_eq!(
            render_status(&Status::Done {
                operation: Operation::Fetch,
                message: None,
            }),
            None
        );
        assert_eq!(
            render_status(&Status::Done {
                operation: Operation::Add,
                message: Some("Todo added".to_string()),
            })
            .as_deref(),
            Some("ok: Todo added")
        );
        assert_eq!(
            render_status(&Status::Done {
                operation: Operation::Delete,
                message: None,
            })
            .as_deref(),
            Some("ok: delete")
        );
        assert_eq!(
            render_status(&Status::Failed {
                operation: Operation::Complete,
                error: ApiError::Rejected("Invalid index".to_string()),
            })
            .as_deref(),
            Some("error: complete failed: rejected by server: Invalid index")
        );
    }
}
