//! User intents and the line protocol of the bundled host
//!
//! One line of input is one command:
//!
//! ```text
//! submit <name> | <project> | <due> | <completed> | <blocked>
//! edit <id>
//! delete <id>
//! filter <all|on_track|late|blocked>
//! reset
//! list
//! export
//! help
//! quit
//! ```
//!
//! Trailing `submit` fields may be omitted. Blank lines and lines starting
//! with `#` are ignored.

use crate::assignment::{AssignmentFields, AssignmentId, Filter};
use crate::error::{Result, TrackerError};
use crate::validation;

pub const HELP: &str = "\
Commands:
  submit <name> | <project> | <due YYYY-MM-DD> | <completed YYYY-MM-DD> | <blocked yes/no>
  edit <id>        select an assignment; the next submit replaces it
  delete <id>      remove an assignment
  filter <name>    all, on_track, late or blocked
  reset            cancel editing
  list             show the visible assignments
  export           print the visible assignments as TOML
  help             show this message
  quit             exit";

/// A discrete user intent, each mapped to one store operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Submit(AssignmentFields),
    EditRequest(AssignmentId),
    Delete(AssignmentId),
    FilterChange(Filter),
    Reset,
}

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Intent(Intent),
    List,
    Export,
    Help,
    Quit,
}

/// Parse one input line
///
/// # Arguments
/// * `line` - A single line of host input
///
/// # Returns
/// The parsed command, `Ok(None)` for blank lines and comments, or an error
/// for an unknown keyword or a bad ID / filter argument
pub fn parse_line(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (line, ""),
    };

    let command = match keyword.to_ascii_lowercase().as_str() {
        "submit" | "add" => Command::Intent(Intent::Submit(parse_fields(rest))),
        "edit" => Command::Intent(Intent::EditRequest(validation::parse_id(rest)?)),
        "delete" | "rm" => Command::Intent(Intent::Delete(validation::parse_id(rest)?)),
        "filter" => Command::Intent(Intent::FilterChange(validation::parse_filter(rest)?)),
        "reset" => Command::Intent(Intent::Reset),
        "list" | "ls" => Command::List,
        "export" => Command::Export,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(TrackerError::UnknownCommand(other.to_string())),
    };
    Ok(Some(command))
}

/// Split `name | project | due | completed | blocked` into form fields
fn parse_fields(rest: &str) -> AssignmentFields {
    let mut parts = rest.split('|').map(str::trim);
    let mut next = || parts.next().unwrap_or_default().to_string();

    AssignmentFields {
        name: next(),
        project: next(),
        due_date: next(),
        completed_date: next(),
        blocked: parse_flag(&next()),
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "yes" | "y" | "true" | "1" | "x" | "blocked"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_and_comment_lines() {
        assert_eq!(parse_line("   ").unwrap(), None);
        assert_eq!(parse_line("# setup").unwrap(), None);
    }

    #[test]
    fn test_submit_with_all_fields() {
        let command = parse_line("submit Essay | English | 2024-01-10 | 2024-01-09 | yes").unwrap();
        let expected = AssignmentFields::new("Essay", "2024-01-10")
            .with_project("English")
            .with_completed_date("2024-01-09")
            .with_blocked(true);
        assert_eq!(command, Some(Command::Intent(Intent::Submit(expected))));
    }

    #[test]
    fn test_submit_with_trailing_fields_omitted() {
        let command = parse_line("submit Quiz prep | | 2024-02-01").unwrap();
        let expected = AssignmentFields::new("Quiz prep", "2024-02-01");
        assert_eq!(command, Some(Command::Intent(Intent::Submit(expected))));
    }

    #[test]
    fn test_id_and_filter_commands() {
        assert!(matches!(
            parse_line("edit 4").unwrap(),
            Some(Command::Intent(Intent::EditRequest(id))) if id.get() == 4
        ));
        assert_eq!(
            parse_line("filter meet").unwrap(),
            Some(Command::Intent(Intent::FilterChange(Filter::OnTrack)))
        );
        assert_eq!(
            parse_line("delete four"),
            Err(TrackerError::InvalidId("four".to_string()))
        );
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            parse_line("undo"),
            Err(TrackerError::UnknownCommand("undo".to_string()))
        );
    }
}
