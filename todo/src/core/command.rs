//! Parsing for the interactive command boundary.

use std::fmt;
use std::str::FromStr;

/// Commands recognized at the shell prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Add,
    List,
    Toggle,
    Delete,
    Exit,
}

impl CommandKind {
    pub const ALL: [CommandKind; 5] = [
        CommandKind::Add,
        CommandKind::List,
        CommandKind::Toggle,
        CommandKind::Delete,
        CommandKind::Exit,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CommandKind::Add => "add",
            CommandKind::List => "list",
            CommandKind::Toggle => "toggle",
            CommandKind::Delete => "delete",
            CommandKind::Exit => "exit",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized command word (trimmed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCommand(pub String);

impl fmt::Display for UnknownCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown command '{}'", self.0)
    }
}

impl std::error::Error for UnknownCommand {}

impl FromStr for CommandKind {
    type Err = UnknownCommand;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let word = input.trim();
        CommandKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(word))
            .ok_or_else(|| UnknownCommand(word.to_string()))
    }
}

/// Trim a user-entered title; `None` if nothing remains.
pub fn normalize_title(input: &str) -> Option<String> {
    let title = input.trim();
    if title.is_empty() {
        None
    } else {
        Some(title.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_commands_ignoring_case_and_whitespace() {
        assert_eq!("add".parse(), Ok(CommandKind::Add));
        assert_eq!("  LIST \n".parse(), Ok(CommandKind::List));
        assert_eq!("Toggle".parse(), Ok(CommandKind::Toggle));
        assert_eq!("delete".parse(), Ok(CommandKind::Delete));
        assert_eq!("exit".parse(), Ok(CommandKind::Exit));
    }

    #[test]
    fn rejects_unknown_and_empty_commands() {
        assert_eq!(
            "remove".parse::<CommandKind>(),
            Err(UnknownCommand("remove".to_string()))
        );
        assert!("".parse::<CommandKind>().is_err());
        assert!("add milk".parse::<CommandKind>().is_err());
    }

    #[test]
    fn normalize_title_trims_and_rejects_blank() {
        assert_eq!(
            normalize_title("  Buy milk \n"),
            Some("Buy milk".to_string())
        );
        assert_eq!(normalize_title(""), None);
        assert_eq!(normalize_title(" \t "), None);
    }
}
