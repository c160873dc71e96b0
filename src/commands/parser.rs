//! Tokenizing a line of operator input into a command and its arguments.

use std::fmt;

/// A console command keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    RemovePhone,
    Phone,
    Delete,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    All,
    Info,
    /// `close` or `exit`
    Exit,
    /// Any keyword the assistant does not know
    Unknown(String),
}

impl From<&str> for Command {
    /// Keywords are matched case-insensitively.
    fn from(keyword: &str) -> Self {
        match keyword.to_lowercase().as_str() {
            "hello" => Command::Hello,
            "add" => Command::Add,
            "change" => Command::Change,
            "remove-phone" => Command::RemovePhone,
            "phone" => Command::Phone,
            "delete" => Command::Delete,
            "add-birthday" => Command::AddBirthday,
            "show-birthday" => Command::ShowBirthday,
            "birthdays" => Command::Birthdays,
            "all" => Command::All,
            "info" => Command::Info,
            "close" | "exit" => Command::Exit,
            other => Command::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self {
            Command::Hello => "hello",
            Command::Add => "add",
            Command::Change => "change",
            Command::RemovePhone => "remove-phone",
            Command::Phone => "phone",
            Command::Delete => "delete",
            Command::AddBirthday => "add-birthday",
            Command::ShowBirthday => "show-birthday",
            Command::Birthdays => "birthdays",
            Command::All => "all",
            Command::Info => "info",
            Command::Exit => "exit",
            Command::Unknown(keyword) => keyword,
        };
        write!(f, "{}", keyword)
    }
}

/// A command keyword together with its whitespace-separated arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    pub command: Command,
    pub args: Vec<String>,
}

/// Split a line into a command and arguments.
///
/// Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<ParsedInput> {
    let mut tokens = line.split_whitespace();
    let command = Command::from(tokens.next()?);
    let args = tokens.map(str::to_string).collect();

    Some(ParsedInput { command, args })
}
