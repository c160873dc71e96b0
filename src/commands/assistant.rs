//! Executing console commands against the address book.

use super::messages;
use super::parser::{parse_input, Command, ParsedInput};
use crate::error::{CommandError, CommandResult, StorageResult};
use crate::models::{AddressBook, Contact};
use crate::repositories::AddressBookRepository;
use chrono::NaiveDate;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

const ADD_USAGE: &str = "add <name> <phone>";
const CHANGE_USAGE: &str = "change <name> <old phone> <new phone>";
const REMOVE_PHONE_USAGE: &str = "remove-phone <name> <phone>";
const PHONE_USAGE: &str = "phone <name>";
const DELETE_USAGE: &str = "delete <name>";
const ADD_BIRTHDAY_USAGE: &str = "add-birthday <name> <DD.MM.YYYY>";
const SHOW_BIRTHDAY_USAGE: &str = "show-birthday <name>";

/// What the console loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the reply and wait for the next command
    Continue(String),
    /// Print the reply and stop
    Exit(String),
}

impl Outcome {
    pub fn message(&self) -> &str {
        match self {
            Outcome::Continue(message) | Outcome::Exit(message) => message,
        }
    }
}

/// The console assistant: owns the address book for the session and saves it
/// through the repository when the operator closes it.
pub struct Assistant {
    book: AddressBook,
    repository: Box<dyn AddressBookRepository>,
}

impl Assistant {
    /// Create an assistant around an already loaded book.
    pub fn new(book: AddressBook, repository: Box<dyn AddressBookRepository>) -> Self {
        Self { book, repository }
    }

    /// Load the book from `repository` and create an assistant for it.
    pub fn load(repository: Box<dyn AddressBookRepository>) -> StorageResult<Self> {
        let book = repository.load()?;
        Ok(Self::new(book, repository))
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Persist the current book.
    pub fn save(&self) -> StorageResult<()> {
        self.repository.save(&self.book)
    }

    /// Handle one line of input, turning any failure into a reply.
    ///
    /// Returns `None` for a blank line.
    pub fn handle_line(&mut self, line: &str, today: NaiveDate) -> Option<Outcome> {
        let input = parse_input(line)?;

        let outcome = match self.execute(&input, today) {
            Ok(outcome) => outcome,
            Err(e) => {
                debug!("Command '{}' failed: {}", input.command, e);
                Outcome::Continue(messages::error_message(&e))
            }
        };
        Some(outcome)
    }

    /// Drive a console session: prompt, read a line, reply, until `exit`,
    /// `close` or end of input.
    ///
    /// Lines that aren't valid UTF-8 are decoded lossily, so they end up as an
    /// unknown command instead of ending the session. End of input saves the
    /// book like `close`; since nothing more can be read, a failed save there
    /// is returned to the caller.
    pub fn run<R, W, F>(&mut self, mut input: R, mut output: W, today: F) -> CommandResult<()>
    where
        R: BufRead,
        W: Write,
        F: Fn() -> NaiveDate,
    {
        let mut buf = Vec::new();

        loop {
            write!(output, "{}", messages::PROMPT)?;
            output.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                writeln!(output)?;
                self.save()?;
                info!("End of input, address book saved");
                writeln!(output, "{}", messages::GOOD_BYE)?;
                return Ok(());
            }

            let line = String::from_utf8_lossy(&buf);
            match self.handle_line(&line, today()) {
                Some(Outcome::Continue(reply)) => writeln!(output, "{}", reply)?,
                Some(Outcome::Exit(reply)) => {
                    writeln!(output, "{}", reply)?;
                    return Ok(());
                }
                None => continue,
            }
        }
    }

    /// Execute a parsed command.
    ///
    /// Extra arguments beyond what a command needs are ignored.
    pub fn execute(&mut self, input: &ParsedInput, today: NaiveDate) -> CommandResult<Outcome> {
        let args = &input.args;

        let reply = match &input.command {
            Command::Hello => messages::GREETING.to_string(),
            Command::Add => {
                let [name, phone] = arguments::<2>(args, ADD_USAGE)?;
                self.add_contact(name, phone)?
            }
            Command::Change => {
                let [name, old_phone, new_phone] = arguments::<3>(args, CHANGE_USAGE)?;
                self.book.find_mut(name)?.edit_phone(old_phone, new_phone)?;
                "Contact changed.".to_string()
            }
            Command::RemovePhone => {
                let [name, phone] = arguments::<2>(args, REMOVE_PHONE_USAGE)?;
                self.book.find_mut(name)?.remove_phone(phone)?;
                "Phone removed.".to_string()
            }
            Command::Phone => {
                let [name] = arguments::<1>(args, PHONE_USAGE)?;
                messages::format_phones(name, self.book.find_phones(name)?)
            }
            Command::Delete => {
                let [name] = arguments::<1>(args, DELETE_USAGE)?;
                self.book.delete(name)?;
                "Contact deleted.".to_string()
            }
            Command::AddBirthday => {
                let [name, birthday] = arguments::<2>(args, ADD_BIRTHDAY_USAGE)?;
                self.book.find_mut(name)?.set_birthday(birthday)?;
                format!("Birthday added for {}.", name)
            }
            Command::ShowBirthday => {
                let [name] = arguments::<1>(args, SHOW_BIRTHDAY_USAGE)?;
                match self.book.find(name)?.birthday() {
                    Some(birthday) => format!("Birthday of {} is {}.", name, birthday),
                    None => format!("No birthday added for user {}.", name),
                }
            }
            Command::Birthdays => {
                messages::format_upcoming_birthdays(&self.book.upcoming_birthdays(today))
            }
            Command::All => messages::format_all_contacts(&self.book.all_records()),
            Command::Info => messages::SUPPORTED_COMMANDS_INFO.to_string(),
            Command::Exit => {
                self.save()?;
                info!("Address book saved, closing session");
                return Ok(Outcome::Exit(messages::GOOD_BYE.to_string()));
            }
            Command::Unknown(keyword) => {
                warn!("Unknown command: {}", keyword);
                messages::INVALID_COMMAND.to_string()
            }
        };

        Ok(Outcome::Continue(reply))
    }

    /// Find-or-create the contact and attach the phone.
    ///
    /// A new contact is only stored once its first phone is valid.
    fn add_contact(&mut self, name: &str, phone: &str) -> CommandResult<String> {
        if self.book.contains(name) {
            self.book.find_mut(name)?.add_phone(phone)?;
            return Ok("Contact updated.".to_string());
        }

        let mut contact = Contact::new(name)?;
        contact.add_phone(phone)?;
        self.book.add_record(contact);
        Ok("Contact added.".to_string())
    }
}

/// The first `N` arguments, or `MissingArguments` if there are fewer.
fn arguments<'a, const N: usize>(
    args: &'a [String],
    usage: &'static str,
) -> CommandResult<[&'a str; N]> {
    if args.len() < N {
        return Err(CommandError::MissingArguments(usage));
    }
    Ok(std::array::from_fn(|i| args[i].as_str()))
}
