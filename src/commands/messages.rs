//! Human-readable text for replies and errors.

use crate::domain::{PhoneNumber, ValidationError};
use crate::error::{BookError, CommandError, StorageError};
use crate::models::{Contact, UpcomingBirthday};

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const GOOD_BYE: &str = "Good bye!";
pub const GREETING: &str = "How can I help you?";
pub const PROMPT: &str = "Enter a command: ";
pub const INVALID_COMMAND: &str = "Invalid command.";

/// Appended to generic failures so the operator knows where to look.
pub const DEFAULT_ERROR_HINT: &str =
    "Make sure you enter correct command and arguments (run 'info' command if you have any doubts).";

/// Description of what the assistant can do.
pub const SUPPORTED_COMMANDS_INFO: &str = "\
Supported list of commands:
hello -> just says hi!
add 'name' 'phone' -> create contact, or add one more phone to an existing one. Phone should be exactly 10 digits.
change 'name' 'old phone' 'new phone' -> edits phone number of contact.
remove-phone 'name' 'phone' -> removes phone number from contact.
phone 'name' -> outputs saved phone numbers of contact.
delete 'name' -> removes contact completely.
add-birthday 'name' 'birthday' -> saves birthday for user, in 'DD.MM.YYYY' format.
show-birthday 'name' -> outputs birthday of user.
birthdays -> output all birthdays celebrated within the next 7 days.
all -> output all saved contacts.
close -> finish assistant.
exit -> finish assistant.
info -> information about supported commands.

Make sure you follow the format of commands, and avoid spaces and plus in phone numbers, as they are not supported.
Note that state of your address book is saved only when you close the assistant with 'close' or 'exit' command.";

/// Map every error kind to the sentence shown to the operator.
pub fn error_message(err: &CommandError) -> String {
    match err {
        CommandError::Book(book_err) => book_error_message(book_err),
        CommandError::MissingArguments(usage) => {
            format!("Not enough arguments. Usage: {}. {}", usage, DEFAULT_ERROR_HINT)
        }
        CommandError::Storage(storage_err) => storage_error_message(storage_err),
        CommandError::Console(e) => format!("Console error: {}. {}", e, DEFAULT_ERROR_HINT),
    }
}

fn book_error_message(err: &BookError) -> String {
    match err {
        BookError::Validation(ValidationError::EmptyName) => {
            "Name cannot be empty. Make sure you enter name of the contact.".to_string()
        }
        BookError::Validation(ValidationError::InvalidPhone(_)) => {
            "Invalid format of phone number. Make sure you enter number with exactly 10 symbols, and it contains only digits.".to_string()
        }
        BookError::Validation(ValidationError::InvalidBirthday(_)) => {
            "Invalid format of birthday. Make sure you use DD.MM.YYYY format.".to_string()
        }
        BookError::NoRecord(_) => {
            "No such user found. Make sure you enter name of existing contact. Run 'all' command to see all contacts you have.".to_string()
        }
        BookError::NoSuchPhone(_) => {
            "No such phone number found. Make sure you enter existing phone number, which was added to contact before.".to_string()
        }
        BookError::InvalidCelebrationDate { name, year } => {
            format!("Birthday of {} has no date in {}.", name, year)
        }
    }
}

fn storage_error_message(err: &StorageError) -> String {
    match err {
        StorageError::Io(e) => format!("Could not access the address book file: {}.", e),
        StorageError::Json(e) => format!("The address book file is damaged: {}.", e),
        StorageError::UnsupportedVersion(version) => format!(
            "The address book file was written by an unsupported version ({}).",
            version
        ),
    }
}

pub fn format_phones(name: &str, phones: &[PhoneNumber]) -> String {
    if phones.is_empty() {
        return format!("No phone numbers added for {}.", name);
    }

    let phones = phones
        .iter()
        .map(PhoneNumber::as_str)
        .collect::<Vec<_>>()
        .join("; ");
    format!("Phone numbers of {}: {}.", name, phones)
}

pub fn format_all_contacts(contacts: &[&Contact]) -> String {
    if contacts.is_empty() {
        return "No contacts added so far.".to_string();
    }

    let mut result = String::from("Here's all added contacts:");
    for contact in contacts {
        result.push('\n');
        result.push_str(&contact.to_string());
    }
    result
}

pub fn format_upcoming_birthdays(upcoming: &[UpcomingBirthday<'_>]) -> String {
    if upcoming.is_empty() {
        return "No upcoming birthdays for now.".to_string();
    }

    let mut result = String::from("Upcoming birthdays:");
    for item in upcoming {
        result.push('\n');
        result.push_str(&format!(
            "{}: {}",
            item.contact.name(),
            item.congratulation_date()
        ));
    }
    result
}
