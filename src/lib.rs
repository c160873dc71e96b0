//! Contact Book - a console assistant for a personal address book.
//!
//! The assistant stores named contacts with validated phone numbers and an
//! optional birthday, keeps them in a local JSON file between sessions, and
//! lists whose birthday is celebrated within the next week.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone number, birthday)
//! - **models**: Contacts, the address book, and upcoming birthday scheduling
//! - **repositories**: Loading and saving the whole address book
//! - **commands**: Console command parsing, execution, and reply texts
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;

pub use commands::{Assistant, Command, Outcome};
pub use config::Config;
pub use domain::{Birthday, Name, PhoneNumber, ValidationError};
pub use error::{BookError, CommandError, ConfigError, StorageError};
pub use models::{AddressBook, Contact, UpcomingBirthday};
pub use repositories::{AddressBookRepository, JsonFileRepository};
