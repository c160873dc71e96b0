//! Console commands for the contact book assistant.
//!
//! - **parser**: split a line of input into a [`Command`] and arguments
//! - **assistant**: execute commands against the address book
//! - **messages**: reply texts and the error-to-text mapping

pub mod assistant;
pub mod messages;
pub mod parser;

pub use assistant::{Assistant, Outcome};
pub use messages::error_message;
pub use parser::{parse_input, Command, ParsedInput};
