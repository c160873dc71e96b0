//! Data model for the address book.

pub mod address_book;
pub mod contact;
pub mod upcoming;

pub use address_book::AddressBook;
pub use contact::Contact;
pub use upcoming::{
    celebration_date, UpcomingBirthday, CONGRATULATION_DATE_FORMAT, DAYS_OF_UPCOMING_RANGE,
};
