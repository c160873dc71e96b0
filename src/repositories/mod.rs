pub mod document;
mod json_file_repository;
mod traits;

pub use document::{AddressBookDocument, ContactRecord, FORMAT_VERSION};
pub use json_file_repository::JsonFileRepository;
pub use traits::AddressBookRepository;
