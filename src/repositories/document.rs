//! Versioned on-disk representation of the address book.
//!
//! ```json
//! {
//!   "version": 1,
//!   "contacts": [
//!     { "name": "Alice", "phones": ["0501234567"], "birthday": "12.01.1990" }
//!   ]
//! }
//! ```
//!
//! Values are re-validated while decoding, so a hand-edited file cannot put an
//! invalid phone number or birthday into the book.

use crate::domain::{Birthday, Name, PhoneNumber};
use crate::error::{StorageError, StorageResult};
use crate::models::{AddressBook, Contact};
use serde::{Deserialize, Serialize};

/// Version written by [`encode`] and the only version [`decode`] accepts.
pub const FORMAT_VERSION: u32 = 1;

/// Top-level stored document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AddressBookDocument {
    pub version: u32,

    #[serde(default)]
    pub contacts: Vec<ContactRecord>,
}

/// One stored contact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactRecord {
    pub name: Name,

    #[serde(default)]
    pub phones: Vec<PhoneNumber>,

    #[serde(default)]
    pub birthday: Option<Birthday>,
}

// Read before the full document so a newer layout reports its version
// instead of a confusing field error.
#[derive(Debug, Deserialize)]
struct VersionHeader {
    version: u32,
}

impl From<&Contact> for ContactRecord {
    fn from(contact: &Contact) -> Self {
        Self {
            name: contact.name().clone(),
            phones: contact.phones().to_vec(),
            birthday: contact.birthday().copied(),
        }
    }
}

impl From<ContactRecord> for Contact {
    fn from(record: ContactRecord) -> Self {
        Contact::from_parts(record.name, record.phones, record.birthday)
    }
}

impl From<&AddressBook> for AddressBookDocument {
    fn from(book: &AddressBook) -> Self {
        Self {
            version: FORMAT_VERSION,
            contacts: book
                .all_records()
                .into_iter()
                .map(ContactRecord::from)
                .collect(),
        }
    }
}

impl AddressBookDocument {
    /// Build the address book. Later records win over earlier ones with the same name.
    pub fn into_address_book(self) -> AddressBook {
        self.contacts.into_iter().map(Contact::from).collect()
    }
}

/// Serialize the book as a pretty-printed versioned JSON document.
pub fn encode(book: &AddressBook) -> StorageResult<String> {
    Ok(serde_json::to_string_pretty(&AddressBookDocument::from(book))?)
}

/// Parse a stored document back into an address book.
///
/// # Errors
///
/// - `StorageError::UnsupportedVersion` if the document has another version
/// - `StorageError::Json` if the text is malformed or holds invalid values
pub fn decode(text: &str) -> StorageResult<AddressBook> {
    let header: VersionHeader = serde_json::from_str(text)?;
    if header.version != FORMAT_VERSION {
        return Err(StorageError::UnsupportedVersion(header.version));
    }

    let document: AddressBookDocument = serde_json::from_str(text)?;
    Ok(document.into_address_book())
}
