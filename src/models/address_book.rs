//! The address book: every contact, keyed by name.

use super::contact::Contact;
use crate::domain::PhoneNumber;
use crate::error::{BookError, BookResult};
use std::collections::BTreeMap;

/// All contacts of the operator, keyed by the text of their name.
///
/// Iteration is in ascending name order, so listings and birthday results are
/// reproducible between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: BTreeMap<String, Contact>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a contact, replacing any contact that already has the same name.
    pub fn add_record(&mut self, contact: Contact) -> Option<Contact> {
        self.records
            .insert(contact.name().as_str().to_string(), contact)
    }

    /// Look up a contact by exact name.
    ///
    /// # Errors
    ///
    /// Returns `BookError::NoRecord` if no contact has this name.
    pub fn find(&self, name: &str) -> BookResult<&Contact> {
        self.records
            .get(name)
            .ok_or_else(|| BookError::NoRecord(name.to_string()))
    }

    /// Look up a contact by exact name for modification.
    pub fn find_mut(&mut self, name: &str) -> BookResult<&mut Contact> {
        self.records
            .get_mut(name)
            .ok_or_else(|| BookError::NoRecord(name.to_string()))
    }

    /// Remove a contact by exact name, returning it.
    pub fn delete(&mut self, name: &str) -> BookResult<Contact> {
        self.records
            .remove(name)
            .ok_or_else(|| BookError::NoRecord(name.to_string()))
    }

    /// All contacts in store order.
    pub fn all_records(&self) -> Vec<&Contact> {
        self.records.values().collect()
    }

    /// Phone numbers of the named contact.
    pub fn find_phones(&self, name: &str) -> BookResult<&[PhoneNumber]> {
        Ok(self.find(name)?.phones())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<Contact> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Contact>>(iter: I) -> Self {
        let mut book = AddressBook::new();
        for contact in iter {
            book.add_record(contact);
        }
        book
    }
}
