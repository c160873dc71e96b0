//! Contact model representing a person in the address book.

use crate::domain::{Birthday, Name, PhoneNumber};
use crate::error::{BookError, BookResult};
use std::fmt;

/// A single person: a name, any number of phone numbers and an optional birthday.
///
/// The name is fixed at construction; phones and birthday are attached later.
/// Phone order is kept as entered and duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    name: Name,
    phones: Vec<PhoneNumber>,
    birthday: Option<Birthday>,
}

impl Contact {
    /// Create a new contact with only a name.
    ///
    /// # Errors
    ///
    /// Returns `BookError::Validation` if the name is empty.
    pub fn new(name: impl Into<String>) -> BookResult<Self> {
        Ok(Self::from(Name::new(name)?))
    }

    /// Rebuild a contact from already validated parts.
    pub fn from_parts(name: Name, phones: Vec<PhoneNumber>, birthday: Option<Birthday>) -> Self {
        Self {
            name,
            phones,
            birthday,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number.
    pub fn add_phone(&mut self, phone: &str) -> BookResult<()> {
        self.phones.push(PhoneNumber::new(phone)?);
        Ok(())
    }

    /// Remove the first phone number equal to `phone`.
    ///
    /// # Errors
    ///
    /// - `BookError::Validation` if `phone` is not a valid phone number
    /// - `BookError::NoSuchPhone` if the contact has no such number
    pub fn remove_phone(&mut self, phone: &str) -> BookResult<PhoneNumber> {
        let index = self.position_of(&PhoneNumber::new(phone)?)?;
        Ok(self.phones.remove(index))
    }

    /// Replace `old_phone` with `new_phone`, keeping its position in the list.
    ///
    /// Both numbers are validated before anything changes.
    pub fn edit_phone(&mut self, old_phone: &str, new_phone: &str) -> BookResult<()> {
        let old_phone = PhoneNumber::new(old_phone)?;
        let new_phone = PhoneNumber::new(new_phone)?;

        let index = self.position_of(&old_phone)?;
        self.phones[index] = new_phone;
        Ok(())
    }

    /// Find a stored phone number equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Parse and store the birthday, replacing any previous one.
    pub fn set_birthday(&mut self, birthday: &str) -> BookResult<()> {
        self.birthday = Some(Birthday::parse(birthday)?);
        Ok(())
    }

    fn position_of(&self, phone: &PhoneNumber) -> BookResult<usize> {
        self.phones
            .iter()
            .position(|p| p == phone)
            .ok_or_else(|| BookError::NoSuchPhone(phone.to_string()))
    }
}

impl From<Name> for Contact {
    fn from(name: Name) -> Self {
        Self::from_parts(name, Vec::new(), None)
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");

        match &self.birthday {
            Some(birthday) => write!(
                f,
                "Contact name: {}, birthday: {}, phones: {}",
                self.name, birthday, phones
            ),
            None => write!(
                f,
                "Contact name: {}, birthday: none, phones: {}",
                self.name, phones
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;

    fn contact_with_phones(phones: &[&str]) -> Contact {
        let mut contact = Contact::new("Alice").unwrap();
        for phone in phones {
            contact.add_phone(phone).unwrap();
        }
        contact
    }

    #[test]
    fn test_new_contact_is_empty() {
        let contact = Contact::new("Alice").unwrap();
        assert_eq!(contact.name().as_str(), "Alice");
        assert!(contact.phones().is_empty());
        assert!(contact.birthday().is_none());
    }

    #[test]
    fn test_new_contact_empty_name_fails() {
        assert_eq!(
            Contact::new(""),
            Err(BookError::Validation(ValidationError::EmptyName))
        );
    }

    #[test]
    fn test_add_phone_appends() {
        let mut contact = contact_with_phones(&["1111111111"]);
        contact.add_phone("2222222222").unwrap();
        assert_eq!(contact.phones().len(), 2);
        assert_eq!(contact.phones()[1].as_str(), "2222222222");
    }

    #[test]
    fn test_add_phone_allows_duplicates() {
        let contact = contact_with_phones(&["1111111111", "1111111111"]);
        assert_eq!(contact.phones().len(), 2);
    }

    #[test]
    fn test_add_phone_invalid_leaves_list_unchanged() {
        let mut contact = contact_with_phones(&["1111111111"]);
        let result = contact.add_phone("123");
        assert!(matches!(
            result,
            Err(BookError::Validation(ValidationError::InvalidPhone(_)))
        ));
        assert_eq!(contact.phones().len(), 1);
    }

    #[test]
    fn test_edit_phone_preserves_position() {
        let mut contact = contact_with_phones(&["0000000000", "3333333333", "1111111111"]);
        contact.edit_phone("1111111111", "2222222222").unwrap();

        assert_eq!(contact.phones()[2].as_str(), "2222222222");
        assert_eq!(contact.phones().len(), 3);
        assert!(contact.find_phone("1111111111").is_none());
    }

    #[test]
    fn test_edit_phone_missing_fails() {
        let mut contact = contact_with_phones(&["1111111111"]);
        let result = contact.edit_phone("9999999999", "2222222222");
        assert_eq!(result, Err(BookError::NoSuchPhone("9999999999".to_string())));
        assert_eq!(contact.phones()[0].as_str(), "1111111111");
    }

    #[test]
    fn test_edit_phone_invalid_new_phone_changes_nothing() {
        let mut contact = contact_with_phones(&["1111111111"]);
        assert!(contact.edit_phone("1111111111", "bad").is_err());
        assert_eq!(contact.phones()[0].as_str(), "1111111111");
    }

    #[test]
    fn test_remove_phone_removes_first_match() {
        let mut contact = contact_with_phones(&["1111111111", "2222222222", "1111111111"]);
        let removed = contact.remove_phone("1111111111").unwrap();

        assert_eq!(removed.as_str(), "1111111111");
        assert_eq!(contact.phones().len(), 2);
        assert_eq!(contact.phones()[0].as_str(), "2222222222");
        assert_eq!(contact.phones()[1].as_str(), "1111111111");
    }

    #[test]
    fn test_remove_phone_missing_fails() {
        let mut contact = contact_with_phones(&["1111111111"]);
        let result = contact.remove_phone("2222222222");
        assert_eq!(result, Err(BookError::NoSuchPhone("2222222222".to_string())));
        assert_eq!(contact.phones().len(), 1);
    }

    #[test]
    fn test_find_phone() {
        let contact = contact_with_phones(&["1111111111", "2222222222"]);
        assert_eq!(
            contact.find_phone("2222222222").map(PhoneNumber::as_str),
            Some("2222222222")
        );
        assert!(contact.find_phone("3333333333").is_none());
        assert!(contact.find_phone("not a phone").is_none());
    }

    #[test]
    fn test_set_birthday_overwrites() {
        let mut contact = Contact::new("Alice").unwrap();
        contact.set_birthday("12.01.1990").unwrap();
        contact.set_birthday("13.02.1991").unwrap();
        assert_eq!(contact.birthday().unwrap().to_string(), "13.02.1991");
    }

    #[test]
    fn test_set_birthday_invalid_keeps_previous() {
        let mut contact = Contact::new("Alice").unwrap();
        contact.set_birthday("12.01.1990").unwrap();
        assert!(contact.set_birthday("31.02.2000").is_err());
        assert_eq!(contact.birthday().unwrap().to_string(), "12.01.1990");
    }

    #[test]
    fn test_display() {
        let mut contact = contact_with_phones(&["1111111111", "2222222222"]);
        assert_eq!(
            contact.to_string(),
            "Contact name: Alice, birthday: none, phones: 1111111111; 2222222222"
        );

        contact.set_birthday("12.01.1990").unwrap();
        assert_eq!(
            contact.to_string(),
            "Contact name: Alice, birthday: 12.01.1990, phones: 1111111111; 2222222222"
        );
    }
}
