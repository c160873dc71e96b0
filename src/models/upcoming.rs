//! Upcoming birthday scheduling.
//!
//! A birthday is *upcoming* when its celebration date falls within
//! [`DAYS_OF_UPCOMING_RANGE`] days of today, inclusive on both ends.
//!
//! The celebration date is the birthday's month and day in the current year,
//! or next year when it has already passed. Saturdays and Sundays roll forward
//! to the following Monday.

use super::address_book::AddressBook;
use super::contact::Contact;
use crate::error::{BookError, BookResult};
use chrono::{Datelike, Days, NaiveDate, Weekday};
use tracing::debug;

/// Length of the lookahead window in days.
pub const DAYS_OF_UPCOMING_RANGE: i64 = 7;

/// Format celebration dates are rendered in.
pub const CONGRATULATION_DATE_FORMAT: &str = "%Y.%m.%d";

/// A contact whose birthday is celebrated within the lookahead window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday<'a> {
    pub contact: &'a Contact,
    pub celebration_date: NaiveDate,
}

impl UpcomingBirthday<'_> {
    /// The celebration date as `YYYY.MM.DD`.
    pub fn congratulation_date(&self) -> String {
        self.celebration_date
            .format(CONGRATULATION_DATE_FORMAT)
            .to_string()
    }
}

/// Compute the date `contact`'s birthday is observed on, as seen from `today`.
///
/// Returns `Ok(None)` when the contact has no birthday.
///
/// # Errors
///
/// Returns `BookError::InvalidCelebrationDate` when the target year has no such
/// day, which only happens for 29 February outside leap years.
pub fn celebration_date(contact: &Contact, today: NaiveDate) -> BookResult<Option<NaiveDate>> {
    let Some(birthday) = contact.birthday() else {
        return Ok(None);
    };

    // Compare on (month, day) so a Feb 29 birthday can still be placed
    // before or after today in a year where that date doesn't exist.
    let passed = (birthday.month(), birthday.day()) < (today.month(), today.day());
    let year = if passed { today.year() + 1 } else { today.year() };

    let invalid = || BookError::InvalidCelebrationDate {
        name: contact.name().to_string(),
        year,
    };

    let date = NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day()).ok_or_else(invalid)?;

    let shift = match date.weekday() {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        _ => 0,
    };

    date.checked_add_days(Days::new(shift))
        .map(Some)
        .ok_or_else(invalid)
}

impl AddressBook {
    /// Contacts whose celebration date is between `today` and
    /// `today + DAYS_OF_UPCOMING_RANGE`, in store order.
    ///
    /// Contacts without a birthday are ignored. A contact whose birthday has no
    /// date in the target year is logged and skipped.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday<'_>> {
        let mut upcoming = Vec::new();

        for contact in self.all_records() {
            let celebration = match celebration_date(contact, today) {
                Ok(Some(date)) => date,
                Ok(None) => continue,
                Err(e) => {
                    debug!("Skipping upcoming birthday check: {}", e);
                    continue;
                }
            };

            let delta = (celebration - today).num_days();
            if (0..=DAYS_OF_UPCOMING_RANGE).contains(&delta) {
                upcoming.push(UpcomingBirthday {
                    contact,
                    celebration_date: celebration,
                });
            }
        }

        debug!(
            "Found {} upcoming birthdays out of {} contacts",
            upcoming.len(),
            self.len()
        );
        upcoming
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn contact_born(name: &str, birthday: &str) -> Contact {
        let mut contact = Contact::new(name).unwrap();
        contact.set_birthday(birthday).unwrap();
        contact
    }

    #[test]
    fn test_weekday_is_not_shifted() {
        let contact = contact_born("Alice", "12.01.1990");
        assert_eq!(
            celebration_date(&contact, date(2024, 1, 10)).unwrap(),
            Some(date(2024, 1, 12))
        );
    }

    #[test]
    fn test_saturday_shifts_to_monday() {
        let contact = contact_born("Bob", "13.01.1985");
        assert_eq!(
            celebration_date(&contact, date(2024, 1, 10)).unwrap(),
            Some(date(2024, 1, 15))
        );
    }

    #[test]
    fn test_sunday_shifts_to_monday() {
        let contact = contact_born("Erin", "14.01.1985");
        assert_eq!(
            celebration_date(&contact, date(2024, 1, 10)).unwrap(),
            Some(date(2024, 1, 15))
        );
    }

    #[test]
    fn test_passed_birthday_rolls_to_next_year() {
        let contact = contact_born("Carol", "01.01.1990");
        assert_eq!(
            celebration_date(&contact, date(2024, 1, 10)).unwrap(),
            Some(date(2025, 1, 1))
        );
    }

    #[test]
    fn test_birthday_today_is_not_rolled() {
        let contact = contact_born("Alice", "10.01.1990");
        assert_eq!(
            celebration_date(&contact, date(2024, 1, 10)).unwrap(),
            Some(date(2024, 1, 10))
        );
    }

    #[test]
    fn test_no_birthday_yields_none() {
        let contact = Contact::new("Nobody").unwrap();
        assert_eq!(celebration_date(&contact, date(2024, 1, 10)).unwrap(), None);
    }

    #[test]
    fn test_feb_29_in_non_leap_year_fails() {
        let contact = contact_born("Leap", "29.02.2000");
        assert_eq!(
            celebration_date(&contact, date(2025, 2, 25)),
            Err(BookError::InvalidCelebrationDate {
                name: "Leap".to_string(),
                year: 2025
            })
        );
    }

    #[test]
    fn test_feb_29_after_passing_targets_next_year() {
        let contact = contact_born("Leap", "29.02.2000");
        // 2023-03-10 is after Feb 29 and 2024 is a leap year
        assert_eq!(
            celebration_date(&contact, date(2023, 3, 10)).unwrap(),
            Some(date(2024, 2, 29))
        );
    }

    #[test]
    fn test_congratulation_date_format() {
        let contact = Contact::new("Alice").unwrap();
        let upcoming = UpcomingBirthday {
            contact: &contact,
            celebration_date: date(2024, 1, 5),
        };
        assert_eq!(upcoming.congratulation_date(), "2024.01.05");
    }
}
