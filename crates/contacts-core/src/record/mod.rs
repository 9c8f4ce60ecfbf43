//! Contact records
//!
//! A [`Record`] holds one contact: an immutable name, an ordered list of
//! phone numbers and an optional [`Birthday`].

pub mod birthday;

pub use birthday::{BIRTHDAY_FORMAT, Birthday, INVALID_BIRTHDAY_FORMAT};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// One contact in the address book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: String,
    phones: Vec<String>,
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday
    ///
    /// Fails with `Error::InvalidInput` if `name` is blank.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::invalid_input("contact name cannot be empty"));
        }

        Ok(Self {
            name,
            phones: Vec::new(),
            birthday: None,
        })
    }

    /// Contact name (the store key)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Phone numbers in insertion order
    pub fn phones(&self) -> &[String] {
        &self.phones
    }

    /// Birthday, if set
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Append a phone number; duplicates are kept
    pub fn add_phone(&mut self, number: impl Into<String>) {
        self.phones.push(number.into());
    }

    /// Remove every phone equal to `number`
    pub fn remove_phone(&mut self, number: &str) {
        self.phones.retain(|phone| phone != number);
    }

    /// Replace the first phone equal to `old`
    ///
    /// A missing number is an outcome, not an error.
    pub fn edit_phone(&mut self, old: &str, new: impl Into<String>) -> PhoneEdit {
        match self.phones.iter_mut().find(|phone| phone.as_str() == old) {
            Some(phone) => {
                *phone = new.into();
                PhoneEdit::Changed {
                    name: self.name.clone(),
                    number: phone.clone(),
                }
            }
            None => PhoneEdit::NotFound {
                name: self.name.clone(),
                number: old.to_string(),
            },
        }
    }

    /// Validate and set the birthday
    pub fn set_birthday(&mut self, value: &str) -> Result<()> {
        self.birthday = Some(Birthday::parse(value)?);
        Ok(())
    }

    /// Days until the next birthday, `None` if no birthday is set
    pub fn days_to_birthday(&self, today: NaiveDate) -> Option<i64> {
        self.birthday.map(|birthday| birthday.days_until(today))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut text = format!(
            "Name: {}\nBirthday: {}\nPhones:\n",
            self.name,
            self.birthday.map(|b| b.to_string()).unwrap_or_default()
        );
        for phone in &self.phones {
            text.push_str("- ");
            text.push_str(phone);
            text.push('\n');
        }
        f.write_str(text.trim_end())
    }
}

/// Result of [`Record::edit_phone`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhoneEdit {
    /// The first matching number was replaced
    Changed {
        /// Contact name
        name: String,
        /// The new number
        number: String,
    },

    /// No phone matched
    NotFound {
        /// Contact name
        name: String,
        /// The number that was looked for
        number: String,
    },
}

impl PhoneEdit {
    /// Whether a phone number was replaced
    pub fn is_changed(&self) -> bool {
        matches!(self, PhoneEdit::Changed { .. })
    }
}

impl fmt::Display for PhoneEdit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhoneEdit::Changed { name, number } => {
                write!(f, "Changed phone number for contact: {}, {}", name, number)
            }
            PhoneEdit::NotFound { name, number } => {
                write!(f, "Phone number '{}' not found for contact: {}", number, name)
            }
        }
    }
}
