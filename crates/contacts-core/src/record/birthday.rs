// # Birthday
//
// Calendar date attached to a contact, validated when assigned.
//
// ## Format
//
// Only the canonical `YYYY-MM-DD` form is accepted: ten characters,
// zero-padded, and a real calendar date. Anything else is rejected with
// `Error::InvalidInput`, so a stored birthday always renders back to the
// exact string it was set from.
//
// ## Feb-29
//
// In a year without Feb-29 the birthday is observed on Feb-28.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// chrono format string for the canonical representation
pub const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

/// Message carried by the `InvalidInput` error on a malformed birthday
pub const INVALID_BIRTHDAY_FORMAT: &str =
    "Invalid birthday format. Please use 'YYYY-MM-DD' format.";

/// A validated birthday
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a strict `YYYY-MM-DD` string
    pub fn parse(value: &str) -> Result<Self> {
        if !is_canonical_shape(value) {
            return Err(Error::invalid_input(INVALID_BIRTHDAY_FORMAT));
        }

        NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| Error::invalid_input(INVALID_BIRTHDAY_FORMAT))
    }

    /// The underlying date
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Next occurrence of this birthday on or after `today`
    pub fn next_occurrence(&self, today: NaiveDate) -> NaiveDate {
        let this_year = self.in_year(today.year());
        if this_year < today {
            self.in_year(today.year() + 1)
        } else {
            this_year
        }
    }

    /// Days from `today` until the next occurrence (0 on the day itself)
    pub fn days_until(&self, today: NaiveDate) -> i64 {
        self.next_occurrence(today)
            .signed_duration_since(today)
            .num_days()
    }

    fn in_year(&self, year: i32) -> NaiveDate {
        self.0
            .with_year(year)
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
            // only reachable for years outside chrono's range
            .unwrap_or(NaiveDate::MAX)
    }
}

fn is_canonical_shape(value: &str) -> bool {
    value.len() == 10
        && value.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        })
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

impl TryFrom<String> for Birthday {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Birthday> for String {
    fn from(birthday: Birthday) -> Self {
        birthday.to_string()
    }
}
