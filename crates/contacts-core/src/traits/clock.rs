//! Source of "today" for birthday countdowns

use chrono::NaiveDate;

/// Trait for clock implementations
pub trait Clock: Send + Sync {
    /// Today's date
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the local system date
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Clock pinned to a single date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
