//! Date display utilities.

use std::fmt;

use jiff::{civil::Date, Zoned};

/// A wrapper around a calendar `Date` that formats as `YYYY-MM-DD`.
pub struct CalendarDate<'a>(pub &'a Date);

impl<'a> fmt::Display for CalendarDate<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%Y-%m-%d"))
    }
}

/// Today's date in the system time zone.
pub fn today() -> Date {
    Zoned::now().date()
}
