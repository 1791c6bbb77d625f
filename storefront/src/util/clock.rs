//! Wall-clock access for the booking flow.
//!
//! Booking inputs are local dates and slots, so "now" is taken in the
//! browser's (or server's) local time zone.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use chrono::{DateTime, Local, NaiveDate};

#[must_use]
pub fn now() -> DateTime<Local> {
    Local::now()
}

#[must_use]
pub fn today() -> NaiveDate {
    now().date_naive()
}

/// `YYYY-MM-DD` for the date input's `min` attribute.
#[must_use]
pub fn today_input_value() -> String {
    today().format(catalog::booking::DATE_FORMAT).to_string()
}
