//! Test-drive booking form and its client-side validation.
//!
//! DESIGN
//! ======
//! `validate` is a pure function of the form snapshot and the caller's
//! "today", so it can run on every submit attempt and in tests without a
//! clock. Errors are keyed by [`Field`] so the UI can render each message
//! under its input.

#[cfg(test)]
#[path = "booking_test.rs"]
mod booking_test;

use std::collections::BTreeMap;
use std::sync::OnceLock;

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;

/// Bookable time-of-day slots, `HH:MM` local time.
pub const TIME_SLOTS: [&str; 9] = ["08:00", "09:00", "10:00", "11:00", "13:00", "14:00", "15:00", "16:00", "17:00"];

/// Date input format.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A showroom where a test drive can start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dealer {
    pub id: &'static str,
    pub name: &'static str,
    pub address: &'static str,
}

pub const DEALERS: &[Dealer] = &[
    Dealer {
        id: "hn-long-bien",
        name: "VinFast Long Bien",
        address: "7 Bang Lang 1, Vinhomes Riverside, Long Bien, Ha Noi",
    },
    Dealer {
        id: "hn-times-city",
        name: "VinFast Times City",
        address: "458 Minh Khai, Hai Ba Trung, Ha Noi",
    },
    Dealer {
        id: "hcm-landmark",
        name: "VinFast Landmark 81",
        address: "720A Dien Bien Phu, Binh Thanh, Ho Chi Minh City",
    },
    Dealer {
        id: "dn-son-tra",
        name: "VinFast Son Tra",
        address: "255 Ngo Quyen, Son Tra, Da Nang",
    },
];

#[must_use]
pub fn find_dealer(id: &str) -> Option<&'static Dealer> {
    DEALERS.iter().find(|dealer| dealer.id == id)
}

/// Where the test drive starts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PickupMode {
    #[default]
    Dealer,
    Home,
}

impl PickupMode {
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Dealer => "dealer",
            Self::Home => "home",
        }
    }
}

/// Snapshot of the booking form inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingForm {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub id_number: String,
    /// `YYYY-MM-DD`.
    pub preferred_date: String,
    /// One of [`TIME_SLOTS`].
    pub preferred_time: String,
    pub pickup_mode: PickupMode,
    pub dealer_id: String,
    pub address: String,
    pub notes: String,
    pub agreed: bool,
}

/// Form inputs that can carry a validation message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FullName,
    Phone,
    Email,
    IdNumber,
    PreferredDate,
    PreferredTime,
    Dealer,
    Address,
    Agreement,
}

impl Field {
    /// Stable input name, used for element ids.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::IdNumber => "idNumber",
            Self::PreferredDate => "preferredDate",
            Self::PreferredTime => "preferredTime",
            Self::Dealer => "dealer",
            Self::Address => "address",
            Self::Agreement => "agreement",
        }
    }
}

pub type FieldErrors = BTreeMap<Field, String>;

fn phone_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern is valid"))
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"))
}

fn id_number_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[0-9]{9,12}$").expect("id pattern is valid"))
}

/// Parse the date input.
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

/// Parse a time slot; only values from [`TIME_SLOTS`] are accepted.
#[must_use]
pub fn parse_time_slot(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    if !TIME_SLOTS.contains(&raw) {
        return None;
    }
    NaiveTime::parse_from_str(raw, "%H:%M").ok()
}

/// Validate a form snapshot. An empty map means the form can be submitted.
#[must_use]
pub fn validate(form: &BookingForm, today: NaiveDate) -> FieldErrors {
    let mut errors = FieldErrors::new();
    let mut fail = |field: Field, message: &str| {
        errors.insert(field, message.to_owned());
    };

    if form.full_name.trim().is_empty() {
        fail(Field::FullName, "Please enter your full name.");
    }

    let phone = form.phone.trim();
    if phone.is_empty() {
        fail(Field::Phone, "Please enter your phone number.");
    } else if !phone_pattern().is_match(phone) {
        fail(Field::Phone, "Phone number must be exactly 10 digits.");
    }

    let email = form.email.trim();
    if email.is_empty() {
        fail(Field::Email, "Please enter your email.");
    } else if !email_pattern().is_match(email) {
        fail(Field::Email, "Please enter a valid email address.");
    }

    let id_number = form.id_number.trim();
    if id_number.is_empty() {
        fail(Field::IdNumber, "Please enter your ID card number.");
    } else if !id_number_pattern().is_match(id_number) {
        fail(Field::IdNumber, "ID card number must be 9 to 12 digits.");
    }

    if form.preferred_date.trim().is_empty() {
        fail(Field::PreferredDate, "Please choose a date.");
    } else {
        match parse_date(&form.preferred_date) {
            None => fail(Field::PreferredDate, "Please choose a valid date."),
            Some(date) if date < today => fail(Field::PreferredDate, "The date cannot be in the past."),
            Some(_) => {}
        }
    }

    if form.preferred_time.trim().is_empty() {
        fail(Field::PreferredTime, "Please choose a time.");
    } else if parse_time_slot(&form.preferred_time).is_none() {
        fail(Field::PreferredTime, "Please choose one of the available time slots.");
    }

    match form.pickup_mode {
        PickupMode::Dealer => {
            if form.dealer_id.trim().is_empty() {
                fail(Field::Dealer, "Please choose a showroom.");
            } else if find_dealer(form.dealer_id.trim()).is_none() {
                fail(Field::Dealer, "Please choose one of the listed showrooms.");
            }
        }
        PickupMode::Home => {
            if form.address.trim().is_empty() {
                fail(Field::Address, "Please enter the pickup address.");
            }
        }
    }

    if !form.agreed {
        fail(Field::Agreement, "Please accept the test-drive terms.");
    }

    errors
}

/// Lifecycle of one booking attempt on the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum BookingPhase {
    #[default]
    Editing,
    Submitting,
    Confirmed,
    Failed(String),
}

impl BookingPhase {
    /// Move to `Submitting` unless a submission is already in flight.
    /// Returns whether the caller may start the request.
    pub fn begin_submit(&mut self) -> bool {
        if matches!(self, Self::Submitting) {
            return false;
        }
        *self = Self::Submitting;
        true
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }
}
