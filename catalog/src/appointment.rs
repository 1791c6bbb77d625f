//! Appointment payloads and the test-drive submission flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! The appointment service has rejected the plain payload with a 400 on some
//! deployments and accepted the same request once it carried a placeholder
//! `appointmentId`. Submission therefore retries exactly once with that
//! alternate shape when the first failure message mentions `400`. Nothing
//! else is retried; the user can resubmit manually.

#[cfg(test)]
#[path = "appointment_test.rs"]
mod appointment_test;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde::Serialize;

use crate::booking::{self, BookingForm, FieldErrors, PickupMode};
use crate::source::SourceError;
use crate::vehicle::Vehicle;

/// Placeholder id sent with the alternate payload shape.
pub const PLACEHOLDER_APPOINTMENT_ID: i64 = 0;

const AUTH_HINT: &str = "Please sign in before booking a test drive.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppointmentStatus {
    #[default]
    Pending,
}

/// Body of `POST /appointments`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRequest {
    /// RFC 3339 UTC timestamp with millisecond precision.
    pub appointment_date: String,
    pub status: AppointmentStatus,
    pub user_id: i64,
    pub vehicle_id: i64,
    pub username: String,
    pub vehicle_name: String,
    pub address: String,
}

/// Alternate shape: the same request plus a placeholder id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderAppointment {
    pub appointment_id: i64,
    #[serde(flatten)]
    pub request: AppointmentRequest,
}

/// What actually goes over the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AppointmentPayload {
    Standard(AppointmentRequest),
    WithPlaceholderId(PlaceholderAppointment),
}

impl AppointmentPayload {
    #[must_use]
    pub fn request(&self) -> &AppointmentRequest {
        match self {
            Self::Standard(request) | Self::WithPlaceholderId(PlaceholderAppointment { request, .. }) => request,
        }
    }
}

/// The appointment-creation collaborator.
#[async_trait(?Send)]
pub trait AppointmentService {
    async fn create_appointment(&self, payload: &AppointmentPayload) -> Result<(), SourceError>;
}

/// Why a booking did not go through.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("please correct the highlighted fields")]
    Invalid(FieldErrors),
    #[error("the selected date and time does not exist in the local time zone")]
    InvalidTimestamp,
    #[error("the appointment time must be in the future")]
    NotInFuture,
    #[error("{message}")]
    Rejected { message: String, auth_required: bool },
}

impl SubmitError {
    /// Text for the error banner, with a sign-in hint for auth failures.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected { message, auth_required: true } => format!("{message}. {AUTH_HINT}"),
            other => other.to_string(),
        }
    }

    #[must_use]
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Invalid(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Confirmation shown after a successful booking.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookingReceipt {
    pub vehicle_id: i64,
    pub vehicle_name: String,
    /// Local `YYYY-MM-DD HH:MM` for display.
    pub scheduled_for: String,
    pub address: String,
    /// 1 for the standard payload, 2 when the alternate shape was needed.
    pub attempts: u8,
}

/// Combine the date and slot inputs in `tz`.
///
/// # Errors
///
/// Returns [`SubmitError::InvalidTimestamp`] when either input does not
/// parse or the wall-clock time does not exist in `tz`.
pub fn appointment_time<Tz: TimeZone>(form: &BookingForm, tz: &Tz) -> Result<DateTime<Tz>, SubmitError> {
    let date = booking::parse_date(&form.preferred_date).ok_or(SubmitError::InvalidTimestamp)?;
    let time = booking::parse_time_slot(&form.preferred_time).ok_or(SubmitError::InvalidTimestamp)?;
    tz.from_local_datetime(&NaiveDateTime::new(date, time))
        .earliest()
        .ok_or(SubmitError::InvalidTimestamp)
}

/// Address the appointment is held at: the chosen showroom or the home address.
#[must_use]
pub fn pickup_address(form: &BookingForm) -> String {
    match form.pickup_mode {
        PickupMode::Dealer => booking::find_dealer(form.dealer_id.trim())
            .map(|dealer| format!("{}, {}", dealer.name, dealer.address))
            .unwrap_or_default(),
        PickupMode::Home => form.address.trim().to_owned(),
    }
}

/// Build the standard request for a validated form.
#[must_use]
pub fn compose_request<Tz: TimeZone>(
    form: &BookingForm,
    vehicle: &Vehicle,
    user_id: i64,
    when: &DateTime<Tz>,
) -> AppointmentRequest {
    AppointmentRequest {
        appointment_date: when.with_timezone(&Utc).to_rfc3339_opts(SecondsFormat::Millis, true),
        status: AppointmentStatus::Pending,
        user_id,
        vehicle_id: vehicle.id,
        username: form.full_name.trim().to_owned(),
        vehicle_name: vehicle.display_title(),
        address: pickup_address(form),
    }
}

/// Whether a failure looks like the service rejecting the request shape.
#[must_use]
pub fn needs_alternate_shape(message: &str) -> bool {
    message.contains("400")
}

/// Whether a failure indicates the caller is not signed in.
#[must_use]
pub fn is_auth_failure(message: &str) -> bool {
    let lower = message.to_lowercase();
    lower.contains("401") || lower.contains("403") || lower.contains("unauthorized")
}

/// Validate, compose and send a booking.
///
/// `now` supplies both the current instant and the time zone the date and
/// slot inputs are interpreted in.
///
/// # Errors
///
/// See [`SubmitError`]; the collaborator is not called unless the form is
/// valid and the appointment lies strictly in the future.
pub async fn submit_booking<S, Tz>(
    service: &S,
    form: &BookingForm,
    vehicle: &Vehicle,
    user_id: i64,
    now: &DateTime<Tz>,
) -> Result<BookingReceipt, SubmitError>
where
    S: AppointmentService + ?Sized,
    Tz: TimeZone,
{
    let errors = booking::validate(form, now.date_naive());
    if !errors.is_empty() {
        return Err(SubmitError::Invalid(errors));
    }

    let when = appointment_time(form, &now.timezone())?;
    if when <= *now {
        return Err(SubmitError::NotInFuture);
    }

    let request = compose_request(form, vehicle, user_id, &when);
    let receipt = |attempts| BookingReceipt {
        vehicle_id: request.vehicle_id,
        vehicle_name: request.vehicle_name.clone(),
        scheduled_for: when.naive_local().format("%Y-%m-%d %H:%M").to_string(),
        address: request.address.clone(),
        attempts,
    };

    let first = service
        .create_appointment(&AppointmentPayload::Standard(request.clone()))
        .await;
    let error = match first {
        Ok(()) => return Ok(receipt(1)),
        Err(e) => e.to_string(),
    };
    if !needs_alternate_shape(&error) {
        return Err(rejected(error));
    }

    log::info!("appointment rejected ({error}); retrying with placeholder id");
    let alternate = AppointmentPayload::WithPlaceholderId(PlaceholderAppointment {
        appointment_id: PLACEHOLDER_APPOINTMENT_ID,
        request: request.clone(),
    });
    match service.create_appointment(&alternate).await {
        Ok(()) => Ok(receipt(2)),
        Err(e) => Err(rejected(e.to_string())),
    }
}

fn rejected(message: String) -> SubmitError {
    let auth_required = is_auth_failure(&message);
    SubmitError::Rejected { message, auth_required }
}
