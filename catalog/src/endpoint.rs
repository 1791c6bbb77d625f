//! URL layout and response decoding shared by the HTTP transports.
//!
//! The browser (`gloo-net`) and CLI (`reqwest`) sources differ only in how
//! bytes move; both build URLs and interpret bodies through this module.

#[cfg(test)]
#[path = "endpoint_test.rs"]
mod endpoint_test;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::source::SourceError;
use crate::vehicle::ApiEnvelope;

fn trimmed(base: &str) -> &str {
    base.trim_end_matches('/')
}

#[must_use]
pub fn vehicles_url(base: &str) -> String {
    format!("{}/vehicles", trimmed(base))
}

#[must_use]
pub fn vehicle_url(base: &str, id: i64) -> String {
    format!("{}/vehicles/{id}", trimmed(base))
}

#[must_use]
pub fn appointments_url(base: &str) -> String {
    format!("{}/appointments", trimmed(base))
}

/// Decode a `{ success, data, message }` body.
///
/// A blank body counts as a bare success, which is what some deployments
/// answer to `POST /appointments`.
///
/// # Errors
///
/// [`SourceError::Decode`] for malformed JSON, [`SourceError::Rejected`]
/// for `success: false`.
pub fn decode_envelope<T: DeserializeOwned>(body: &str) -> Result<Option<T>, SourceError> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    let envelope: ApiEnvelope<T> =
        serde_json::from_str(body).map_err(|e| SourceError::Decode(e.to_string()))?;
    envelope.into_data()
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Turn a non-success response into a [`SourceError::Status`].
///
/// Prefers the service's own `message`/`error` field, then the status text,
/// then the raw body.
#[must_use]
pub fn status_error(status: u16, status_text: &str, body: &str) -> SourceError {
    let from_json = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message.or(b.error))
        .filter(|m| !m.trim().is_empty());
    let message = from_json
        .or_else(|| Some(status_text.trim().to_owned()).filter(|t| !t.is_empty()))
        .unwrap_or_else(|| body.trim().to_owned());
    SourceError::Status { status, message }
}
