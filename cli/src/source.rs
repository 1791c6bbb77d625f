//! `reqwest` transport for the vehicle and appointment services.

#[cfg(test)]
#[path = "source_test.rs"]
mod source_test;

use std::time::Duration;

use async_trait::async_trait;
use catalog::endpoint;
use catalog::{AppointmentPayload, AppointmentService, SourceError, Vehicle, VehicleSource};
use reqwest::StatusCode;
use reqwest::header::AUTHORIZATION;

pub struct ReqwestSource {
    client: reqwest::Client,
    base: String,
    token: Option<String>,
}

impl ReqwestSource {
    /// Build a client for `base` (e.g. `http://127.0.0.1:3000/api`).
    ///
    /// # Errors
    ///
    /// Returns the `reqwest` error if the TLS backend cannot be initialised.
    pub fn new(base: &str, token: Option<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        let token = token.map(|t| t.trim().to_owned()).filter(|t| !t.is_empty());
        Ok(Self { client, base: base.trim_end_matches('/').to_owned(), token })
    }

    pub fn base(&self) -> &str {
        &self.base
    }
}

fn transport(error: reqwest::Error) -> SourceError {
    SourceError::Transport(error.to_string())
}

/// Body of a successful response, or the status error for any other.
async fn read_body(response: reqwest::Response) -> Result<String, SourceError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| SourceError::Decode(e.to_string()))?;
    if status.is_success() {
        Ok(body)
    } else {
        Err(endpoint::status_error(status.as_u16(), status.canonical_reason().unwrap_or_default(), &body))
    }
}

#[async_trait(?Send)]
impl VehicleSource for ReqwestSource {
    async fn list_vehicles(&self) -> Result<Vec<Vehicle>, SourceError> {
        let url = endpoint::vehicles_url(&self.base);
        tracing::debug!(%url, "listing vehicles");
        let response = self.client.get(url).send().await.map_err(transport)?;
        let body = read_body(response).await?;
        Ok(endpoint::decode_envelope(&body)?.unwrap_or_default())
    }

    async fn vehicle(&self, id: i64) -> Result<Option<Vehicle>, SourceError> {
        let url = endpoint::vehicle_url(&self.base, id);
        tracing::debug!(%url, "fetching vehicle");
        let response = self.client.get(url).send().await.map_err(transport)?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let body = read_body(response).await?;
        endpoint::decode_envelope(&body)
    }
}

#[async_trait(?Send)]
impl AppointmentService for ReqwestSource {
    async fn create_appointment(&self, payload: &AppointmentPayload) -> Result<(), SourceError> {
        let url = endpoint::appointments_url(&self.base);
        tracing::debug!(%url, vehicle_id = payload.request().vehicle_id, "creating appointment");
        let mut request = self.client.post(url).json(payload);
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        let response = request.send().await.map_err(transport)?;
        let body = read_body(response).await?;
        endpoint::decode_envelope::<serde_json::Value>(&body).map(|_| ())
    }
}
