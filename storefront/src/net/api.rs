//! REST transport for the vehicle and appointment services.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call fails with [`SourceError::Unavailable`];
//! pages load through `LocalResource`, so fetching only happens in the
//! browser after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures never reach the page as panics. The `load_*` helpers
//! run through a [`SourceResolver`] and always hand back something to
//! render, with the failure as banner text.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use catalog::featured;
use catalog::{AppointmentPayload, AppointmentService, LoadState, SourceError, SourceResolver, Vehicle, VehicleSource};

#[cfg(feature = "hydrate")]
use catalog::endpoint;

const DEFAULT_API_BASE: &str = "/api";

/// API base compiled in from `SHOWROOM_API_BASE`.
#[must_use]
pub fn api_base() -> &'static str {
    option_env!("SHOWROOM_API_BASE")
        .filter(|base| !base.trim().is_empty())
        .unwrap_or(DEFAULT_API_BASE)
}

/// HTTP-backed vehicle and appointment source.
#[derive(Clone, Debug)]
pub struct RemoteSource {
    base: String,
    bearer: Option<String>,
}

impl Default for RemoteSource {
    fn default() -> Self {
        Self::new(api_base())
    }
}

impl RemoteSource {
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into(), bearer: None }
    }

    /// Attach an `Authorization` header value for appointment creation.
    #[must_use]
    pub fn with_bearer(mut self, bearer: Option<String>) -> Self {
        self.bearer = bearer;
        self
    }

    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    #[must_use]
    pub fn bearer(&self) -> Option<&str> {
        self.bearer.as_deref()
    }
}

#[cfg(feature = "hydrate")]
fn transport(error: gloo_net::Error) -> SourceError {
    SourceError::Transport(error.to_string())
}

/// Body of a successful response, or the status error for any other.
#[cfg(feature = "hydrate")]
async fn read_body(response: &gloo_net::http::Response) -> Result<String, SourceError> {
    let body = response
        .text()
        .await
        .map_err(|e| SourceError::Decode(e.to_string()))?;
    if response.ok() {
        Ok(body)
    } else {
        Err(endpoint::status_error(response.status(), &response.status_text(), &body))
    }
}

#[async_trait(?Send)]
impl VehicleSource for RemoteSource {
    async fn list_vehicles(&self) -> Result<Vec<Vehicle>, SourceError> {
        #[cfg(feature = "hydrate")]
        {
            let response = gloo_net::http::Request::get(&endpoint::vehicles_url(&self.base))
                .send()
                .await
                .map_err(transport)?;
            let body = read_body(&response).await?;
            Ok(endpoint::decode_envelope(&body)?.unwrap_or_default())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(SourceError::Unavailable)
        }
    }

    async fn vehicle(&self, id: i64) -> Result<Option<Vehicle>, SourceError> {
        #[cfg(feature = "hydrate")]
        {
            let response = gloo_net::http::Request::get(&endpoint::vehicle_url(&self.base, id))
                .send()
                .await
                .map_err(transport)?;
            if response.status() == 404 {
                return Ok(None);
            }
            let body = read_body(&response).await?;
            endpoint::decode_envelope(&body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            Err(SourceError::Unavailable)
        }
    }
}

#[async_trait(?Send)]
impl AppointmentService for RemoteSource {
    async fn create_appointment(&self, payload: &AppointmentPayload) -> Result<(), SourceError> {
        #[cfg(feature = "hydrate")]
        {
            let mut builder = gloo_net::http::Request::post(&endpoint::appointments_url(&self.base));
            if let Some(bearer) = &self.bearer {
                builder = builder.header("Authorization", bearer);
            }
            let request = builder.json(payload).map_err(transport)?;
            let response = request.send().await.map_err(transport)?;
            let body = read_body(&response).await?;
            endpoint::decode_envelope::<serde_json::Value>(&body).map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
            Err(SourceError::Unavailable)
        }
    }
}

/// Remote source with the bundled catalog behind it.
#[must_use]
pub fn resolver() -> SourceResolver<RemoteSource> {
    SourceResolver::with_bundled(RemoteSource::default())
}

/// Full vehicle collection for the listing page.
pub async fn load_vehicles() -> LoadState<Vec<Vehicle>> {
    resolver().vehicles().await.into()
}

/// One vehicle for the detail and booking pages; `None` inside means the id
/// is unknown to both sources.
pub async fn load_vehicle(id: i64) -> LoadState<Option<Vehicle>> {
    resolver().vehicle(id).await.into()
}

/// Teaser cards for the home page.
pub async fn load_featured() -> LoadState<Vec<Vehicle>> {
    featured::load_featured(&resolver()).await.into()
}
