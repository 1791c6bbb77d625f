//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the upstream HTTP client; the client pools connections and is
//! cheap to clone.

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    /// Upstream API base, without a trailing slash.
    pub upstream_api: String,
}

impl AppState {
    /// # Errors
    ///
    /// Returns the `reqwest` error if the client cannot be built.
    pub fn new(config: &ServerConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(config.upstream_timeout).build()?;
        Ok(Self { http, upstream_api: config.upstream_api.clone() })
    }
}
