//! `/api/*` forwarder to the upstream vehicle and appointment service.
//!
//! Only the headers the storefront relies on are passed through in either
//! direction. Upstream failures are answered in the service's own
//! `{ success, message }` shape so the browser surfaces them like any other
//! rejection.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, RawQuery, State};
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Request headers copied to the upstream call.
const FORWARDED_REQUEST_HEADERS: [HeaderName; 3] = [header::ACCEPT, header::AUTHORIZATION, header::CONTENT_TYPE];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Upstream(e) if e.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        };
        (status, Json(error_body(&self.to_string()))).into_response()
    }
}

/// `{ success: false, message }` body for proxy-side failures.
pub fn error_body(message: &str) -> serde_json::Value {
    serde_json::json!({ "success": false, "message": message })
}

/// Upstream URL for a proxied path and optional raw query string.
pub fn upstream_url(base: &str, path: &str, query: Option<&str>) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    match query.filter(|q| !q.is_empty()) {
        Some(query) => format!("{base}/{path}?{query}"),
        None => format!("{base}/{path}"),
    }
}

/// Subset of `headers` to send upstream.
pub fn forwarded_headers(headers: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in FORWARDED_REQUEST_HEADERS {
        if let Some(value) = headers.get(&name) {
            out.insert(name, value.clone());
        }
    }
    out
}

/// `ANY /api/{*path}`: replay the request against the upstream API.
pub async fn forward(
    State(state): State<AppState>,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let url = upstream_url(&state.upstream_api, &path, query.as_deref());
    tracing::debug!(%method, %url, "proxying api request");

    let mut request = state.http.request(method, &url).headers(forwarded_headers(&headers));
    if !body.is_empty() {
        request = request.body(body);
    }
    let upstream = request.send().await.map_err(|e| {
        tracing::warn!(error = %e, %url, "upstream api request failed");
        ProxyError::from(e)
    })?;

    let status = upstream.status();
    let content_type = upstream.headers().get(header::CONTENT_TYPE).cloned();
    let bytes = upstream.bytes().await?;

    let mut response = (status, bytes).into_response();
    if let Some(content_type) = content_type {
        response.headers_mut().insert(header::CONTENT_TYPE, content_type);
    }
    Ok(response)
}
