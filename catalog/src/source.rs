//! Vehicle data sources and the fallback policy between them.
//!
//! DESIGN
//! ======
//! Pages never branch on "did the API work?" themselves. They ask a
//! [`SourceResolver`], which tries the primary (remote) source and falls back
//! to the secondary (static catalog) one, reporting where the data came from
//! and what went wrong. Transports implement [`VehicleSource`]; the traits use
//! `?Send` futures so browser fetches qualify.

#[cfg(test)]
#[path = "source_test.rs"]
mod source_test;

use async_trait::async_trait;

use crate::mock;
use crate::vehicle::Vehicle;

/// Failure talking to a vehicle or appointment collaborator.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),
    /// The service answered with a non-success HTTP status.
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    /// The response body did not match the expected shape.
    #[error("invalid response: {0}")]
    Decode(String),
    /// The service answered `success: false`.
    #[error("{0}")]
    Rejected(String),
    /// No transport exists in this build (e.g. server-side rendering).
    #[error("vehicle service unavailable")]
    Unavailable,
}

/// Something that can list vehicles and look one up.
#[async_trait(?Send)]
pub trait VehicleSource {
    async fn list_vehicles(&self) -> Result<Vec<Vehicle>, SourceError>;

    /// Look up a single vehicle. `Ok(None)` means the source answered but
    /// does not know the id.
    async fn vehicle(&self, id: i64) -> Result<Option<Vehicle>, SourceError> {
        let vehicles = self.list_vehicles().await?;
        Ok(vehicles.into_iter().find(|v| v.id == id))
    }
}

/// In-memory source over a fixed collection.
#[derive(Clone, Debug, Default)]
pub struct StaticSource {
    vehicles: Vec<Vehicle>,
}

impl StaticSource {
    #[must_use]
    pub fn new(vehicles: Vec<Vehicle>) -> Self {
        Self { vehicles }
    }

    /// The bundled showroom catalog.
    #[must_use]
    pub fn bundled() -> Self {
        Self::new(mock::vehicles())
    }
}

#[async_trait(?Send)]
impl VehicleSource for StaticSource {
    async fn list_vehicles(&self) -> Result<Vec<Vehicle>, SourceError> {
        Ok(self.vehicles.clone())
    }

    async fn vehicle(&self, id: i64) -> Result<Option<Vehicle>, SourceError> {
        Ok(self.vehicles.iter().find(|v| v.id == id).cloned())
    }
}

/// Which source produced a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    Remote,
    Static,
}

/// A resolved value plus provenance and the (non-fatal) primary error.
#[derive(Clone, Debug, PartialEq)]
pub struct Fetched<T> {
    pub value: T,
    pub origin: Origin,
    pub error: Option<String>,
}

/// Primary source with a fallback.
pub struct SourceResolver<P, F = StaticSource> {
    primary: P,
    fallback: F,
}

impl<P> SourceResolver<P> {
    /// Fall back to the bundled catalog.
    #[must_use]
    pub fn with_bundled(primary: P) -> Self {
        Self::new(primary, StaticSource::bundled())
    }
}

impl<P, F> SourceResolver<P, F> {
    #[must_use]
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }

    #[must_use]
    pub fn primary(&self) -> &P {
        &self.primary
    }
}

impl<P, F> SourceResolver<P, F>
where
    P: VehicleSource,
    F: VehicleSource,
{
    /// Full collection: primary data when it is non-empty, otherwise the
    /// fallback's. An empty primary answer is not an error.
    pub async fn vehicles(&self) -> Fetched<Vec<Vehicle>> {
        match self.primary.list_vehicles().await {
            Ok(vehicles) if !vehicles.is_empty() => {
                Fetched { value: vehicles, origin: Origin::Remote, error: None }
            }
            Ok(_) => {
                log::info!("vehicle service returned no vehicles; using static catalog");
                self.fallback_list(None).await
            }
            Err(e) => {
                log::warn!("vehicle listing failed, using static catalog: {e}");
                self.fallback_list(Some(e.to_string())).await
            }
        }
    }

    /// A single vehicle: primary hit wins, anything else is looked up in the
    /// fallback. `value: None` after both is the legitimate not-found state.
    pub async fn vehicle(&self, id: i64) -> Fetched<Option<Vehicle>> {
        let error = match self.primary.vehicle(id).await {
            Ok(Some(vehicle)) => {
                return Fetched { value: Some(vehicle), origin: Origin::Remote, error: None };
            }
            Ok(None) => None,
            Err(e) => {
                log::warn!("vehicle {id} lookup failed, trying static catalog: {e}");
                Some(e.to_string())
            }
        };
        match self.fallback.vehicle(id).await {
            Ok(value) => Fetched { value, origin: Origin::Static, error },
            Err(e) => Fetched { value: None, origin: Origin::Static, error: Some(join_errors(error, &e)) },
        }
    }

    /// The fallback collection on its own.
    pub async fn fallback_vehicles(&self) -> Vec<Vehicle> {
        self.fallback.list_vehicles().await.unwrap_or_else(|e| {
            log::warn!("static catalog unavailable: {e}");
            Vec::new()
        })
    }

    async fn fallback_list(&self, error: Option<String>) -> Fetched<Vec<Vehicle>> {
        match self.fallback.list_vehicles().await {
            Ok(value) => Fetched { value, origin: Origin::Static, error },
            Err(e) => Fetched { value: Vec::new(), origin: Origin::Static, error: Some(join_errors(error, &e)) },
        }
    }
}

fn join_errors(primary: Option<String>, fallback: &SourceError) -> String {
    match primary {
        Some(primary) => format!("{primary}; fallback: {fallback}"),
        None => fallback.to_string(),
    }
}
