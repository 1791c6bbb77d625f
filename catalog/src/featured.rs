//! Home-page teaser grid: which vehicles to feature and how to present them.

#[cfg(test)]
#[path = "featured_test.rs"]
mod featured_test;

use crate::model_code::ModelCode;
use crate::source::{Fetched, Origin, SourceResolver, VehicleSource};
use crate::vehicle::Vehicle;

/// Maximum number of teaser cards.
pub const FEATURED_LIMIT: usize = 3;

/// Lines promoted on the home page.
pub const FEATURED_LINES: [ModelCode; 3] = [ModelCode::Vf7, ModelCode::Vf8, ModelCode::Vf9];

pub const PLACEHOLDER_IMAGE: &str = "/images/vehicle-placeholder.png";

/// Vehicles belonging to a featured line, in collection order.
#[must_use]
pub fn select_featured(vehicles: &[Vehicle]) -> Vec<Vehicle> {
    vehicles
        .iter()
        .filter(|v| is_featured_model(&v.model))
        .take(FEATURED_LIMIT)
        .cloned()
        .collect()
}

#[must_use]
pub fn is_featured_model(model: &str) -> bool {
    FEATURED_LINES.iter().any(|code| code.matches(model))
}

/// Load the teaser grid. When nothing featured comes back the static catalog
/// is shown as-is, still capped at [`FEATURED_LIMIT`].
pub async fn load_featured<P, F>(resolver: &SourceResolver<P, F>) -> Fetched<Vec<Vehicle>>
where
    P: VehicleSource,
    F: VehicleSource,
{
    let fetched = resolver.vehicles().await;
    let featured = select_featured(&fetched.value);
    if !featured.is_empty() {
        return Fetched { value: featured, ..fetched };
    }
    let mut fallback = resolver.fallback_vehicles().await;
    fallback.truncate(FEATURED_LIMIT);
    Fetched { value: fallback, origin: Origin::Static, error: fetched.error }
}

fn featured_line(model: &str) -> Option<ModelCode> {
    FEATURED_LINES.into_iter().find(|code| code.matches(model))
}

#[must_use]
pub fn display_name_for(model: &str) -> String {
    match featured_line(model) {
        Some(code) => format!("VinFast {}", code.label()),
        None => model.trim().to_owned(),
    }
}

#[must_use]
pub fn description_for(model: &str) -> &'static str {
    match featured_line(model) {
        Some(ModelCode::Vf7) => "A coupe-styled C-SUV with a driver-focused cockpit and up to 450 km of range.",
        Some(ModelCode::Vf8) => "A mid-size D-SUV balancing family space, comfort and smart driver assistance.",
        Some(ModelCode::Vf9) => "The seven-seat flagship E-SUV with long range and a premium cabin.",
        _ => "A smart electric vehicle built for everyday driving.",
    }
}

#[must_use]
pub fn default_image_for(model: &str) -> &'static str {
    match featured_line(model) {
        Some(ModelCode::Vf7) => "/images/vf7-hero.png",
        Some(ModelCode::Vf8) => "/images/vf8-hero.png",
        Some(ModelCode::Vf9) => "/images/vf9-hero.png",
        _ => PLACEHOLDER_IMAGE,
    }
}
