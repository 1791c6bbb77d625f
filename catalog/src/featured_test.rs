use async_trait::async_trait;
use futures::executor::block_on;

use super::*;
use crate::source::{SourceError, StaticSource};

fn vehicle(id: i64, model: &str) -> Vehicle {
    serde_json::from_value(serde_json::json!({ "id": id, "model": model, "price": 1 })).expect("vehicle")
}

struct Listing(Result<Vec<Vehicle>, SourceError>);

#[async_trait(?Send)]
impl VehicleSource for Listing {
    async fn list_vehicles(&self) -> Result<Vec<Vehicle>, SourceError> {
        self.0.clone()
    }
}

fn ids(list: &[Vehicle]) -> Vec<i64> {
    list.iter().map(|v| v.id).collect()
}

// =============================================================
// select_featured
// =============================================================

#[test]
fn select_featured_keeps_vf7_vf8_vf9_only() {
    let list = vec![
        vehicle(1, "VinFast VF 6"),
        vehicle(2, "VF7 Plus"),
        vehicle(3, "vinfast vf8"),
        vehicle(4, "VinFast VF 9"),
    ];
    assert_eq!(ids(&select_featured(&list)), vec![2, 3, 4]);
}

#[test]
fn select_featured_caps_at_three() {
    let list: Vec<_> = (1..=6).map(|id| vehicle(id, "VinFast VF 8")).collect();
    assert_eq!(select_featured(&list).len(), FEATURED_LIMIT);
}

// =============================================================
// load_featured
// =============================================================

#[test]
fn load_featured_filters_remote_collection() {
    let remote = Listing(Ok(vec![
        vehicle(1, "VinFast VF 6"),
        vehicle(2, "VinFast VF 7"),
        vehicle(3, "VinFast VF 9"),
        vehicle(4, "VinFast VF 8"),
        vehicle(5, "VinFast VF 8"),
    ]));
    let resolver = SourceResolver::new(remote, StaticSource::default());
    let fetched = block_on(load_featured(&resolver));
    assert_eq!(fetched.origin, Origin::Remote);
    assert_eq!(ids(&fetched.value), vec![2, 3, 4]);
}

#[test]
fn load_featured_without_featured_lines_uses_static_catalog() {
    let remote = Listing(Ok(vec![vehicle(1, "VinFast VF 6"), vehicle(2, "VinFast VF 5")]));
    let fallback = StaticSource::new(vec![
        vehicle(10, "VinFast VF 6"),
        vehicle(11, "VinFast VF 3"),
        vehicle(12, "VinFast VF 7"),
        vehicle(13, "VinFast VF 8"),
    ]);
    let resolver = SourceResolver::new(remote, fallback);
    let fetched = block_on(load_featured(&resolver));
    assert_eq!(fetched.origin, Origin::Static);
    assert_eq!(ids(&fetched.value), vec![10, 11, 12]);
}

#[test]
fn load_featured_after_remote_failure_keeps_error() {
    let resolver = SourceResolver::with_bundled(Listing(Err(SourceError::Unavailable)));
    let fetched = block_on(load_featured(&resolver));
    assert!(fetched.value.len() <= FEATURED_LIMIT);
    assert!(!fetched.value.is_empty());
    assert!(fetched.value.iter().all(|v| is_featured_model(&v.model)));
    assert_eq!(fetched.error.as_deref(), Some("vehicle service unavailable"));
}

#[test]
fn load_featured_never_exceeds_limit() {
    let remote = Listing(Ok((1..=10).map(|id| vehicle(id, "VinFast VF 9")).collect()));
    let resolver = SourceResolver::with_bundled(remote);
    assert_eq!(block_on(load_featured(&resolver)).value.len(), FEATURED_LIMIT);
}

// =============================================================
// Presentation derivations
// =============================================================

#[test]
fn display_name_for_known_lines() {
    assert_eq!(display_name_for("vf7 plus"), "VinFast VF 7");
    assert_eq!(display_name_for("VinFast VF 8 Eco"), "VinFast VF 8");
    assert_eq!(display_name_for("VF9"), "VinFast VF 9");
}

#[test]
fn display_name_for_unknown_line_is_model() {
    assert_eq!(display_name_for(" VinFast VF 6 "), "VinFast VF 6");
}

#[test]
fn description_for_falls_back_to_generic_copy() {
    assert!(description_for("VF 9").contains("seven-seat"));
    assert_eq!(description_for("VF e34"), "A smart electric vehicle built for everyday driving.");
}

#[test]
fn default_image_for_each_line_and_fallback() {
    assert_eq!(default_image_for("VF 7"), "/images/vf7-hero.png");
    assert_eq!(default_image_for("VF8"), "/images/vf8-hero.png");
    assert_eq!(default_image_for("VinFast VF 9"), "/images/vf9-hero.png");
    assert_eq!(default_image_for("VF 6"), PLACEHOLDER_IMAGE);
}
