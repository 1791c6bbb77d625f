use super::*;
use crate::model_code::ModelCode;

fn vehicle(id: i64, model: &str) -> Vehicle {
    serde_json::from_value(serde_json::json!({ "id": id, "model": model, "price": 1 })).expect("vehicle")
}

fn listing() -> VehicleListing {
    VehicleListing::new(vec![
        vehicle(1, "VinFast VF 6"),
        vehicle(2, "VinFast VF 7"),
        vehicle(3, "VinFast VF 8"),
    ])
}

fn displayed_ids(listing: &VehicleListing) -> Vec<i64> {
    listing.displayed().iter().map(|v| v.id).collect()
}

#[test]
fn new_listing_displays_everything() {
    let listing = listing();
    assert_eq!(displayed_ids(&listing), vec![1, 2, 3]);
    assert!(listing.filter().is_all());
}

#[test]
fn apply_filter_narrows_displayed() {
    let mut listing = listing();
    listing.apply_filter(FilterKey::Model(ModelCode::Vf8));
    assert_eq!(displayed_ids(&listing), vec![3]);
    assert_eq!(listing.vehicles().len(), 3);
}

#[test]
fn apply_all_displays_full_collection() {
    let mut listing = listing();
    listing.apply_filter(FilterKey::Model(ModelCode::Vf8));
    listing.apply_filter(FilterKey::All);
    assert_eq!(displayed_ids(&listing), vec![1, 2, 3]);
}

#[test]
fn replace_collection_keeps_filter() {
    let mut listing = listing();
    listing.apply_filter(FilterKey::Model(ModelCode::Vf7));
    listing.replace_collection(vec![vehicle(10, "VF 7 Plus"), vehicle(11, "VF 9 Eco")]);
    assert_eq!(displayed_ids(&listing), vec![10]);
}

#[test]
fn reset_filters_keeps_selection() {
    let mut listing = listing();
    let first = listing.vehicles()[0].clone();
    listing.toggle_selection(&first);
    listing.apply_filter(FilterKey::Model(ModelCode::Vf7));
    listing.reset_filters();
    assert_eq!(displayed_ids(&listing), vec![1, 2, 3]);
    assert!(listing.selection().contains(1));
}

#[test]
fn comparison_requires_exactly_two() {
    let mut listing = listing();
    let all = listing.vehicles().to_vec();
    assert!(listing.comparison().is_none());
    listing.toggle_selection(&all[0]);
    assert!(listing.comparison().is_none());
    listing.toggle_selection(&all[2]);
    let pair = listing.comparison().expect("pair");
    assert_eq!((pair.left.id, pair.right.id), (1, 3));
    assert_eq!(listing.toggle_selection(&all[1]), SelectionChange::Ignored);
}
