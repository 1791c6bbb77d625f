use super::*;

fn vehicle(id: i64) -> Vehicle {
    serde_json::from_value(serde_json::json!({ "id": id, "model": format!("VinFast VF {id}"), "price": 1 }))
        .expect("vehicle")
}

#[test]
fn selection_default_is_empty_and_not_ready() {
    let set = SelectionSet::default();
    assert!(set.is_empty());
    assert!(!set.is_ready());
    assert!(set.pair().is_none());
}

#[test]
fn toggle_adds_up_to_two_in_order() {
    let mut set = SelectionSet::default();
    assert_eq!(set.toggle(&vehicle(6)), SelectionChange::Added);
    assert!(!set.is_ready());
    assert_eq!(set.toggle(&vehicle(8)), SelectionChange::Added);
    assert!(set.is_ready());
    let (left, right) = set.pair().expect("pair");
    assert_eq!((left.id, right.id), (6, 8));
}

#[test]
fn toggle_present_vehicle_removes_it() {
    let mut set = SelectionSet::default();
    set.toggle(&vehicle(6));
    set.toggle(&vehicle(7));
    assert_eq!(set.toggle(&vehicle(6)), SelectionChange::Removed);
    assert_eq!(set.len(), 1);
    assert!(!set.contains(6));
    assert!(set.contains(7));
}

#[test]
fn toggle_absent_vehicle_when_full_is_ignored() {
    let mut set = SelectionSet::default();
    set.toggle(&vehicle(6));
    set.toggle(&vehicle(7));
    let before = set.clone();
    assert_eq!(set.toggle(&vehicle(9)), SelectionChange::Ignored);
    assert_eq!(set, before);
    assert!(set.is_saturated());
}

#[test]
fn selection_never_exceeds_two() {
    let mut set = SelectionSet::default();
    for id in [1, 2, 3, 1, 4, 2, 5, 6, 3, 3] {
        set.toggle(&vehicle(id));
        assert!(set.len() <= MAX_SELECTION);
    }
}

#[test]
fn uniqueness_is_by_id() {
    let mut set = SelectionSet::default();
    let mut renamed = vehicle(6);
    set.toggle(&vehicle(6));
    renamed.model = "Different name".to_owned();
    assert_eq!(set.toggle(&renamed), SelectionChange::Removed);
    assert!(set.is_empty());
}
