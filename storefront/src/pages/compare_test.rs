use catalog::{Origin, mock};

use super::*;

fn found(id: i64, error: Option<&str>) -> Fetched<Option<Vehicle>> {
    Fetched { value: mock::vehicle(id), origin: Origin::Static, error: error.map(str::to_owned) }
}

fn missing() -> Fetched<Option<Vehicle>> {
    Fetched { value: None, origin: Origin::Static, error: None }
}

#[test]
fn combine_pair_keeps_route_order() {
    let state = combine_pair(found(5, None), found(2, None));
    let pair = state.value().cloned().flatten().expect("pair");
    assert_eq!((pair.left.id, pair.right.id), (5, 2));
    assert!(state.error().is_none());
}

#[test]
fn combine_pair_missing_side_has_no_pair() {
    assert_eq!(combine_pair(found(1, None), missing()), LoadState::Loaded(None));
}

#[test]
fn combine_pair_joins_lookup_errors() {
    let state = combine_pair(found(1, Some("offline")), found(2, Some("timeout")));
    assert_eq!(state.error(), Some("offline; timeout"));
    assert!(state.value().cloned().flatten().is_some());
}
