use super::*;
use crate::source::Origin;

#[test]
fn load_state_default_is_idle() {
    let state: LoadState<Vec<u8>> = LoadState::default();
    assert_eq!(state, LoadState::Idle);
    assert!(state.value().is_none());
    assert!(!state.is_loading());
}

#[test]
fn loading_has_no_value() {
    let state: LoadState<u8> = LoadState::Loading;
    assert!(state.is_loading());
    assert!(state.value().is_none());
    assert!(state.error().is_none());
}

#[test]
fn error_state_still_exposes_fallback() {
    let state = LoadState::Error { message: "offline".to_owned(), fallback: 3 };
    assert_eq!(state.value(), Some(&3));
    assert_eq!(state.error(), Some("offline"));
}

#[test]
fn fetched_without_error_is_loaded_regardless_of_origin() {
    let remote = Fetched { value: 1, origin: Origin::Remote, error: None };
    let fallback = Fetched { value: 2, origin: Origin::Static, error: None };
    assert_eq!(LoadState::from(remote), LoadState::Loaded(1));
    assert_eq!(LoadState::from(fallback), LoadState::Loaded(2));
}

#[test]
fn fetched_with_error_is_error_with_fallback() {
    let fetched = Fetched { value: 2, origin: Origin::Static, error: Some("boom".to_owned()) };
    assert_eq!(LoadState::from(fetched), LoadState::Error { message: "boom".to_owned(), fallback: 2 });
}

#[test]
fn map_preserves_variant() {
    let state = LoadState::Error { message: "x".to_owned(), fallback: vec![1, 2, 3] };
    assert_eq!(state.map(|v| v.len()), LoadState::Error { message: "x".to_owned(), fallback: 3 });
    assert_eq!(LoadState::<u8>::Loading.map(|v| v + 1), LoadState::Loading);
}
