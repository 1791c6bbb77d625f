use super::*;
use crate::vehicle::Vehicle;

// =============================================================
// URLs
// =============================================================

#[test]
fn urls_join_without_double_slash() {
    assert_eq!(vehicles_url("/api/"), "/api/vehicles");
    assert_eq!(vehicle_url("http://localhost:8080/api", 7), "http://localhost:8080/api/vehicles/7");
    assert_eq!(appointments_url("/api"), "/api/appointments");
}

// =============================================================
// decode_envelope
// =============================================================

#[test]
fn decode_envelope_returns_data() {
    let body = r#"{"success": true, "data": [{"id": 3, "model": "VinFast VF 8", "price": 1200000000}]}"#;
    let vehicles: Vec<Vehicle> = decode_envelope(body).expect("decode").expect("data");
    assert_eq!(vehicles.len(), 1);
    assert_eq!(vehicles[0].id, 3);
}

#[test]
fn decode_envelope_null_data_is_none() {
    let decoded: Option<Vehicle> = decode_envelope(r#"{"success": true, "data": null}"#).expect("decode");
    assert!(decoded.is_none());
}

#[test]
fn decode_envelope_without_data_field_is_none() {
    // `Vehicle` has no `Default`; the envelope must not require one.
    let decoded: Option<Vehicle> = decode_envelope(r#"{"success": true}"#).expect("decode");
    assert_eq!(decoded, None);
}

#[test]
fn decode_envelope_keeps_list_with_loosely_typed_numbers() {
    let body = r#"{"success": true, "data": [
        {"id": 1, "model": "VinFast VF 6", "price": 689000000, "chargingTime": "25 min"},
        {"id": 2, "model": "VinFast VF 7", "price": 850000000.0, "range": 450.0, "chargingTime": 30}
    ]}"#;
    let vehicles: Vec<Vehicle> = decode_envelope(body).expect("decode").expect("data");
    assert_eq!(vehicles.len(), 2);
    assert_eq!(vehicles[1].price, 850_000_000);
    assert_eq!(vehicles[1].range, Some(450));
    assert_eq!(vehicles[1].charging_time.as_deref(), Some("30"));
}

#[test]
fn decode_envelope_blank_body_is_bare_success() {
    let decoded: Option<serde_json::Value> = decode_envelope("  ").expect("decode");
    assert!(decoded.is_none());
}

#[test]
fn decode_envelope_failure_is_rejection() {
    let error = decode_envelope::<serde_json::Value>(r#"{"success": false, "message": "Slot taken"}"#)
        .expect_err("rejected");
    assert_eq!(error, SourceError::Rejected("Slot taken".to_owned()));
}

#[test]
fn decode_envelope_malformed_is_decode_error() {
    let error = decode_envelope::<serde_json::Value>("<html>").expect_err("decode");
    assert!(matches!(error, SourceError::Decode(_)));
}

// =============================================================
// status_error
// =============================================================

#[test]
fn status_error_prefers_service_message() {
    let error = status_error(400, "Bad Request", r#"{"success": false, "message": "appointmentId is required"}"#);
    assert_eq!(error.to_string(), "request failed with status 400: appointmentId is required");
}

#[test]
fn status_error_reads_error_field() {
    let error = status_error(401, "", r#"{"error": "Unauthorized"}"#);
    assert_eq!(error.to_string(), "request failed with status 401: Unauthorized");
}

#[test]
fn status_error_falls_back_to_status_text_then_body() {
    assert_eq!(
        status_error(502, "Bad Gateway", "upstream down").to_string(),
        "request failed with status 502: Bad Gateway"
    );
    assert_eq!(
        status_error(502, "", " upstream down ").to_string(),
        "request failed with status 502: upstream down"
    );
}
