use std::cell::RefCell;
use std::collections::VecDeque;

use chrono::FixedOffset;
use futures::executor::block_on;

use super::*;
use crate::booking::Field;

/// Records every payload and answers from a scripted queue (default `Ok`).
#[derive(Default)]
struct ScriptedService {
    responses: RefCell<VecDeque<Result<(), SourceError>>>,
    sent: RefCell<Vec<serde_json::Value>>,
}

impl ScriptedService {
    fn answering(responses: Vec<Result<(), SourceError>>) -> Self {
        Self { responses: RefCell::new(responses.into()), sent: RefCell::default() }
    }

    fn calls(&self) -> usize {
        self.sent.borrow().len()
    }
}

#[async_trait(?Send)]
impl AppointmentService for ScriptedService {
    async fn create_appointment(&self, payload: &AppointmentPayload) -> Result<(), SourceError> {
        self.sent
            .borrow_mut()
            .push(serde_json::to_value(payload).expect("payload serializes"));
        self.responses.borrow_mut().pop_front().unwrap_or(Ok(()))
    }
}

fn hanoi() -> FixedOffset {
    FixedOffset::east_opt(7 * 3600).expect("offset")
}

fn now() -> DateTime<FixedOffset> {
    hanoi().with_ymd_and_hms(2026, 10, 19, 10, 30, 0).single().expect("now")
}

fn vehicle() -> Vehicle {
    serde_json::from_value(serde_json::json!({
        "id": 4, "model": "VinFast VF 7", "version": "Plus", "price": 999_000_000
    }))
    .expect("vehicle")
}

fn form() -> BookingForm {
    BookingForm {
        full_name: " Tran Thi B ".to_owned(),
        phone: "0901234567".to_owned(),
        email: "b@example.vn".to_owned(),
        id_number: "001099012345".to_owned(),
        preferred_date: "2026-10-20".to_owned(),
        preferred_time: "09:00".to_owned(),
        pickup_mode: PickupMode::Dealer,
        dealer_id: "hn-times-city".to_owned(),
        agreed: true,
        ..BookingForm::default()
    }
}

fn status(code: u16) -> SourceError {
    SourceError::Status { status: code, message: "rejected".to_owned() }
}

// =============================================================
// Payload composition
// =============================================================

#[test]
fn standard_payload_serializes_camel_case_fields() {
    let when = appointment_time(&form(), &hanoi()).expect("time");
    let payload = AppointmentPayload::Standard(compose_request(&form(), &vehicle(), 42, &when));
    assert_eq!(
        serde_json::to_value(&payload).expect("json"),
        serde_json::json!({
            "appointmentDate": "2026-10-20T02:00:00.000Z",
            "status": "PENDING",
            "userId": 42,
            "vehicleId": 4,
            "username": "Tran Thi B",
            "vehicleName": "VinFast VF 7 Plus",
            "address": "VinFast Times City, 458 Minh Khai, Hai Ba Trung, Ha Noi"
        })
    );
}

#[test]
fn alternate_payload_adds_placeholder_id() {
    let when = appointment_time(&form(), &hanoi()).expect("time");
    let request = compose_request(&form(), &vehicle(), 42, &when);
    let payload = AppointmentPayload::WithPlaceholderId(PlaceholderAppointment {
        appointment_id: PLACEHOLDER_APPOINTMENT_ID,
        request: request.clone(),
    });
    let json = serde_json::to_value(&payload).expect("json");
    assert_eq!(json["appointmentId"], 0);
    assert_eq!(json["vehicleId"], 4);
    assert_eq!(payload.request(), &request);
}

#[test]
fn home_pickup_uses_entered_address() {
    let mut form = form();
    form.pickup_mode = PickupMode::Home;
    form.address = "  12 Trang Tien, Ha Noi ".to_owned();
    assert_eq!(pickup_address(&form), "12 Trang Tien, Ha Noi");
}

#[test]
fn appointment_time_is_interpreted_in_given_zone() {
    let when = appointment_time(&form(), &Utc).expect("time");
    assert_eq!(when.to_rfc3339_opts(SecondsFormat::Millis, true), "2026-10-20T09:00:00.000Z");
}

#[test]
fn appointment_time_rejects_unparseable_inputs() {
    let mut form = form();
    form.preferred_time = "25:00".to_owned();
    assert_eq!(appointment_time(&form, &Utc), Err(SubmitError::InvalidTimestamp));
}

// =============================================================
// Failure classification
// =============================================================

#[test]
fn alternate_shape_only_for_400_messages() {
    assert!(needs_alternate_shape("request failed with status 400: Bad Request"));
    assert!(!needs_alternate_shape("request failed with status 500: boom"));
}

#[test]
fn auth_failures_are_detected() {
    assert!(is_auth_failure("request failed with status 401: expired"));
    assert!(is_auth_failure("Forbidden (403)"));
    assert!(is_auth_failure("Unauthorized"));
    assert!(!is_auth_failure("request failed: offline"));
}

#[test]
fn user_message_adds_sign_in_hint() {
    let error = SubmitError::Rejected { message: "Unauthorized".to_owned(), auth_required: true };
    assert_eq!(error.user_message(), "Unauthorized. Please sign in before booking a test drive.");
    let plain = SubmitError::Rejected { message: "Slot taken".to_owned(), auth_required: false };
    assert_eq!(plain.user_message(), "Slot taken");
}

// =============================================================
// submit_booking
// =============================================================

#[test]
fn successful_submission_sends_one_standard_payload() {
    let service = ScriptedService::default();
    let receipt = block_on(submit_booking(&service, &form(), &vehicle(), 42, &now())).expect("receipt");
    assert_eq!(service.calls(), 1);
    assert!(service.sent.borrow()[0].get("appointmentId").is_none());
    assert_eq!(receipt.attempts, 1);
    assert_eq!(receipt.scheduled_for, "2026-10-20 09:00");
    assert_eq!(receipt.vehicle_name, "VinFast VF 7 Plus");
}

#[test]
fn invalid_form_never_calls_service() {
    let service = ScriptedService::default();
    let mut form = form();
    form.dealer_id.clear();
    let error = block_on(submit_booking(&service, &form, &vehicle(), 42, &now())).expect_err("invalid");
    let fields: Vec<_> = error.field_errors().expect("field errors").keys().copied().collect();
    assert_eq!(fields, vec![Field::Dealer]);
    assert_eq!(service.calls(), 0);
}

#[test]
fn yesterday_is_a_field_error_and_not_submitted() {
    let service = ScriptedService::default();
    let mut form = form();
    form.preferred_date = "2026-10-18".to_owned();
    let error = block_on(submit_booking(&service, &form, &vehicle(), 42, &now())).expect_err("invalid");
    assert!(error.field_errors().expect("errors").contains_key(&Field::PreferredDate));
    assert_eq!(service.calls(), 0);
}

#[test]
fn earlier_slot_today_is_not_in_future() {
    let service = ScriptedService::default();
    let mut form = form();
    form.preferred_date = "2026-10-19".to_owned();
    form.preferred_time = "09:00".to_owned();
    let error = block_on(submit_booking(&service, &form, &vehicle(), 42, &now())).expect_err("past");
    assert_eq!(error, SubmitError::NotInFuture);
    assert_eq!(service.calls(), 0);
}

#[test]
fn later_slot_today_is_accepted() {
    let service = ScriptedService::default();
    let mut form = form();
    form.preferred_date = "2026-10-19".to_owned();
    form.preferred_time = "14:00".to_owned();
    assert!(block_on(submit_booking(&service, &form, &vehicle(), 42, &now())).is_ok());
}

#[test]
fn bad_request_retries_once_with_placeholder_id() {
    let service = ScriptedService::answering(vec![Err(status(400)), Ok(())]);
    let receipt = block_on(submit_booking(&service, &form(), &vehicle(), 42, &now())).expect("receipt");
    assert_eq!(receipt.attempts, 2);
    let sent = service.sent.borrow();
    assert_eq!(sent.len(), 2);
    assert!(sent[0].get("appointmentId").is_none());
    assert_eq!(sent[1]["appointmentId"], 0);
    assert_eq!(sent[0]["appointmentDate"], sent[1]["appointmentDate"]);
}

#[test]
fn retry_failure_is_reported_without_third_call() {
    let service = ScriptedService::answering(vec![Err(status(400)), Err(status(400))]);
    let error = block_on(submit_booking(&service, &form(), &vehicle(), 42, &now())).expect_err("rejected");
    assert_eq!(service.calls(), 2);
    assert_eq!(
        error,
        SubmitError::Rejected {
            message: "request failed with status 400: rejected".to_owned(),
            auth_required: false
        }
    );
}

#[test]
fn other_failures_are_not_retried() {
    let service = ScriptedService::answering(vec![Err(SourceError::Transport("offline".to_owned()))]);
    let error = block_on(submit_booking(&service, &form(), &vehicle(), 42, &now())).expect_err("rejected");
    assert_eq!(service.calls(), 1);
    assert_eq!(error.to_string(), "request failed: offline");
}

#[test]
fn unauthorized_failure_carries_auth_hint() {
    let service = ScriptedService::answering(vec![Err(status(401))]);
    let error = block_on(submit_booking(&service, &form(), &vehicle(), 0, &now())).expect_err("rejected");
    assert!(matches!(error, SubmitError::Rejected { auth_required: true, .. }));
    assert!(error.user_message().ends_with("Please sign in before booking a test drive."));
}
