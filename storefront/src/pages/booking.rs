//! Test-drive booking page at `/booking?vehicleId=<id>`.
//!
//! DESIGN
//! ======
//! The form is one `RwSignal<BookingForm>`; inputs write into it and the
//! submit handler snapshots it. Validation runs on submit, not per
//! keystroke. `BookingPhase::begin_submit` is the in-flight guard: a second
//! submit while `Submitting` is dropped before any request is made.

#[cfg(test)]
#[path = "booking_test.rs"]
mod booking_test;

use catalog::appointment::submit_booking;
use catalog::booking::{DEALERS, TIME_SLOTS, validate};
use catalog::{BookingForm, BookingPhase, BookingReceipt, Field, FieldErrors, LoadState, PickupMode, Vehicle, format_price};
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::field_error::FieldError;
use crate::components::notice_banner::NoticeBanner;
use crate::net::api::RemoteSource;
use crate::pages::not_found::VehicleNotFound;
use crate::state::session::SessionState;
use crate::util::clock;

#[must_use]
pub fn booking_path(vehicle_id: i64) -> String {
    format!("/booking?vehicleId={vehicle_id}")
}

/// Parse a vehicle id from a route or query value.
#[must_use]
pub fn parse_vehicle_id(raw: Option<&str>) -> Option<i64> {
    raw?.trim().parse::<i64>().ok().filter(|id| *id > 0)
}

#[must_use]
pub fn submit_label(phase: &BookingPhase) -> &'static str {
    if phase.is_submitting() { "Booking..." } else { "Book test drive" }
}

/// Banner text for a failed attempt.
#[must_use]
pub fn failure_message(phase: &BookingPhase) -> Option<String> {
    match phase {
        BookingPhase::Failed(message) => Some(message.clone()),
        _ => None,
    }
}

/// Booking page.
#[component]
pub fn BookingPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let query = use_query_map();

    let vehicle = RwSignal::new(LoadState::<Option<Vehicle>>::Idle);
    let form = RwSignal::new(BookingForm::default());
    let errors = RwSignal::new(FieldErrors::new());
    let phase = RwSignal::new(BookingPhase::Editing);
    let receipt = RwSignal::new(None::<BookingReceipt>);

    let vehicle_id = move || query.with(|q| parse_vehicle_id(q.get("vehicleId").as_deref()));

    // Re-fetch whenever the query id changes.
    Effect::new(move || match vehicle_id() {
        None => vehicle.set(LoadState::Loaded(None)),
        Some(id) => {
            vehicle.set(LoadState::Loading);
            leptos::task::spawn_local(async move {
                vehicle.set(crate::net::api::load_vehicle(id).await);
            });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(target) = vehicle.with_untracked(|s| s.value().cloned().flatten()) else {
            return;
        };
        let snapshot = form.get_untracked();
        let found = validate(&snapshot, clock::today());
        let valid = found.is_empty();
        errors.set(found);
        if !valid {
            return;
        }
        if !phase.try_update(BookingPhase::begin_submit).unwrap_or(false) {
            return;
        }

        let session = session.get_untracked().session;
        leptos::task::spawn_local(async move {
            let service = RemoteSource::default().with_bearer(session.bearer());
            match submit_booking(&service, &snapshot, &target, session.user_id(), &clock::now()).await {
                Ok(done) => {
                    receipt.set(Some(done));
                    phase.set(BookingPhase::Confirmed);
                }
                Err(e) => {
                    if let Some(fields) = e.field_errors() {
                        errors.set(fields.clone());
                    }
                    phase.set(BookingPhase::Failed(e.user_message()));
                }
            }
        });
    };

    let load_error = Signal::derive(move || vehicle.with(|s| s.error().map(str::to_owned)));
    let submit_error = Signal::derive(move || phase.with(failure_message));

    view! {
        <div class="booking-page">
            <NoticeBanner message=load_error/>
            {move || {
                if let Some(done) = receipt.get() {
                    return render_receipt(done).into_any();
                }
                match vehicle.get() {
                    LoadState::Idle | LoadState::Loading => view! { <p>"Loading vehicle..."</p> }.into_any(),
                    other => match other.value().cloned().flatten() {
                        None => view! { <VehicleNotFound message="Choose a vehicle to book a test drive."/> }.into_any(),
                        Some(target) => view! {
                            <section class="booking-page__vehicle">
                                <h1>{format!("Book a test drive: {}", target.display_title())}</h1>
                                <p>{format_price(target.price)}</p>
                            </section>
                            <NoticeBanner message=submit_error tone="error"/>
                            <form class="booking-form" on:submit=on_submit novalidate=true>
                                {render_fields(form, errors)}
                                <button class="btn btn--primary" type="submit" disabled=move || phase.with(BookingPhase::is_submitting)>
                                    {move || phase.with(submit_label)}
                                </button>
                            </form>
                        }
                        .into_any(),
                    },
                }
            }}
        </div>
    }
}

fn text_field(
    form: RwSignal<BookingForm>,
    errors: RwSignal<FieldErrors>,
    field: Field,
    label: &'static str,
    input_type: &'static str,
    read: fn(&BookingForm) -> String,
    write: fn(&mut BookingForm, String),
) -> impl IntoView {
    let id = field.key();
    view! {
        <div class="form-field">
            <label for=id>{label}</label>
            <input
                id=id
                name=id
                type=input_type
                prop:value=move || form.with(read)
                on:input=move |ev| form.update(|f| write(f, event_target_value(&ev)))
            />
            <FieldError field errors/>
        </div>
    }
}

fn render_fields(form: RwSignal<BookingForm>, errors: RwSignal<FieldErrors>) -> impl IntoView {
    // The earliest date depends on the browser's time zone, so the server
    // renders no `min` and the attribute is filled in after hydration.
    // `validate` enforces the same floor on submit.
    let min_date = RwSignal::new(None::<String>);
    Effect::new(move || min_date.set(Some(clock::today_input_value())));

    let is_home = move || form.with(|f| f.pickup_mode == PickupMode::Home);
    let set_mode = move |mode: PickupMode| form.update(|f| f.pickup_mode = mode);

    view! {
        {text_field(form, errors, Field::FullName, "Full name", "text", |f| f.full_name.clone(), |f, v| f.full_name = v)}
        {text_field(form, errors, Field::Phone, "Phone number", "tel", |f| f.phone.clone(), |f, v| f.phone = v)}
        {text_field(form, errors, Field::Email, "Email", "email", |f| f.email.clone(), |f, v| f.email = v)}
        {text_field(form, errors, Field::IdNumber, "ID card number", "text", |f| f.id_number.clone(), |f, v| f.id_number = v)}

        <div class="form-field">
            <label for="preferredDate">"Preferred date"</label>
            <input
                id="preferredDate"
                type="date"
                min=move || min_date.get()
                prop:value=move || form.with(|f| f.preferred_date.clone())
                on:input=move |ev| form.update(|f| f.preferred_date = event_target_value(&ev))
            />
            <FieldError field=Field::PreferredDate errors/>
        </div>

        <div class="form-field">
            <label for="preferredTime">"Preferred time"</label>
            <select
                id="preferredTime"
                prop:value=move || form.with(|f| f.preferred_time.clone())
                on:change=move |ev| form.update(|f| f.preferred_time = event_target_value(&ev))
            >
                <option value="">"Choose a time"</option>
                {TIME_SLOTS.iter().map(|slot| view! { <option value=*slot>{*slot}</option> }).collect_view()}
            </select>
            <FieldError field=Field::PreferredTime errors/>
        </div>

        <fieldset class="form-field form-field--pickup">
            <legend>"Where should the test drive start?"</legend>
            <label>
                <input
                    type="radio"
                    name="pickupMode"
                    value=PickupMode::Dealer.key()
                    prop:checked=move || !is_home()
                    on:change=move |_| set_mode(PickupMode::Dealer)
                />
                "At a showroom"
            </label>
            <label>
                <input
                    type="radio"
                    name="pickupMode"
                    value=PickupMode::Home.key()
                    prop:checked=is_home
                    on:change=move |_| set_mode(PickupMode::Home)
                />
                "At my address"
            </label>
        </fieldset>

        <Show
            when=is_home
            fallback=move || view! {
                <div class="form-field">
                    <label for="dealer">"Showroom"</label>
                    <select
                        id="dealer"
                        prop:value=move || form.with(|f| f.dealer_id.clone())
                        on:change=move |ev| form.update(|f| f.dealer_id = event_target_value(&ev))
                    >
                        <option value="">"Choose a showroom"</option>
                        {DEALERS
                            .iter()
                            .map(|dealer| view! { <option value=dealer.id>{format!("{} - {}", dealer.name, dealer.address)}</option> })
                            .collect_view()}
                    </select>
                    <FieldError field=Field::Dealer errors/>
                </div>
            }
        >
            {text_field(form, errors, Field::Address, "Pickup address", "text", |f| f.address.clone(), |f, v| f.address = v)}
        </Show>

        <div class="form-field">
            <label for="notes">"Notes"</label>
            <textarea
                id="notes"
                prop:value=move || form.with(|f| f.notes.clone())
                on:input=move |ev| form.update(|f| f.notes = event_target_value(&ev))
            ></textarea>
        </div>

        <div class="form-field form-field--agreement">
            <label>
                <input
                    type="checkbox"
                    prop:checked=move || form.with(|f| f.agreed)
                    on:change=move |ev| form.update(|f| f.agreed = event_target_checked(&ev))
                />
                "I agree to the test-drive terms and the processing of my personal data."
            </label>
            <FieldError field=Field::Agreement errors/>
        </div>
    }
}

fn render_receipt(receipt: BookingReceipt) -> impl IntoView {
    let detail = booking_detail_path(receipt.vehicle_id);
    view! {
        <section class="booking-confirmation">
            <h1>"Your test drive is booked"</h1>
            <p>{format!("{} on {}", receipt.vehicle_name, receipt.scheduled_for)}</p>
            <p>{receipt.address}</p>
            <p>"Our showroom team will call you to confirm the appointment."</p>
            <a class="btn" href=detail>"Back to the vehicle"</a>
        </section>
    }
}

fn booking_detail_path(vehicle_id: i64) -> String {
    format!("/vehicles/{vehicle_id}")
}
