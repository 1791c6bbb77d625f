//! Vehicle detail page at `/vehicles/:id`.

use catalog::featured::default_image_for;
use catalog::{LoadState, Vehicle, format_price};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::notice_banner::NoticeBanner;
use crate::pages::booking::{booking_path, parse_vehicle_id};
use crate::pages::not_found::VehicleNotFound;

#[component]
pub fn VehicleDetailPage() -> impl IntoView {
    let params = use_params_map();
    let detail = RwSignal::new(LoadState::<Option<Vehicle>>::Idle);

    let id = move || params.with(|p| parse_vehicle_id(p.get("id").as_deref()));

    // Re-fetch whenever the route id changes.
    Effect::new(move || match id() {
        None => detail.set(LoadState::Loaded(None)),
        Some(id) => {
            detail.set(LoadState::Loading);
            leptos::task::spawn_local(async move {
                detail.set(crate::net::api::load_vehicle(id).await);
            });
        }
    });

    let error = Signal::derive(move || detail.with(|s| s.error().map(str::to_owned)));

    view! {
        <div class="vehicle-detail-page">
            <NoticeBanner message=error/>
            {move || match detail.get() {
                LoadState::Idle | LoadState::Loading => view! { <p>"Loading vehicle..."</p> }.into_any(),
                other => match other.value().cloned().flatten() {
                    Some(vehicle) => render_vehicle(vehicle).into_any(),
                    None => view! { <VehicleNotFound/> }.into_any(),
                },
            }}
        </div>
    }
}

fn spec_line(label: &'static str, value: Option<String>) -> impl IntoView {
    value.map(|value| {
        view! {
            <div class="vehicle-detail__spec">
                <dt>{label}</dt>
                <dd>{value}</dd>
            </div>
        }
    })
}

fn render_vehicle(vehicle: Vehicle) -> impl IntoView {
    let title = vehicle.display_title();
    let image = vehicle
        .primary_image()
        .map_or_else(|| default_image_for(&vehicle.model).to_owned(), str::to_owned);
    let price = format_price(vehicle.price);
    let booking = booking_path(vehicle.id);
    let color = Some(vehicle.color.clone()).filter(|c| !c.trim().is_empty());
    let range = vehicle.range.map(|km| format!("{km} km"));
    let top_speed = vehicle.max_speed.map(|s| format!("{s} km/h"));
    let stock = vehicle.stock.map(|n| n.to_string());

    view! {
        <article class="vehicle-detail">
            <img class="vehicle-detail__image" src=image alt=title.clone()/>
            <div class="vehicle-detail__body">
                <h1>{title}</h1>
                <p class="vehicle-detail__price">{price}</p>
                {vehicle.description.clone().map(|d| view! { <p class="vehicle-detail__description">{d}</p> })}
                <dl class="vehicle-detail__specs">
                    {spec_line("Color", color)}
                    {spec_line("Type", vehicle.kind.clone())}
                    {spec_line("Range", range)}
                    {spec_line("Top speed", top_speed)}
                    {spec_line("Charging time", vehicle.charging_time.clone())}
                    {spec_line("In stock", stock)}
                </dl>
                <ul class="vehicle-detail__features">
                    {vehicle.features.into_iter().map(|f| view! { <li>{f}</li> }).collect_view()}
                </ul>
                <a class="btn btn--primary" href=booking>"Book a test drive"</a>
            </div>
        </article>
    }
}
