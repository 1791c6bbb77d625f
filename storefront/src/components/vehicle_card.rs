//! Vehicle cards for the home teaser grid and the listing page.

use catalog::featured::{default_image_for, description_for, display_name_for};
use catalog::{Vehicle, format_price};
use leptos::prelude::*;

/// Home-page teaser card: marketing name, copy, hero image and price.
#[component]
pub fn FeaturedCard(vehicle: Vehicle) -> impl IntoView {
    let href = format!("/vehicles/{}", vehicle.id);
    let name = display_name_for(&vehicle.model);
    let image = vehicle
        .primary_image()
        .map_or_else(|| default_image_for(&vehicle.model).to_owned(), str::to_owned);
    let description = vehicle
        .description
        .clone()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| description_for(&vehicle.model).to_owned());
    let price = format!("From {}", format_price(vehicle.price));

    view! {
        <a class="featured-card" href=href>
            <img class="featured-card__image" src=image alt=name.clone()/>
            <h3 class="featured-card__name">{name}</h3>
            <p class="featured-card__description">{description}</p>
            <span class="featured-card__price">{price}</span>
        </a>
    }
}

/// Listing card with a compare checkbox.
///
/// The checkbox is disabled once two other vehicles are selected; the
/// listing ignores toggles at capacity anyway.
#[component]
pub fn VehicleCard(
    vehicle: Vehicle,
    #[prop(into)] selected: Signal<bool>,
    #[prop(into)] locked: Signal<bool>,
    on_toggle: Callback<Vehicle>,
) -> impl IntoView {
    let href = format!("/vehicles/{}", vehicle.id);
    let title = vehicle.display_title();
    let image = vehicle
        .primary_image()
        .map_or_else(|| default_image_for(&vehicle.model).to_owned(), str::to_owned);
    let price = format_price(vehicle.price);
    let range = vehicle.range.map(|km| format!("{km} km range"));
    let checkbox_id = format!("compare-{}", vehicle.id);
    let label_for = checkbox_id.clone();

    let card_class = move || {
        if selected.get() {
            "vehicle-card vehicle-card--selected"
        } else {
            "vehicle-card"
        }
    };

    view! {
        <article class=card_class>
            <a class="vehicle-card__link" href=href>
                <img class="vehicle-card__image" src=image alt=title.clone()/>
                <h3 class="vehicle-card__title">{title}</h3>
            </a>
            <p class="vehicle-card__price">{price}</p>
            {range.map(|r| view! { <p class="vehicle-card__range">{r}</p> })}
            <label class="vehicle-card__compare" for=label_for>
                <input
                    type="checkbox"
                    id=checkbox_id
                    prop:checked=move || selected.get()
                    disabled=move || locked.get() && !selected.get()
                    on:change=move |_| on_toggle.run(vehicle.clone())
                />
                "Compare"
            </label>
        </article>
    }
}
