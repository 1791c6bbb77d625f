//! Vehicle listing with model filters and the two-slot compare selection.
//!
//! DESIGN
//! ======
//! The page owns one `RwSignal<VehicleListing>`; the collection, filter,
//! displayed subset and selection change together through its methods so
//! they never drift apart. Starting a comparison parks the pair in the
//! shared `ComparisonState` before navigating.

#[cfg(test)]
#[path = "vehicles_test.rs"]
mod vehicles_test;

use catalog::{FilterKey, FilterState, LoadState, ModelCode, SelectionSet, Vehicle, VehicleListing};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::notice_banner::NoticeBanner;
use crate::components::vehicle_card::VehicleCard;
use crate::state::comparison::ComparisonState;

/// Filter buttons in display order: "All" first, then every model line.
#[must_use]
pub fn filter_keys() -> Vec<FilterKey> {
    std::iter::once(FilterKey::All)
        .chain(ModelCode::ALL.into_iter().map(FilterKey::Model))
        .collect()
}

/// Text for the compare bar.
#[must_use]
pub fn selection_summary(selection: &SelectionSet) -> String {
    let titles: Vec<String> = selection.iter().map(Vehicle::display_title).collect();
    match titles.as_slice() {
        [] => "Select two vehicles to compare.".to_owned(),
        [only] => format!("{only} selected. Pick one more to compare."),
        [left, right, ..] => format!("Compare {left} with {right}."),
    }
}

/// Message shown when the current filter hides every vehicle.
#[must_use]
pub fn empty_message(filter: &FilterState) -> String {
    if filter.is_all() {
        return "No vehicles are available right now.".to_owned();
    }
    let labels: Vec<&str> = filter.active_codes().map(ModelCode::label).collect();
    format!("No vehicles found for {}.", labels.join(", "))
}

/// Listing page.
#[component]
pub fn VehicleListPage() -> impl IntoView {
    let comparison = expect_context::<RwSignal<ComparisonState>>();
    let navigate = use_navigate();

    let listing = RwSignal::new(VehicleListing::default());
    let status = RwSignal::new(LoadState::<()>::Idle);

    // Load once on mount; effects only run in the browser.
    Effect::new(move || {
        status.set(LoadState::Loading);
        leptos::task::spawn_local(async move {
            let state = crate::net::api::load_vehicles().await;
            let vehicles = state.value().cloned().unwrap_or_default();
            listing.update(|l| l.replace_collection(vehicles));
            status.set(state.map(|_| ()));
        });
    });

    let on_toggle = Callback::new(move |vehicle: Vehicle| {
        listing.update(|l| {
            l.toggle_selection(&vehicle);
        });
    });

    let start_comparison = move |_| {
        if let Some(pair) = listing.with_untracked(VehicleListing::comparison) {
            let path = pair.path();
            comparison.set(ComparisonState::holding(pair));
            navigate(&path, NavigateOptions::default());
        }
    };

    let filter_buttons = filter_keys()
        .into_iter()
        .map(|key| {
            let class = move || {
                if listing.with(|l| l.filter().is_active(key)) {
                    "filter-button filter-button--active"
                } else {
                    "filter-button"
                }
            };
            view! {
                <button class=class on:click=move |_| listing.update(|l| l.apply_filter(key))>
                    {key.label()}
                </button>
            }
        })
        .collect_view();

    let error = Signal::derive(move || status.with(|s| s.error().map(str::to_owned)));
    let loading = move || matches!(status.get(), LoadState::Idle | LoadState::Loading);

    view! {
        <div class="vehicles-page">
            <header class="vehicles-page__header">
                <h1>"All vehicles"</h1>
                <div class="vehicles-page__filters">
                    {filter_buttons}
                    <button class="filter-button filter-button--reset" on:click=move |_| listing.update(VehicleListing::reset_filters)>
                        "Reset filters"
                    </button>
                </div>
            </header>

            <NoticeBanner message=error/>

            <Show when=move || !loading() fallback=|| view! { <p class="vehicles-page__loading">"Loading vehicles..."</p> }>
                <div class="vehicles-page__grid">
                    {move || {
                        let displayed = listing.with(|l| l.displayed().to_vec());
                        if displayed.is_empty() {
                            let message = listing.with(|l| empty_message(l.filter()));
                            return view! { <p class="vehicles-page__empty">{message}</p> }.into_any();
                        }
                        displayed
                            .into_iter()
                            .map(|vehicle| {
                                let id = vehicle.id;
                                let selected = Signal::derive(move || listing.with(|l| l.selection().contains(id)));
                                let locked = Signal::derive(move || listing.with(|l| l.selection().is_saturated()));
                                view! { <VehicleCard vehicle selected locked on_toggle/> }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </div>
            </Show>

            <footer class="compare-bar">
                <span class="compare-bar__summary">{move || listing.with(|l| selection_summary(l.selection()))}</span>
                <button
                    class="btn btn--primary"
                    disabled=move || !listing.with(|l| l.selection().is_ready())
                    on:click=start_comparison
                >
                    "Compare"
                </button>
            </footer>
        </div>
    }
}
