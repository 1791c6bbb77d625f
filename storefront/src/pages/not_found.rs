//! Fallback views for unknown routes and unknown vehicles.

use leptos::prelude::*;

/// Router fallback.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"Page not found"</h1>
            <a href="/">"Back to the showroom"</a>
        </div>
    }
}

/// Terminal state when a vehicle id is unknown to every source.
#[component]
pub fn VehicleNotFound(#[prop(optional)] message: Option<&'static str>) -> impl IntoView {
    view! {
        <div class="vehicle-not-found">
            <h2>{message.unwrap_or("We could not find that vehicle.")}</h2>
            <a class="btn" href="/vehicles">"Browse all vehicles"</a>
        </div>
    }
}
