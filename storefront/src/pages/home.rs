//! Home page with the featured-model teaser grid.

use catalog::{LoadState, Vehicle};
use leptos::prelude::*;

use crate::components::notice_banner::NoticeBanner;
use crate::components::vehicle_card::FeaturedCard;

/// Home page: hero copy plus up to three featured vehicles.
#[component]
pub fn HomePage() -> impl IntoView {
    // Fetches once on mount, in the browser only.
    let featured = LocalResource::new(crate::net::api::load_featured);

    view! {
        <div class="home-page">
            <section class="home-page__hero">
                <h1>"Drive electric with VinFast"</h1>
                <p>"Smart electric SUVs for every road in Viet Nam."</p>
                <a class="btn btn--primary" href="/vehicles">"Explore all models"</a>
            </section>

            <section class="home-page__featured">
                <h2>"Featured models"</h2>
                <Suspense fallback=move || view! { <p>"Loading featured models..."</p> }>
                    {move || featured.get().map(render_featured)}
                </Suspense>
            </section>
        </div>
    }
}

fn render_featured(state: LoadState<Vec<Vehicle>>) -> impl IntoView {
    let error = state.error().map(str::to_owned);
    let vehicles = state.value().cloned().unwrap_or_default();

    view! {
        <NoticeBanner message=error/>
        <div class="home-page__grid">
            {vehicles
                .into_iter()
                .map(|vehicle| view! { <FeaturedCard vehicle/> })
                .collect_view()}
        </div>
    }
}
