//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::site_header::SiteHeader;
use crate::pages::{
    booking::BookingPage, compare::ComparePage, home::HomePage, not_found::NotFoundPage,
    vehicle_detail::VehicleDetailPage, vehicles::VehicleListPage,
};
use crate::state::{comparison::ComparisonState, session::SessionState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="vi">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and comparison contexts and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let comparison = RwSignal::new(ComparisonState::default());

    provide_context(session);
    provide_context(comparison);

    // Storage is only readable after hydration.
    Effect::new(move || {
        session.set(SessionState { session: crate::state::session::restore(), restored: true });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/showroom.css"/>
        <Title text="VinFast Showroom"/>

        <Router>
            <SiteHeader/>
            <main>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("vehicles") view=VehicleListPage/>
                    <Route path=(StaticSegment("vehicles"), ParamSegment("id")) view=VehicleDetailPage/>
                    <Route path=StaticSegment("compare") view=ComparePage/>
                    <Route path=StaticSegment("booking") view=BookingPage/>
                </Routes>
            </main>
        </Router>
    }
}
