//! Top navigation bar with the signed-in customer's name.

use leptos::prelude::*;

use crate::state::session::SessionState;

/// Site-wide header: brand, primary links and the session greeting.
#[component]
pub fn SiteHeader() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let greeting = move || {
        let state = session.get();
        match state.session.name {
            Some(name) if !name.trim().is_empty() => format!("Hi, {}", name.trim()),
            _ if state.restored => "Guest".to_owned(),
            _ => String::new(),
        }
    };

    view! {
        <header class="site-header">
            <a class="site-header__brand" href="/">"VinFast Showroom"</a>
            <nav class="site-header__nav">
                <a href="/vehicles">"Vehicles"</a>
            </nav>
            <span class="site-header__session">{greeting}</span>
        </header>
    }
}
