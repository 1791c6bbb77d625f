//! Non-blocking banner for degraded loads and submission failures.

use leptos::prelude::*;

#[component]
pub fn NoticeBanner(
    #[prop(into)] message: Signal<Option<String>>,
    #[prop(optional)] tone: Option<&'static str>,
) -> impl IntoView {
    let class = format!("notice-banner notice-banner--{}", tone.unwrap_or("warning"));

    view! {
        <Show when=move || message.get().is_some()>
            <div class=class.clone() role="status">
                {move || message.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
