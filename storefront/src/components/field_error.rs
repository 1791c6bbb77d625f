//! Inline validation message under a booking form input.

use catalog::{Field, FieldErrors};
use leptos::prelude::*;

#[component]
pub fn FieldError(field: Field, errors: RwSignal<FieldErrors>) -> impl IntoView {
    let message = move || errors.with(|e| e.get(&field).cloned());
    let id = format!("{}-error", field.key());

    view! {
        <Show when=move || message().is_some()>
            <p class="field-error" id=id.clone()>{message}</p>
        </Show>
    }
}
