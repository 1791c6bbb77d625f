//! Side-by-side comparison of the two vehicles picked on the listing.

#[cfg(test)]
#[path = "compare_test.rs"]
mod compare_test;

use catalog::compare::{ComparisonPair, parse_comparison_ids};
use catalog::{Fetched, LoadState, Vehicle};
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::notice_banner::NoticeBanner;
use crate::pages::booking::booking_path;
use crate::state::comparison::ComparisonState;

/// Merge two detail lookups into the comparison view's state.
///
/// Either side missing makes the whole pair unavailable; lookup errors are
/// joined into one banner message.
#[must_use]
pub fn combine_pair(left: Fetched<Option<Vehicle>>, right: Fetched<Option<Vehicle>>) -> LoadState<Option<ComparisonPair>> {
    let errors: Vec<String> = [left.error, right.error].into_iter().flatten().collect();
    let pair = match (left.value, right.value) {
        (Some(left), Some(right)) => Some(ComparisonPair { left, right }),
        _ => None,
    };
    if errors.is_empty() {
        LoadState::Loaded(pair)
    } else {
        LoadState::Error { message: errors.join("; "), fallback: pair }
    }
}

/// Comparison page at `/compare?left=<id>&right=<id>`.
#[component]
pub fn ComparePage() -> impl IntoView {
    let comparison = expect_context::<RwSignal<ComparisonState>>();
    let query = use_query_map();
    let state = RwSignal::new(LoadState::<Option<ComparisonPair>>::Idle);

    let ids = move || query.with(|q| parse_comparison_ids(q.get("left").as_deref(), q.get("right").as_deref()));

    // Prefer the pair handed over by the listing; reload by id on a cold start.
    Effect::new(move || {
        let Some((left, right)) = ids() else {
            state.set(LoadState::Loaded(None));
            return;
        };
        if let Some(pair) = comparison.with_untracked(|c| c.pair_for(left, right)) {
            state.set(LoadState::Loaded(Some(pair)));
            return;
        }
        state.set(LoadState::Loading);
        leptos::task::spawn_local(async move {
            let resolver = crate::net::api::resolver();
            let left = resolver.vehicle(left).await;
            let right = resolver.vehicle(right).await;
            state.set(combine_pair(left, right));
        });
    });

    let error = Signal::derive(move || state.with(|s| s.error().map(str::to_owned)));

    view! {
        <div class="compare-page">
            <h1>"Compare vehicles"</h1>
            <NoticeBanner message=error/>
            {move || match state.get() {
                LoadState::Idle | LoadState::Loading => view! { <p>"Loading comparison..."</p> }.into_any(),
                other => match other.value().cloned().flatten() {
                    Some(pair) => render_pair(pair).into_any(),
                    None => view! {
                        <div class="compare-page__empty">
                            <p>"Pick two different vehicles to compare."</p>
                            <a class="btn" href="/vehicles">"Back to vehicles"</a>
                        </div>
                    }
                    .into_any(),
                },
            }}
        </div>
    }
}

fn render_pair(pair: ComparisonPair) -> impl IntoView {
    let rows = pair.rows();
    let left_title = pair.left.display_title();
    let right_title = pair.right.display_title();
    let left_booking = booking_path(pair.left.id);
    let right_booking = booking_path(pair.right.id);

    view! {
        <table class="compare-table">
            <thead>
                <tr>
                    <th></th>
                    <th>{left_title}</th>
                    <th>{right_title}</th>
                </tr>
            </thead>
            <tbody>
                {rows
                    .into_iter()
                    .map(|row| {
                        let class = if row.differs() { "compare-table__row compare-table__row--differs" } else { "compare-table__row" };
                        view! {
                            <tr class=class>
                                <th scope="row">{row.label}</th>
                                <td>{row.left}</td>
                                <td>{row.right}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
            <tfoot>
                <tr>
                    <td></td>
                    <td><a class="btn" href=left_booking>"Book a test drive"</a></td>
                    <td><a class="btn" href=right_booking>"Book a test drive"</a></td>
                </tr>
            </tfoot>
        </table>
    }
}
