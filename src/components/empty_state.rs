//! Empty State Component

use leptos::prelude::*;

use crate::context::use_filter_context;
use crate::render::EmptyState;

/// Placeholder shown in a view with no matching transactions
#[component]
pub fn EmptyStatePanel(state: EmptyState) -> impl IntoView {
    let ctx = use_filter_context();

    view! {
        <div class="empty-state">
            <i class=format!("icon icon-{}", state.icon)></i>
            <h3>{state.title}</h3>
            <p>{state.message}</p>
            <button class="clear-filters-btn" on:click=move |_| ctx.clear()>
                {state.action_label}
            </button>
        </div>
    }
}
