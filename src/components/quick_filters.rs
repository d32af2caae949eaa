//! Quick Filter Buttons
//!
//! Month/year presets relative to today.

use leptos::prelude::*;

use crate::context::use_filter_context;
use crate::filters::QuickFilter;

#[component]
pub fn QuickFilters() -> impl IntoView {
    let ctx = use_filter_context();

    view! {
        <div class="quick-filters">
            {QuickFilter::ALL.iter().map(|quick| {
                let quick = *quick;
                view! {
                    <button
                        type="button"
                        class="quick-filter-btn"
                        on:click=move |_| ctx.apply_quick_filter(quick)
                    >
                        {quick.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
