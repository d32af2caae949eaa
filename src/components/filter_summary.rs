//! Filter Summary Component
//!
//! Chips for the active filters with an inline clear button; hidden when
//! nothing is filtered.

use leptos::prelude::*;

use crate::context::use_filter_context;
use crate::render::CLEAR_FILTERS_LABEL;

#[component]
pub fn FilterSummary() -> impl IntoView {
    let ctx = use_filter_context();
    let chips = Memo::new(move |_| ctx.chips());

    view! {
        <div class="filter-summary" class:hidden=move || chips.with(Vec::is_empty)>
            <span class="filter-summary-title">"Filtros ativos:"</span>
            <For
                each=move || chips.get()
                key=|chip| chip.clone()
                children=move |chip| view! { <span class="filter-chip">{chip}</span> }
            />
            <button
                class="filter-summary-clear"
                title=CLEAR_FILTERS_LABEL
                on:click=move |_| ctx.clear()
            >
                "×"
            </button>
        </div>
    }
}
