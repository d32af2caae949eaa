//! Amount Input Component
//!
//! Min/max amount fields. Typing is debounced; the store only changes once
//! the user pauses.

use leptos::prelude::*;

use crate::context::use_filter_context;
use crate::filters::{amount_from_input, amount_to_input, AmountBound};

fn bound_label(bound: AmountBound) -> &'static str {
    match bound {
        AmountBound::Min => "Valor mínimo",
        AmountBound::Max => "Valor máximo",
    }
}

#[component]
pub fn AmountInput(bound: AmountBound) -> impl IntoView {
    let ctx = use_filter_context();
    let debouncer = ctx.amount_debouncer(bound);

    let stored = Memo::new(move |_| ctx.criteria().amount_range.bound(bound));
    let (draft, set_draft) = signal(amount_to_input(stored.get_untracked()));

    // Follow store changes that did not come from typing (clear, URL)
    Effect::new(move |_| {
        let value = stored.get();
        if amount_from_input(&draft.get_untracked()) != value {
            set_draft.set(amount_to_input(value));
        }
    });

    let on_input = move |ev: web_sys::Event| {
        let text = event_target_value(&ev);
        set_draft.set(text.clone());
        debouncer.run(move || {
            let value = amount_from_input(&text);
            ctx.update(|c| c.set_amount(bound, value));
        });
    };

    view! {
        <label class="filter-field">
            <span>{bound_label(bound)}</span>
            <input
                type="number"
                min="0"
                step="0.01"
                placeholder="0,00"
                prop:value=move || draft.get()
                on:input=on_input
            />
        </label>
    }
}
