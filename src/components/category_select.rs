//! Category Select Component

use leptos::prelude::*;

use crate::context::use_filter_context;
use crate::filters::{CategoryFilter, NO_CATEGORY_PARAM};
use crate::models::{TransactionKind, UNCATEGORIZED_LABEL};

/// Select for one category axis. Option values use the same encoding as
/// the URL, so `no-category` never collides with a real id.
#[component]
pub fn CategorySelect(kind: TransactionKind) -> impl IntoView {
    let ctx = use_filter_context();

    let (label, options) = match kind {
        TransactionKind::Expense => ("Categoria de Gasto", ctx.expense_options.get_value()),
        TransactionKind::Income => ("Categoria de Receita", ctx.income_options.get_value()),
    };
    let current = Memo::new(move |_| ctx.criteria().category_filter_for(kind).to_param());

    let on_change = move |ev: web_sys::Event| {
        let filter = CategoryFilter::from_param(&event_target_value(&ev));
        log::debug!("{:?} category -> {:?}", kind, filter);
        ctx.update(|c| match kind {
            TransactionKind::Expense => c.set_expense_category(filter),
            TransactionKind::Income => c.set_income_category(filter),
        });
    };

    view! {
        <label class="filter-field">
            <span>{label}</span>
            <select on:change=on_change>
                <option value="" prop:selected=move || current.get().is_empty()>"Todas"</option>
                {options.into_iter().map(|o| {
                    let value = CategoryFilter::Specific(o.id).to_param();
                    let value_clone = value.clone();
                    view! {
                        <option value=value prop:selected=move || current.get() == value_clone>
                            {o.name}
                        </option>
                    }
                }).collect_view()}
                <option
                    value=NO_CATEGORY_PARAM
                    prop:selected=move || current.get() == NO_CATEGORY_PARAM
                >
                    {UNCATEGORIZED_LABEL}
                </option>
            </select>
        </label>
    }
}
