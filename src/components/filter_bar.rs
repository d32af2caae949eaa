//! Filter Bar Component
//!
//! Every filter control: month, year, categories, date range, amounts,
//! quick presets and the clear button.

use leptos::prelude::*;

use crate::components::{AmountInput, CategorySelect, QuickFilters};
use crate::context::use_filter_context;
use crate::filters::{date_from_input, date_to_input, month_from_input, year_from_input, AmountBound};
use crate::models::TransactionKind;
use crate::render::CLEAR_FILTERS_LABEL;
use crate::summary::MONTH_NAMES;

/// Filter controls bound to the filter store
#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_filter_context();

    let month = Memo::new(move |_| ctx.criteria().month);
    let year = Memo::new(move |_| ctx.criteria().year);
    let start = Memo::new(move |_| ctx.criteria().date_range.start);
    let end = Memo::new(move |_| ctx.criteria().date_range.end);

    view! {
        <section class="filter-bar">
            <div class="filter-row">
                <label class="filter-field">
                    <span>"Mês"</span>
                    <select on:change=move |ev| {
                        let value = month_from_input(&event_target_value(&ev));
                        ctx.update(|c| c.set_month(value));
                    }>
                        <option value="" prop:selected=move || month.get().is_none()>"Todos"</option>
                        {MONTH_NAMES.iter().enumerate().map(|(i, name)| {
                            let m = i as u32 + 1;
                            view! {
                                <option value=m.to_string() prop:selected=move || month.get() == Some(m)>
                                    {*name}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </label>

                <label class="filter-field">
                    <span>"Ano"</span>
                    <select on:change=move |ev| {
                        let value = year_from_input(&event_target_value(&ev));
                        ctx.update(|c| c.set_year(value));
                    }>
                        <option value="" prop:selected=move || year.get().is_none()>"Todos"</option>
                        {ctx.years.get_value().into_iter().map(|y| {
                            view! {
                                <option value=y.to_string() prop:selected=move || year.get() == Some(y)>
                                    {y}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </label>

                <CategorySelect kind=TransactionKind::Expense />
                <CategorySelect kind=TransactionKind::Income />
            </div>

            <div class="filter-row">
                <label class="filter-field">
                    <span>"De"</span>
                    <input
                        type="date"
                        prop:value=move || date_to_input(start.get())
                        on:change=move |ev| {
                            let value = date_from_input(&event_target_value(&ev));
                            ctx.update(|c| c.set_date_start(value));
                        }
                    />
                </label>
                <label class="filter-field">
                    <span>"Até"</span>
                    <input
                        type="date"
                        prop:value=move || date_to_input(end.get())
                        on:change=move |ev| {
                            let value = date_from_input(&event_target_value(&ev));
                            ctx.update(|c| c.set_date_end(value));
                        }
                    />
                </label>

                <AmountInput bound=AmountBound::Min />
                <AmountInput bound=AmountBound::Max />
            </div>

            <div class="filter-row filter-actions">
                <QuickFilters />
                <button class="clear-filters-btn" on:click=move |_| ctx.clear()>
                    {CLEAR_FILTERS_LABEL}
                </button>
            </div>
        </section>
    }
}
