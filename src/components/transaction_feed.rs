//! Transaction Feed Component
//!
//! Card list for the combined view.

use leptos::prelude::*;

use crate::components::EmptyStatePanel;
use crate::context::use_filter_context;
use crate::models::{RenderedForm, TransactionKind, ViewKind};
use crate::render::{render_view, RenderedView};

#[component]
fn TransactionCard(form: RenderedForm) -> impl IntoView {
    let kind_class = match form.kind {
        TransactionKind::Expense => "transaction-card expense",
        TransactionKind::Income => "transaction-card income",
    };
    let badge_style = form
        .category_color
        .map(|color| format!("background-color: {}", color))
        .unwrap_or_default();

    view! {
        <div class=kind_class>
            <div class="transaction-main">
                <span class="transaction-description">{form.description}</span>
                {(!form.detailed_description.is_empty()).then(|| view! {
                    <span class="transaction-details">{form.detailed_description}</span>
                })}
            </div>
            <span class="category-badge" style=badge_style>{form.category_label}</span>
            <span class="transaction-date">{form.date_text}</span>
            <span class="transaction-amount">{form.amount_text}</span>
        </div>
    }
}

#[component]
pub fn TransactionFeed() -> impl IntoView {
    let ctx = use_filter_context();
    let view_model = Memo::new(move |_| ctx.filtered.with(|set| render_view(ViewKind::All, &set.all)));

    view! {
        <div class="transaction-feed">
            {move || match view_model.get() {
                RenderedView::Rows(rows) => rows
                    .into_iter()
                    .map(|form| view! { <TransactionCard form=form /> })
                    .collect_view()
                    .into_any(),
                RenderedView::Empty(state) => view! { <EmptyStatePanel state=state /> }.into_any(),
            }}
        </div>
    }
}
