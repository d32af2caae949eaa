//! Transaction Table Component
//!
//! Expense or income table. An empty result is one row spanning all columns.

use leptos::prelude::*;

use crate::components::EmptyStatePanel;
use crate::context::use_filter_context;
use crate::models::{RenderedForm, ViewKind};
use crate::render::{render_view, RenderedView, TABLE_COLUMNS};

#[component]
fn TransactionRow(form: RenderedForm) -> impl IntoView {
    let badge_style = form
        .category_color
        .map(|color| format!("background-color: {}", color))
        .unwrap_or_default();

    view! {
        <tr>
            <td>
                <div class="transaction-description">{form.description}</div>
                <small class="transaction-details">{form.detailed_description}</small>
            </td>
            <td><span class="category-badge" style=badge_style>{form.category_label}</span></td>
            <td>{form.date_text}</td>
            <td class="transaction-amount">{form.amount_text}</td>
        </tr>
    }
}

#[component]
pub fn TransactionTable(kind: ViewKind) -> impl IntoView {
    let ctx = use_filter_context();
    let view_model = Memo::new(move |_| ctx.filtered.with(|set| render_view(kind, set.view(kind))));

    view! {
        <table class=format!("transaction-table {}", kind.section())>
            <thead>
                <tr>
                    <th>"Descrição"</th>
                    <th>"Categoria"</th>
                    <th>"Data"</th>
                    <th>"Valor"</th>
                </tr>
            </thead>
            <tbody>
                {move || match view_model.get() {
                    RenderedView::Rows(rows) => rows
                        .into_iter()
                        .map(|form| view! { <TransactionRow form=form /> })
                        .collect_view()
                        .into_any(),
                    RenderedView::Empty(state) => view! {
                        <tr class="empty-row">
                            <td colspan=TABLE_COLUMNS.to_string()>
                                <EmptyStatePanel state=state />
                            </td>
                        </tr>
                    }.into_any(),
                }}
            </tbody>
        </table>
    }
}
