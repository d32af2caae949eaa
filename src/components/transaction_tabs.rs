//! Transaction Tabs Component
//!
//! Tab bar with live counts, and the three views beneath it.

use leptos::prelude::*;

use crate::components::{TransactionFeed, TransactionTable};
use crate::context::use_filter_context;
use crate::models::ViewKind;
use crate::summary::tab_label;

#[component]
pub fn TransactionTabs() -> impl IntoView {
    let ctx = use_filter_context();
    let counts = Memo::new(move |_| ctx.counts());

    let pane_hidden = move |kind: ViewKind| move || ctx.active_view.get() != kind;

    view! {
        <div class="transaction-tabs">
            <div class="tab-bar">
                {ViewKind::ALL.iter().map(|kind| {
                    let kind = *kind;
                    let is_active = move || ctx.active_view.get() == kind;
                    view! {
                        <button
                            class=move || if is_active() { "tab-btn active" } else { "tab-btn" }
                            on:click=move |_| ctx.active_view.set(kind)
                        >
                            {move || tab_label(kind, counts.get().get(kind))}
                        </button>
                    }
                }).collect_view()}
            </div>

            <div class="tab-pane" class:hidden=pane_hidden(ViewKind::All)>
                <TransactionFeed />
            </div>
            <div class="tab-pane" class:hidden=pane_hidden(ViewKind::Expenses)>
                <TransactionTable kind=ViewKind::Expenses />
            </div>
            <div class="tab-pane" class:hidden=pane_hidden(ViewKind::Incomes)>
                <TransactionTable kind=ViewKind::Incomes />
            </div>
        </div>
    }
}
