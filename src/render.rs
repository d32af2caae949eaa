//! View Renderer (view model)
//!
//! Turns a filtered sequence into what a view draws: the recorded forms in
//! original order, or one empty-state placeholder when nothing matches.

use crate::models::{RenderedForm, TransactionRecord, ViewKind};

/// Columns in the expense/income tables; the placeholder row spans them all
pub const TABLE_COLUMNS: usize = 4;

pub const CLEAR_FILTERS_LABEL: &str = "Limpar Filtros";

/// Placeholder copy shown when a view has no matches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyState {
    pub icon: &'static str,
    pub title: &'static str,
    pub message: &'static str,
    pub action_label: &'static str,
}

pub fn empty_state(kind: ViewKind) -> EmptyState {
    let (icon, title, message) = match kind {
        ViewKind::Expenses => (
            "trending-down",
            "Nenhum gasto encontrado",
            "Tente ajustar os filtros para encontrar gastos",
        ),
        ViewKind::Incomes => (
            "trending-up",
            "Nenhuma receita encontrada",
            "Tente ajustar os filtros para encontrar receitas",
        ),
        ViewKind::All => (
            "search",
            "Nenhuma transação encontrada",
            "Tente ajustar os filtros para encontrar transações",
        ),
    };
    EmptyState {
        icon,
        title,
        message,
        action_label: CLEAR_FILTERS_LABEL,
    }
}

/// Content of one view container
#[derive(Debug, Clone, PartialEq)]
pub enum RenderedView {
    Rows(Vec<RenderedForm>),
    Empty(EmptyState),
}

/// Build a view from its filtered records. Same input, same output.
pub fn render_view(kind: ViewKind, records: &[TransactionRecord]) -> RenderedView {
    if records.is_empty() {
        RenderedView::Empty(empty_state(kind))
    } else {
        RenderedView::Rows(records.iter().map(|r| r.rendered.clone()).collect())
    }
}
