//! The recompute step: `(snapshot, view state) -> view`.
//!
//! Runs in full on every state change. Nothing here touches the snapshot, so
//! calling it twice with the same inputs yields the same view.
use crate::analyzer::{CatalogSummary, filter_items, sort_items, summarize};
use crate::model::{Catalog, LoadStatus, ViewState};
use crate::render::{Card, render_card};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogView {
    /// The dataset could not be loaded at all.
    LoadFailed { reason: String },
    /// Loaded, but nothing passes the current filters.
    NoMatches { total: usize },
    Cards {
        summary: CatalogSummary,
        cards: Vec<Card>,
    },
}

pub fn recompute(catalog: &Catalog, state: &ViewState) -> CatalogView {
    if let LoadStatus::Failed(reason) = &catalog.status {
        return CatalogView::LoadFailed { reason: reason.clone() };
    }

    let filtered = filter_items(&catalog.items, state);
    if filtered.is_empty() {
        return CatalogView::NoMatches { total: catalog.items.len() };
    }

    let sorted = sort_items(filtered, state.sort);
    CatalogView::Cards {
        summary: summarize(catalog.items.len(), &sorted),
        cards: sorted.into_iter().map(render_card).collect(),
    }
}
