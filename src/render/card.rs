// render/card.rs

use crate::model::{Capacity, Item, PriceRange, Provenance};
use crate::utils::{PLACEHOLDER, format_number, humanize, yes_no};
use serde::Serialize;

/// Display-ready record for one catalog entry. Every value is pre-formatted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    pub brand: String,
    pub model: String,
    pub capacity: String,
    pub capacity_cooked: String,
    pub capacity_provenance: Provenance,
    pub capacity_tooltip: String,
    pub fuzzy_logic: String,
    pub fuzzy_logic_provenance: Provenance,
    pub fuzzy_logic_tooltip: String,
    pub removable_pot: String,
    pub self_clean: String,
    pub logic_type: String,
    pub pot_material: String,
    pub price: String,
    pub confidence: String,
    /// Omitted when the item has no complaints.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complaints: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    pub has_inferred_data: bool,
}

pub fn render_card(item: &Item) -> Card {
    let features = &item.features;
    let fuzzy = features.fuzzy_logic;

    Card {
        brand: item.brand.clone(),
        model: item.model.clone(),
        capacity: quantity(item.capacity.value, &item.capacity.unit),
        capacity_cooked: quantity(item.capacity.cooked, &item.capacity.unit),
        capacity_provenance: item.capacity.provenance,
        capacity_tooltip: capacity_tooltip(&item.capacity),
        fuzzy_logic: yes_no(fuzzy.value),
        fuzzy_logic_provenance: fuzzy.provenance,
        fuzzy_logic_tooltip: format!("Data source: {}", fuzzy.provenance.as_str()),
        removable_pot: yes_no(features.removable_pot),
        self_clean: yes_no(features.self_clean),
        logic_type: humanize(features.logic_type.as_deref()),
        pot_material: humanize(features.pot_material.as_deref()),
        price: price(item.price),
        confidence: item
            .analysis
            .confidence
            .map(|score| format!("{}/5", score))
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
        complaints: (!item.analysis.complaints.is_empty())
            .then(|| item.analysis.complaints.clone()),
        source_url: item.analysis.source_url.clone(),
        has_inferred_data: item.capacity.provenance != Provenance::Stated
            || fuzzy.provenance != Provenance::Stated,
    }
}

fn quantity(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(value) => format!("{} {}", format_number(value), humanize(Some(unit))),
        None => PLACEHOLDER.to_string(),
    }
}

fn capacity_tooltip(capacity: &Capacity) -> String {
    match &capacity.raw_statement {
        Some(raw) => format!("{} - {}", capacity.provenance.describe(), raw),
        None => capacity.provenance.describe().to_string(),
    }
}

fn price(range: Option<PriceRange>) -> String {
    match range {
        Some(PriceRange { min, max }) if min == max => format!("{:.2}", min),
        Some(PriceRange { min, max }) => format!("{:.2} - {:.2}", min, max),
        None => PLACEHOLDER.to_string(),
    }
}
