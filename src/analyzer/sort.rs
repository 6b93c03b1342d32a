use crate::model::{Item, SortKey};
use std::cmp::Ordering;

/// Stable ordering of an already-filtered list. Missing figures count as 0.
pub fn sort_items<'a>(mut items: Vec<&'a Item>, key: SortKey) -> Vec<&'a Item> {
    if key != SortKey::None {
        items.sort_by(|a, b| compare(a, b, key));
    }
    items
}

pub fn compare(a: &Item, b: &Item, key: SortKey) -> Ordering {
    match key {
        SortKey::CapacityAsc => capacity(a).total_cmp(&capacity(b)),
        SortKey::CapacityDesc => capacity(b).total_cmp(&capacity(a)),
        SortKey::ConfidenceDesc => confidence(b).cmp(&confidence(a)),
        SortKey::PriceAsc => price(a).total_cmp(&price(b)),
        SortKey::PriceDesc => price(b).total_cmp(&price(a)),
        SortKey::None => Ordering::Equal,
    }
}

fn capacity(item: &Item) -> f64 {
    item.capacity.value.unwrap_or(0.0)
}

fn confidence(item: &Item) -> u8 {
    item.analysis.confidence.unwrap_or(0)
}

fn price(item: &Item) -> f64 {
    item.price.map(|p| p.min).unwrap_or(0.0)
}
