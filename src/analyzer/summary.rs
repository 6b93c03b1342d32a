use crate::model::Item;
use serde::Serialize;
use std::collections::BTreeSet;

/// Header figures for the current view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogSummary {
    pub total: usize,
    pub shown: usize,
    /// Mean of the minimum price over priced items in view.
    pub average_price: Option<f64>,
    pub capacity_range: Option<(f64, f64)>,
}

pub fn summarize(total: usize, shown: &[&Item]) -> CatalogSummary {
    let prices: Vec<f64> = shown.iter().filter_map(|i| i.price.map(|p| p.min)).collect();
    let average_price =
        (!prices.is_empty()).then(|| prices.iter().sum::<f64>() / prices.len() as f64);

    let capacity_range = shown
        .iter()
        .filter_map(|i| i.capacity.value)
        .fold(None, |range: Option<(f64, f64)>, value| match range {
            Some((lo, hi)) => Some((lo.min(value), hi.max(value))),
            None => Some((value, value)),
        });

    CatalogSummary {
        total,
        shown: shown.len(),
        average_price,
        capacity_range,
    }
}

/// Distinct logic types present in the dataset, for the logic-type filter.
pub fn logic_type_options(items: &[Item]) -> Vec<String> {
    items
        .iter()
        .filter_map(|i| i.features.logic_type.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PriceRange;

    #[test]
    fn averages_only_priced_items() {
        let mut a = Item::default();
        a.price = Some(PriceRange { min: 100.0, max: 150.0 });
        a.capacity.value = Some(5.5);
        let mut b = Item::default();
        b.price = Some(PriceRange { min: 50.0, max: 50.0 });
        b.capacity.value = Some(3.0);
        let c = Item::default();

        let summary = summarize(10, &[&a, &b, &c]);
        assert_eq!(summary.total, 10);
        assert_eq!(summary.shown, 3);
        assert_eq!(summary.average_price, Some(75.0));
        assert_eq!(summary.capacity_range, Some((3.0, 5.5)));
    }

    #[test]
    fn empty_view_has_no_figures() {
        let summary = summarize(4, &[]);
        assert_eq!(summary.shown, 0);
        assert_eq!(summary.average_price, None);
        assert_eq!(summary.capacity_range, None);
    }

    #[test]
    fn logic_types_are_sorted_and_unique() {
        let with_logic = |logic: Option<&str>| {
            let mut item = Item::default();
            item.features.logic_type = logic.map(str::to_string);
            item
        };
        let items = vec![
            with_logic(Some("micom")),
            with_logic(None),
            with_logic(Some("induction_heating")),
            with_logic(Some("micom")),
        ];
        assert_eq!(logic_type_options(&items), vec!["induction_heating", "micom"]);
    }
}
