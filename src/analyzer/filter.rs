use crate::model::{Item, ViewState};

/// True when `item` satisfies every active constraint in `state`.
pub fn matches(item: &Item, state: &ViewState) -> bool {
    let term = state.search_text.to_lowercase();
    let matches_text = term.is_empty()
        || format!("{} {}", item.brand, item.model)
            .to_lowercase()
            .contains(&term);

    let features = &item.features;
    let matches_fuzzy = !state.fuzzy_only || features.fuzzy_logic.value;
    let matches_pot = !state.removable_pot_only || features.removable_pot;
    let matches_clean = !state.self_clean_only || features.self_clean;
    let matches_logic = state.logic_type.is_empty()
        || features.logic_type.as_deref() == Some(state.logic_type.as_str());

    matches_text && matches_fuzzy && matches_pot && matches_clean && matches_logic
}

/// Items passing the filter, in their original order.
pub fn filter_items<'a>(items: &'a [Item], state: &ViewState) -> Vec<&'a Item> {
    items.iter().filter(|item| matches(item, state)).collect()
}
