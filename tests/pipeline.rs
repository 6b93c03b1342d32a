use cooker_catalog::model::{Catalog, SortKey, ViewState};
use cooker_catalog::render::Card;
use cooker_catalog::utils::PLACEHOLDER;
use cooker_catalog::{CatalogView, normalize_dataset, recompute};
use serde_json::{Value, json};

fn catalog(raw: Value) -> Catalog {
    Catalog::loaded(normalize_dataset(&raw))
}

fn cards(view: CatalogView) -> Vec<Card> {
    match view {
        CatalogView::Cards { cards, .. } => cards,
        other => panic!("expected cards, got {:?}", other),
    }
}

fn models(view: CatalogView) -> Vec<String> {
    cards(view).into_iter().map(|c| c.model).collect()
}

fn dataset() -> Value {
    json!([
        {
            "brand": "Zojirushi", "model": "NS-TSC10",
            "capacity": { "value": 5.5, "unit": "cups", "provenance": "stated" },
            "features": { "fuzzyLogic": { "value": true, "provenance": "stated" },
                          "removablePot": true, "logicType": "micom" },
            "price": { "min": 150, "max": 180 },
            "analysis": { "confidence": 5 }
        },
        {
            "brand": "Aroma", "model": "ARC-914SBD",
            "capacity": { "uncooked_cups": 4, "cooked_cups": 8, "provenance": "inferred" },
            "features": { "removablePot": true, "selfClean": true },
            "price": 30,
            "analysis": { "confidence": 2, "complaints": ["Sticks to the pot"] }
        },
        {
            "brand": "Tiger", "model": "JBV-A10U",
            "capacity": 5.5,
            "technology": { "has_fuzzy_logic": { "value": false, "provenance": "stated" } },
            "construction": { "is_inner_pot_removable": false, "inner_pot_material": "nonstick" },
            "analysis": {}
        },
        "corrupt entry"
    ])
}

#[test]
fn scenario_search_with_fuzzy_filter() {
    let catalog = catalog(json!([{
        "brand": "A", "model": "X",
        "capacity": { "value": 5, "unit": "cups", "provenance": "stated" },
        "features": { "fuzzyLogic": { "value": true, "provenance": "stated" }, "removablePot": false },
        "analysis": { "confidence": 4 }
    }]));

    let state = ViewState { search_text: "a".into(), fuzzy_only: true, ..ViewState::default() };
    let found = cards(recompute(&catalog, &state));
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].brand, "A");
    assert_eq!(found[0].capacity, "5 Cups");
    assert_eq!(found[0].confidence, "4/5");

    let state = ViewState { removable_pot_only: true, ..ViewState::default() };
    assert_eq!(recompute(&catalog, &state), CatalogView::NoMatches { total: 1 });
}

#[test]
fn scenario_equal_capacity_keeps_dataset_order() {
    let catalog = catalog(dataset());
    let state = ViewState { sort: SortKey::CapacityAsc, ..ViewState::default() };

    // The corrupt entry has no capacity, so it sorts first as 0.
    assert_eq!(
        models(recompute(&catalog, &state)),
        vec!["Unknown Model", "ARC-914SBD", "NS-TSC10", "JBV-A10U"]
    );
}

#[test]
fn malformed_entries_are_counted_and_displayed() {
    let catalog = catalog(dataset());
    assert_eq!(catalog.items.len(), 4);

    let all = cards(recompute(&catalog, &ViewState::default()));
    assert_eq!(all.len(), 4);
    assert_eq!(all[3].brand, "Unknown Brand");
}

#[test]
fn missing_confidence_renders_placeholder() {
    let catalog = catalog(dataset());
    let state = ViewState { search_text: "tiger".into(), ..ViewState::default() };
    let tiger = &cards(recompute(&catalog, &state))[0];

    assert_eq!(tiger.confidence, PLACEHOLDER);
    assert_eq!(tiger.price, PLACEHOLDER);
    assert_eq!(tiger.pot_material, "Nonstick");
    assert_eq!(tiger.fuzzy_logic, "No");
}

#[test]
fn recompute_is_deterministic_and_idempotent() {
    let catalog = catalog(dataset());
    let state = ViewState { sort: SortKey::PriceDesc, removable_pot_only: true, ..ViewState::default() };

    let first = recompute(&catalog, &state);
    let second = recompute(&catalog, &state);
    assert_eq!(first, second);
    assert_eq!(models(first), vec!["NS-TSC10", "ARC-914SBD"]);
}

#[test]
fn every_extra_filter_narrows_or_keeps_the_result() {
    let catalog = catalog(dataset());
    let count = |state: &ViewState| match recompute(&catalog, state) {
        CatalogView::Cards { cards, .. } => cards.len(),
        _ => 0,
    };

    let mut state = ViewState::default();
    let mut previous = count(&state);
    let steps: [fn(&mut ViewState); 4] = [
        |s| s.removable_pot_only = true,
        |s| s.self_clean_only = true,
        |s| s.fuzzy_only = true,
        |s| s.logic_type = "micom".into(),
    ];
    for step in steps {
        step(&mut state);
        let current = count(&state);
        assert!(current <= previous);
        previous = current;
    }
    assert_eq!(previous, 0);
}

#[test]
fn wrapped_and_bare_datasets_render_the_same() {
    let bare = catalog(dataset());
    let wrapped = catalog(json!({ "items": dataset() }));
    let state = ViewState { sort: SortKey::ConfidenceDesc, ..ViewState::default() };

    assert_eq!(bare.items, wrapped.items);
    assert_eq!(recompute(&bare, &state), recompute(&wrapped, &state));
}

#[test]
fn confidence_sort_puts_unscored_items_last() {
    let catalog = catalog(dataset());
    let state = ViewState { sort: SortKey::ConfidenceDesc, ..ViewState::default() };
    assert_eq!(
        models(recompute(&catalog, &state)),
        vec!["NS-TSC10", "ARC-914SBD", "JBV-A10U", "Unknown Model"]
    );
}

#[test]
fn complaints_section_only_when_present() {
    let catalog = catalog(dataset());
    let all = cards(recompute(&catalog, &ViewState::default()));

    assert_eq!(all[0].complaints, None);
    assert_eq!(all[1].complaints, Some(vec!["Sticks to the pot".to_string()]));
    assert_eq!(all[1].capacity_cooked, "8 Cups");
}

#[test]
fn failed_load_shows_error_not_empty_state() {
    let view = recompute(&Catalog::failed("connection refused"), &ViewState::default());
    assert_eq!(view, CatalogView::LoadFailed { reason: "connection refused".into() });
}
