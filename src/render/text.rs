// render/text.rs

use crate::analyzer::CatalogSummary;
use crate::model::Provenance;
use crate::render::Card;
use crate::utils::format_number;
use crate::view::CatalogView;
use chrono::{DateTime, Utc};

pub const NO_MATCHES: &str = "📭 No models match your criteria.";

fn marker(provenance: Provenance) -> &'static str {
    match provenance {
        Provenance::Stated => "🟢",
        Provenance::Inferred => "🟡",
        Provenance::Unknown => "⚪",
    }
}

/// Formats a single card as a terminal block.
pub fn format_card(card: &Card) -> String {
    let mut msg = format!("🍚 {} | {}\n", card.brand, card.model);
    msg.push_str(&format!(
        "   Capacity (Uncooked): {} {}  [{}]\n",
        marker(card.capacity_provenance),
        card.capacity,
        card.capacity_tooltip
    ));
    msg.push_str(&format!("   Capacity (Cooked): {}\n", card.capacity_cooked));
    msg.push_str(&format!(
        "   Fuzzy Logic: {} {}  [{}]\n",
        marker(card.fuzzy_logic_provenance),
        card.fuzzy_logic,
        card.fuzzy_logic_tooltip
    ));
    msg.push_str(&format!("   Logic Type: {}\n", card.logic_type));
    msg.push_str(&format!(
        "   Inner Pot: {} (removable: {})\n",
        card.pot_material, card.removable_pot
    ));
    msg.push_str(&format!("   Self Clean: {}\n", card.self_clean));
    msg.push_str(&format!("   Price: {}\n", card.price));

    if let Some(complaints) = &card.complaints {
        msg.push_str("   Common Gripes:\n");
        for complaint in complaints {
            msg.push_str(&format!("     - {}\n", complaint));
        }
    }

    msg.push_str(&format!("   Data Confidence: {}\n", card.confidence));
    if let Some(url) = &card.source_url {
        msg.push_str(&format!("   🔗 View Source: {}\n", url));
    }
    msg
}

fn format_summary(summary: &CatalogSummary, loaded_at: DateTime<Utc>) -> String {
    let mut msg = format!(
        "📦 Showing {} of {} models (data loaded {})\n",
        summary.shown,
        summary.total,
        loaded_at.format("%Y-%m-%d")
    );
    if let Some(avg) = summary.average_price {
        msg.push_str(&format!("💰 Average starting price: {:.2}\n", avg));
    }
    if let Some((lo, hi)) = summary.capacity_range {
        msg.push_str(&format!(
            "📏 Capacity range: {} - {}\n",
            format_number(lo),
            format_number(hi)
        ));
    }
    msg
}

/// Formats a whole view, including the empty and error indicators.
pub fn format_view(view: &CatalogView, loaded_at: DateTime<Utc>) -> String {
    match view {
        CatalogView::LoadFailed { reason } => {
            format!("❌ Error loading database: {}\n", reason)
        }
        CatalogView::NoMatches { .. } => format!("{}\n", NO_MATCHES),
        CatalogView::Cards { summary, cards } => {
            let mut msg = format_summary(summary, loaded_at);
            for card in cards {
                msg.push('\n');
                msg.push_str(&format_card(card));
            }
            msg
        }
    }
}
