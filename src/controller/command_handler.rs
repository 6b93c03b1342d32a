// controller/command_handler.rs

use crate::analyzer::logic_type_options;
use crate::model::{Catalog, SortKey, ViewState};
use tracing::{debug, info};

pub const HELP: &str = "📋 Available commands:\n\
    /search <text> — filter by brand or model (no text clears)\n\
    /fuzzy — toggle fuzzy-logic-only\n\
    /pot — toggle removable-pot-only\n\
    /clean — toggle self-clean-only\n\
    /logic <type> — require a logic type (no type clears)\n\
    /logics — list logic types in the dataset\n\
    /sort <key> — capacity_asc, capacity_desc, confidence_desc, price_asc, price_desc, none\n\
    /reset — clear search, filters and sort\n\
    /state — show the current view state\n\
    /help — command list\n\
    /quit — exit";

#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    /// The view state changed; the view must be recomputed.
    Recompute,
    /// Nothing changed; show this text.
    Reply(String),
    Quit,
}

/// Applies one line of input to `state`. Plain text is treated as a search.
pub fn handle_command(input: &str, state: &mut ViewState, catalog: &Catalog) -> CommandOutcome {
    let input = input.trim();
    debug!("Handling command: {}", input);

    if !input.starts_with('/') {
        state.search_text = input.to_string();
        return CommandOutcome::Recompute;
    }

    let (command, arg) = match input.split_once(char::is_whitespace) {
        Some((command, arg)) => (command, arg.trim()),
        None => (input, ""),
    };

    match command {
        "/search" => {
            state.search_text = arg.to_string();
            CommandOutcome::Recompute
        }
        "/fuzzy" => {
            state.fuzzy_only = !state.fuzzy_only;
            CommandOutcome::Recompute
        }
        "/pot" => {
            state.removable_pot_only = !state.removable_pot_only;
            CommandOutcome::Recompute
        }
        "/clean" => {
            state.self_clean_only = !state.self_clean_only;
            CommandOutcome::Recompute
        }
        "/logic" => {
            state.logic_type = arg.to_string();
            CommandOutcome::Recompute
        }
        "/sort" => {
            let key = SortKey::from_key(arg);
            if key == SortKey::None && arg != SortKey::None.as_key() && !arg.is_empty() {
                info!("Unrecognized sort key '{}', keeping dataset order", arg);
            }
            state.sort = key;
            CommandOutcome::Recompute
        }
        "/reset" => {
            *state = ViewState::default();
            CommandOutcome::Recompute
        }
        "/logics" => {
            let options = logic_type_options(&catalog.items);
            if options.is_empty() {
                CommandOutcome::Reply("📭 No logic types in the dataset.".to_string())
            } else {
                CommandOutcome::Reply(format!("⚙️ Logic types:\n{}", options.join("\n")))
            }
        }
        "/state" => CommandOutcome::Reply(describe_state(state)),
        "/help" => CommandOutcome::Reply(HELP.to_string()),
        "/quit" | "/exit" => CommandOutcome::Quit,
        _ => CommandOutcome::Reply(
            "🤖 Unknown command. Type /help for a list of commands.".to_string(),
        ),
    }
}

pub fn describe_state(state: &ViewState) -> String {
    let on_off = |flag: bool| if flag { "on" } else { "off" };
    format!(
        "🔎 Search: \"{}\"\n🧠 Fuzzy only: {}\n🍲 Removable pot only: {}\n🧽 Self clean only: {}\n⚙️ Logic type: {}\n↕️ Sort: {}",
        state.search_text,
        on_off(state.fuzzy_only),
        on_off(state.removable_pot_only),
        on_off(state.self_clean_only),
        if state.logic_type.is_empty() { "any" } else { state.logic_type.as_str() },
        state.sort.as_key()
    )
}
