// Analyzer module: the pure stages between the snapshot and the cards.

pub mod filter;
pub mod sort;
pub mod summary;

// Re-export the stage entry points for ease of use.
pub use filter::{filter_items, matches};
pub use sort::sort_items;
pub use summary::{CatalogSummary, logic_type_options, summarize};
