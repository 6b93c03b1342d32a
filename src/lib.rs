//! Catalog browser core for rice-cooker datasets.
//!
//! Load a dataset once with [`source::load_catalog`], then call
//! [`view::recompute`] with the current [`model::ViewState`] whenever the user
//! changes the search text, a filter toggle or the sort key.

pub mod analyzer;
pub mod config;
pub mod controller;
pub mod model;
pub mod normalizer;
pub mod render;
pub mod source;
pub mod utils;
pub mod view;

pub use model::{Catalog, Item, SortKey, ViewState};
pub use normalizer::normalize_dataset;
pub use view::{CatalogView, recompute};
