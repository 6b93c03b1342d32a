// Dataset loading: fetch the raw JSON once and hand the core a snapshot.

pub mod fetcher;
pub mod traits;

pub use fetcher::{FileSource, HttpSource, source_for};
pub use traits::DatasetSource;

use crate::model::Catalog;
use crate::normalizer::normalize_dataset;
use tracing::{info, warn};

/// Never fails: a source error yields an empty catalog marked as failed.
pub async fn load_catalog(source: &dyn DatasetSource) -> Catalog {
    info!("Loading dataset from {}...", source.describe());
    match source.fetch().await {
        Ok(raw) => {
            let items = normalize_dataset(&raw);
            info!("Loaded {} models", items.len());
            Catalog::loaded(items)
        }
        Err(e) => {
            warn!("Dataset load error: {}", e);
            Catalog::failed(e.to_string())
        }
    }
}
