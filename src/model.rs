// Core structs: Item, ViewState, Catalog
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Whether a value was given by the source or derived from something else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    Stated,
    Inferred,
    #[default]
    Unknown,
}

impl Provenance {
    /// Lenient parse: anything that is not a known tag is `Unknown`.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "stated" => Provenance::Stated,
            "inferred" => Provenance::Inferred,
            _ => Provenance::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Provenance::Stated => "stated",
            Provenance::Inferred => "inferred",
            Provenance::Unknown => "unknown",
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Provenance::Stated => "Explicitly stated by manufacturer",
            Provenance::Inferred => "Inferred from similar models",
            Provenance::Unknown => "Provenance not recorded",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Capacity {
    /// Uncooked quantity; `None` when the source has no usable figure.
    pub value: Option<f64>,
    pub unit: String,
    pub provenance: Provenance,
    /// Cooked quantity, kept for display only.
    pub cooked: Option<f64>,
    pub raw_statement: Option<String>,
}

impl Default for Capacity {
    fn default() -> Self {
        Self {
            value: None,
            unit: "cups".to_string(),
            provenance: Provenance::Unknown,
            cooked: None,
            raw_statement: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Flag {
    pub value: bool,
    pub provenance: Provenance,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Features {
    pub fuzzy_logic: Flag,
    pub removable_pot: bool,
    pub self_clean: bool,
    pub logic_type: Option<String>,
    pub pot_material: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Analysis {
    /// Always within `0..=5` when present.
    pub confidence: Option<u8>,
    pub complaints: Vec<String>,
    pub source_url: Option<String>,
}

/// Canonical catalog entry. Built once by the normalizer, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub brand: String,
    pub model: String,
    pub capacity: Capacity,
    pub features: Features,
    pub price: Option<PriceRange>,
    pub analysis: Analysis,
}

impl Default for Item {
    fn default() -> Self {
        Self {
            brand: "Unknown Brand".to_string(),
            model: "Unknown Model".to_string(),
            capacity: Capacity::default(),
            features: Features::default(),
            price: None,
            analysis: Analysis::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    CapacityAsc,
    CapacityDesc,
    ConfidenceDesc,
    PriceAsc,
    PriceDesc,
    #[default]
    None,
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        SortKey::CapacityAsc,
        SortKey::CapacityDesc,
        SortKey::ConfidenceDesc,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::None,
    ];

    /// Unrecognized keys map to `SortKey::None`.
    pub fn from_key(key: &str) -> Self {
        match key.trim() {
            "capacity_asc" => SortKey::CapacityAsc,
            "capacity_desc" => SortKey::CapacityDesc,
            "confidence_desc" => SortKey::ConfidenceDesc,
            "price_asc" => SortKey::PriceAsc,
            "price_desc" => SortKey::PriceDesc,
            _ => SortKey::None,
        }
    }

    pub fn as_key(&self) -> &'static str {
        match self {
            SortKey::CapacityAsc => "capacity_asc",
            SortKey::CapacityDesc => "capacity_desc",
            SortKey::ConfidenceDesc => "confidence_desc",
            SortKey::PriceAsc => "price_asc",
            SortKey::PriceDesc => "price_desc",
            SortKey::None => "none",
        }
    }
}

impl<'de> Deserialize<'de> for SortKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let key = String::deserialize(deserializer)?;
        Ok(SortKey::from_key(&key))
    }
}

/// Search text, filter toggles and sort key currently selected by the user.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewState {
    pub search_text: String,
    pub fuzzy_only: bool,
    pub removable_pot_only: bool,
    pub self_clean_only: bool,
    /// Empty string means any logic type.
    pub logic_type: String,
    pub sort: SortKey,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    Loaded,
    Failed(String),
}

/// Immutable dataset snapshot handed to the view pipeline.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub items: Vec<Item>,
    pub loaded_at: DateTime<Utc>,
    pub status: LoadStatus,
}

impl Catalog {
    pub fn loaded(items: Vec<Item>) -> Self {
        Self {
            items,
            loaded_at: Utc::now(),
            status: LoadStatus::Loaded,
        }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            items: Vec::new(),
            loaded_at: Utc::now(),
            status: LoadStatus::Failed(reason.into()),
        }
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("request timed out")]
    Timeout,

    #[error("unexpected response status {0}")]
    InvalidResponse(u16),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<reqwest::Error> for LoadError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LoadError::Timeout
        } else {
            LoadError::Http(err.to_string())
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}
