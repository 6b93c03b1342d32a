//! Turns loosely-typed dataset JSON into canonical [`Item`]s.
//!
//! Every dataset revision nests capacity and feature data under different
//! keys. All of that drift is resolved here; nothing downstream sees raw JSON.
use crate::model::{Analysis, Capacity, Features, Flag, Item, PriceRange, Provenance};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawFlag {
    Plain(bool),
    Tagged {
        value: bool,
        #[serde(default)]
        provenance: Option<Value>,
    },
}

/// Accepts either a bare list of items or an object wrapping one under `items`.
pub fn normalize_dataset(raw: &Value) -> Vec<Item> {
    let (shape, elements): (&str, &[Value]) = match raw {
        Value::Array(list) => ("list", list.as_slice()),
        Value::Object(obj) => match obj.get("items") {
            Some(Value::Array(list)) => ("wrapped", list.as_slice()),
            _ => ("object without item list", &[]),
        },
        _ => ("unsupported", &[]),
    };
    debug!("Normalizing {} dataset entries ({} shape)", elements.len(), shape);

    elements.iter().map(normalize_item).collect()
}

/// Never fails: a malformed entry becomes the default-filled item.
pub fn normalize_item(raw: &Value) -> Item {
    let Some(obj) = raw.as_object() else {
        debug!("Dataset entry is not an object, using defaults");
        return Item::default();
    };
    let defaults = Item::default();

    let capacity_raw = obj
        .get("capacity")
        .filter(|v| !v.is_null())
        .or_else(|| lookup(obj.get("specs"), &["capacity"]));
    let price_raw = lookup(Some(raw), &["price", "price_range"]);

    Item {
        brand: text(obj.get("brand")).unwrap_or(defaults.brand),
        model: text(obj.get("model")).unwrap_or(defaults.model),
        capacity: resolve_capacity(capacity_raw),
        features: resolve_features(raw),
        price: resolve_price(price_raw),
        analysis: resolve_analysis(obj.get("analysis")),
    }
}

/// Each field of the capacity object resolves on its own, so one badly typed
/// entry never discards its siblings.
fn resolve_capacity(raw: Option<&Value>) -> Capacity {
    let defaults = Capacity::default();
    match raw {
        Some(Value::Number(n)) => Capacity {
            value: n.as_f64().and_then(non_negative),
            ..defaults
        },
        Some(fields @ Value::Object(_)) => {
            let raw = Some(fields);
            Capacity {
                value: number(raw, &["value", "uncooked", "uncooked_cups"]).and_then(non_negative),
                unit: text(lookup(raw, &["unit"])).unwrap_or(defaults.unit),
                provenance: provenance_of(lookup(raw, &["provenance"])),
                cooked: number(raw, &["cooked", "cooked_cups"]).and_then(non_negative),
                raw_statement: text(lookup(raw, &["raw_statement"])),
            }
        }
        _ => defaults,
    }
}

fn resolve_features(item: &Value) -> Features {
    let features = item.get("features");
    let technology = item.get("technology");
    let construction = item.get("construction");

    let fuzzy_logic = parse::<RawFlag>(
        lookup(features, &["fuzzyLogic", "fuzzy_logic"])
            .or_else(|| lookup(technology, &["has_fuzzy_logic", "fuzzy_logic"])),
    )
    .map(|flag| match flag {
        RawFlag::Plain(value) => Flag { value, provenance: Provenance::Unknown },
        RawFlag::Tagged { value, provenance } => Flag {
            value,
            provenance: provenance_of(provenance.as_ref()),
        },
    })
    .unwrap_or_default();

    let removable_pot = flag_value(
        lookup(features, &["removablePot", "removable_pot"])
            .or_else(|| lookup(construction, &["is_inner_pot_removable", "removable_pot"])),
    );
    let self_clean = flag_value(
        lookup(features, &["selfClean", "self_clean"])
            .or_else(|| lookup(construction, &["self_clean"]))
            .or_else(|| lookup(technology, &["has_self_clean", "self_clean"])),
    );
    let logic_type = text(
        lookup(features, &["logicType", "logic_type"])
            .or_else(|| lookup(technology, &["logic_type"])),
    );
    let pot_material = text(
        lookup(features, &["potMaterial", "pot_material"])
            .or_else(|| lookup(construction, &["inner_pot_material", "pot_material"])),
    );

    Features {
        fuzzy_logic,
        removable_pot,
        self_clean,
        logic_type,
        pot_material,
    }
}

fn resolve_price(raw: Option<&Value>) -> Option<PriceRange> {
    let (min, max) = match raw? {
        Value::Number(n) => (n.as_f64(), n.as_f64()),
        range @ Value::Object(_) => {
            let min = number(Some(range), &["min", "low"]);
            let max = number(Some(range), &["max", "high"]);
            (min.or(max), max.or(min))
        }
        _ => return None,
    };
    let (min, max) = (non_negative(min?)?, non_negative(max?)?);

    Some(if min <= max {
        PriceRange { min, max }
    } else {
        PriceRange { min: max, max: min }
    })
}

fn resolve_analysis(raw: Option<&Value>) -> Analysis {
    let confidence = number(raw, &["confidence", "confidence_score"])
        .filter(|score| score.is_finite())
        .map(|score| score.round().clamp(0.0, 5.0) as u8);

    let complaints = lookup(raw, &["complaints", "aggregated_complaints"])
        .and_then(Value::as_array)
        .map(|list| list.iter().filter_map(|entry| text(Some(entry))).collect())
        .unwrap_or_default();

    Analysis {
        confidence,
        complaints,
        source_url: text(lookup(raw, &["sourceUrl", "source_url"])),
    }
}

/// First non-null value among `keys` inside `container`.
fn lookup<'a>(container: Option<&'a Value>, keys: &[&str]) -> Option<&'a Value> {
    let obj = container?.as_object()?;
    keys.iter()
        .filter_map(|key| obj.get(*key))
        .find(|value| !value.is_null())
}

fn parse<T: DeserializeOwned>(value: Option<&Value>) -> Option<T> {
    value.and_then(|v| T::deserialize(v).ok())
}

fn flag_value(value: Option<&Value>) -> bool {
    match parse::<RawFlag>(value) {
        Some(RawFlag::Plain(value)) | Some(RawFlag::Tagged { value, .. }) => value,
        None => false,
    }
}

fn provenance_of(value: Option<&Value>) -> Provenance {
    value
        .and_then(Value::as_str)
        .map(Provenance::from_tag)
        .unwrap_or_default()
}

fn text(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// First numeric value among `keys`; entries of any other type are skipped.
fn number(container: Option<&Value>, keys: &[&str]) -> Option<f64> {
    let obj = container?.as_object()?;
    keys.iter().find_map(|key| obj.get(*key).and_then(Value::as_f64))
}

fn non_negative(value: f64) -> Option<f64> {
    value.is_finite().then(|| value.max(0.0))
}
