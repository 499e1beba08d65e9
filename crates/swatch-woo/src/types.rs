//! WooCommerce variable-product payload types.
//!
//! ## Observed shape
//!
//! ### Variation `attributes`
//! Keyed `attribute_<taxonomy>` (`attribute_pa_color`) for global attributes
//! and `attribute_<sanitized name>` for custom ones. An empty string value
//! means the variation was saved with "Any …" for that attribute.
//!
//! ### Prices
//! `display_price` / `display_regular_price` are JSON numbers already
//! adjusted for the store's tax display setting. Either may be absent on
//! variations without a price.
//!
//! ### `min_qty` / `max_qty`
//! `min_qty` is usually `1`. `max_qty` is `""` (or `-1` on some stores) when
//! the quantity is unlimited, and a number when stock management caps it.
//!
//! ### `default_attributes`
//! Keyed by taxonomy without the `attribute_` prefix, e.g. `{"pa_color": "red"}`.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

fn default_true() -> bool {
    true
}

/// A variable product together with its attribute definitions and the
/// output of `get_available_variations()`.
#[derive(Debug, Deserialize)]
pub struct WooVariableProduct {
    /// WooCommerce post ID of the parent product.
    pub id: i64,

    pub name: String,

    /// Attributes flagged "Used for variations", in the product's display order.
    pub attributes: Vec<WooAttribute>,

    pub variations: Vec<WooVariation>,

    #[serde(default)]
    pub default_attributes: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
pub struct WooAttribute {
    /// Taxonomy (`pa_color`) or sanitized custom attribute name.
    pub name: String,

    /// Display label. Absent in some payloads; derived from `name` then.
    #[serde(default)]
    pub label: Option<String>,

    pub options: Vec<WooAttributeOption>,
}

#[derive(Debug, Deserialize)]
pub struct WooAttributeOption {
    pub slug: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct WooVariation {
    pub variation_id: i64,

    /// Empty string when no SKU is set.
    #[serde(default)]
    pub sku: Option<String>,

    /// `attribute_<axis>` to slug, `""` for "any".
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,

    #[serde(default)]
    pub display_price: Option<Decimal>,

    #[serde(default)]
    pub display_regular_price: Option<Decimal>,

    #[serde(default = "default_true")]
    pub is_in_stock: bool,

    #[serde(default = "default_true")]
    pub is_purchasable: bool,

    /// `false` when the variation is disabled in the admin.
    #[serde(default = "default_true")]
    pub variation_is_active: bool,

    #[serde(default, deserialize_with = "deserialize_quantity")]
    pub min_qty: Option<u32>,

    #[serde(default, deserialize_with = "deserialize_quantity")]
    pub max_qty: Option<u32>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawQuantity {
    Number(i64),
    Text(String),
}

/// Accepts a number, a numeric string, `""`, `null` or a negative number;
/// the last three mean "no limit".
fn deserialize_quantity<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let number = match Option::<RawQuantity>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(RawQuantity::Number(n)) => n,
        Some(RawQuantity::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(None);
            }
            text.parse::<i64>()
                .map_err(|e| D::Error::custom(format!("invalid quantity \"{text}\": {e}")))?
        }
    };

    if number < 0 {
        return Ok(None);
    }
    u32::try_from(number)
        .map(Some)
        .map_err(|_| D::Error::custom(format!("quantity {number} is out of range")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quantities(min: serde_json::Value, max: serde_json::Value) -> (Option<u32>, Option<u32>) {
        let variation: WooVariation = serde_json::from_value(serde_json::json!({
            "variation_id": 1,
            "attributes": {},
            "min_qty": min,
            "max_qty": max,
        }))
        .expect("valid variation");
        (variation.min_qty, variation.max_qty)
    }

    #[test]
    fn quantity_accepts_numbers() {
        assert_eq!(quantities(1.into(), 10.into()), (Some(1), Some(10)));
    }

    #[test]
    fn quantity_empty_string_means_unlimited() {
        assert_eq!(quantities(1.into(), "".into()), (Some(1), None));
    }

    #[test]
    fn quantity_negative_means_unlimited() {
        assert_eq!(quantities(1.into(), (-1).into()), (Some(1), None));
    }

    #[test]
    fn quantity_numeric_string_is_parsed() {
        assert_eq!(quantities("2".into(), " 6 ".into()), (Some(2), Some(6)));
    }

    #[test]
    fn quantity_null_is_none() {
        assert_eq!(
            quantities(serde_json::Value::Null, serde_json::Value::Null),
            (None, None)
        );
    }

    #[test]
    fn quantity_garbage_is_rejected() {
        let result: Result<WooVariation, _> = serde_json::from_value(serde_json::json!({
            "variation_id": 1,
            "max_qty": "lots",
        }));
        assert!(result.is_err());
    }

    #[test]
    fn flags_default_to_true() {
        let variation: WooVariation =
            serde_json::from_value(serde_json::json!({"variation_id": 5})).unwrap();
        assert!(variation.is_in_stock);
        assert!(variation.is_purchasable);
        assert!(variation.variation_is_active);
        assert!(variation.display_price.is_none());
    }
}
