use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

static ANY: AxisValue = AxisValue::Any;

/// A variation's value on a single axis.
///
/// On the wire this is a plain string where `""` stands for [`AxisValue::Any`]
/// (the WooCommerce convention). Inside the engine `Any` is its own value so
/// it is never confused with an axis the shopper has not chosen yet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AxisValue {
    /// Accepts every option of the axis.
    Any,
    Slug(String),
}

impl AxisValue {
    /// Returns `true` if this value is compatible with the chosen `slug`.
    #[must_use]
    pub fn accepts(&self, slug: &str) -> bool {
        match self {
            AxisValue::Any => true,
            AxisValue::Slug(own) => own == slug,
        }
    }

    #[must_use]
    pub fn is_any(&self) -> bool {
        matches!(self, AxisValue::Any)
    }
}

impl From<String> for AxisValue {
    fn from(raw: String) -> Self {
        if raw.is_empty() {
            AxisValue::Any
        } else {
            AxisValue::Slug(raw)
        }
    }
}

impl From<&str> for AxisValue {
    fn from(raw: &str) -> Self {
        AxisValue::from(raw.to_owned())
    }
}

impl From<AxisValue> for String {
    fn from(value: AxisValue) -> Self {
        match value {
            AxisValue::Any => String::new(),
            AxisValue::Slug(slug) => slug,
        }
    }
}

impl fmt::Display for AxisValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisValue::Any => write!(f, "any"),
            AxisValue::Slug(slug) => write!(f, "{slug}"),
        }
    }
}

fn default_true() -> bool {
    true
}

/// A concrete SKU of a configurable product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariationRecord {
    /// Unique within its catalog.
    pub id: String,
    #[serde(default)]
    pub sku: Option<String>,
    /// Axis name to value. Axes missing from the map behave as [`AxisValue::Any`].
    #[serde(default)]
    pub assignment: BTreeMap<String, AxisValue>,
    #[serde(default = "default_true")]
    pub is_purchasable: bool,
    #[serde(default = "default_true")]
    pub is_in_stock: bool,
    /// Current selling price, sale price included.
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub regular_price: Option<Decimal>,
    #[serde(default)]
    pub min_quantity: Option<u32>,
    #[serde(default)]
    pub max_quantity: Option<u32>,
}

impl VariationRecord {
    /// Creates a purchasable, in-stock variation with no price and an empty
    /// assignment (every axis is "any").
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            sku: None,
            assignment: BTreeMap::new(),
            is_purchasable: true,
            is_in_stock: true,
            price: None,
            regular_price: None,
            min_quantity: None,
            max_quantity: None,
        }
    }

    /// Sets the value for one axis, returning `self` for chaining.
    #[must_use]
    pub fn with_value(mut self, axis: impl Into<String>, value: impl Into<AxisValue>) -> Self {
        self.assignment.insert(axis.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_price(mut self, price: Decimal, regular_price: Option<Decimal>) -> Self {
        self.price = Some(price);
        self.regular_price = regular_price;
        self
    }

    #[must_use]
    pub fn with_stock(mut self, is_in_stock: bool) -> Self {
        self.is_in_stock = is_in_stock;
        self
    }

    /// The value this variation carries for `axis`.
    #[must_use]
    pub fn value_for(&self, axis: &str) -> &AxisValue {
        self.assignment.get(axis).unwrap_or(&ANY)
    }

    /// Purchasable and in stock: the only variations a selection can resolve to.
    #[must_use]
    pub fn is_eligible(&self) -> bool {
        self.is_purchasable && self.is_in_stock
    }

    /// `true` when a regular price is set and the selling price is below it.
    #[must_use]
    pub fn is_on_sale(&self) -> bool {
        matches!((self.price, self.regular_price), (Some(p), Some(r)) if p < r)
    }
}
