//! Turns a [`ResolvedState`] into what a storefront shows next to the
//! add-to-cart button: a price (or range), a stock label, quantity bounds,
//! or an explicit "unavailable" marker.

use std::fmt;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::catalog::VariationCatalog;
use crate::format::PriceFormat;
use crate::state::{ResolvedState, SelectionStatus};
use crate::variation::VariationRecord;

/// Shown when every axis is chosen but no purchasable variation fits.
pub const UNAVAILABLE_MESSAGE: &str =
    "This combination is unavailable. Please choose a different combination.";

/// Percentage saved on a sale, rounded half up to a whole number.
///
/// Returns `None` unless `regular` is positive and above `price`, or when
/// the percentage does not fit a `Decimal`. Simple products and resolved
/// variations share this so the badge reads the same.
#[must_use]
pub fn sale_percentage(regular: Decimal, price: Decimal) -> Option<u32> {
    if regular <= Decimal::ZERO || price >= regular {
        return None;
    }
    let percent = regular
        .checked_sub(price)?
        .checked_div(regular)?
        .checked_mul(Decimal::ONE_HUNDRED)?;
    percent
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
}

/// Lowest and highest price across purchasable, in-stock variations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Decimal,
    pub max: Decimal,
}

impl PriceRange {
    /// `None` for an empty iterator.
    pub fn from_prices<I>(prices: I) -> Option<Self>
    where
        I: IntoIterator<Item = Decimal>,
    {
        prices.into_iter().fold(None, |range, price| {
            Some(match range {
                None => PriceRange {
                    min: price,
                    max: price,
                },
                Some(PriceRange { min, max }) => PriceRange {
                    min: min.min(price),
                    max: max.max(price),
                },
            })
        })
    }

    /// All variations cost the same, so a single price is shown.
    #[must_use]
    pub fn is_single(&self) -> bool {
        self.min == self.max
    }

    #[must_use]
    pub fn render(&self, format: &PriceFormat) -> String {
        if self.is_single() {
            format.format(self.min)
        } else {
            format!("{} – {}", format.format(self.min), format.format(self.max))
        }
    }
}

/// Exact price of a resolved variation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceDisplay {
    pub price: Option<Decimal>,
    pub regular_price: Option<Decimal>,
    pub on_sale: bool,
    pub sale_percentage: Option<u32>,
}

impl PriceDisplay {
    #[must_use]
    pub fn for_variation(variation: &VariationRecord) -> Self {
        let sale_percentage = match (variation.regular_price, variation.price) {
            (Some(regular), Some(price)) => sale_percentage(regular, price),
            _ => None,
        };
        Self {
            price: variation.price,
            regular_price: variation.regular_price,
            on_sale: variation.is_on_sale(),
            sale_percentage,
        }
    }

    #[must_use]
    pub fn render(&self, format: &PriceFormat) -> String {
        match (self.price, self.regular_price) {
            (Some(price), Some(regular)) if self.on_sale => {
                let mut text = format!("{} (was {})", format.format(price), format.format(regular));
                if let Some(percent) = self.sale_percentage {
                    text.push_str(&format!(" -{percent}%"));
                }
                text
            }
            (Some(price), _) => format.format(price),
            (None, _) => String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StockLabel {
    InStock,
    OutOfStock,
}

impl StockLabel {
    #[must_use]
    pub fn for_variation(variation: &VariationRecord) -> Self {
        if variation.is_in_stock {
            StockLabel::InStock
        } else {
            StockLabel::OutOfStock
        }
    }
}

impl fmt::Display for StockLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockLabel::InStock => write!(f, "In stock"),
            StockLabel::OutOfStock => write!(f, "Out of stock"),
        }
    }
}

/// Purchase quantity limits for the quantity input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuantityBounds {
    pub min: Option<u32>,
    pub max: Option<u32>,
}

/// Display payload for one resolved state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DisplayPayload {
    /// A single variation matched.
    Variation {
        variation_id: String,
        sku: Option<String>,
        price: PriceDisplay,
        stock: StockLabel,
        quantity: QuantityBounds,
    },
    /// Every axis is chosen but nothing can be bought: a dead end, not
    /// "keep choosing".
    Unavailable { message: String },
    /// Some axis is still open; show the catalog-wide range.
    Incomplete { price_range: Option<PriceRange> },
}

impl DisplayPayload {
    #[must_use]
    pub fn from_state(state: &ResolvedState, catalog: &VariationCatalog) -> Self {
        match (state.status(), &state.matched_variation) {
            (SelectionStatus::Resolved, Some(variation)) => DisplayPayload::Variation {
                variation_id: variation.id.clone(),
                sku: variation.sku.clone(),
                price: PriceDisplay::for_variation(variation),
                stock: StockLabel::for_variation(variation),
                quantity: QuantityBounds {
                    min: variation.min_quantity,
                    max: variation.max_quantity,
                },
            },
            (SelectionStatus::Incomplete, _) => DisplayPayload::Incomplete {
                price_range: catalog.price_range(),
            },
            _ => DisplayPayload::Unavailable {
                message: UNAVAILABLE_MESSAGE.to_string(),
            },
        }
    }

    /// Whether the add-to-cart action should be enabled.
    #[must_use]
    pub fn purchase_enabled(&self) -> bool {
        matches!(self, DisplayPayload::Variation { .. })
    }

    /// One-line plain-text rendering.
    #[must_use]
    pub fn render(&self, format: &PriceFormat) -> String {
        match self {
            DisplayPayload::Variation { price, stock, .. } => {
                let price = price.render(format);
                if price.is_empty() {
                    stock.to_string()
                } else {
                    format!("{price} · {stock}")
                }
            }
            DisplayPayload::Unavailable { message } => message.clone(),
            DisplayPayload::Incomplete { price_range } => price_range
                .map(|range| range.render(format))
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
#[path = "display_test.rs"]
mod tests;
