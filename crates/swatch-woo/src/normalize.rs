//! Normalization from WooCommerce payloads to a [`swatch_core::VariationCatalog`].
//!
//! Axis keys are settled here, once: the `attribute_` prefix WooCommerce puts
//! on variation attribute keys is stripped so variations, axes and default
//! attributes all share the bare taxonomy name (`pa_color`).

use std::collections::BTreeMap;

use swatch_core::{AttributeAxis, AxisOption, AxisValue, VariationCatalog, VariationRecord};

use crate::error::WooError;
use crate::types::{WooAttribute, WooVariableProduct, WooVariation};

const ATTRIBUTE_PREFIX: &str = "attribute_";

/// A WooCommerce product ready for resolution.
#[derive(Debug, Clone)]
pub struct NormalizedProduct {
    pub product_id: String,
    pub name: String,
    pub catalog: VariationCatalog,
    /// Default attributes keyed by axis name, empty values removed.
    pub default_attributes: BTreeMap<String, String>,
}

/// Parses a variable-product JSON document.
///
/// # Errors
///
/// Returns [`WooError::Deserialize`] when the document does not match the
/// expected shape.
pub fn parse_product_json(json: &str) -> Result<WooVariableProduct, WooError> {
    serde_json::from_str(json).map_err(|source| WooError::Deserialize {
        context: "variable product".to_string(),
        source,
    })
}

/// Normalizes a [`WooVariableProduct`] into a validated catalog.
///
/// # Errors
///
/// Returns [`WooError::Normalization`] if the product has no variations, and
/// [`WooError::Catalog`] if the resulting catalog fails validation.
pub fn normalize_product(product: WooVariableProduct) -> Result<NormalizedProduct, WooError> {
    let product_id = product.id.to_string();

    if product.variations.is_empty() {
        return Err(WooError::Normalization {
            product_id,
            reason: "product has no variations".into(),
        });
    }

    let axes: Vec<AttributeAxis> = product.attributes.into_iter().map(normalize_attribute).collect();
    let variations: Vec<VariationRecord> = product
        .variations
        .into_iter()
        .map(normalize_variation)
        .collect();

    let default_attributes = product
        .default_attributes
        .into_iter()
        .filter(|(_, slug)| !slug.is_empty())
        .map(|(axis, slug)| (axis_key(&axis).to_owned(), slug))
        .collect();

    let catalog = VariationCatalog::load(axes, variations).map_err(|source| WooError::Catalog {
        product_id: product_id.clone(),
        source,
    })?;

    tracing::debug!(
        product_id = %product_id,
        axes = catalog.axes().len(),
        variations = catalog.variations().len(),
        "normalized woocommerce product"
    );

    Ok(NormalizedProduct {
        product_id,
        name: product.name,
        catalog,
        default_attributes,
    })
}

fn normalize_attribute(attribute: WooAttribute) -> AttributeAxis {
    let label = attribute
        .label
        .filter(|l| !l.trim().is_empty())
        .unwrap_or_else(|| label_from_name(&attribute.name));
    let name = axis_key(&attribute.name).to_owned();
    let options = attribute
        .options
        .into_iter()
        .map(|o| AxisOption::new(o.slug, o.name))
        .collect();
    AttributeAxis::new(name, label, options)
}

fn normalize_variation(variation: WooVariation) -> VariationRecord {
    let assignment = variation
        .attributes
        .into_iter()
        .map(|(key, slug)| (axis_key(&key).to_owned(), AxisValue::from(slug)))
        .collect();

    VariationRecord {
        id: variation.variation_id.to_string(),
        // Treat empty SKU as absent.
        sku: variation.sku.filter(|s| !s.is_empty()),
        assignment,
        // A disabled variation cannot be bought even if WooCommerce reports
        // it as purchasable.
        is_purchasable: variation.is_purchasable && variation.variation_is_active,
        is_in_stock: variation.is_in_stock,
        price: variation.display_price,
        regular_price: variation.display_regular_price,
        min_quantity: variation.min_qty,
        max_quantity: variation.max_qty,
    }
}

/// `attribute_pa_color` → `pa_color`; keys without the prefix pass through.
fn axis_key(raw: &str) -> &str {
    raw.strip_prefix(ATTRIBUTE_PREFIX).unwrap_or(raw)
}

/// Builds a label like `"Color"` from `pa_color` or `"Cup size"` from `cup-size`.
fn label_from_name(name: &str) -> String {
    let bare = axis_key(name);
    let bare = bare.strip_prefix("pa_").unwrap_or(bare);
    let spaced = bare.replace(['-', '_'], " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
