//! Immutable, validated variation space for one product.

use std::collections::{HashMap, HashSet};

use crate::axis::AttributeAxis;
use crate::display::PriceRange;
use crate::error::ValidationError;
use crate::variation::{AxisValue, VariationRecord};

/// Which variations [`VariationCatalog::variations_for`] yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariationFilter {
    All,
    Purchasable,
    InStock,
    /// Purchasable and in stock.
    Eligible,
}

impl VariationFilter {
    #[must_use]
    pub fn accepts(self, variation: &VariationRecord) -> bool {
        match self {
            VariationFilter::All => true,
            VariationFilter::Purchasable => variation.is_purchasable,
            VariationFilter::InStock => variation.is_in_stock,
            VariationFilter::Eligible => variation.is_eligible(),
        }
    }
}

/// One product's axes and variations, checked once at load and read-only
/// afterwards. Share it behind an `Arc` between sessions.
#[derive(Debug, Clone)]
pub struct VariationCatalog {
    axes: Vec<AttributeAxis>,
    variations: Vec<VariationRecord>,
    price_range: Option<PriceRange>,
}

impl VariationCatalog {
    /// Validates and builds a catalog.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when an axis is empty or repeated, an axis
    /// repeats an option slug, a variation id is repeated, a variation refers
    /// to an unknown axis or option, quantity bounds are inverted, or two
    /// purchasable in-stock variations carry identical assignments.
    pub fn load(
        axes: Vec<AttributeAxis>,
        variations: Vec<VariationRecord>,
    ) -> Result<Self, ValidationError> {
        validate_axes(&axes)?;
        validate_variations(&axes, &variations)?;

        let price_range = PriceRange::from_prices(
            variations
                .iter()
                .filter(|v| v.is_eligible())
                .filter_map(|v| v.price),
        );

        tracing::debug!(
            axes = axes.len(),
            variations = variations.len(),
            "loaded variation catalog"
        );

        Ok(Self {
            axes,
            variations,
            price_range,
        })
    }

    /// Axis names in input order, which is display order.
    pub fn axis_names(&self) -> impl Iterator<Item = &str> {
        self.axes.iter().map(|a| a.name.as_str())
    }

    #[must_use]
    pub fn axes(&self) -> &[AttributeAxis] {
        &self.axes
    }

    #[must_use]
    pub fn axis(&self, name: &str) -> Option<&AttributeAxis> {
        self.axes.iter().find(|a| a.name == name)
    }

    #[must_use]
    pub fn variations(&self) -> &[VariationRecord] {
        &self.variations
    }

    #[must_use]
    pub fn variation(&self, id: &str) -> Option<&VariationRecord> {
        self.variations.iter().find(|v| v.id == id)
    }

    /// Lazily yields the variations accepted by `filter`, in input order.
    pub fn variations_for(
        &self,
        filter: VariationFilter,
    ) -> impl Iterator<Item = &VariationRecord> + '_ {
        self.variations.iter().filter(move |v| filter.accepts(v))
    }

    /// Min/max price across purchasable in-stock variations. `None` when
    /// none of them has a price.
    #[must_use]
    pub fn price_range(&self) -> Option<PriceRange> {
        self.price_range
    }
}

/// The variation's values laid out in axis order.
fn assignment_key(axes: &[AttributeAxis], variation: &VariationRecord) -> Vec<AxisValue> {
    axes.iter()
        .map(|a| variation.value_for(&a.name).clone())
        .collect()
}

fn validate_axes(axes: &[AttributeAxis]) -> Result<(), ValidationError> {
    let mut seen_axes = HashSet::new();

    for axis in axes {
        if axis.options.is_empty() {
            return Err(ValidationError::EmptyAxis {
                axis: axis.name.clone(),
            });
        }

        if !seen_axes.insert(axis.name.as_str()) {
            return Err(ValidationError::DuplicateAxis {
                axis: axis.name.clone(),
            });
        }

        let mut seen_slugs = HashSet::new();
        for option in &axis.options {
            if !seen_slugs.insert(option.slug.as_str()) {
                return Err(ValidationError::DuplicateOption {
                    axis: axis.name.clone(),
                    slug: option.slug.clone(),
                });
            }
        }
    }

    Ok(())
}

fn validate_variations(
    axes: &[AttributeAxis],
    variations: &[VariationRecord],
) -> Result<(), ValidationError> {
    let mut seen_ids = HashSet::new();
    let mut seen_assignments: HashMap<Vec<AxisValue>, &str> = HashMap::new();

    for variation in variations {
        if !seen_ids.insert(variation.id.as_str()) {
            return Err(ValidationError::DuplicateVariation {
                id: variation.id.clone(),
            });
        }

        for (axis_name, value) in &variation.assignment {
            let Some(axis) = axes.iter().find(|a| &a.name == axis_name) else {
                return Err(ValidationError::UnknownAxis {
                    variation: variation.id.clone(),
                    axis: axis_name.clone(),
                });
            };
            if let AxisValue::Slug(slug) = value {
                if !axis.has_option(slug) {
                    return Err(ValidationError::UnknownOption {
                        variation: variation.id.clone(),
                        axis: axis_name.clone(),
                        slug: slug.clone(),
                    });
                }
            }
        }

        if let (Some(min), Some(max)) = (variation.min_quantity, variation.max_quantity) {
            if min > max {
                return Err(ValidationError::QuantityBounds {
                    variation: variation.id.clone(),
                    min,
                    max,
                });
            }
        }

        if variation.is_eligible() {
            let key = assignment_key(axes, variation);
            if let Some(first) = seen_assignments.insert(key, variation.id.as_str()) {
                return Err(ValidationError::DuplicateAssignment {
                    first: first.to_owned(),
                    second: variation.id.clone(),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
