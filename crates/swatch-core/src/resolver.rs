//! Pure resolution of a [`Selection`] against a [`VariationCatalog`].
//!
//! Nothing here holds state, so the same catalog can be resolved from any
//! number of sessions or threads at once. A call is a linear scan over the
//! variations per axis; there is no caching to invalidate.

use std::collections::BTreeSet;

use crate::axis::AttributeAxis;
use crate::catalog::{VariationCatalog, VariationFilter};
use crate::error::ResolutionAmbiguous;
use crate::selection::Selection;
use crate::state::ResolvedState;
use crate::variation::{AxisValue, VariationRecord};

/// Returns `true` if `variation` is compatible with every chosen axis of
/// `selection`. Unset axes impose no constraint.
#[must_use]
pub fn matches(variation: &VariationRecord, selection: &Selection) -> bool {
    selection
        .iter()
        .all(|(axis, slug)| variation.value_for(axis).accepts(slug))
}

/// Like [`matches`] but ignores whatever is chosen on `skip_axis`.
fn matches_except(variation: &VariationRecord, selection: &Selection, skip_axis: &str) -> bool {
    selection
        .iter()
        .filter(|(axis, _)| *axis != skip_axis)
        .all(|(axis, slug)| variation.value_for(axis).accepts(slug))
}

/// Computes the matched variation, per-axis availability and completeness
/// for `selection`.
///
/// Only purchasable, in-stock variations take part. A complete selection
/// that fits more than one of them resolves to no match and carries a
/// [`ResolutionAmbiguous`] in the returned state.
#[must_use]
pub fn resolve(catalog: &VariationCatalog, selection: &Selection) -> ResolvedState {
    let is_complete = catalog.axis_names().all(|axis| selection.is_set(axis));

    let (matched_variation, ambiguity) = if is_complete {
        match_complete(catalog, selection)
    } else {
        (None, None)
    };

    let available_options = catalog
        .axes()
        .iter()
        .map(|axis| (axis.name.clone(), available_for_axis(catalog, selection, axis)))
        .collect();

    tracing::trace!(
        chosen = selection.len(),
        is_complete,
        matched = matched_variation.as_ref().map(|v: &VariationRecord| v.id.as_str()),
        "resolved selection"
    );

    ResolvedState {
        selection: selection.clone(),
        matched_variation,
        available_options,
        is_complete,
        ambiguity,
    }
}

fn match_complete(
    catalog: &VariationCatalog,
    selection: &Selection,
) -> (Option<VariationRecord>, Option<ResolutionAmbiguous>) {
    let candidates: Vec<&VariationRecord> = catalog
        .variations_for(VariationFilter::Eligible)
        .filter(|v| matches(v, selection))
        .collect();

    match candidates.as_slice() {
        [] => (None, None),
        [only] => (Some((*only).clone()), None),
        several => {
            let variation_ids: Vec<String> = several.iter().map(|v| v.id.clone()).collect();
            tracing::warn!(
                variations = ?variation_ids,
                "complete selection matches several variations; treating as unavailable"
            );
            (None, Some(ResolutionAmbiguous { variation_ids }))
        }
    }
}

/// Slugs of `axis` that, substituted into the current selection with every
/// other chosen axis held fixed, still match an eligible variation.
fn available_for_axis(
    catalog: &VariationCatalog,
    selection: &Selection,
    axis: &AttributeAxis,
) -> BTreeSet<String> {
    let mut available = BTreeSet::new();

    for variation in catalog
        .variations_for(VariationFilter::Eligible)
        .filter(|v| matches_except(v, selection, &axis.name))
    {
        match variation.value_for(&axis.name) {
            // Accepts every substitution on this axis.
            AxisValue::Any => return axis.slugs().map(str::to_owned).collect(),
            AxisValue::Slug(slug) => {
                available.insert(slug.clone());
            }
        }
    }

    available
}

#[cfg(test)]
#[path = "resolver_test.rs"]
mod tests;
