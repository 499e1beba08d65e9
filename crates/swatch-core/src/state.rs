use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::error::ResolutionAmbiguous;
use crate::selection::Selection;
use crate::variation::VariationRecord;

/// Where a selection stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionStatus {
    /// At least one axis is unset: keep choosing.
    Incomplete,
    /// Every axis is set and exactly one variation matched.
    Resolved,
    /// Every axis is set but nothing purchasable matched: a dead end.
    Unavailable,
}

/// Outcome of resolving one selection against one catalog. Derived, never
/// stored; recompute it whenever the selection changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedState {
    /// The selection this state was computed from.
    pub selection: Selection,
    pub matched_variation: Option<VariationRecord>,
    /// Per axis, the option slugs that still lead to a purchasable variation
    /// given the other chosen axes. Every axis of the catalog has an entry.
    pub available_options: BTreeMap<String, BTreeSet<String>>,
    pub is_complete: bool,
    /// Set when a complete selection matched several variations.
    pub ambiguity: Option<ResolutionAmbiguous>,
}

impl ResolvedState {
    #[must_use]
    pub fn status(&self) -> SelectionStatus {
        match (self.is_complete, &self.matched_variation) {
            (false, _) => SelectionStatus::Incomplete,
            (true, Some(_)) => SelectionStatus::Resolved,
            (true, None) => SelectionStatus::Unavailable,
        }
    }

    /// Whether choosing `slug` on `axis` keeps the selection reachable.
    #[must_use]
    pub fn is_option_available(&self, axis: &str, slug: &str) -> bool {
        self.available_options
            .get(axis)
            .is_some_and(|slugs| slugs.contains(slug))
    }
}
