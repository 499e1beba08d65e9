use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::VariationCatalog;
use crate::error::SelectionError;

/// The shopper's in-progress choice: axis name to chosen option slug.
///
/// Unset axes are simply absent. Setting an axis to the empty string clears
/// it, matching how an HTML `<select>` reports "Choose an option".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection {
    chosen: BTreeMap<String, String>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The chosen slug for `axis`, if any.
    #[must_use]
    pub fn get(&self, axis: &str) -> Option<&str> {
        self.chosen.get(axis).map(String::as_str)
    }

    #[must_use]
    pub fn is_set(&self, axis: &str) -> bool {
        self.chosen.contains_key(axis)
    }

    /// Sets `axis` to `slug`, or clears it when `slug` is empty.
    ///
    /// No validation happens here; see [`Selection::validate`].
    pub fn set(&mut self, axis: impl Into<String>, slug: impl Into<String>) {
        let axis = axis.into();
        let slug = slug.into();
        if slug.is_empty() {
            self.chosen.remove(&axis);
        } else {
            self.chosen.insert(axis, slug);
        }
    }

    pub fn clear(&mut self, axis: &str) {
        self.chosen.remove(axis);
    }

    pub fn clear_all(&mut self) {
        self.chosen.clear();
    }

    /// Chosen `(axis, slug)` pairs in axis-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.chosen.iter().map(|(a, s)| (a.as_str(), s.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.chosen.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chosen.is_empty()
    }

    /// Checks that every chosen axis exists in `catalog` and every slug is one
    /// of that axis's options.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::InvalidOption`] for the first offending pair.
    pub fn validate(&self, catalog: &VariationCatalog) -> Result<(), SelectionError> {
        for (axis, slug) in self.iter() {
            let known = catalog.axis(axis).is_some_and(|a| a.has_option(slug));
            if !known {
                return Err(SelectionError::InvalidOption {
                    axis: axis.to_owned(),
                    slug: slug.to_owned(),
                });
            }
        }
        Ok(())
    }
}

impl<K, V> FromIterator<(K, V)> for Selection
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut selection = Selection::new();
        for (axis, slug) in iter {
            selection.set(axis, slug);
        }
        selection
    }
}
