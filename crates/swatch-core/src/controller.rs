//! Session-scoped selection state machine.

use std::fmt;
use std::sync::Arc;

use crate::catalog::VariationCatalog;
use crate::error::SelectionError;
use crate::resolver::resolve;
use crate::selection::Selection;
use crate::state::{ResolvedState, SelectionStatus};

type StateListener = Box<dyn FnMut(&ResolvedState) + Send>;

/// Owns one shopper's [`Selection`] against a shared catalog and keeps the
/// [`ResolvedState`] current after every change.
///
/// Status moves between `Incomplete`, `Resolved` and `Unavailable` for as
/// long as the session lives; there is no terminal state. A controller
/// belongs to one session and is not meant to be shared.
pub struct SelectionController {
    catalog: Arc<VariationCatalog>,
    selection: Selection,
    state: ResolvedState,
    seeded: bool,
    touched: bool,
    listeners: Vec<StateListener>,
}

impl SelectionController {
    /// Starts an empty selection.
    #[must_use]
    pub fn new(catalog: Arc<VariationCatalog>) -> Self {
        let selection = Selection::new();
        let state = resolve(&catalog, &selection);
        Self {
            catalog,
            selection,
            state,
            seeded: false,
            touched: false,
            listeners: Vec::new(),
        }
    }

    /// Starts a selection pre-filled with the product's default attributes.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::InvalidOption`] if a default names an
    /// unknown axis or option.
    pub fn with_defaults<I, K, V>(
        catalog: Arc<VariationCatalog>,
        defaults: I,
    ) -> Result<Self, SelectionError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut controller = Self::new(catalog);
        controller.seed_defaults(defaults)?;
        Ok(controller)
    }

    #[must_use]
    pub fn catalog(&self) -> &Arc<VariationCatalog> {
        &self.catalog
    }

    /// The latest resolved state. Reading it has no side effects.
    #[must_use]
    pub fn current_state(&self) -> &ResolvedState {
        &self.state
    }

    #[must_use]
    pub fn status(&self) -> SelectionStatus {
        self.state.status()
    }

    /// Registers a callback that receives every newly computed state.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&ResolvedState) + Send + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Chooses `slug` on `axis`, or clears the axis when `slug` is empty.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::InvalidOption`] when the axis does not exist
    /// or `slug` is not one of its options. The selection is left unchanged.
    pub fn set_option(&mut self, axis: &str, slug: &str) -> Result<&ResolvedState, SelectionError> {
        let valid = self
            .catalog
            .axis(axis)
            .is_some_and(|a| slug.is_empty() || a.has_option(slug));
        if !valid {
            tracing::debug!(axis, slug, "rejected invalid option");
            return Err(SelectionError::InvalidOption {
                axis: axis.to_owned(),
                slug: slug.to_owned(),
            });
        }

        self.selection.set(axis, slug);
        self.touched = true;
        Ok(self.refresh())
    }

    /// Clears every axis. The resulting status is `Incomplete` unless the
    /// catalog has no axes at all.
    pub fn reset(&mut self) -> &ResolvedState {
        self.selection.clear_all();
        self.touched = true;
        self.refresh()
    }

    /// Pre-selects the product's default attributes. Empty values are
    /// skipped, so a partial or empty default assignment is fine.
    ///
    /// Allowed once, and only before the shopper has changed anything.
    /// Either every default is applied or none is.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::AlreadySeeded`] on a repeat call or after
    /// any other mutation, and [`SelectionError::InvalidOption`] if a default
    /// is not a valid axis/option pair.
    pub fn seed_defaults<I, K, V>(&mut self, defaults: I) -> Result<&ResolvedState, SelectionError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        if self.seeded || self.touched {
            return Err(SelectionError::AlreadySeeded);
        }

        let seeded: Selection = defaults
            .into_iter()
            .map(|(axis, slug)| (axis.as_ref().to_owned(), slug.as_ref().to_owned()))
            .collect();
        seeded.validate(&self.catalog)?;

        tracing::debug!(defaults = seeded.len(), "seeded default attributes");
        self.selection = seeded;
        self.seeded = true;
        Ok(self.refresh())
    }

    fn refresh(&mut self) -> &ResolvedState {
        self.state = resolve(&self.catalog, &self.selection);
        for listener in &mut self.listeners {
            listener(&self.state);
        }
        &self.state
    }
}

impl fmt::Debug for SelectionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionController")
            .field("selection", &self.selection)
            .field("status", &self.state.status())
            .field("seeded", &self.seeded)
            .field("touched", &self.touched)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "controller_test.rs"]
mod tests;
