//! Variation resolution for configurable products.
//!
//! A [`VariationCatalog`] holds one product's attribute axes and variation
//! records. [`resolve`] maps a (possibly partial) [`Selection`] onto the
//! catalog, and [`SelectionController`] wraps that in a small state machine
//! for a single shopping session. [`DisplayPayload`] turns the result into
//! something a storefront can render.

pub mod app_config;
pub mod axis;
pub mod catalog;
pub mod catalog_file;
pub mod config;
pub mod controller;
pub mod display;
pub mod error;
pub mod format;
pub mod resolver;
pub mod selection;
pub mod state;
pub mod variation;

#[cfg(test)]
pub(crate) mod test_support;

pub use app_config::{AppConfig, Environment};
pub use axis::{AttributeAxis, AxisOption};
pub use catalog::{VariationCatalog, VariationFilter};
pub use catalog_file::{load_catalog, parse_catalog, CatalogFile, LoadedCatalog};
pub use config::{load_app_config, load_app_config_from_env};
pub use controller::SelectionController;
pub use display::{
    sale_percentage, DisplayPayload, PriceDisplay, PriceRange, QuantityBounds, StockLabel,
    UNAVAILABLE_MESSAGE,
};
pub use error::{ConfigError, ResolutionAmbiguous, SelectionError, ValidationError};
pub use format::{CurrencyPosition, PriceFormat};
pub use resolver::{matches, resolve};
pub use selection::Selection;
pub use state::{ResolvedState, SelectionStatus};
pub use variation::{AxisValue, VariationRecord};
