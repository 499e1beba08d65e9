//! Loads a catalog from either supported document format.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use swatch_core::VariationCatalog;

use crate::CatalogArgs;

pub(crate) struct CatalogSource {
    pub(crate) catalog: VariationCatalog,
    pub(crate) default_attributes: BTreeMap<String, String>,
    /// Product name, when the document carries one.
    pub(crate) product_name: Option<String>,
}

/// Reads the catalog named by `args`, falling back to `default_path`.
pub(crate) fn load_source(args: &CatalogArgs, default_path: &Path) -> anyhow::Result<CatalogSource> {
    let path = args.path.as_deref().unwrap_or(default_path);

    if args.woo {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let product = swatch_woo::parse_product_json(&raw)?;
        let normalized = swatch_woo::normalize_product(product)
            .with_context(|| format!("failed to normalize {}", path.display()))?;
        return Ok(CatalogSource {
            catalog: normalized.catalog,
            default_attributes: normalized.default_attributes,
            product_name: Some(normalized.name),
        });
    }

    let loaded = swatch_core::load_catalog(path)?;
    Ok(CatalogSource {
        catalog: loaded.catalog,
        default_attributes: loaded.default_attributes,
        product_name: None,
    })
}
