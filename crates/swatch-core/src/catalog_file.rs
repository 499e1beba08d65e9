//! Catalog documents on disk.
//!
//! A catalog file is YAML (JSON also parses, being a YAML subset):
//!
//! ```yaml
//! axes:
//!   - name: pa_color
//!     label: Color
//!     options:
//!       - { slug: red, display_name: Red }
//! variations:
//!   - id: "101"
//!     assignment: { pa_color: red }
//!     price: "10.00"
//! default_attributes:
//!   pa_color: red
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::axis::AttributeAxis;
use crate::catalog::VariationCatalog;
use crate::variation::VariationRecord;
use crate::ConfigError;

#[derive(Debug, Deserialize)]
pub struct CatalogFile {
    pub axes: Vec<AttributeAxis>,
    pub variations: Vec<VariationRecord>,
    /// Starting selection for new sessions; may be partial or empty.
    #[serde(default)]
    pub default_attributes: BTreeMap<String, String>,
}

/// A validated catalog plus the defaults that came with it.
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub catalog: VariationCatalog,
    pub default_attributes: BTreeMap<String, String>,
}

/// Load and validate a catalog from a YAML or JSON file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_catalog(path: &Path) -> Result<LoadedCatalog, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CatalogFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let loaded = parse_catalog(&content)?;
    tracing::info!(
        path = %path.display(),
        axes = loaded.catalog.axes().len(),
        variations = loaded.catalog.variations().len(),
        "catalog file loaded"
    );
    Ok(loaded)
}

/// Parse and validate a catalog document held in memory.
///
/// # Errors
///
/// Returns [`ConfigError::CatalogFileParse`] for malformed documents and
/// [`ConfigError::Validation`] when the catalog itself is invalid.
pub fn parse_catalog(content: &str) -> Result<LoadedCatalog, ConfigError> {
    let file: CatalogFile = serde_yaml::from_str(content)?;
    let catalog = VariationCatalog::load(file.axes, file.variations)?;
    Ok(LoadedCatalog {
        catalog,
        default_attributes: file.default_attributes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    const TEE: &str = r#"
axes:
  - name: pa_color
    label: Color
    options:
      - { slug: red, display_name: Red }
      - { slug: blue, display_name: Blue }
  - name: pa_size
    label: Size
    options:
      - { slug: s, name: Small }
      - { slug: m, name: Medium }
variations:
  - id: "1"
    assignment: { pa_color: red, pa_size: s }
    price: "10.00"
  - id: "2"
    assignment: { pa_color: "", pa_size: m }
    price: "12.00"
    regular_price: "15.00"
    is_in_stock: false
default_attributes:
  pa_color: red
"#;

    #[test]
    fn parses_yaml_document() {
        let loaded = parse_catalog(TEE).unwrap();
        assert_eq!(
            loaded.catalog.axis_names().collect::<Vec<_>>(),
            vec!["pa_color", "pa_size"]
        );
        assert_eq!(loaded.catalog.variations().len(), 2);
        assert!(loaded.catalog.variation("2").unwrap().value_for("pa_color").is_any());
        assert_eq!(
            loaded.default_attributes.get("pa_color").map(String::as_str),
            Some("red")
        );
    }

    #[test]
    fn parses_json_document() {
        let json = r#"{
            "axes": [{"name": "pa_size", "label": "Size", "options": [{"slug": "s", "name": "S"}]}],
            "variations": [{"id": "1", "assignment": {"pa_size": "s"}, "price": 9.5}]
        }"#;
        let loaded = parse_catalog(json).unwrap();
        assert!(loaded.default_attributes.is_empty());
        assert!(loaded.catalog.price_range().is_some());
    }

    #[test]
    fn validation_failures_surface_as_config_errors() {
        let bad = TEE.replace("pa_size: m", "pa_size: xl");
        let err = parse_catalog(&bad).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Validation(ValidationError::UnknownOption { .. })
        ));
    }

    #[test]
    fn malformed_document_is_parse_error() {
        let err = parse_catalog("axes: [").unwrap_err();
        assert!(matches!(err, ConfigError::CatalogFileParse(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_catalog(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::CatalogFileIo { .. }));
    }

    #[test]
    fn sample_catalog_in_repo_is_valid() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .parent()
            .and_then(Path::parent)
            .map(|root| root.join("config/catalog.yaml"))
            .expect("workspace root");
        assert!(
            path.exists(),
            "catalog.yaml missing at {path:?} — required for this test"
        );
        let loaded = load_catalog(&path).expect("failed to load catalog.yaml");
        assert!(!loaded.catalog.axes().is_empty());
    }
}
