use serde::Serialize;
use thiserror::Error;

/// A catalog that cannot be resolved against. Raised only by
/// [`crate::VariationCatalog::load`]; nothing downstream sees an invalid
/// catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("axis '{axis}' has no options")]
    EmptyAxis { axis: String },

    #[error("duplicate axis name: '{axis}'")]
    DuplicateAxis { axis: String },

    #[error("axis '{axis}' lists option '{slug}' more than once")]
    DuplicateOption { axis: String, slug: String },

    #[error("duplicate variation id: '{id}'")]
    DuplicateVariation { id: String },

    #[error("variation '{variation}' references unknown axis '{axis}'")]
    UnknownAxis { variation: String, axis: String },

    #[error("variation '{variation}' assigns unknown option '{slug}' to axis '{axis}'")]
    UnknownOption {
        variation: String,
        axis: String,
        slug: String,
    },

    #[error("variations '{first}' and '{second}' have identical assignments")]
    DuplicateAssignment { first: String, second: String },

    #[error("variation '{variation}' has min quantity {min} above max quantity {max}")]
    QuantityBounds {
        variation: String,
        min: u32,
        max: u32,
    },
}

/// Rejected controller operations. The selection is left untouched whenever
/// one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("'{slug}' is not a valid option for axis '{axis}'")]
    InvalidOption { axis: String, slug: String },

    #[error("default attributes can only be seeded once, before any other change")]
    AlreadySeeded,
}

/// A complete selection matched more than one eligible variation.
///
/// This is reported alongside the resolved state rather than returned as a
/// failure: the resolver answers "no match" and the caller picks the UX.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("selection matches several variations: {}", .variation_ids.join(", "))]
pub struct ResolutionAmbiguous {
    pub variation_ids: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read catalog file {path}: {source}")]
    CatalogFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog file: {0}")]
    CatalogFileParse(#[from] serde_yaml::Error),

    #[error("invalid catalog: {0}")]
    Validation(#[from] ValidationError),
}
