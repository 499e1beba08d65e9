use swatch_core::ValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WooError {
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("normalization error for product {product_id}: {reason}")]
    Normalization { product_id: String, reason: String },

    #[error("product {product_id} does not form a valid catalog: {source}")]
    Catalog {
        product_id: String,
        #[source]
        source: ValidationError,
    },
}
