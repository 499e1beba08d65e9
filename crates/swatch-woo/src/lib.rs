pub mod error;
pub mod normalize;
pub mod types;

pub use error::WooError;
pub use normalize::{normalize_product, parse_product_json, NormalizedProduct};
pub use types::{WooAttribute, WooAttributeOption, WooVariableProduct, WooVariation};
