use serde::{Deserialize, Serialize};

/// One selectable value on an [`AttributeAxis`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisOption {
    /// Stable identifier compared case-sensitively, e.g. `"navy-blue"`.
    pub slug: String,
    /// Human-facing name, e.g. `"Navy Blue"`.
    #[serde(alias = "name")]
    pub display_name: String,
}

impl AxisOption {
    #[must_use]
    pub fn new(slug: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            display_name: display_name.into(),
        }
    }
}

/// One attribute dimension of a configurable product, e.g. colour or size.
///
/// `name` is an opaque key fixed when the catalog is loaded; the resolver
/// never rewrites it. `options` keeps its input order since that is the
/// order a storefront displays them in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeAxis {
    pub name: String,
    pub label: String,
    pub options: Vec<AxisOption>,
}

impl AttributeAxis {
    #[must_use]
    pub fn new(name: impl Into<String>, label: impl Into<String>, options: Vec<AxisOption>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            options,
        }
    }

    /// Looks up an option by slug.
    #[must_use]
    pub fn option(&self, slug: &str) -> Option<&AxisOption> {
        self.options.iter().find(|o| o.slug == slug)
    }

    #[must_use]
    pub fn has_option(&self, slug: &str) -> bool {
        self.option(slug).is_some()
    }

    /// Option slugs in display order.
    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(|o| o.slug.as_str())
    }
}
