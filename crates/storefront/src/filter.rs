//! Exact-match filters for the product list query.

use serde::Serialize;

/// Optional exact-match constraints on the product list.
///
/// Unset fields are not sent to the catalog API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProductFilter {
    /// Category to match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Size to match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Color to match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl ProductFilter {
    /// A filter that matches every product.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Build a filter from raw control values, dropping empty ones.
    #[must_use]
    pub fn from_values(category: &str, size: &str, color: &str) -> Self {
        Self {
            category: set(category),
            size: set(size),
            color: set(color),
        }
    }

    /// Check whether no constraint is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.size.is_none() && self.color.is_none()
    }

    /// Query parameters in `category`, `size`, `color` order, set values only.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("category", self.category.as_deref()),
            ("size", self.size.as_deref()),
            ("color", self.color.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
        .collect()
    }
}

fn set(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// The current values of the browser's filter controls.
///
/// An empty string means "no selection", mirroring an unselected drop-down.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterControls {
    /// Selected category.
    pub category: String,
    /// Selected size.
    pub size: String,
    /// Selected color.
    pub color: String,
}

impl FilterControls {
    /// Controls with the given selections.
    #[must_use]
    pub fn new(
        category: impl Into<String>,
        size: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            size: size.into(),
            color: color.into(),
        }
    }

    /// The filter these controls describe.
    #[must_use]
    pub fn to_filter(&self) -> ProductFilter {
        ProductFilter::from_values(&self.category, &self.size, &self.color)
    }

    /// Reset every control to "no selection".
    pub fn clear(&mut self) {
        self.category.clear();
        self.size.clear();
        self.color.clear();
    }
}
