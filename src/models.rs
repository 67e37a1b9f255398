//! Catalog Models
//!
//! Data structures matching the remote catalog service.

use serde::{Deserialize, Deserializer, Serialize};

/// Missing and `null` both decode to `T::default()`
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Product category (only the name is shown)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// Catalog product record (matches service)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Item {
    pub id: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<String>,
}

impl Item {
    /// Category name, if there is a non-empty one
    pub fn category_name(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.name.as_str()).filter(|name| !name.is_empty())
    }

    pub fn thumbnail(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Apply a successful partial update to the local copy
    pub fn apply(&mut self, patch: &ItemPatch) {
        self.title = patch.title.clone();
        if let Some(price) = patch.price {
            self.price = price;
        }
        self.description = patch.description.clone();
    }
}

/// PUT body: `{title, price, description}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemPatch {
    pub title: String,
    pub price: Option<f64>,
    pub description: String,
}

/// POST body: `{title, price, description, categoryId, images}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewItem {
    pub title: String,
    pub price: Option<f64>,
    pub description: String,
    #[serde(rename = "categoryId")]
    pub category_id: Option<i64>,
    pub images: Vec<String>,
}

// ========================
// Form input coercion
// ========================

/// Blank input is 0, a number is itself, anything else is `None` (sent as null).
pub fn coerce_number(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Same as [`coerce_number`] but only whole numbers survive.
pub fn coerce_integer(input: &str) -> Option<i64> {
    coerce_number(input)
        .filter(|n| n.fract() == 0.0 && n.abs() < i64::MAX as f64)
        .map(|n| n as i64)
}
