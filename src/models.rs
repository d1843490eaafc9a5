//! Frontend Models
//!
//! Data structures matching the `menu_items` table rows.

use serde::{Deserialize, Serialize};

use crate::catalog::DEFAULT_CATEGORY;

/// Menu item row (matches the remote store)
///
/// `id` is assigned by the store on insert; a local draft has `id == None`
/// and must never serialize a null identifier into the insert payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub category: String,
    pub available: bool,
}

impl MenuItem {
    /// Blank draft for the "add new" form.
    pub fn draft() -> Self {
        Self {
            id: None,
            name: String::new(),
            description: String::new(),
            price: 0.0,
            category: DEFAULT_CATEGORY.to_string(),
            available: true,
        }
    }

    pub fn is_draft(&self) -> bool {
        self.id.is_none()
    }
}
