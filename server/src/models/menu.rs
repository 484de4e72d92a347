//! Menu Item Model

use serde::{Deserialize, Serialize};

/// Menu category (fixed enumeration, lowercase on the wire)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuCategory {
    Food,
    Drinks,
    Appetizers,
    Desserts,
}

impl MenuCategory {
    /// Parse a wire-format category name, `None` for anything outside the enumeration
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "food" => Some(Self::Food),
            "drinks" => Some(Self::Drinks),
            "appetizers" => Some(Self::Appetizers),
            "desserts" => Some(Self::Desserts),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Drinks => "drinks",
            Self::Appetizers => "appetizers",
            Self::Desserts => "desserts",
        }
    }
}

/// Menu catalog entry (read-only reference data, immutable for the process lifetime)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: MenuCategory,
    /// Image URI
    pub image: String,
    pub available: bool,
}
