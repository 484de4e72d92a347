//! Menu Catalog
//!
//! 菜单目录是只读参考数据：启动时从内嵌的 `data/menu.json` 解析一次，
//! 进程生命周期内不变。按分类过滤和按 ID 查找都是纯函数。

use crate::models::{MenuCategory, MenuItem};

/// Embedded catalog data. Content lives in a plain data file so the menu can
/// be edited without touching code.
const MENU_JSON: &str = include_str!("../data/menu.json");

/// Category filter for menu listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    /// All available items
    All,
    /// Available items in one category
    Only(MenuCategory),
}

impl CategoryFilter {
    /// Parse a wire-format filter value (`all` or a category name)
    pub fn parse(value: &str) -> Option<Self> {
        if value == "all" {
            return Some(Self::All);
        }
        MenuCategory::parse(value).map(Self::Only)
    }
}

/// Read-only menu catalog
#[derive(Debug, Clone)]
pub struct MenuCatalog {
    items: Vec<MenuItem>,
}

impl MenuCatalog {
    /// Parse the embedded catalog file.
    ///
    /// A catalog that fails to parse is a startup error, not a request error.
    pub fn load_embedded() -> Result<Self, serde_json::Error> {
        let items: Vec<MenuItem> = serde_json::from_str(MENU_JSON)?;
        Ok(Self { items })
    }

    /// Build a catalog from explicit items (test isolation)
    pub fn from_items(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// Available items matching the filter. Unavailable items are excluded
    /// unconditionally; this is the purchase path.
    pub fn by_category(&self, filter: CategoryFilter) -> Vec<MenuItem> {
        self.items
            .iter()
            .filter(|item| item.available)
            .filter(|item| match filter {
                CategoryFilter::All => true,
                CategoryFilter::Only(category) => item.category == category,
            })
            .cloned()
            .collect()
    }

    /// Direct lookup by identifier. Unavailable items are still found here,
    /// a lookup is not a purchase.
    pub fn by_id(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
