//! Order Model
//!
//! 订单与预订同构：[`OrderRequest`] → [`NewOrder`] → [`Order`]。
//! 行项目是菜单条目的快照，与目录后续变更无关。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use super::menu::MenuCategory;

/// Order status (always `pending` at creation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Preparing,
    Ready,
    Delivered,
    Cancelled,
}

/// Raw line item within an order submission
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRequest {
    pub id: String,
    pub name: String,
    #[validate(range(exclusive_min = 0.0, message = "Item price must be positive"))]
    pub price: f64,
    // Signed so negative quantities reach the validator as a field
    // violation instead of dying in deserialization
    #[validate(range(min = 1, message = "Item quantity must be at least 1"))]
    pub quantity: i64,
    #[validate(custom(function = validate_menu_category))]
    pub category: String,
}

fn validate_menu_category(value: &str) -> Result<(), ValidationError> {
    if MenuCategory::parse(value).is_some() {
        return Ok(());
    }
    let mut err = ValidationError::new("category");
    err.message = Some("Category must be one of food, drinks, appetizers or desserts".into());
    Err(err)
}

/// Raw order submission payload
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    #[validate(length(min = 1, message = "At least one item is required"), nested)]
    pub items: Vec<OrderItemRequest>,
    #[validate(length(min = 1, message = "Customer name is required"))]
    pub customer_name: String,
    pub table_number: Option<String>,
    pub special_instructions: Option<String>,
    #[validate(range(exclusive_min = 0.0, message = "Total must be positive"))]
    pub total: f64,
}

impl OrderRequest {
    /// Validate the payload and convert it into a typed draft
    pub fn into_draft(self) -> Result<NewOrder, ValidationErrors> {
        self.validate()?;
        Ok(NewOrder {
            items: self.items.into_iter().map(OrderItemRequest::into_line).collect(),
            customer_name: self.customer_name,
            table_number: self.table_number,
            special_instructions: self.special_instructions,
            total: self.total,
        })
    }
}

impl OrderItemRequest {
    fn into_line(self) -> OrderLine {
        OrderLine {
            // category was checked by `validate_menu_category`
            category: MenuCategory::parse(&self.category).unwrap_or(MenuCategory::Food),
            id: self.id,
            name: self.name,
            price: self.price,
            quantity: self.quantity,
        }
    }
}

/// Validated order draft, ready for total verification and persistence
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub items: Vec<OrderLine>,
    pub customer_name: String,
    pub table_number: Option<String>,
    pub special_instructions: Option<String>,
    pub total: f64,
}

/// One menu item plus quantity within an order (snapshot, not a catalog reference)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub quantity: i64,
    pub category: MenuCategory,
}

/// Order record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub items: Vec<OrderLine>,
    pub customer_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
    pub total: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
