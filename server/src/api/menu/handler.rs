//! Menu Catalog API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

use crate::catalog::CategoryFilter;
use crate::core::ServerState;
use crate::models::MenuItem;
use crate::utils::{AppError, AppResult};

/// Query params for listing the menu
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// `all` or one category name; defaults to `all`
    pub category: Option<String>,
}

/// 列表响应
#[derive(Serialize)]
pub struct MenuList {
    pub success: bool,
    pub items: Vec<MenuItem>,
}

/// 单条响应
#[derive(Serialize)]
pub struct MenuItemFound {
    pub success: bool,
    pub item: MenuItem,
}

/// GET /api/menu?category=drinks - 获取可售菜单
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<MenuList>> {
    let filter = match query.category.as_deref() {
        None => CategoryFilter::All,
        Some(raw) => CategoryFilter::parse(raw)
            .ok_or_else(|| AppError::validation("category", format!("Unknown menu category: {raw}")))?,
    };

    Ok(Json(MenuList {
        success: true,
        items: state.catalog.by_category(filter),
    }))
}

/// GET /api/menu/:id - 按 ID 查找菜单条目
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MenuItemFound>> {
    let item = state
        .catalog
        .by_id(&id)
        .cloned()
        .ok_or_else(|| AppError::not_found(format!("Menu item {} not found", id)))?;

    Ok(Json(MenuItemFound {
        success: true,
        item,
    }))
}
