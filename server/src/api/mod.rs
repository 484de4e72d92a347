//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`bookings`] - 预订接口
//! - [`orders`] - 订单接口
//! - [`menu`] - 菜单目录接口

use axum::Router;

use crate::core::ServerState;

pub mod bookings;
pub mod health;
pub mod menu;
pub mod orders;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};

/// Top-level application router
pub fn router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(bookings::router())
        .merge(orders::router())
        .merge(menu::router())
}
