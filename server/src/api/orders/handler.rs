//! Order API Handlers

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Serialize;

use crate::core::ServerState;
use crate::models::{Order, OrderRequest};
use crate::utils::AppResult;

/// 创建成功响应
#[derive(Serialize)]
pub struct OrderCreated {
    pub success: bool,
    pub message: &'static str,
    pub order: Order,
}

/// 列表响应 (最新在前)
#[derive(Serialize)]
pub struct OrderList {
    pub success: bool,
    pub orders: Vec<Order>,
}

/// POST /api/orders - 创建订单
///
/// Store 在追加前重新计算总额，超出 0.01 容差返回 400。
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<OrderRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<OrderCreated>)> {
    let Json(request) = payload?;
    let draft = request.into_draft()?;

    let order = state.orders.create(draft)?;
    tracing::info!(order_id = %order.id, total = order.total, "Order created");

    Ok((
        StatusCode::CREATED,
        Json(OrderCreated {
            success: true,
            message: "Order created successfully",
            order,
        }),
    ))
}

/// GET /api/orders - 获取所有订单
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<OrderList>> {
    Ok(Json(OrderList {
        success: true,
        orders: state.orders.list_recent(),
    }))
}
