//! Booking API Handlers

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Serialize;

use crate::core::ServerState;
use crate::models::{Booking, BookingRequest};
use crate::utils::AppResult;

/// 创建成功响应
#[derive(Serialize)]
pub struct BookingCreated {
    pub success: bool,
    pub message: &'static str,
    pub booking: Booking,
}

/// 列表响应 (最新在前)
#[derive(Serialize)]
pub struct BookingList {
    pub success: bool,
    pub bookings: Vec<Booking>,
}

/// POST /api/bookings - 创建预订
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<BookingRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<BookingCreated>)> {
    let Json(request) = payload?;
    let draft = request.into_draft()?;

    let booking = state.bookings.create(draft);
    tracing::info!(booking_id = %booking.id, guests = booking.guest_count, "Booking created");

    Ok((
        StatusCode::CREATED,
        Json(BookingCreated {
            success: true,
            message: "Booking created successfully",
            booking,
        }),
    ))
}

/// GET /api/bookings - 获取所有预订
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<BookingList>> {
    Ok(Json(BookingList {
        success: true,
        bookings: state.bookings.list_recent(),
    }))
}
