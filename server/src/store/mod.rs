//! In-memory append-only stores
//!
//! # Stores
//!
//! | Store | Record | Create rule |
//! |-------|--------|-------------|
//! | [`BookingStore`] | `Booking` | status `confirmed`, stamp creation time |
//! | [`OrderStore`] | `Order` | recompute total first, status `pending` |
//!
//! Each store exclusively owns its sequence of records behind a
//! `parking_lot::RwLock`; an append runs to completion atomically relative to
//! other requests. There is no update, delete or durability; the entire
//! store is lost on process restart.
//!
//! Stores are explicit objects injected through [`crate::core::ServerState`];
//! tests construct isolated instances with deterministic id/clock doubles
//! instead of sharing process-wide state.

use thiserror::Error;

pub mod booking;
pub mod order;

pub use booking::BookingStore;
pub use order::OrderStore;

/// Store errors
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    #[error("total amount mismatch: submitted {submitted:.2}, computed {computed:.2}")]
    TotalMismatch { submitted: f64, computed: f64 },
}

pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests;
