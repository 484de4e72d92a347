//! Booking Store

use std::sync::Arc;

use parking_lot::RwLock;

use crate::models::{Booking, BookingStatus, NewBooking};
use crate::utils::{Clock, IdGenerator, SystemClock, UuidIdGenerator};

const ID_KIND: &str = "booking";

/// Append-only in-memory booking store
#[derive(Clone)]
pub struct BookingStore {
    records: Arc<RwLock<Vec<Booking>>>,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl BookingStore {
    pub fn new() -> Self {
        Self::with_sources(Arc::new(UuidIdGenerator), Arc::new(SystemClock))
    }

    /// Construct with explicit id/clock sources (deterministic in tests)
    pub fn with_sources(ids: Arc<dyn IdGenerator>, clock: Arc<dyn Clock>) -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
            ids,
            clock,
        }
    }

    /// Append a validated draft as a confirmed booking and return the record.
    ///
    /// No side effects beyond the append.
    pub fn create(&self, draft: NewBooking) -> Booking {
        let booking = Booking {
            id: self.ids.next_id(ID_KIND),
            date: draft.date,
            time: draft.time,
            guest_count: draft.guest_count,
            table_type: draft.table_type,
            customer_name: draft.customer_name,
            customer_email: draft.customer_email,
            customer_phone: draft.customer_phone,
            special_requests: draft.special_requests,
            status: BookingStatus::Confirmed,
            created_at: self.clock.now(),
        };
        self.records.write().push(booking.clone());
        booking
    }

    /// All bookings, most recent first. Stored insertion order is untouched.
    pub fn list_recent(&self) -> Vec<Booking> {
        let mut bookings = self.records.read().clone();
        bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        bookings
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl Default for BookingStore {
    fn default() -> Self {
        Self::new()
    }
}
