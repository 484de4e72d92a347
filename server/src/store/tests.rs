use std::collections::{HashSet, VecDeque};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;

use crate::models::{MenuCategory, NewBooking, NewOrder, OrderLine};
use crate::utils::{Clock, IdGenerator, SystemClock, UuidIdGenerator};

use super::*;

/// Deterministic id double: `<kind>_test_<n>`
struct SeqIds {
    counter: AtomicU64,
}

impl SeqIds {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            counter: AtomicU64::new(0),
        })
    }
}

impl IdGenerator for SeqIds {
    fn next_id(&self, kind: &str) -> String {
        format!("{}_test_{}", kind, self.counter.fetch_add(1, Ordering::Relaxed))
    }
}

/// Clock double returning a queued sequence of instants
struct QueueClock {
    times: Mutex<VecDeque<DateTime<Utc>>>,
}

impl QueueClock {
    fn new(times: Vec<DateTime<Utc>>) -> Arc<Self> {
        Arc::new(Self {
            times: Mutex::new(times.into()),
        })
    }
}

impl Clock for QueueClock {
    fn now(&self) -> DateTime<Utc> {
        self.times.lock().pop_front().unwrap_or_else(Utc::now)
    }
}

fn booking_draft(name: &str) -> NewBooking {
    NewBooking {
        date: "2024-01-01".to_string(),
        time: "19:00".to_string(),
        guest_count: 4,
        table_type: None,
        customer_name: name.to_string(),
        customer_email: "a@b.com".to_string(),
        customer_phone: "1234567890".to_string(),
        special_requests: None,
    }
}

fn order_draft(total: f64) -> NewOrder {
    NewOrder {
        items: vec![
            OrderLine {
                id: "food_1".to_string(),
                name: "The Headliner Burger".to_string(),
                price: 10.0,
                quantity: 2,
                category: MenuCategory::Food,
            },
            OrderLine {
                id: "drink_1".to_string(),
                name: "Comedy Gold Cocktail".to_string(),
                price: 10.0,
                quantity: 1,
                category: MenuCategory::Drinks,
            },
        ],
        customer_name: "B".to_string(),
        table_number: Some("7".to_string()),
        special_instructions: None,
        total,
    }
}

// ========== BookingStore ==========

#[test]
fn booking_create_confirms_and_appends() {
    let store = BookingStore::new();
    let booking = store.create(booking_draft("A"));

    assert!(booking.id.starts_with("booking_"));
    assert_eq!(booking.status, crate::models::BookingStatus::Confirmed);
    assert_eq!(store.len(), 1);
}

#[test]
fn booking_ids_are_unique_across_creates() {
    let store = BookingStore::new();
    let ids: HashSet<String> = (0..200)
        .map(|_| store.create(booking_draft("A")).id)
        .collect();
    assert_eq!(ids.len(), 200);
}

#[test]
fn booking_ids_are_unique_under_concurrent_creates() {
    let store = BookingStore::new();
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = store.clone();
            std::thread::spawn(move || {
                (0..50)
                    .map(|_| store.create(booking_draft("A")).id)
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        for id in handle.join().unwrap() {
            assert!(ids.insert(id), "duplicate id generated");
        }
    }
    assert_eq!(ids.len(), 400);
    assert_eq!(store.len(), 400);
}

#[test]
fn booking_list_is_newest_first_regardless_of_insertion_order() {
    let base = Utc::now();
    // Insert oldest-last: timestamps decrease as records are appended
    let clock = QueueClock::new(vec![
        base,
        base - Duration::seconds(10),
        base - Duration::seconds(5),
    ]);
    let store = BookingStore::with_sources(SeqIds::new(), clock);

    store.create(booking_draft("first"));
    store.create(booking_draft("second"));
    store.create(booking_draft("third"));

    let listed = store.list_recent();
    let names: Vec<&str> = listed.iter().map(|b| b.customer_name.as_str()).collect();
    assert_eq!(names, vec!["first", "third", "second"]);
    assert!(listed.windows(2).all(|w| w[0].created_at >= w[1].created_at));
}

#[test]
fn booking_list_resorts_after_out_of_order_insert() {
    let base = Utc::now();
    let clock = QueueClock::new(vec![
        base,
        base - Duration::seconds(20),
        base + Duration::seconds(20),
    ]);
    let store = BookingStore::with_sources(SeqIds::new(), clock);

    store.create(booking_draft("middle"));
    assert_eq!(store.list_recent()[0].customer_name, "middle");

    // A record stamped earlier sorts behind, a later one sorts ahead
    store.create(booking_draft("oldest"));
    store.create(booking_draft("newest"));
    let listed = store.list_recent();
    let names: Vec<&str> = listed.iter().map(|b| b.customer_name.as_str()).collect();
    assert_eq!(names, vec!["newest", "middle", "oldest"]);
}

// ========== OrderStore ==========

#[test]
fn order_create_is_pending_with_equal_timestamps() {
    let store = OrderStore::new();
    let order = store.create(order_draft(30.0)).unwrap();

    assert!(order.id.starts_with("order_"));
    assert_eq!(order.status, crate::models::OrderStatus::Pending);
    assert_eq!(order.created_at, order.updated_at);
    assert_eq!(store.len(), 1);
}

#[test]
fn order_total_mismatch_rejects_without_append() {
    let store = OrderStore::new();
    // Items sum to 30.00
    let err = store.create(order_draft(40.0)).unwrap_err();

    assert!(matches!(err, StoreError::TotalMismatch { .. }));
    assert!(store.is_empty());
}

#[test]
fn order_total_tolerance_boundary() {
    let store = OrderStore::new();
    // Difference of exactly 0.01 is accepted
    assert!(store.create(order_draft(30.01)).is_ok());
    assert!(store.create(order_draft(29.99)).is_ok());
    // Strictly greater than 0.01 is rejected
    assert!(store.create(order_draft(30.02)).is_err());
    assert_eq!(store.len(), 2);
}

#[test]
fn order_total_check_survives_float_prices() {
    let store = OrderStore::new();
    let draft = NewOrder {
        items: (0..10)
            .map(|i| OrderLine {
                id: format!("food_{i}"),
                name: "Laugh Track Pasta".to_string(),
                price: 0.1,
                quantity: 3,
                category: MenuCategory::Food,
            })
            .collect(),
        customer_name: "C".to_string(),
        table_number: None,
        special_instructions: None,
        // 10 x 3 x 0.1: naive f64 summation drifts off 3.0
        total: 3.0,
    };
    assert!(store.create(draft).is_ok());
}

#[test]
fn order_list_is_newest_first_regardless_of_insertion_order() {
    let base = Utc::now();
    let clock = QueueClock::new(vec![base - Duration::seconds(30), base]);
    let store = OrderStore::with_sources(SeqIds::new(), clock);

    let old = store.create(order_draft(30.0)).unwrap();
    let new = store.create(order_draft(30.0)).unwrap();

    let listed = store.list_recent();
    assert_eq!(listed[0].id, new.id);
    assert_eq!(listed[1].id, old.id);
}

#[test]
fn order_ids_are_unique_across_creates() {
    let store = OrderStore::with_sources(Arc::new(UuidIdGenerator), Arc::new(SystemClock));
    let ids: HashSet<String> = (0..200)
        .map(|_| store.create(order_draft(30.0)).unwrap().id)
        .collect();
    assert_eq!(ids.len(), 200);
}
