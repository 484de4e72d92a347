//! Identifier and clock sources
//!
//! Stores stamp records through these traits instead of calling `Utc::now()`
//! or generating ids inline, so tests can substitute deterministic doubles.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Characters of the UUIDv4 simple form kept as the id suffix
const SUFFIX_LEN: usize = 12;

/// Source of unique record identifiers.
///
/// Identifiers follow the wire format `<kind>_<epoch-millis>_<suffix>` and
/// are opaque to consumers.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self, kind: &str) -> String;
}

/// Default generator. The suffix comes from a UUIDv4, which makes collisions
/// practically impossible within and across process lifetimes.
#[derive(Debug, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self, kind: &str) -> String {
        let millis = Utc::now().timestamp_millis();
        let uuid = Uuid::new_v4().simple().to_string();
        format!("{}_{}_{}", kind, millis, &uuid[..SUFFIX_LEN])
    }
}

/// Source of record timestamps
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Default wall clock
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
