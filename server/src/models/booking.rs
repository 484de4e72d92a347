//! Booking Model
//!
//! 预订分三层：
//!
//! - [`BookingRequest`] - 客户端提交的原始负载 (camelCase)，携带字段约束
//! - [`NewBooking`] - 验证通过后的 typed draft，桌型已转为枚举
//! - [`Booking`] - store 持久化并返回的完整记录

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

/// Table type (fixed enumeration, lowercase on the wire)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableType {
    Standard,
    Vip,
    Show,
}

impl TableType {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "standard" => Some(Self::Standard),
            "vip" => Some(Self::Vip),
            "show" => Some(Self::Show),
            _ => None,
        }
    }
}

/// Booking status (always `confirmed` at creation, no transition logic)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Pending,
    Cancelled,
}

/// Raw booking submission payload
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    #[validate(length(min = 1, message = "Date is required"))]
    pub date: String,
    #[validate(length(min = 1, message = "Time is required"))]
    pub time: String,
    // Signed so out-of-range negatives reach the validator as a field
    // violation instead of dying in deserialization
    #[validate(range(min = 1, max = 20, message = "Guest count must be between 1 and 20"))]
    pub guest_count: i64,
    #[validate(custom(function = validate_table_type))]
    pub table_type: Option<String>,
    #[validate(length(min = 1, message = "Customer name is required"))]
    pub customer_name: String,
    #[validate(email(message = "Valid email is required"))]
    pub customer_email: String,
    #[validate(length(min = 10, message = "Valid phone number is required"))]
    pub customer_phone: String,
    pub special_requests: Option<String>,
}

fn validate_table_type(value: &str) -> Result<(), ValidationError> {
    if TableType::parse(value).is_some() {
        return Ok(());
    }
    let mut err = ValidationError::new("table_type");
    err.message = Some("Table type must be one of standard, vip or show".into());
    Err(err)
}

impl BookingRequest {
    /// Validate the payload and convert it into a typed draft
    pub fn into_draft(self) -> Result<NewBooking, ValidationErrors> {
        self.validate()?;
        Ok(NewBooking {
            date: self.date,
            time: self.time,
            guest_count: self.guest_count,
            // table_type was checked by `validate_table_type`
            table_type: self.table_type.as_deref().and_then(TableType::parse),
            customer_name: self.customer_name,
            customer_email: self.customer_email,
            customer_phone: self.customer_phone,
            special_requests: self.special_requests,
        })
    }
}

/// Validated booking draft, ready for persistence
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub date: String,
    pub time: String,
    pub guest_count: i64,
    pub table_type: Option<TableType>,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub special_requests: Option<String>,
}

/// Booking record (never mutated or deleted after creation)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub date: String,
    pub time: String,
    pub guest_count: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_type: Option<TableType>,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> BookingRequest {
        BookingRequest {
            date: "2024-01-01".to_string(),
            time: "19:00".to_string(),
            guest_count: 4,
            table_type: None,
            customer_name: "A".to_string(),
            customer_email: "a@b.com".to_string(),
            customer_phone: "1234567890".to_string(),
            special_requests: None,
        }
    }

    #[test]
    fn accepts_valid_payload() {
        let draft = valid_request().into_draft().unwrap();
        assert_eq!(draft.guest_count, 4);
        assert_eq!(draft.table_type, None);
    }

    #[test]
    fn guest_count_bounds_are_inclusive() {
        for count in [1, 20] {
            let mut req = valid_request();
            req.guest_count = count;
            assert!(req.into_draft().is_ok(), "guest count {count} should pass");
        }
        for count in [-1, 0, 21] {
            let mut req = valid_request();
            req.guest_count = count;
            let errors = req.into_draft().unwrap_err();
            assert!(
                errors.errors().contains_key("guest_count"),
                "guest count {count} should fail"
            );
        }
    }

    #[test]
    fn rejects_empty_date_and_time() {
        let mut req = valid_request();
        req.date = String::new();
        req.time = String::new();
        let errors = req.into_draft().unwrap_err();
        assert!(errors.errors().contains_key("date"));
        assert!(errors.errors().contains_key("time"));
    }

    #[test]
    fn rejects_malformed_email() {
        let mut req = valid_request();
        req.customer_email = "not-an-email".to_string();
        let errors = req.into_draft().unwrap_err();
        assert!(errors.errors().contains_key("customer_email"));
    }

    #[test]
    fn rejects_short_phone() {
        let mut req = valid_request();
        req.customer_phone = "12345".to_string();
        let errors = req.into_draft().unwrap_err();
        assert!(errors.errors().contains_key("customer_phone"));
    }

    #[test]
    fn table_type_must_be_in_enumeration() {
        let mut req = valid_request();
        req.table_type = Some("balcony".to_string());
        let errors = req.into_draft().unwrap_err();
        assert!(errors.errors().contains_key("table_type"));

        let mut req = valid_request();
        req.table_type = Some("vip".to_string());
        let draft = req.into_draft().unwrap();
        assert_eq!(draft.table_type, Some(TableType::Vip));
    }
}
