//! 统一错误处理
//!
//! 提供应用级错误类型和响应映射：
//! - [`AppError`] - 应用错误枚举
//! - [`FieldViolation`] - 字段级验证错误条目
//!
//! # 错误分类
//!
//! | 分类 | HTTP | 响应 message |
//! |------|------|--------------|
//! | 验证错误 | 400 | `Validation error` + `errors` 列表 |
//! | 总额不符 | 400 | `Total amount mismatch` |
//! | 资源不存在 | 404 | 具体消息 |
//! | 内部错误 | 500 | `Internal server error` (细节只进日志) |

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;
use validator::{ValidationErrors, ValidationErrorsKind};

use crate::store::StoreError;

/// One field-level validation violation
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldViolation {
    /// Field path in wire (camelCase) form, e.g. `items[0].price`
    pub field: String,
    pub message: String,
}

/// 应用错误枚举
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Validation error")]
    /// 请求负载未通过验证 (400)
    Validation(Vec<FieldViolation>),

    #[error("Total amount mismatch")]
    /// 提交的订单总额与重新计算值不符 (400)
    TotalMismatch,

    #[error("Resource not found: {0}")]
    /// 资源不存在 (404)
    NotFound(String),

    #[error("Internal server error: {0}")]
    /// 内部错误 (500)
    Internal(String),
}

/// 处理器的 Result 类型别名
pub type AppResult<T> = Result<T, AppError>;

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Vec<FieldViolation>>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, errors) = match self {
            AppError::Validation(violations) => (
                StatusCode::BAD_REQUEST,
                "Validation error".to_string(),
                Some(violations),
            ),
            AppError::TotalMismatch => (
                StatusCode::BAD_REQUEST,
                "Total amount mismatch".to_string(),
                None,
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            AppError::Internal(msg) => {
                // 记录内部错误但不暴露详细信息
                error!(error = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    None,
                )
            }
        };

        let body = ErrorBody {
            success: false,
            message,
            errors,
        };

        (status, Json(body)).into_response()
    }
}

// ========== Helper Constructors ==========

impl AppError {
    /// Single-violation validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation(vec![FieldViolation {
            field: field.into(),
            message: message.into(),
        }])
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

// ========== Conversions ==========

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut violations = Vec::new();
        flatten_errors(&errors, "", &mut violations);
        // HashMap iteration order is arbitrary; keep the list deterministic
        violations.sort_by(|a, b| a.field.cmp(&b.field));
        Self::Validation(violations)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::validation("body", rejection.body_text())
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::TotalMismatch { .. } => Self::TotalMismatch,
        }
    }
}

/// Flatten nested `ValidationErrors` into wire-form field paths
fn flatten_errors(errors: &ValidationErrors, prefix: &str, out: &mut Vec<FieldViolation>) {
    for (field, kind) in errors.errors() {
        let name = camel_case(field);
        let path = if prefix.is_empty() {
            name
        } else {
            format!("{prefix}.{name}")
        };
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for err in field_errors {
                    let message = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value for {path}"));
                    out.push(FieldViolation {
                        field: path.clone(),
                        message,
                    });
                }
            }
            ValidationErrorsKind::Struct(nested) => flatten_errors(nested, &path, out),
            ValidationErrorsKind::List(entries) => {
                for (index, nested) in entries {
                    flatten_errors(nested, &format!("{path}[{index}]"), out);
                }
            }
        }
    }
}

/// snake_case → camelCase, matching the wire field names
fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for ch in field.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}
