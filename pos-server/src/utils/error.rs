//! 统一错误处理
//!
//! 应用级错误类型和响应结构：
//! - [`AppError`] - 应用错误枚举，实现 `IntoResponse`
//! - [`AppResponse`] - API 响应结构
//!
//! Checkout failures keep their own `{ code, message }` wire shape so the
//! client can branch on the code; everything else maps onto the usual
//! not-found/validation/conflict buckets.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use shared::checkout::{CheckoutErrorCode, CheckoutFailure};
use tracing::error;

/// API 统一响应结构
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> AppResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// 应用错误枚举
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Resource already exists: {0}")]
    Conflict(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("{}", .0.message)]
    Checkout(CheckoutFailure),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Checkout(failure) => match failure.code {
                CheckoutErrorCode::EmptyCart | CheckoutErrorCode::InvalidTable => {
                    StatusCode::BAD_REQUEST
                }
                CheckoutErrorCode::TableOccupied | CheckoutErrorCode::InsufficientStock => {
                    StatusCode::CONFLICT
                }
                CheckoutErrorCode::ItemNotFound => StatusCode::NOT_FOUND,
                CheckoutErrorCode::AllocationFailed | CheckoutErrorCode::PersistenceFailed => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Checkout failure wire body: `{ "code": ..., "message": ... }`
#[derive(Serialize)]
struct CheckoutErrorBody<'a> {
    code: CheckoutErrorCode,
    message: &'a str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            // 记录内部错误但不暴露详细信息
            error!(error = %self, "internal server error");
        }

        match self {
            AppError::Checkout(failure) => (
                status,
                Json(CheckoutErrorBody {
                    code: failure.code,
                    message: &failure.message,
                }),
            )
                .into_response(),
            other => (
                status,
                Json(AppResponse::<()>::error(other.to_string())),
            )
                .into_response(),
        }
    }
}

/// 处理器的 Result 类型别名
pub type AppResult<T> = Result<T, AppError>;
