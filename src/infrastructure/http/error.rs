//! HTTP Error Handling

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    response::{IntoResponse, Response},
    Json,
};
use http::StatusCode;
use serde::Serialize;

use crate::application::ApplicationError;

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    /// 按 ID 访问的资源不存在 -> 404
    NotFound(String),
    /// 请求体或路径参数不符合类型 -> 422
    Validation(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::NotFound(msg) => {
                tracing::warn!(status = 404, error = %msg, "Resource not found");
                (StatusCode::NOT_FOUND, msg)
            }
            ApiError::Validation(msg) => {
                tracing::warn!(status = 422, error = %msg, "Request validation failed");
                (StatusCode::UNPROCESSABLE_ENTITY, msg)
            }
        };

        (status, Json(ErrorResponse::new(detail))).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::NotFound { .. } => ApiError::NotFound(e.to_string()),
        }
    }
}

// 语法错误、缺少 Content-Type、字段类型不符统一按 422 处理
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::item::ItemId;

    #[test]
    fn test_not_found_status() {
        let err = ApiError::from(ApplicationError::not_found("Item", ItemId::new(5)));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_status() {
        let response = ApiError::Validation("missing field `price`".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
