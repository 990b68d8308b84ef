//! User Handlers
//!
//! 无状态示例接口，不访问存储

use axum::Json;

use crate::infrastructure::http::dto::{CurrentUserResponse, UserResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::ValidatedPath;

/// 当前用户（固定数据）
pub async fn read_current_user() -> Json<CurrentUserResponse> {
    Json(CurrentUserResponse {
        username: "current user",
        email: "user@example.com",
    })
}

/// 按 ID 回显用户
pub async fn read_user(
    ValidatedPath(user_id): ValidatedPath<i64>,
) -> Result<Json<UserResponse>, ApiError> {
    Ok(Json(UserResponse {
        user_id,
        username: format!("user{}", user_id),
    }))
}
