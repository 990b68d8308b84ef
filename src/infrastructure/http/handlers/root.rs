//! Root Handler

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::infrastructure::http::dto::MessageResponse;
use crate::infrastructure::http::state::AppState;

/// 欢迎信息
pub async fn root(State(state): State<Arc<AppState>>) -> Json<MessageResponse> {
    Json(MessageResponse::new(format!(
        "Welcome to {}!",
        state.app_info.name
    )))
}
