//! HTTP Routes
//!
//! API Endpoints:
//! - /                 GET     欢迎信息
//! - /health           GET     健康检查
//! - /items            GET     列出所有商品
//! - /items            POST    创建商品
//! - /items/:item_id   GET     获取商品
//! - /items/:item_id   PUT     更新商品
//! - /items/:item_id   DELETE  删除商品
//! - /users/me         GET     当前用户
//! - /users/:user_id   GET     按 ID 回显用户

use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .nest("/items", item_routes())
        .nest("/users", user_routes())
}

/// Item 路由
fn item_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::list_items).post(handlers::create_item))
        .route(
            "/:item_id",
            get(handlers::get_item)
                .put(handlers::update_item)
                .delete(handlers::delete_item),
        )
}

/// User 路由，静态路径优先于参数路径
fn user_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/me", get(handlers::read_current_user))
        .route("/:user_id", get(handlers::read_user))
}
