//! Item HTTP Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::{CreateItem, DeleteItem, GetItem, ListItems, UpdateItem};
use crate::domain::item::ItemId;
use crate::infrastructure::http::dto::{ItemCreateRequest, ItemResponse, MessageResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::{ValidatedJson, ValidatedPath};
use crate::infrastructure::http::state::AppState;

/// 路径中的 ID 按任意整数解析；负数不可能被分配，直接视为不存在
fn item_id_from_path(raw: i64) -> Result<ItemId, ApiError> {
    u64::try_from(raw)
        .map(ItemId::new)
        .map_err(|_| ApiError::NotFound(format!("Item not found: {}", raw)))
}

/// 获取商品列表（插入顺序）
pub async fn list_items(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ItemResponse>>, ApiError> {
    let items = state.list_items_handler.handle(ListItems).await?;
    Ok(Json(items.into_iter().map(ItemResponse::from).collect()))
}

/// 获取商品详情
pub async fn get_item(
    State(state): State<Arc<AppState>>,
    ValidatedPath(raw_id): ValidatedPath<i64>,
) -> Result<Json<ItemResponse>, ApiError> {
    let item_id = item_id_from_path(raw_id)?;
    let item = state.get_item_handler.handle(GetItem { item_id }).await?;
    Ok(Json(ItemResponse::from(item)))
}

/// 创建商品
pub async fn create_item(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<ItemCreateRequest>,
) -> Result<Json<ItemResponse>, ApiError> {
    let command = CreateItem { draft: req.into() };
    let item = state.create_item_handler.handle(command).await?;
    Ok(Json(ItemResponse::from(item)))
}

/// 更新商品（除 ID 外整体替换）
pub async fn update_item(
    State(state): State<Arc<AppState>>,
    ValidatedPath(raw_id): ValidatedPath<i64>,
    ValidatedJson(req): ValidatedJson<ItemCreateRequest>,
) -> Result<Json<ItemResponse>, ApiError> {
    let command = UpdateItem {
        item_id: item_id_from_path(raw_id)?,
        draft: req.into(),
    };
    let item = state.update_item_handler.handle(command).await?;
    Ok(Json(ItemResponse::from(item)))
}

/// 删除商品
pub async fn delete_item(
    State(state): State<Arc<AppState>>,
    ValidatedPath(raw_id): ValidatedPath<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    let item_id = item_id_from_path(raw_id)?;
    let item = state.delete_item_handler.handle(DeleteItem { item_id }).await?;
    Ok(Json(MessageResponse::new(format!(
        "Item '{}' deleted",
        item.name()
    ))))
}
