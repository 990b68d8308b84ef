//! Item Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateItem, DeleteItem, UpdateItem};
use crate::application::error::ApplicationError;
use crate::application::ports::ItemRepositoryPort;
use crate::domain::item::Item;

// ============================================================================
// CreateItem
// ============================================================================

/// CreateItem Handler
pub struct CreateItemHandler {
    item_repo: Arc<dyn ItemRepositoryPort>,
}

impl CreateItemHandler {
    pub fn new(item_repo: Arc<dyn ItemRepositoryPort>) -> Self {
        Self { item_repo }
    }

    pub async fn handle(&self, command: CreateItem) -> Result<Item, ApplicationError> {
        let item = self.item_repo.create(command.draft).await?;

        tracing::info!(
            item_id = %item.id(),
            name = %item.name(),
            "Item created"
        );

        Ok(item)
    }
}

// ============================================================================
// UpdateItem
// ============================================================================

/// UpdateItem Handler
pub struct UpdateItemHandler {
    item_repo: Arc<dyn ItemRepositoryPort>,
}

impl UpdateItemHandler {
    pub fn new(item_repo: Arc<dyn ItemRepositoryPort>) -> Self {
        Self { item_repo }
    }

    pub async fn handle(&self, command: UpdateItem) -> Result<Item, ApplicationError> {
        let item = self.item_repo.update(command.item_id, command.draft).await?;

        tracing::info!(
            item_id = %item.id(),
            name = %item.name(),
            "Item updated"
        );

        Ok(item)
    }
}

// ============================================================================
// DeleteItem
// ============================================================================

/// DeleteItem Handler
///
/// 返回被删除的商品，调用方用它生成删除提示
pub struct DeleteItemHandler {
    item_repo: Arc<dyn ItemRepositoryPort>,
}

impl DeleteItemHandler {
    pub fn new(item_repo: Arc<dyn ItemRepositoryPort>) -> Self {
        Self { item_repo }
    }

    pub async fn handle(&self, command: DeleteItem) -> Result<Item, ApplicationError> {
        let item = self.item_repo.delete(command.item_id).await?;

        tracing::info!(
            item_id = %item.id(),
            name = %item.name(),
            "Item deleted"
        );

        Ok(item)
    }
}
