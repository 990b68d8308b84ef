//! Item Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::ItemRepositoryPort;
use crate::application::queries::{GetItem, ListItems};
use crate::domain::item::Item;

/// GetItem Handler
pub struct GetItemHandler {
    item_repo: Arc<dyn ItemRepositoryPort>,
}

impl GetItemHandler {
    pub fn new(item_repo: Arc<dyn ItemRepositoryPort>) -> Self {
        Self { item_repo }
    }

    pub async fn handle(&self, query: GetItem) -> Result<Item, ApplicationError> {
        Ok(self.item_repo.get(query.item_id).await?)
    }
}

/// ListItems Handler
pub struct ListItemsHandler {
    item_repo: Arc<dyn ItemRepositoryPort>,
}

impl ListItemsHandler {
    pub fn new(item_repo: Arc<dyn ItemRepositoryPort>) -> Self {
        Self { item_repo }
    }

    pub async fn handle(&self, _query: ListItems) -> Result<Vec<Item>, ApplicationError> {
        let items = self.item_repo.list().await?;
        tracing::debug!(count = items.len(), "Items listed");
        Ok(items)
    }
}
