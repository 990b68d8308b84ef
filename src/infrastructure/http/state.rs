//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreateItemHandler, DeleteItemHandler, UpdateItemHandler,
    // Query handlers
    GetItemHandler, ListItemsHandler,
    // Ports
    ItemRepositoryPort,
};
use crate::config::AppInfoConfig;

/// 应用状态
///
/// 存储由调用方创建并注入，没有全局状态
pub struct AppState {
    // ========== Metadata ==========
    pub app_info: AppInfoConfig,

    // ========== Command Handlers ==========
    pub create_item_handler: CreateItemHandler,
    pub update_item_handler: UpdateItemHandler,
    pub delete_item_handler: DeleteItemHandler,

    // ========== Query Handlers ==========
    pub get_item_handler: GetItemHandler,
    pub list_items_handler: ListItemsHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(item_repo: Arc<dyn ItemRepositoryPort>, app_info: AppInfoConfig) -> Self {
        Self {
            app_info,

            // Command handlers
            create_item_handler: CreateItemHandler::new(item_repo.clone()),
            update_item_handler: UpdateItemHandler::new(item_repo.clone()),
            delete_item_handler: DeleteItemHandler::new(item_repo.clone()),

            // Query handlers
            get_item_handler: GetItemHandler::new(item_repo.clone()),
            list_items_handler: ListItemsHandler::new(item_repo),
        }
    }
}
