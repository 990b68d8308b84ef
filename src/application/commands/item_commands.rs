//! Item Commands

use crate::domain::item::{ItemDraft, ItemId};

/// 创建商品命令
#[derive(Debug, Clone)]
pub struct CreateItem {
    pub draft: ItemDraft,
}

/// 更新商品命令（整体替换）
#[derive(Debug, Clone)]
pub struct UpdateItem {
    pub item_id: ItemId,
    pub draft: ItemDraft,
}

/// 删除商品命令
#[derive(Debug, Clone)]
pub struct DeleteItem {
    pub item_id: ItemId,
}
