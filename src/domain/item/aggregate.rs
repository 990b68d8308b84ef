//! Item Context - Aggregate Root

use super::{ItemDraft, ItemId};

/// Item 聚合根
///
/// 不变量:
/// - id 在创建后不可变
/// - 更新时除 id 外的所有字段整体替换
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    id: ItemId,
    name: String,
    description: Option<String>,
    price: f64,
    is_available: bool,
}

impl Item {
    /// 以分配好的 ID 创建商品
    pub fn new(id: ItemId, draft: ItemDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            price: draft.price,
            is_available: draft.is_available,
        }
    }

    /// 用新字段替换当前内容，保留 id
    pub fn replace(&mut self, draft: ItemDraft) {
        self.name = draft.name;
        self.description = draft.description;
        self.price = draft.price;
        self.is_available = draft.is_available;
    }

    // Getters
    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn is_available(&self) -> bool {
        self.is_available
    }
}
