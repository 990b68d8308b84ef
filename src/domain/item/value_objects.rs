//! Item Context - Value Objects

use serde::{Deserialize, Serialize};

/// 商品唯一标识
///
/// 由存储在创建时分配，从 1 开始递增，删除后不复用
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    /// 第一个分配的 ID
    pub const FIRST: ItemId = ItemId(1);

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// 序列中的下一个 ID
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 商品字段（除 ID 外）
///
/// 创建和更新都提交完整的字段集合，更新时整体替换
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDraft {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub is_available: bool,
}

impl ItemDraft {
    /// 只有必填字段的草稿，is_available 默认为 true
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            description: None,
            price,
            is_available: true,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_availability(mut self, is_available: bool) -> Self {
        self.is_available = is_available;
        self
    }
}
