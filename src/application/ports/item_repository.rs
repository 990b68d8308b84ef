//! Item Repository Port - 出站端口
//!
//! 定义商品存储的抽象接口
//! 具体实现在 infrastructure 层（内存存储）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::item::{Item, ItemDraft, ItemId};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Item not found: {0}")]
    NotFound(ItemId),
}

/// Item Repository Port
///
/// 每个操作对存储是原子的；跨请求没有事务保证
#[async_trait]
pub trait ItemRepositoryPort: Send + Sync {
    /// 按插入顺序返回所有商品
    async fn list(&self) -> Result<Vec<Item>, RepositoryError>;

    /// 根据 ID 查找商品
    async fn get(&self, id: ItemId) -> Result<Item, RepositoryError>;

    /// 分配下一个 ID 并保存新商品
    async fn create(&self, draft: ItemDraft) -> Result<Item, RepositoryError>;

    /// 替换除 ID 外的所有字段
    async fn update(&self, id: ItemId, draft: ItemDraft) -> Result<Item, RepositoryError>;

    /// 删除并返回商品
    async fn delete(&self, id: ItemId) -> Result<Item, RepositoryError>;
}
