//! In-Memory Item Store Implementation

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::application::ports::{ItemRepositoryPort, RepositoryError};
use crate::domain::item::{Item, ItemDraft, ItemId};

/// 锁内状态：商品列表和 ID 计数器一起更新
struct StoreInner {
    /// 按插入顺序保存
    items: Vec<Item>,
    /// 下一个分配的 ID，只增不减
    next_id: ItemId,
}

impl StoreInner {
    fn position(&self, id: ItemId) -> Result<usize, RepositoryError> {
        self.items
            .iter()
            .position(|item| item.id() == id)
            .ok_or(RepositoryError::NotFound(id))
    }
}

/// 内存商品存储
///
/// 进程内有效，重启后清空。每个操作只持有一次锁，
/// 但并发的更新/删除之间没有顺序保证
pub struct InMemoryItemStore {
    inner: RwLock<StoreInner>,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                items: Vec::new(),
                next_id: ItemId::FIRST,
            }),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl Default for InMemoryItemStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemRepositoryPort for InMemoryItemStore {
    async fn list(&self) -> Result<Vec<Item>, RepositoryError> {
        Ok(self.inner.read().await.items.clone())
    }

    async fn get(&self, id: ItemId) -> Result<Item, RepositoryError> {
        let inner = self.inner.read().await;
        let index = inner.position(id)?;
        Ok(inner.items[index].clone())
    }

    async fn create(&self, draft: ItemDraft) -> Result<Item, RepositoryError> {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        let item = Item::new(id, draft);
        inner.items.push(item.clone());
        inner.next_id = id.next();
        tracing::debug!(item_id = %id, total = inner.items.len(), "Item stored");
        Ok(item)
    }

    async fn update(&self, id: ItemId, draft: ItemDraft) -> Result<Item, RepositoryError> {
        let mut inner = self.inner.write().await;
        let index = inner.position(id)?;
        let item = &mut inner.items[index];
        item.replace(draft);
        Ok(item.clone())
    }

    async fn delete(&self, id: ItemId) -> Result<Item, RepositoryError> {
        let mut inner = self.inner.write().await;
        let index = inner.position(id)?;
        let item = inner.items.remove(index);
        tracing::debug!(item_id = %id, total = inner.items.len(), "Item removed");
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(items: &[Item]) -> Vec<u64> {
        items.iter().map(|i| i.id().value()).collect()
    }

    #[tokio::test]
    async fn test_item_lifecycle() {
        let store = InMemoryItemStore::new();

        // Create
        let created = store.create(ItemDraft::new("Book", 9.99)).await.unwrap();
        assert_eq!(created.id(), ItemId::FIRST);

        // Get
        let fetched = store.get(created.id()).await.unwrap();
        assert_eq!(fetched, created);

        // Delete
        let deleted = store.delete(created.id()).await.unwrap();
        assert_eq!(deleted.name(), "Book");

        // 删除后所有按 ID 的操作都返回 NotFound
        assert!(matches!(
            store.get(created.id()).await,
            Err(RepositoryError::NotFound(_))
        ));
        assert!(matches!(
            store.update(created.id(), ItemDraft::new("Book", 1.0)).await,
            Err(RepositoryError::NotFound(_))
        ));
        assert!(matches!(
            store.delete(created.id()).await,
            Err(RepositoryError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_ids_are_never_reused() {
        let store = InMemoryItemStore::new();
        for name in ["a", "b", "c"] {
            store.create(ItemDraft::new(name, 1.0)).await.unwrap();
        }

        store.delete(ItemId::new(2)).await.unwrap();
        let fourth = store.create(ItemDraft::new("d", 1.0)).await.unwrap();

        assert_eq!(fourth.id(), ItemId::new(4));
        assert_eq!(ids(&store.list().await.unwrap()), vec![1, 3, 4]);
    }

    #[tokio::test]
    async fn test_deleting_last_item_does_not_rewind_counter() {
        let store = InMemoryItemStore::new();
        let only = store.create(ItemDraft::new("a", 1.0)).await.unwrap();
        store.delete(only.id()).await.unwrap();

        let next = store.create(ItemDraft::new("b", 1.0)).await.unwrap();
        assert_eq!(next.id(), ItemId::new(2));
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let store = InMemoryItemStore::new();
        for i in 0..5 {
            store
                .create(ItemDraft::new(format!("item-{}", i), i as f64))
                .await
                .unwrap();
        }
        store.delete(ItemId::new(1)).await.unwrap();
        store.delete(ItemId::new(4)).await.unwrap();

        // 更新不改变位置
        store
            .update(ItemId::new(2), ItemDraft::new("renamed", 0.5))
            .await
            .unwrap();

        let items = store.list().await.unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(ids(&items), vec![2, 3, 5]);
        assert_eq!(items[0].name(), "renamed");
    }

    #[tokio::test]
    async fn test_update_preserves_id() {
        let store = InMemoryItemStore::new();
        store.create(ItemDraft::new("a", 1.0)).await.unwrap();
        let b = store
            .create(ItemDraft::new("b", 2.0).with_description("second"))
            .await
            .unwrap();

        let draft = ItemDraft::new("B", 20.0).with_availability(false);
        let updated = store.update(b.id(), draft.clone()).await.unwrap();

        assert_eq!(updated, Item::new(b.id(), draft));
        assert_eq!(store.get(b.id()).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_concurrent_creates_get_distinct_ids() {
        let store = InMemoryItemStore::new().arc();
        let mut tasks = Vec::new();
        for i in 0..20 {
            let store = store.clone();
            tasks.push(tokio::spawn(async move {
                store
                    .create(ItemDraft::new(format!("item-{}", i), 1.0))
                    .await
                    .unwrap()
                    .id()
            }));
        }

        let mut assigned = Vec::new();
        for task in tasks {
            assigned.push(task.await.unwrap().value());
        }
        assigned.sort_unstable();

        assert_eq!(assigned, (1..=20).collect::<Vec<u64>>());
    }
}
