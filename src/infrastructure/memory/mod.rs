//! Memory Layer - In-Memory State Management
//!
//! 实现 ItemRepositoryPort，管理进程生命周期内的商品数据

mod item_store;

pub use item_store::InMemoryItemStore;
