//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（ItemRepository）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    handlers::{CreateItemHandler, DeleteItemHandler, UpdateItemHandler},
    CreateItem, DeleteItem, UpdateItem,
};

pub use error::ApplicationError;

pub use ports::{ItemRepositoryPort, RepositoryError};

pub use queries::{
    handlers::{GetItemHandler, ListItemsHandler},
    GetItem, ListItems,
};
