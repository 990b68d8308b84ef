//! Infrastructure Layer - 基础设施层
//!
//! - http: RESTful API（axum）
//! - memory: ItemRepositoryPort 的内存实现

pub mod http;
pub mod memory;
