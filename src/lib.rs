//! itemdesk - 内存商品目录 HTTP 服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Item Context: 商品记录与 ID
//!
//! 应用层 (application/):
//! - Ports: ItemRepositoryPort
//! - Commands: CreateItem / UpdateItem / DeleteItem
//! - Queries: GetItem / ListItems
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API（axum + tower-http）
//! - Memory: 进程内商品存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
