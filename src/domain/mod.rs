//! Domain Layer - 领域层
//!
//! 只有一个限界上下文:
//! - Item Context: 商品记录

pub mod item;
