//! Item Context - 商品限界上下文
//!
//! 职责:
//! - Item 记录的字段与替换语义
//! - Item 标识

mod aggregate;
mod value_objects;

pub use aggregate::Item;
pub use value_objects::{ItemDraft, ItemId};
