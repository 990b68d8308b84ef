//! CQRS Commands

mod item_commands;
pub mod handlers;

pub use item_commands::{CreateItem, DeleteItem, UpdateItem};
