//! Command Handlers

mod item_handlers;

pub use item_handlers::{CreateItemHandler, DeleteItemHandler, UpdateItemHandler};
