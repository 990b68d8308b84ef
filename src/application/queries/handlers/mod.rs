//! Query Handlers

mod item_handlers;

pub use item_handlers::{GetItemHandler, ListItemsHandler};
