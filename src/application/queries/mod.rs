//! CQRS Queries

mod item_queries;
pub mod handlers;

pub use item_queries::{GetItem, ListItems};
