//! HTTP Handlers

mod health;
mod items;
mod root;
mod users;

pub use health::*;
pub use items::*;
pub use root::*;
pub use users::*;
