//! Domain entities and value objects exposed by the listing layer.

pub mod listing;
pub mod types;
pub mod user;
