//! Request input parsing backing the listing routes.

pub mod users;
