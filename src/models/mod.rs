//! Models describing the running server.

pub mod config;
