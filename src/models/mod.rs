//! Database and configuration models.

pub mod client;
pub mod config;
pub mod user;
