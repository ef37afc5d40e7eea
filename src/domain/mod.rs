//! Domain entities shared by the view and bootstrap workflows.

pub mod client;
pub mod types;
pub mod user;
