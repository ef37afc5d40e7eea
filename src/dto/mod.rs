//! DTOs that bridge services with templates and APIs.

pub mod client_list;
pub mod client_view;
