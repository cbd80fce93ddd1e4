//! Shared types for the employee directory
//!
//! Wire types used by the server and its clients: the employee model,
//! pagination request parsing and the paginated response envelope.

pub mod models;
pub mod request;
pub mod response;

// Re-exports
pub use models::employee::{Employee, EmployeeInput};
pub use request::PageRequest;
pub use response::PaginatedResponse;
