//! Persistence layer
//!
//! Handlers only see [`EmployeeRepository`]. The binary wires in
//! [`PgEmployeeRepository`]; tests use [`MemoryEmployeeRepository`].

pub mod employee;
pub mod memory;

pub use employee::PgEmployeeRepository;
pub use memory::MemoryEmployeeRepository;

use async_trait::async_trait;
use shared::models::{Employee, EmployeeInput};

use crate::error::StoreResult;

/// Persistence client for the employee table.
///
/// Implementations must be safe to share across request tasks.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Insert a new record and return it with its assigned id
    async fn create(&self, input: EmployeeInput) -> StoreResult<Employee>;

    /// At most `limit` records starting at `offset`, ordered by id ascending
    async fn find_page(&self, offset: u64, limit: u64) -> StoreResult<Vec<Employee>>;

    /// Total number of records
    async fn count(&self) -> StoreResult<u64>;

    /// Overwrite all four fields of an existing record
    async fn update(&self, id: i64, input: EmployeeInput) -> StoreResult<Employee>;

    /// Remove a record; a missing id is an error
    async fn delete(&self, id: i64) -> StoreResult<()>;

    /// Cheap liveness probe
    async fn ping(&self) -> StoreResult<()>;

    /// Release connections; called once at shutdown
    async fn close(&self);
}
