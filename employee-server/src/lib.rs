//! Employee directory server
//!
//! CRUD HTTP API over a single employee table.
//!
//! ```text
//! employee-server/src/
//! ├── api/       # Router, handlers, CORS
//! ├── db/        # EmployeeRepository trait + PostgreSQL / in-memory impls
//! ├── config.rs  # Environment configuration
//! ├── error.rs   # StoreError / ApiError
//! └── state.rs   # AppState
//! ```

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod state;

pub use config::Config;
pub use db::{EmployeeRepository, MemoryEmployeeRepository, PgEmployeeRepository};
pub use error::{ApiError, StoreError};
pub use state::AppState;
