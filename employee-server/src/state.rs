//! Application state

use std::sync::Arc;

use crate::db::EmployeeRepository;

/// Shared application state
///
/// Built once at startup from an explicitly constructed repository and
/// cloned into every request.
#[derive(Clone)]
pub struct AppState {
    /// Persistence client
    pub employees: Arc<dyn EmployeeRepository>,
}

impl AppState {
    pub fn new(employees: impl EmployeeRepository + 'static) -> Self {
        Self {
            employees: Arc::new(employees),
        }
    }
}
