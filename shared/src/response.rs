//! API Response types

use serde::{Deserialize, Serialize};

use crate::request::PageRequest;

/// Paginated list response
///
/// ```json
/// { "data": [...], "total": 25, "page": 1, "limit": 10, "totalPages": 3 }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    /// Records on this page
    pub data: Vec<T>,
    /// Total number of records
    pub total: u64,
    /// Current page number (1-based)
    pub page: u64,
    /// Items per page
    pub limit: u64,
    /// Total number of pages
    pub total_pages: u64,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, total: u64, request: PageRequest) -> Self {
        Self {
            data,
            total,
            page: request.page,
            limit: request.limit,
            total_pages: total_pages(total, request.limit),
        }
    }
}

/// `ceil(total / limit)` in integer arithmetic; a zero limit yields zero pages
pub fn total_pages(total: u64, limit: u64) -> u64 {
    if limit == 0 {
        return 0;
    }
    total.div_ceil(limit)
}
