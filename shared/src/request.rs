//! Request types
//!
//! Query-string parameters accepted by the employee list endpoint

/// Default page number (1-based)
pub const DEFAULT_PAGE: u64 = 1;

/// Default items per page
pub const DEFAULT_LIMIT: u64 = 10;

/// Pagination parameters resolved from the raw query string.
///
/// Parsing is lenient: a value that is missing, non-numeric or not strictly
/// positive keeps the default instead of failing the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Page number (1-based, default: 1)
    pub page: u64,
    /// Items per page (default: 10)
    pub limit: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    /// Resolve `page` / `limit` query values
    pub fn from_query(page: Option<&str>, limit: Option<&str>) -> Self {
        Self {
            page: parse_positive(page).unwrap_or(DEFAULT_PAGE),
            limit: parse_positive(limit).unwrap_or(DEFAULT_LIMIT),
        }
    }

    /// Get the offset for database queries
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}

fn parse_positive(raw: Option<&str>) -> Option<u64> {
    raw.and_then(|s| s.parse::<u64>().ok()).filter(|v| *v > 0)
}
