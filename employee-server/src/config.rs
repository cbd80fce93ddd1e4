//! Server configuration

type BoxError = Box<dyn std::error::Error + Send + Sync>;

const DEFAULT_HTTP_PORT: u16 = 8081;
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection URL
    pub database_url: String,
    /// HTTP listen port
    pub http_port: u16,
    /// The single origin allowed by CORS
    pub cors_origin: String,
    /// Upper bound on pooled PostgreSQL connections
    pub database_max_connections: u32,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BoxError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            database_url: lookup("DATABASE_URL")
                .filter(|s| !s.is_empty())
                .ok_or("DATABASE_URL must be set")?,
            http_port: lookup("HTTP_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_HTTP_PORT),
            cors_origin: lookup("CORS_ORIGIN")
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_CORS_ORIGIN.into()),
            database_max_connections: lookup("DATABASE_MAX_CONNECTIONS")
                .and_then(|n| n.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(DEFAULT_MAX_CONNECTIONS),
        })
    }
}
