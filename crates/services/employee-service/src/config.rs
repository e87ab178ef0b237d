//! Employee service configuration.

use std::env;

use tracing_subscriber::EnvFilter;

use common::{DatabaseConfig, ServiceConfig};

const SERVICE_NAME: &str = "employee-service";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Employee service configuration.
#[derive(Debug, Clone)]
pub struct EmployeeServiceConfig {
    /// HTTP server settings
    pub server: ServiceConfig,
    /// Database connection settings
    pub database: DatabaseConfig,
}

impl EmployeeServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            server: ServiceConfig {
                service_name: SERVICE_NAME.to_string(),
                host: env::var("EMPLOYEE_SERVICE_HOST").unwrap_or(defaults.server.host),
                port: env::var("EMPLOYEE_SERVICE_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(defaults.server.port),
                log_level: env::var("RUST_LOG").unwrap_or(defaults.server.log_level),
            },
            database: DatabaseConfig {
                url: env::var("EMPLOYEE_SERVICE_DATABASE_URL")
                    .or_else(|_| env::var("DATABASE_URL"))
                    .unwrap_or(defaults.database.url),
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.database.max_connections),
                min_connections: env::var("DATABASE_MIN_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.database.min_connections),
            },
        }
    }

    /// Override the bind address (CLI flags win over the environment).
    pub fn with_bind(mut self, host: impl Into<String>, port: u16) -> Self {
        self.server.host = host.into();
        self.server.port = port;
        self
    }

    /// Tracing filter from `log_level` (`RUST_LOG` syntax); verbose forces debug.
    pub fn log_filter(&self, verbose: bool) -> EnvFilter {
        if verbose {
            return EnvFilter::new("debug");
        }

        EnvFilter::try_new(&self.server.log_level).unwrap_or_else(|e| {
            eprintln!("Invalid log level {:?}: {}", self.server.log_level, e);
            EnvFilter::new("info")
        })
    }
}

impl Default for EmployeeServiceConfig {
    fn default() -> Self {
        Self {
            server: ServiceConfig {
                service_name: SERVICE_NAME.to_string(),
                host: DEFAULT_HOST.to_string(),
                port: DEFAULT_PORT,
                log_level: "info".to_string(),
            },
            database: DatabaseConfig::default(),
        }
    }
}
