//! Employee Service Library
//!
//! Employee records behind a repository contract (`EmployeeRepository`),
//! implemented over SeaORM and exposed through a REST API.

pub mod api;
pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::sync::Arc;

use tracing::info;

use crate::api::{create_router, AppState};
use crate::config::EmployeeServiceConfig;
use crate::infra::Database;

/// Run the HTTP server with the given configuration.
pub async fn run_server(config: EmployeeServiceConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Initialize database (applies pending migrations)
    let database = Arc::new(Database::connect(&config.database).await?);

    // Wire repository -> service -> HTTP state
    let state = AppState::from_database(database);
    let app = create_router(state);

    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("{} listening on http://{}", config.server.service_name, addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(
    config: EmployeeServiceConfig,
    action: MigrateAction,
) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            tracing::warn!("Resetting database and running all migrations");
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}
