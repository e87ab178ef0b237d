//! Employee Service - REST API over employee records.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use employee_service_lib::config::EmployeeServiceConfig;
use employee_service_lib::MigrateAction;

#[derive(Parser)]
#[command(name = "employee-service")]
#[command(author, version, about = "Employee directory service", long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        #[arg(short = 'H', long, env = "EMPLOYEE_SERVICE_HOST", default_value = "0.0.0.0")]
        host: String,
        #[arg(short, long, env = "EMPLOYEE_SERVICE_PORT", default_value = "8080")]
        port: u16,
    },
    /// Database migration commands
    Migrate {
        #[command(subcommand)]
        action: MigrateCommands,
    },
}

#[derive(Subcommand)]
enum MigrateCommands {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset database and run all migrations
    Fresh,
}

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = EmployeeServiceConfig::from_env();
    init_tracing(config.log_filter(cli.verbose));
    tracing::debug!("Configuration loaded");

    let result = match cli.command {
        Commands::Serve { host, port } => {
            employee_service_lib::run_server(config.with_bind(host, port)).await
        }
        Commands::Migrate { action } => {
            let migrate_action = match action {
                MigrateCommands::Up => MigrateAction::Up,
                MigrateCommands::Down => MigrateAction::Down,
                MigrateCommands::Status => MigrateAction::Status,
                MigrateCommands::Fresh => MigrateAction::Fresh,
            };
            employee_service_lib::run_migrations(config, migrate_action).await
        }
    };

    if let Err(e) = result {
        tracing::error!("Command failed: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing subscriber
fn init_tracing(filter: EnvFilter) {
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
