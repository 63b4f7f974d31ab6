//! StayHub server — hotel booking platform backend.
//!
//! Main entry point that wires all crates together and starts the server.

use tracing_subscriber::{EnvFilter, fmt};

use stayhub_core::config::AppConfig;
use stayhub_core::error::AppError;
use stayhub_database::DatabasePool;

#[tokio::main]
async fn main() {
    let env = std::env::var("STAYHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize the tracing subscriber from the logging section.
fn init_logging(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));

    match config.logging.format.as_str() {
        "json" => fmt().with_env_filter(filter).json().init(),
        _ => fmt().with_env_filter(filter).init(),
    }
}

async fn run(config: AppConfig) -> Result<(), AppError> {
    let db = DatabasePool::connect(&config.database).await?;
    stayhub_database::migration::run_migrations(db.pool()).await?;

    stayhub_api::run_server(config, db.into_pool()).await
}
