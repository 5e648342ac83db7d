//! Restaurant Server: REST backend for menus, tables, orders and invoices.
//!
//! Main entry point that loads configuration, opens the document store and
//! starts the HTTP server.

use tracing_subscriber::{EnvFilter, fmt};

use restaurant_core::config::AppConfig;
use restaurant_core::error::AppError;
use restaurant_database::StoreManager;

/// Selects the `config/{env}.toml` overlay.
const ENV_VAR: &str = "RESTAURANT_ENV";

#[tokio::main]
async fn main() {
    let env = std::env::var(ENV_VAR).unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config, &env).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

async fn run(config: AppConfig, env: &str) -> Result<(), AppError> {
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        env,
        store = %config.database.provider,
        "Starting restaurant server"
    );

    if config.auth.uses_default_secret() {
        tracing::warn!("auth.jwt_secret is the built-in default; set RESTAURANT__AUTH__JWT_SECRET");
    }

    let store = StoreManager::new(&config.database).await?;
    restaurant_api::run_server(config, store).await
}
