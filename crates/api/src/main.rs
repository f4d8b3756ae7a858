use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use jje_api::config::AppConfig;
use jje_api::startup::{self, StartupError};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jje_api=debug,jje_db=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = AppConfig::from_env();
    tracing::info!(
        env = ?config.env,
        frontend_url = ?config.frontend_url,
        allowed_origins = ?config.allowed_origins(),
        port = config.port,
        "Loaded configuration"
    );

    // --- Startup sequence ---
    if let Err(err) = startup::run(config).await {
        match &err {
            StartupError::Database(source) => {
                tracing::error!(error = %source, "\u{2717} Error connecting to MongoDB");
            }
            other => {
                tracing::error!(error = %other, "Startup failed");
            }
        }
        std::process::exit(1);
    }

    tracing::info!("Graceful shutdown complete");
}
