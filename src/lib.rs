pub mod api;
pub mod config;
pub mod core_state;
pub mod db;
pub mod models;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

/// Top-level startup failures.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Startup error: {0}")]
    Core(#[from] core_state::CoreError),
    #[error("Server error: {0}")]
    Server(#[from] api::ServerError),
}

/// Install the global tracing subscriber (`RUST_LOG` wins over the default).
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
}

/// Resolve configuration, open the record database and serve until Ctrl-C.
pub async fn run() -> Result<(), RunError> {
    init_tracing();
    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let config = config::Config::from_env()?;
    let core = Arc::new(core_state::CoreState::new(config.database_path.clone())?);

    api::serve_until_shutdown(core, config.bind_addr).await?;
    Ok(())
}
