//! Serve command handler.

use anyhow::Result;
use tillpoint_axum::{ServerConfig, start_server};

use crate::bootstrap::CliConfig;

/// Run the web server until the process is stopped.
///
/// `port` of `None` falls back to the saved server port setting.
pub async fn execute(config: &CliConfig, port: Option<u16>, allow_origins: Vec<String>) -> Result<()> {
    let server = ServerConfig {
        port,
        database_path: config.database_path.clone(),
        cors: tillpoint_axum::CorsConfig::AllowAll,
    }
    .with_allowed_origins(allow_origins);

    tracing::info!(
        database_path = %server.database_path.display(),
        cors = ?server.cors,
        "Starting tillpoint web server"
    );
    start_server(server).await
}
