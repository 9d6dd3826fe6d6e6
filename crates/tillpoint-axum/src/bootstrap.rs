//! Axum server bootstrap - the composition root.
//!
//! This module is the only place where infrastructure is wired together for
//! the web adapter: database, repositories, payment gateway and the SSE
//! broadcaster that services emit into.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tillpoint_core::paths::{data_root, database_path};
use tillpoint_core::ports::{LocalTenderGateway, PaymentGatewayPort, Repos};
use tillpoint_core::services::AppCore;
use tillpoint_db::{CoreFactory, setup_database};

use crate::sse::{SseBroadcaster, create_broadcaster};

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server. `None` uses the persisted setting.
    pub port: Option<u16>,
    /// Path to the `SQLite` database file.
    pub database_path: PathBuf,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Create config with the default database location.
    pub fn with_defaults() -> Result<Self> {
        Ok(Self {
            port: None,
            database_path: database_path()?,
            cors: CorsConfig::default(),
        })
    }

    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Restrict CORS to the given origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        if !origins.is_empty() {
            self.cors = CorsConfig::AllowOrigins(origins);
        }
        self
    }
}

/// Context for the Axum web server.
pub struct AxumContext {
    /// The core application facade.
    pub core: Arc<AppCore>,
    /// SSE broadcaster for real-time events.
    pub sse: Arc<SseBroadcaster>,
}

impl AxumContext {
    /// Build a context over existing repositories with the local tender
    /// gateway. Used by [`bootstrap`] and by tests with an in-memory database.
    pub fn from_repos(repos: Repos) -> Self {
        Self::with_gateway(repos, Arc::new(LocalTenderGateway::new()))
    }

    pub fn with_gateway(repos: Repos, gateway: Arc<dyn PaymentGatewayPort>) -> Self {
        let sse = create_broadcaster();
        let core = AppCore::new(repos, gateway, sse.clone());
        Self {
            core: Arc::new(core),
            sse,
        }
    }
}

/// Open the database and compose all services.
pub async fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    tracing::info!(
        target: "tillpoint.paths",
        database_path = %config.database_path.display(),
        data_root = %data_root().map(|p| p.display().to_string()).unwrap_or_default(),
        "Axum bootstrap resolved paths"
    );

    let pool = setup_database(&config.database_path).await?;
    Ok(AxumContext::from_repos(CoreFactory::build_repos(pool)))
}

/// Start the Axum server and serve until the process is stopped.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let ctx = bootstrap(&config).await?;

    let settings = ctx.core.settings().get().await?;
    let port = config
        .port
        .unwrap_or_else(|| settings.effective_server_port());

    let app = crate::routes::create_router(ctx, &config.cors);

    let addr = format!("0.0.0.0:{port}");
    let listener = TcpListener::bind(&addr).await?;
    info!(
        store = settings.effective_store_name(),
        "tillpoint listening on http://{}", addr
    );

    axum::serve(listener, app).await?;
    Ok(())
}
