//! CLI bootstrap - the composition root.
//!
//! Opens the database and assembles the `AppCore` that command handlers
//! delegate to. Payments go through the local tender gateway; events are
//! dropped because nothing in a one-shot command subscribes to them.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use tillpoint_core::paths::{database_path, database_path_in};
use tillpoint_core::{AppCore, LocalTenderGateway, NoopEmitter};
use tillpoint_db::{CoreFactory, setup_database};

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Path to the `SQLite` database file.
    pub database_path: PathBuf,
}

impl CliConfig {
    /// Resolve the database location, honouring a `--data-dir` override.
    pub fn resolve(data_dir: Option<&Path>) -> Result<Self> {
        let database_path = match data_dir {
            Some(root) => database_path_in(root)?,
            None => database_path()?,
        };
        Ok(Self { database_path })
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    app: AppCore,
}

impl CliContext {
    /// Wrap an already composed core.
    pub const fn from_core(app: AppCore) -> Self {
        Self { app }
    }

    /// Access the `AppCore`.
    pub const fn app(&self) -> &AppCore {
        &self.app
    }
}

/// Open the database and compose all services.
pub async fn bootstrap(config: &CliConfig) -> Result<CliContext> {
    tracing::debug!(
        target: "tillpoint.paths",
        database_path = %config.database_path.display(),
        "CLI bootstrap resolved paths"
    );

    let pool = setup_database(&config.database_path).await?;
    let app = CoreFactory::build_app_core(
        pool,
        Arc::new(LocalTenderGateway::new()),
        Arc::new(NoopEmitter::new()),
    );
    Ok(CliContext::from_core(app))
}
