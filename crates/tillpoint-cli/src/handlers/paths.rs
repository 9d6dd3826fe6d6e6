//! Show where tillpoint keeps its data.

use anyhow::Result;
use tillpoint_core::paths::DATA_DIR_ENV;

use crate::bootstrap::CliConfig;

pub fn execute(config: &CliConfig) -> Result<()> {
    println!("Database: {}", config.database_path.display());
    if let Some(root) = config.database_path.parent().and_then(|p| p.parent()) {
        println!("Data dir: {}", root.display());
    }
    println!();
    println!("Set {DATA_DIR_ENV} or pass --data-dir to use another location.");
    Ok(())
}
