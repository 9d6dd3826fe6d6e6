//! Settings subcommands.

use clap::Subcommand;

#[derive(Subcommand)]
pub enum SettingsCommand {
    /// Show current settings
    Show,
    /// Change one or more settings
    Set {
        /// Store name shown on the index page
        #[arg(long)]
        store_name: Option<String>,
        /// Three-letter currency code
        #[arg(long)]
        currency: Option<String>,
        /// Reorder threshold for newly added products
        #[arg(long)]
        reorder_threshold: Option<i64>,
        /// Port for `tillpoint serve`
        #[arg(long)]
        port: Option<u16>,
    },
}
