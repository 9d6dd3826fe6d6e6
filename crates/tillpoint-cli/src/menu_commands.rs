//! Menu subcommands.

use clap::Subcommand;
use tillpoint_core::Money;

#[derive(Subcommand)]
pub enum MenuCommand {
    /// List all menu items
    List,
    /// Add a menu item
    Add {
        /// Item name (must be unique)
        name: String,
        /// Price such as 3.80
        price: Money,
    },
    /// Change the price of a menu item
    Price {
        /// Item name
        name: String,
        /// New price
        price: Money,
    },
    /// Show price changes for a menu item
    History {
        /// Item name
        name: String,
    },
    /// Remove a menu item and its stock record
    Remove {
        /// Item name
        name: String,
    },
}
