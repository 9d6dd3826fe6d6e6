//! Main commands enum and primary subcommands.

use clap::Subcommand;
use tillpoint_core::{Money, PaymentMethod};

use crate::menu_commands::MenuCommand;
use crate::settings_commands::SettingsCommand;
use crate::stock_commands::StockCommand;

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Show resolved paths for tillpoint data
    Paths,

    /// Start the web server (index page, JSON API and event stream)
    Serve {
        /// Port to listen on (defaults to the saved server port)
        #[arg(short, long, env = "TILLPOINT_PORT")]
        port: Option<u16>,
        /// Restrict CORS to this origin (repeatable)
        #[arg(long = "allow-origin")]
        allow_origins: Vec<String>,
    },

    /// Manage menu items and their prices
    Menu {
        #[command(subcommand)]
        command: MenuCommand,
    },

    /// Manage stock levels and purchase orders
    Stock {
        #[command(subcommand)]
        command: StockCommand,
    },

    /// Take a payment
    Pay {
        /// Amount such as 12.50
        amount: Money,
        /// Tender type: cash or card
        #[arg(short, long, default_value = "cash")]
        method: PaymentMethod,
        /// Idempotency key; repeating a key returns the original payment
        #[arg(long)]
        key: Option<String>,
    },

    /// List recorded payments
    Payments,

    /// Send an order to the kitchen
    Order {
        /// Free-text order details, e.g. "Table 4: 2x soup"
        #[arg(required = true, num_args = 1..)]
        details: Vec<String>,
    },

    /// Work the kitchen ticket queue
    Kitchen {
        #[command(subcommand)]
        command: KitchenCommand,
    },

    /// View or change store settings
    Settings {
        #[command(subcommand)]
        command: SettingsCommand,
    },
}

/// Kitchen ticket subcommands.
#[derive(Subcommand)]
pub enum KitchenCommand {
    /// Show tickets that are not ready yet
    List,
    /// Mark a ticket as acknowledged by the kitchen
    Ack {
        /// Ticket ID
        id: i64,
    },
    /// Mark a ticket as ready for pickup
    Ready {
        /// Ticket ID
        id: i64,
    },
}
