//! Stock level and purchase order subcommands.

use clap::Subcommand;

#[derive(Subcommand)]
pub enum StockCommand {
    /// Show stock for every product
    Show,
    /// Show products at or below their reorder threshold
    Low,
    /// Add or remove stock
    Adjust {
        /// Product ID
        product_id: i64,
        /// Signed change, e.g. 12 or -3
        #[arg(allow_negative_numbers = true)]
        delta: i64,
        /// Why the stock changed
        #[arg(short, long, default_value = "manual")]
        reason: String,
    },
    /// Set the reorder threshold for a product
    Threshold {
        /// Product ID
        product_id: i64,
        /// New threshold
        value: i64,
    },
    /// Suggest purchase orders for low stock
    Suggest,
    /// Create a draft purchase order
    Order {
        /// Product ID
        product_id: i64,
        /// Quantity to order
        quantity: i64,
        /// Note for the supplier
        #[arg(short, long)]
        note: Option<String>,
    },
    /// List purchase orders
    Orders,
    /// Submit a draft purchase order
    Submit {
        /// Purchase order ID
        id: i64,
    },
    /// Receive a submitted purchase order into stock
    Receive {
        /// Purchase order ID
        id: i64,
    },
    /// Cancel an open purchase order
    Cancel {
        /// Purchase order ID
        id: i64,
    },
}
