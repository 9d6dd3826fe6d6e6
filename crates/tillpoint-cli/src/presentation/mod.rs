//! Terminal formatting for command output.

mod rows;
mod tables;

pub use rows::{
    order_row, payment_row, price_change_row, product_row, stock_row, suggestion_row, ticket_row,
};
pub use tables::{print_separator, truncate_string};
