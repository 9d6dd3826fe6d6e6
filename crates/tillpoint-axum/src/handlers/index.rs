//! Index view - the point-of-sale landing page.
//!
//! Server-rendered HTML listing the menu with current prices and stock.

use std::collections::HashMap;
use std::fmt::Write as _;

use axum::extract::State;
use axum::response::Html;
use tillpoint_core::{Product, StockLevel};

use crate::error::HttpError;
use crate::state::AppState;

/// Render the index page.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, HttpError> {
    let settings = state.core.settings().get().await?;
    let products = state.core.catalog().list().await?;
    let stock = state.core.inventory().list_stock().await?;
    let open_tickets = state.core.kitchen().open_tickets().await?.len();

    Ok(Html(render_index(
        settings.effective_store_name(),
        settings.effective_currency(),
        &products,
        &stock,
        open_tickets,
    )))
}

fn render_index(
    store_name: &str,
    currency: &str,
    products: &[Product],
    stock: &[StockLevel],
    open_tickets: usize,
) -> String {
    let stock_by_product: HashMap<i64, &StockLevel> =
        stock.iter().map(|s| (s.product_id, s)).collect();
    let title = escape_html(store_name);

    let mut rows = String::new();
    for product in products {
        let (on_hand, low) = stock_by_product
            .get(&product.id)
            .map_or((String::from("-"), false), |s| {
                (s.on_hand.to_string(), s.is_low())
            });
        let class = if low { " class=\"low\"" } else { "" };
        // Writing to a String cannot fail
        let _ = writeln!(
            rows,
            "      <tr{class}><td>{}</td><td>{} {}</td><td>{on_hand}</td></tr>",
            escape_html(&product.name),
            product.price,
            escape_html(currency),
        );
    }
    if products.is_empty() {
        rows.push_str("      <tr><td colspan=\"3\">No products yet</td></tr>\n");
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{title}</title>
  <style>
    body {{ font-family: sans-serif; margin: 2rem; }}
    table {{ border-collapse: collapse; }}
    td, th {{ padding: 0.25rem 1rem; text-align: left; }}
    tr.low td {{ color: #b00020; }}
  </style>
</head>
<body>
  <h1>{title}</h1>
  <p>Open kitchen tickets: {open_tickets}</p>
  <table>
    <thead><tr><th>Item</th><th>Price</th><th>On hand</th></tr></thead>
    <tbody>
{rows}    </tbody>
  </table>
</body>
</html>
"#
    )
}

/// Escape text for inclusion in HTML element content or attribute values.
fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
