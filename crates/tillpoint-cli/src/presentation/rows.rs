//! One-line renderings of domain records.

use tillpoint_core::{
    KitchenTicket, Payment, PriceChange, Product, PurchaseOrder, ReorderSuggestion, StockLevel,
};

use super::tables::truncate_string;

pub fn product_row(product: &Product, currency: &str) -> String {
    format!(
        "{:<5} {:<30} {:>10} {}",
        product.id,
        truncate_string(&product.name, 29),
        product.price.to_string(),
        currency
    )
}

/// Stock line; low items are flagged with `!`.
pub fn stock_row(level: &StockLevel) -> String {
    let flag = if level.is_low() { "!" } else { " " };
    format!(
        "{flag} {:<5} {:<30} {:>8} {:>10}",
        level.product_id,
        truncate_string(&level.product_name, 29),
        level.on_hand,
        level.reorder_threshold
    )
}

pub fn suggestion_row(suggestion: &ReorderSuggestion) -> String {
    format!(
        "{:<5} {:<30} on hand {:<6} order {}",
        suggestion.product_id,
        truncate_string(&suggestion.product_name, 29),
        suggestion.on_hand,
        suggestion.suggested_quantity
    )
}

pub fn order_row(order: &PurchaseOrder) -> String {
    format!(
        "{:<5} product {:<5} qty {:<6} {:<10} {}",
        order.id,
        order.product_id,
        order.quantity,
        order.status.as_str(),
        order.note.as_deref().unwrap_or("")
    )
    .trim_end()
    .to_string()
}

pub fn payment_row(payment: &Payment, currency: &str) -> String {
    format!(
        "{:<5} {:>10} {} {:<5} {:<9} {}",
        payment.id,
        payment.amount.to_string(),
        currency,
        payment.method.as_str(),
        payment.status.as_str(),
        payment.gateway_reference
    )
}

pub fn ticket_row(ticket: &KitchenTicket) -> String {
    format!(
        "{:<5} {:<13} {:<20} {}",
        ticket.id,
        ticket.status.as_str(),
        ticket.created_at.format("%Y-%m-%d %H:%M:%S"),
        ticket.details
    )
}

pub fn price_change_row(change: &PriceChange, currency: &str) -> String {
    format!(
        "{}  {} -> {} {}",
        change.changed_at.format("%Y-%m-%d %H:%M:%S"),
        change.old_price,
        change.new_price,
        currency
    )
}
