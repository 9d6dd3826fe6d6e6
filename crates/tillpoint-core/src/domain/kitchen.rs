//! Kitchen ticket types.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum length of a ticket's free-text details, in characters.
pub const MAX_TICKET_DETAILS_LEN: usize = 2000;

/// Where a ticket is in the kitchen's workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Pending,
    Acknowledged,
    Ready,
}

impl TicketStatus {
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Acknowledged) | (Self::Acknowledged, Self::Ready)
        )
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Acknowledged => "acknowledged",
            Self::Ready => "ready",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "acknowledged" => Ok(Self::Acknowledged),
            "ready" => Ok(Self::Ready),
            other => Err(format!("Unknown ticket status: {other}")),
        }
    }
}

/// An order message sent to the kitchen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KitchenTicket {
    pub id: i64,
    pub details: String,
    pub status: TicketStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Check ticket details, returning the trimmed text or a reason.
pub fn validate_ticket_details(details: &str) -> Result<String, String> {
    let trimmed = details.trim();
    if trimmed.is_empty() {
        return Err("Order details cannot be empty".to_string());
    }
    if trimmed.chars().count() > MAX_TICKET_DETAILS_LEN {
        return Err(format!(
            "Order details must be at most {MAX_TICKET_DETAILS_LEN} characters"
        ));
    }
    Ok(trimmed.to_string())
}
