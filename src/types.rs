use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TicketHubError;

/// Storage slot holding the serialized ticket collection
pub const TICKETS_KEY: &str = "tickets";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    #[default]
    Open,
    InProgress,
    Closed,
}

impl TicketStatus {
    /// The serialized form, as stored and keyed by the theme
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Open => "open",
            TicketStatus::InProgress => "in_progress",
            TicketStatus::Closed => "closed",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketStatus {
    type Err = TicketHubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "open" => Ok(TicketStatus::Open),
            "in_progress" => Ok(TicketStatus::InProgress),
            "closed" => Ok(TicketStatus::Closed),
            _ => Err(TicketHubError::InvalidStatus(s.to_string())),
        }
    }
}

pub const VALID_STATUSES: &[&str] = &["open", "in_progress", "closed"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketPriority {
    Low,
    Medium,
    High,
}

impl TicketPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketPriority::Low => "low",
            TicketPriority::Medium => "medium",
            TicketPriority::High => "high",
        }
    }
}

impl fmt::Display for TicketPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketPriority {
    type Err = TicketHubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(TicketPriority::Low),
            "medium" => Ok(TicketPriority::Medium),
            "high" => Ok(TicketPriority::High),
            _ => Err(TicketHubError::InvalidPriority(s.to_string())),
        }
    }
}

/// A status or priority as read from storage
///
/// Values this build does not recognise are kept verbatim so they render
/// with a neutral badge and are written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredValue<T> {
    Known(T),
    Unrecognized(String),
}

impl<T: Copy> StoredValue<T> {
    /// The recognised value, if any
    pub fn known(&self) -> Option<T> {
        match self {
            StoredValue::Known(value) => Some(*value),
            StoredValue::Unrecognized(_) => None,
        }
    }
}

impl<T> From<T> for StoredValue<T> {
    fn from(value: T) -> Self {
        StoredValue::Known(value)
    }
}

impl<T: PartialEq> PartialEq<T> for StoredValue<T> {
    fn eq(&self, other: &T) -> bool {
        matches!(self, StoredValue::Known(value) if value == other)
    }
}

impl StoredValue<TicketStatus> {
    pub fn as_str(&self) -> &str {
        match self {
            StoredValue::Known(status) => status.as_str(),
            StoredValue::Unrecognized(raw) => raw,
        }
    }
}

impl StoredValue<TicketPriority> {
    pub fn as_str(&self) -> &str {
        match self {
            StoredValue::Known(priority) => priority.as_str(),
            StoredValue::Unrecognized(raw) => raw,
        }
    }
}

/// A unit of trackable work
///
/// Serialized with camelCase field names so the stored slot reads
/// `{"id", "title", "description", "priority", "status", "createdAt", "updatedAt"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: String,
    pub title: String,
    pub description: String,
    pub priority: StoredValue<TicketPriority>,
    pub status: StoredValue<TicketStatus>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Ticket {
    /// Creation date in `YYYY-MM-DD` form, as shown on cards
    pub fn created_date(&self) -> String {
        self.created_at.strftime("%Y-%m-%d").to_string()
    }
}
