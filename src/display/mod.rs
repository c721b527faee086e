//! CLI output formatting

use owo_colors::OwoColorize;

use crate::tui::format_label;
use crate::types::{StoredValue, Ticket, TicketPriority, TicketStatus};

pub fn format_status_colored(status: TicketStatus) -> String {
    let badge = format!("[{}]", format_label(status.as_str()));
    match status {
        TicketStatus::Open => badge.blue().to_string(),
        TicketStatus::InProgress => badge.yellow().to_string(),
        TicketStatus::Closed => badge.green().to_string(),
    }
}

pub fn format_priority_colored(priority: TicketPriority) -> String {
    let label = format_label(priority.as_str());
    match priority {
        TicketPriority::Low => label.green().to_string(),
        TicketPriority::Medium => label.yellow().to_string(),
        TicketPriority::High => label.red().bold().to_string(),
    }
}

/// Status badge for a stored value; unrecognised values are dimmed
pub fn format_stored_status(status: &StoredValue<TicketStatus>) -> String {
    match status.known() {
        Some(known) => format_status_colored(known),
        None => format!("[{}]", format_label(status.as_str())).dimmed().to_string(),
    }
}

pub fn format_stored_priority(priority: &StoredValue<TicketPriority>) -> String {
    match priority.known() {
        Some(known) => format_priority_colored(known),
        None => format_label(priority.as_str()).dimmed().to_string(),
    }
}

/// Single-line ticket summary: `t-3f9a1c2e  [Open]  High  Fix login bug`
pub fn format_ticket_line(ticket: &Ticket) -> String {
    format!(
        "{}  {}  {}  {}",
        format!("{:10}", ticket.id).cyan(),
        format_stored_status(&ticket.status),
        format_stored_priority(&ticket.priority),
        ticket.title
    )
}
