//! Ticket card component for the ticket list
//!
//! Shows the title, status and priority badges, a clipped description and
//! the creation date, with edit/delete hints on the selected card.

use iocraft::prelude::*;

use crate::tui::theme::{format_label, theme};
use crate::types::Ticket;
use crate::utils::truncate_text;

/// Longest description shown on a card before it is clipped
pub const DESCRIPTION_PREVIEW_CHARS: usize = 120;

/// Display data for one card
///
/// Status and priority are kept as their stored strings so the badge lookup
/// can fall back to a neutral style.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardView {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: String,
    pub priority: String,
    pub created: String,
}

impl CardView {
    pub fn from_ticket(ticket: &Ticket) -> Self {
        Self {
            id: ticket.id.clone(),
            title: ticket.title.clone(),
            description: truncate_text(
                &ticket.description.replace('\n', " "),
                DESCRIPTION_PREVIEW_CHARS,
            ),
            status: ticket.status.as_str().to_string(),
            priority: ticket.priority.as_str().to_string(),
            created: ticket.created_date(),
        }
    }

    pub fn status_label(&self) -> String {
        format_label(&self.status)
    }

    pub fn priority_label(&self) -> String {
        format_label(&self.priority)
    }
}

/// Props for the TicketCard component
#[derive(Default, Props)]
pub struct TicketCardProps {
    /// The card to display
    pub card: CardView,
    /// Whether this card is selected
    pub is_selected: bool,
}

/// Ticket card
///
/// Layout:
/// ```text
/// ╭──────────────────────────────────────╮
/// │> Fix login bug                       │
/// │ In Progress  High                    │
/// │ Users can't log in with SSO          │
/// │ 2024-06-01          e edit  d delete │
/// ╰──────────────────────────────────────╯
/// ```
#[component]
pub fn TicketCard(props: &TicketCardProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let card = &props.card;

    let border_color = if props.is_selected {
        theme.border_focused
    } else {
        theme.border
    };
    let indicator = if props.is_selected { ">" } else { " " };

    element! {
        View(
            width: 100pct,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: border_color,
            padding_left: 1,
            padding_right: 1,
        ) {
            View(flex_direction: FlexDirection::Row) {
                Text(content: indicator, color: theme.highlight, weight: Weight::Bold)
                Text(content: card.title.clone(), color: theme.text, weight: Weight::Bold)
            }
            View(flex_direction: FlexDirection::Row, gap: 2) {
                Text(
                    content: card.status_label(),
                    color: theme.status_color(&card.status),
                    weight: Weight::Bold,
                )
                Text(
                    content: card.priority_label(),
                    color: theme.priority_color(&card.priority),
                )
            }
            Text(content: card.description.clone(), color: theme.text_dimmed)
            View(flex_direction: FlexDirection::Row, justify_content: JustifyContent::SpaceBetween) {
                Text(content: card.created.clone(), color: theme.text_dimmed)
                #(props.is_selected.then(|| element! {
                    View(flex_direction: FlexDirection::Row, gap: 2) {
                        Text(content: "e edit", color: theme.highlight)
                        Text(content: "d delete", color: theme.error)
                    }
                }))
            }
        }
    }
}
