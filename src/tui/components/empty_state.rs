//! Empty state component
//!
//! Shown in place of the card list when there are no tickets.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Props for the EmptyState component
#[derive(Default, Props)]
pub struct EmptyStateProps {
    /// Override for the headline
    pub title: Option<String>,
    /// Override for the hint line
    pub hint: Option<String>,
}

pub const EMPTY_TITLE: &str = "No Tickets Yet";
pub const EMPTY_MESSAGE: &str = "Get started by creating your first ticket!";
pub const EMPTY_HINT: &str = "Press 'n' to create your first ticket.";

/// Empty state display with helpful message
#[component]
pub fn EmptyState(props: &EmptyStateProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let title = props.title.clone().unwrap_or_else(|| EMPTY_TITLE.to_string());
    let hint = props.hint.clone().unwrap_or_else(|| EMPTY_HINT.to_string());

    element! {
        View(
            width: 100pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            padding: 2,
        ) {
            View(
                width: 5,
                height: 3,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border_style: BorderStyle::Round,
                border_color: theme.border,
                margin_bottom: 1,
            ) {
                Text(content: "i", color: theme.text_dimmed, weight: Weight::Bold)
            }

            Text(content: title, color: theme.text, weight: Weight::Bold)

            View(margin_top: 1, max_width: 60) {
                Text(content: EMPTY_MESSAGE, color: theme.text_dimmed)
            }

            View(margin_top: 2) {
                Text(content: hint, color: theme.highlight)
            }
        }
    }
}
