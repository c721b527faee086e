//! App header bar component
//!
//! Displays the application title, the current screen and a ticket count.

use iocraft::prelude::*;

use crate::tui::theme::theme;

pub const APP_TITLE: &str = "TicketHub";

/// Props for the Header component
#[derive(Default, Props)]
pub struct HeaderProps<'a> {
    /// Title (defaults to "TicketHub")
    pub title: Option<&'a str>,
    /// Screen name shown after the title
    pub subtitle: Option<&'a str>,
    pub ticket_count: Option<usize>,
}

/// Left-hand header text: `TicketHub - Ticket Management`
pub fn header_text(title: Option<&str>, subtitle: Option<&str>) -> String {
    let title = title.unwrap_or(APP_TITLE);
    match subtitle {
        Some(sub) => format!("{} - {}", title, sub),
        None => title.to_string(),
    }
}

/// App header bar showing title and ticket count
#[component]
pub fn Header<'a>(props: &HeaderProps<'a>) -> impl Into<AnyElement<'a>> {
    let theme = theme();
    let left_text = header_text(props.title, props.subtitle);

    element! {
        View(
            width: 100pct,
            height: 1,
            flex_direction: FlexDirection::Row,
            flex_shrink: 0.0,
            justify_content: JustifyContent::SpaceBetween,
            padding_left: 1,
            padding_right: 1,
            background_color: theme.highlight,
        ) {
            Text(content: left_text, color: theme.text, weight: Weight::Bold)
            #(props.ticket_count.map(|count| element! {
                Text(
                    content: match count {
                        1 => "1 ticket".to_string(),
                        n => format!("{} tickets", n),
                    },
                    color: theme.text,
                )
            }))
        }
    }
}
