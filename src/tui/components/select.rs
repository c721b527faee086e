//! Compact inline selector component for enum fields
//!
//! Cycles through a list of options with left/right arrows.
//! Displays as: Label: ◀ value ▶

use iocraft::prelude::*;

use crate::tui::theme::{format_label, theme};
use crate::types::{TicketPriority, TicketStatus};

/// Props for the Select component
#[derive(Default, Props)]
pub struct SelectProps<'a> {
    /// Label to display before the selector
    pub label: Option<&'a str>,
    /// List of options to choose from
    pub options: Vec<String>,
    /// Index of the currently selected option, `None` when unset
    pub selected_index: Option<usize>,
    /// Whether the selector has focus
    pub has_focus: bool,
    /// Optional color for the value (status/priority badge color)
    pub value_color: Option<Color>,
    /// Text shown while nothing is selected
    pub placeholder: Option<&'a str>,
}

/// Compact inline selector component with arrow indicators
#[component]
pub fn Select<'a>(props: &SelectProps<'a>) -> impl Into<AnyElement<'a>> {
    let theme = theme();

    let accent = if props.has_focus {
        theme.border_focused
    } else {
        theme.text_dimmed
    };

    let current_value = props.selected_index.and_then(|i| props.options.get(i).cloned());
    let (value, value_color) = match current_value {
        Some(value) => (value, props.value_color.unwrap_or(theme.text)),
        None => (
            props.placeholder.unwrap_or("Select...").to_string(),
            theme.text_dimmed,
        ),
    };

    element! {
        View(flex_direction: FlexDirection::Row, gap: 1) {
            #(props.label.map(|label| element! {
                Text(content: format!("{}:", label), color: accent)
            }))
            Text(content: "◀", color: accent)
            Text(content: value, color: value_color)
            Text(content: "▶", color: accent)
        }
    }
}

/// Helper trait for enums that can be used with Select
pub trait Selectable: Sized + Clone + Copy + PartialEq + 'static {
    /// All values in display order
    fn all_values() -> &'static [Self];

    /// Display string for this value
    fn display(&self) -> String;

    /// Index of this value in `all_values`
    fn index(&self) -> usize {
        Self::all_values()
            .iter()
            .position(|v| v == self)
            .unwrap_or(0)
    }

    /// Next value (wrapping)
    fn next(&self) -> Self {
        let values = Self::all_values();
        values[(self.index() + 1) % values.len()]
    }

    /// Previous value (wrapping)
    fn prev(&self) -> Self {
        let values = Self::all_values();
        values[(self.index() + values.len() - 1) % values.len()]
    }
}

impl Selectable for TicketStatus {
    fn all_values() -> &'static [Self] {
        &[
            TicketStatus::Open,
            TicketStatus::InProgress,
            TicketStatus::Closed,
        ]
    }

    fn display(&self) -> String {
        format_label(self.as_str())
    }
}

impl Selectable for TicketPriority {
    fn all_values() -> &'static [Self] {
        &[
            TicketPriority::Low,
            TicketPriority::Medium,
            TicketPriority::High,
        ]
    }

    fn display(&self) -> String {
        format_label(self.as_str())
    }
}

/// Cycle an optional value; an unset value starts at either end
pub fn cycle_option<T: Selectable>(value: Option<T>, forward: bool) -> T {
    let values = T::all_values();
    match (value, forward) {
        (Some(v), true) => v.next(),
        (Some(v), false) => v.prev(),
        (None, true) => values[0],
        (None, false) => values[values.len() - 1],
    }
}

/// Get option strings for a selectable type
pub fn options_for<T: Selectable>() -> Vec<String> {
    T::all_values().iter().map(|v| v.display()).collect()
}
