//! Modal container component
//!
//! Bordered box with a title row, a content area and a hint row.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Border accent of a modal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalBorderColor {
    #[default]
    Focused,
    /// Destructive confirmations
    Danger,
}

impl ModalBorderColor {
    pub fn to_color(self) -> Color {
        match self {
            Self::Focused => theme().border_focused,
            Self::Danger => theme().error,
        }
    }
}

/// Modal width configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalWidth {
    /// Column count
    Fixed(u32),
    /// Percentage of terminal width
    Percent(u32),
}

impl Default for ModalWidth {
    fn default() -> Self {
        Self::Fixed(60)
    }
}

impl ModalWidth {
    fn size(self) -> Size {
        match self {
            ModalWidth::Fixed(n) => Size::Length(n),
            ModalWidth::Percent(n) => Size::Percent(n as f32),
        }
    }
}

/// Props for the ModalContainer component
#[derive(Default, Props)]
pub struct ModalContainerProps<'a> {
    pub width: Option<ModalWidth>,
    pub border_color: Option<ModalBorderColor>,
    pub title: Option<String>,
    /// Shows "Esc to close" on the title row
    pub show_close_hint: Option<bool>,
    pub footer_text: Option<String>,
    pub children: Vec<AnyElement<'a>>,
}

/// Modal container component
///
/// ```ignore
/// element! {
///     ModalOverlay {
///         ModalContainer(title: "Delete Ticket".to_string(), border_color: ModalBorderColor::Danger) {
///             Text(content: "Are you sure?")
///         }
///     }
/// }
/// ```
#[component]
pub fn ModalContainer<'a>(props: &mut ModalContainerProps<'a>) -> impl Into<AnyElement<'a>> {
    let theme = theme();

    let border_color = props.border_color.unwrap_or_default().to_color();
    let width = props.width.unwrap_or_default().size();
    let show_close_hint = props.show_close_hint.unwrap_or(false);
    let title = props.title.clone();
    let footer = props.footer_text.clone();

    element! {
        View(
            width: width,
            border_style: BorderStyle::Round,
            border_color: border_color,
            padding_left: 1,
            padding_right: 1,
            flex_direction: FlexDirection::Column,
            background_color: Color::Black,
        ) {
            #(title.map(|title| element! {
                View(
                    width: 100pct,
                    border_edges: Edges::Bottom,
                    border_style: BorderStyle::Single,
                    border_color: theme.border,
                    flex_direction: FlexDirection::Row,
                ) {
                    Text(content: title, color: border_color, weight: Weight::Bold)
                    View(flex_grow: 1.0)
                    #(show_close_hint.then(|| element! {
                        Text(content: "Esc to close", color: theme.text_dimmed)
                    }))
                }
            }))

            View(width: 100pct, flex_direction: FlexDirection::Column, padding_top: 1, padding_bottom: 1) {
                #(std::mem::take(&mut props.children))
            }

            #(footer.map(|footer| element! {
                View(
                    width: 100pct,
                    border_edges: Edges::Top,
                    border_style: BorderStyle::Single,
                    border_color: theme.border,
                ) {
                    Text(content: footer, color: theme.text_dimmed)
                }
            }))
        }
    }
}
