//! Modal overlay component
//!
//! Full-screen layer that centers a modal over the current screen.

use iocraft::prelude::*;

/// Backdrop color behind open modals
pub const MODAL_BACKDROP: Color = Color::Rgb {
    r: 30,
    g: 30,
    b: 30,
};

/// Props for the ModalOverlay component
#[derive(Default, Props)]
pub struct ModalOverlayProps<'a> {
    /// Paint the backdrop over the screen underneath (default: true)
    pub show_backdrop: Option<bool>,
    pub children: Vec<AnyElement<'a>>,
}

/// Absolutely positioned layer with its children centered
#[component]
pub fn ModalOverlay<'a>(props: &mut ModalOverlayProps<'a>) -> impl Into<AnyElement<'a>> {
    let backdrop = props.show_backdrop.unwrap_or(true).then_some(MODAL_BACKDROP);

    element! {
        View(
            width: 100pct,
            height: 100pct,
            position: Position::Absolute,
            top: 0,
            left: 0,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            background_color: backdrop,
        ) {
            #(std::mem::take(&mut props.children))
        }
    }
}
