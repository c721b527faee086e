//! Delete confirmation dialog

use iocraft::prelude::*;

use crate::tui::components::{ModalBorderColor, ModalContainer, ModalOverlay, ModalWidth};
use crate::tui::theme::theme;

use super::view_model::ConfirmView;

/// Props for the DeleteConfirmModal component
#[derive(Default, Props)]
pub struct DeleteConfirmModalProps {
    pub confirm: ConfirmView,
}

#[component]
pub fn DeleteConfirmModal(props: &DeleteConfirmModalProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        ModalOverlay {
            ModalContainer(
                width: Some(ModalWidth::Fixed(56)),
                border_color: Some(ModalBorderColor::Danger),
                title: Some("Delete Ticket".to_string()),
                footer_text: Some("[y] Delete  /  [n] Cancel".to_string()),
            ) {
                Text(content: props.confirm.message.clone(), color: theme.text)
                Text(content: props.confirm.ticket_id.clone(), color: theme.id_color)
            }
        }
    }
}
