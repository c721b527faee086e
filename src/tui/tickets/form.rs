//! Create/edit form modal
//!
//! Render-only: all input is routed through `TicketManager`, this component
//! just draws the `FormView` it is given.

use iocraft::prelude::*;

use crate::tui::components::{
    Footer, ModalBorderColor, ModalContainer, ModalOverlay, ModalWidth, Select, form_shortcuts,
};
use crate::tui::theme::theme;

use super::draft::FormField;
use super::view_model::FormView;

/// Props for the TicketFormModal component
#[derive(Default, Props)]
pub struct TicketFormModalProps {
    pub form: FormView,
}

/// Inline error line under a field
fn field_error(form: &FormView, field: FormField) -> Option<AnyElement<'static>> {
    form.error(field).map(|message| {
        element! {
            Text(content: message.to_string(), color: theme().error)
        }
        .into_any()
    })
}

/// Text input box; the cursor is drawn only while focused
fn text_input(form: &FormView, field: FormField, value: &str, placeholder: &str) -> AnyElement<'static> {
    let theme = theme();
    let focused = form.is_focused(field);

    let lines: Vec<(String, Color)> = if value.is_empty() && !focused {
        vec![(placeholder.to_string(), theme.text_dimmed)]
    } else {
        let mut lines: Vec<(String, Color)> = value
            .split('\n')
            .map(|line| (line.to_string(), theme.text))
            .collect();
        if focused && let Some(last) = lines.last_mut() {
            last.0.push('_');
        }
        lines
    };

    let min_height = if field == FormField::Description { 6 } else { 3 };

    element! {
        View(flex_direction: FlexDirection::Column, width: 100pct) {
            Text(
                content: form.label(field),
                color: if focused { theme.border_focused } else { theme.text_dimmed },
                weight: Weight::Bold,
            )
            View(
                border_style: BorderStyle::Round,
                border_color: form.border_color(field),
                padding_left: 1,
                padding_right: 1,
                width: 100pct,
                min_height: min_height,
                flex_direction: FlexDirection::Column,
            ) {
                #(lines.into_iter().map(|(line, color)| element! {
                    Text(content: line, color: color)
                }))
            }
            #(field_error(form, field))
        }
    }
    .into_any()
}

/// Create/edit ticket form
#[component]
pub fn TicketFormModal(props: &TicketFormModalProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let form = &props.form;

    let priority_color = form.priority_value.map(|p| theme.priority_color(p));
    let status_color = form.status_value.map(|s| theme.status_color(s));

    element! {
        ModalOverlay {
            ModalContainer(
                width: Some(ModalWidth::Percent(70)),
                border_color: Some(ModalBorderColor::Focused),
                title: Some(form.heading.to_string()),
                show_close_hint: Some(true),
                footer_text: Some(format!("Ctrl-S {}  ·  Esc Cancel", form.submit_label)),
            ) {
                View(flex_direction: FlexDirection::Column, gap: 1, width: 100pct) {
                    #(text_input(form, FormField::Title, &form.title, "Enter ticket title"))
                    #(text_input(
                        form,
                        FormField::Description,
                        &form.description,
                        "Describe the ticket in detail",
                    ))
                    View(flex_direction: FlexDirection::Row, gap: 4) {
                        View(flex_direction: FlexDirection::Column) {
                            Select(
                                label: Some("Priority *"),
                                options: form.priority_options.clone(),
                                selected_index: form.priority_index,
                                has_focus: form.is_focused(FormField::Priority),
                                value_color: priority_color,
                                placeholder: Some("Select priority"),
                            )
                            #(field_error(form, FormField::Priority))
                        }
                        View(flex_direction: FlexDirection::Column) {
                            Select(
                                label: Some("Status *"),
                                options: form.status_options.clone(),
                                selected_index: form.status_index,
                                has_focus: form.is_focused(FormField::Status),
                                value_color: status_color,
                                placeholder: Some("Select status"),
                            )
                            #(field_error(form, FormField::Status))
                        }
                    }
                    Footer(shortcuts: form_shortcuts())
                }
            }
        }
    }
}
