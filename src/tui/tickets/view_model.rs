//! Pure view model for the ticket screen
//!
//! Everything the components render is derived here from `TicketManager`,
//! so layout decisions can be tested without a terminal.

use crate::tui::components::select::{Selectable, options_for};
use crate::tui::components::{
    CardView, Shortcut, Toast, confirm_shortcuts, empty_shortcuts, form_shortcuts, list_shortcuts,
};
use crate::tui::theme::theme;
use crate::types::{TicketPriority, TicketStatus};

use super::draft::{FieldErrors, FormField, TicketDraft};
use super::model::{TicketManager, UiState};

/// Everything needed to draw the ticket screen
#[derive(Debug, Clone)]
pub struct TicketsView {
    pub cards: Vec<CardView>,
    /// Index into `cards`; meaningless when `cards` is empty
    pub selected: usize,
    pub modal: ModalView,
    pub toast: Option<Toast>,
    pub shortcuts: Vec<Shortcut>,
}

impl TicketsView {
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn ticket_count(&self) -> usize {
        self.cards.len()
    }
}

/// The modal drawn over the list, if any
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalView {
    #[default]
    None,
    Form(FormView),
    Confirm(ConfirmView),
}

/// Display data for the create/edit form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormView {
    pub heading: &'static str,
    pub submit_label: &'static str,
    pub title: String,
    pub description: String,
    pub priority_options: Vec<String>,
    pub priority_index: Option<usize>,
    pub priority_value: Option<&'static str>,
    pub status_options: Vec<String>,
    pub status_index: Option<usize>,
    pub status_value: Option<&'static str>,
    pub focus: FormField,
    pub errors: FieldErrors,
}

impl FormView {
    fn new(editing: bool, draft: &TicketDraft, errors: &FieldErrors, focus: FormField) -> Self {
        let (heading, submit_label) = if editing {
            ("Edit Ticket", "Update Ticket")
        } else {
            ("Create New Ticket", "Create Ticket")
        };
        Self {
            heading,
            submit_label,
            title: draft.title.clone(),
            description: draft.description.clone(),
            priority_options: options_for::<TicketPriority>(),
            priority_index: draft.priority.map(|p| p.index()),
            priority_value: draft.priority.map(|p| p.as_str()),
            status_options: options_for::<TicketStatus>(),
            status_index: draft.status.map(|s| s.index()),
            status_value: draft.status.map(|s| s.as_str()),
            focus,
            errors: errors.clone(),
        }
    }

    /// Inline error under a field
    pub fn error(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn is_focused(&self, field: FormField) -> bool {
        self.focus == field
    }

    /// Label text for a field: `Title *`
    pub fn label(&self, field: FormField) -> String {
        format!("{} *", field.label())
    }

    /// Border color for a field: error beats focus
    pub fn border_color(&self, field: FormField) -> iocraft::prelude::Color {
        let theme = theme();
        if self.errors.contains_key(&field) {
            theme.error
        } else if self.is_focused(field) {
            theme.border_focused
        } else {
            theme.border
        }
    }
}

/// Display data for the delete confirmation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConfirmView {
    pub ticket_id: String,
    pub message: String,
}

impl ConfirmView {
    fn new(ticket_id: &str, title: Option<&str>) -> Self {
        let message = match title {
            Some(title) => format!(
                "Are you sure you want to delete \"{}\"? This action cannot be undone.",
                title
            ),
            None => "Are you sure you want to delete this ticket? This action cannot be undone."
                .to_string(),
        };
        Self {
            ticket_id: ticket_id.to_string(),
            message,
        }
    }
}

/// Derive the screen contents from the manager state
pub fn compute_view(manager: &TicketManager) -> TicketsView {
    let cards: Vec<CardView> = manager.tickets().iter().map(CardView::from_ticket).collect();

    let modal = match manager.ui() {
        UiState::Idle => ModalView::None,
        UiState::FormOpen {
            target,
            draft,
            errors,
            focus,
        } => ModalView::Form(FormView::new(target.is_some(), draft, errors, *focus)),
        UiState::ConfirmPending { target } => ModalView::Confirm(ConfirmView::new(
            target,
            manager.find(target).map(|t| t.title.as_str()),
        )),
    };

    let shortcuts = match &modal {
        ModalView::Form(_) => form_shortcuts(),
        ModalView::Confirm(_) => confirm_shortcuts(),
        ModalView::None if cards.is_empty() => empty_shortcuts(),
        ModalView::None => list_shortcuts(),
    };

    TicketsView {
        selected: manager.selected().min(cards.len().saturating_sub(1)),
        cards,
        modal,
        toast: manager.toast().cloned(),
        shortcuts,
    }
}

/// Rows taken by one card, borders included
pub const CARD_HEIGHT: u16 = 6;

/// Range of cards to draw so the selected one stays on screen
pub fn visible_window(selected: usize, count: usize, capacity: usize) -> std::ops::Range<usize> {
    let capacity = capacity.max(1);
    if count <= capacity {
        return 0..count;
    }
    let start = (selected + 1).saturating_sub(capacity).min(count - capacity);
    start..start + capacity
}
