//! Form draft for the ticket create/edit modal

use std::collections::BTreeMap;

use crate::types::{Ticket, TicketPriority, TicketStatus};

/// A field of the ticket form, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum FormField {
    #[default]
    Title,
    Description,
    Priority,
    Status,
}

impl FormField {
    /// Get the next field (wrapping)
    pub fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Description,
            FormField::Description => FormField::Priority,
            FormField::Priority => FormField::Status,
            FormField::Status => FormField::Title,
        }
    }

    /// Get the previous field (wrapping)
    pub fn prev(self) -> Self {
        match self {
            FormField::Title => FormField::Status,
            FormField::Description => FormField::Title,
            FormField::Priority => FormField::Description,
            FormField::Status => FormField::Priority,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Description => "Description",
            FormField::Priority => "Priority",
            FormField::Status => "Status",
        }
    }

    /// Whether the field takes free text (as opposed to a select)
    pub fn is_text(self) -> bool {
        matches!(self, FormField::Title | FormField::Description)
    }
}

/// Field name -> first validation error for that field
pub type FieldErrors = BTreeMap<FormField, String>;

/// The in-progress, unpersisted edit of a ticket's fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketDraft {
    pub title: String,
    pub description: String,
    /// Unset until the user picks one
    pub priority: Option<TicketPriority>,
    /// Defaults to `open`
    pub status: Option<TicketStatus>,
}

impl Default for TicketDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            priority: None,
            status: Some(TicketStatus::Open),
        }
    }
}

impl TicketDraft {
    /// Draft pre-filled with a ticket's editable fields
    ///
    /// Unrecognised stored values leave the select unset.
    pub fn from_ticket(ticket: &Ticket) -> Self {
        Self {
            title: ticket.title.clone(),
            description: ticket.description.clone(),
            priority: ticket.priority.known(),
            status: ticket.status.known(),
        }
    }
}

/// A single edit applied to one draft field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Title(String),
    Description(String),
    Priority(Option<TicketPriority>),
    Status(Option<TicketStatus>),
}

impl FieldEdit {
    pub fn field(&self) -> FormField {
        match self {
            FieldEdit::Title(_) => FormField::Title,
            FieldEdit::Description(_) => FormField::Description,
            FieldEdit::Priority(_) => FormField::Priority,
            FieldEdit::Status(_) => FormField::Status,
        }
    }

    /// Write the edit into a draft
    pub fn apply_to(self, draft: &mut TicketDraft) {
        match self {
            FieldEdit::Title(value) => draft.title = value,
            FieldEdit::Description(value) => draft.description = value,
            FieldEdit::Priority(value) => draft.priority = value,
            FieldEdit::Status(value) => draft.status = value,
        }
    }
}
