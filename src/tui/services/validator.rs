//! Form validation module for TUI forms
//!
//! Every field is checked independently so all problems are reported at
//! once; an empty error map means the draft is valid.

use crate::tui::tickets::draft::{FieldErrors, FormField, TicketDraft};

/// Minimum title length, counted in characters after trimming
pub const MIN_TITLE_LEN: usize = 3;

pub const TITLE_REQUIRED: &str = "Title is required";
pub const TITLE_TOO_SHORT: &str = "Title must be at least 3 characters";
pub const DESCRIPTION_REQUIRED: &str = "Description is required";
pub const PRIORITY_REQUIRED: &str = "Priority is required";
pub const STATUS_REQUIRED: &str = "Status is required";

/// Validator for the ticket create/edit form
pub struct TicketFormValidator;

impl TicketFormValidator {
    /// Validate a draft, returning one message per invalid field
    pub fn validate(draft: &TicketDraft) -> FieldErrors {
        let mut errors = FieldErrors::new();

        let title = draft.title.trim();
        if title.is_empty() {
            errors.insert(FormField::Title, TITLE_REQUIRED.to_string());
        } else if title.chars().count() < MIN_TITLE_LEN {
            errors.insert(FormField::Title, TITLE_TOO_SHORT.to_string());
        }

        if draft.description.trim().is_empty() {
            errors.insert(FormField::Description, DESCRIPTION_REQUIRED.to_string());
        }

        if draft.priority.is_none() {
            errors.insert(FormField::Priority, PRIORITY_REQUIRED.to_string());
        }

        if draft.status.is_none() {
            errors.insert(FormField::Status, STATUS_REQUIRED.to_string());
        }

        errors
    }
}
