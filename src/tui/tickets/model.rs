//! Ticket screen state machine
//!
//! `TicketManager` owns the in-memory ticket collection, the modal state and
//! the toast. All transitions are plain method calls so the whole
//! create/edit/delete flow is testable without the iocraft runtime.

use std::sync::Arc;
use std::time::Duration;

use jiff::{SignedDuration, Timestamp};

use crate::clock::{Clock, SystemClock};
use crate::store::TicketStore;
use crate::tui::components::select::cycle_option;
use crate::tui::components::toast::{DEFAULT_TOAST_DURATION, Toast, ToastManager};
use crate::tui::services::TicketFormValidator;
use crate::types::{StoredValue, Ticket, TicketPriority};
use crate::utils::generate_id;

use super::draft::{FieldEdit, FieldErrors, FormField, TicketDraft};

pub const MSG_CREATED: &str = "Ticket created successfully!";
pub const MSG_UPDATED: &str = "Ticket updated successfully!";
pub const MSG_DELETED: &str = "Ticket deleted successfully!";
pub const MSG_FIX_FORM: &str = "Please fix the errors in the form";

/// Which modal (if any) is open
///
/// Form and confirmation can never be open at the same time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UiState {
    #[default]
    Idle,
    /// Create/edit form; `target` is the ID being edited, `None` when creating
    FormOpen {
        target: Option<String>,
        draft: TicketDraft,
        errors: FieldErrors,
        focus: FormField,
    },
    /// Waiting for the user to confirm deletion of `target`
    ConfirmPending { target: String },
}

impl UiState {
    pub fn is_idle(&self) -> bool {
        matches!(self, UiState::Idle)
    }
}

/// All possible actions on the ticket screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TicketAction {
    // Navigation
    MoveUp,
    MoveDown,
    GoToTop,
    GoToBottom,

    // Form
    /// Open the form with a blank draft
    OpenCreate,
    /// Open the form on a ticket by ID
    OpenEdit(String),
    /// Open the form on the selected card
    EditSelected,
    /// Replace one draft field
    EditField(FieldEdit),
    /// Type a character into the focused text field
    InsertChar(char),
    /// Insert a line break into the description
    InsertNewline,
    /// Delete the last character of the focused text field
    DeleteChar,
    FocusNext,
    FocusPrev,
    /// Cycle the focused select forward
    SelectNext,
    /// Cycle the focused select backward
    SelectPrev,
    Submit,

    // Delete
    /// Ask for confirmation before deleting a ticket by ID
    RequestDelete(String),
    /// Ask for confirmation before deleting the selected card
    DeleteSelected,
    ConfirmDelete,

    /// Close whichever modal is open without changes
    Cancel,
    /// Re-read the collection from the store
    Reload,
    /// Leave the ticket screen
    BackToDashboard,
    /// Exit the application
    Quit,
}

/// Side effects the hosting component must carry out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TicketEffect {
    #[default]
    None,
    /// Invoke the back-to-dashboard callback
    BackToDashboard,
    /// Exit the application
    Quit,
}

/// Outcome of a form submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A ticket with this ID was created
    Created(String),
    /// The ticket with this ID was updated
    Updated(String),
    /// Validation failed; errors are on the form
    Invalid,
    /// The store rejected the write; nothing changed
    SaveFailed,
    /// No form was open
    NotOpen,
}

/// State and transitions of the ticket management screen
pub struct TicketManager {
    store: Arc<dyn TicketStore>,
    clock: Arc<dyn Clock>,
    tickets: Vec<Ticket>,
    ui: UiState,
    selected: usize,
    toasts: ToastManager,
}

impl std::fmt::Debug for TicketManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TicketManager")
            .field("tickets", &self.tickets.len())
            .field("ui", &self.ui)
            .field("selected", &self.selected)
            .field("toast", &self.toasts.current())
            .finish()
    }
}

impl TicketManager {
    /// Mount the screen: load the persisted collection
    pub fn new(store: Arc<dyn TicketStore>) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    pub fn with_clock(store: Arc<dyn TicketStore>, clock: Arc<dyn Clock>) -> Self {
        let tickets = store.load_all();
        tracing::debug!("mounted ticket screen with {} tickets", tickets.len());
        Self {
            store,
            clock,
            tickets,
            ui: UiState::Idle,
            selected: 0,
            toasts: ToastManager::new(DEFAULT_TOAST_DURATION),
        }
    }

    /// Change how long toasts stay visible
    pub fn with_toast_duration(mut self, duration: Duration) -> Self {
        self.toasts = ToastManager::new(duration);
        self
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_ticket(&self) -> Option<&Ticket> {
        self.tickets.get(self.selected)
    }

    pub fn find(&self, id: &str) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id == id)
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toasts.current()
    }

    pub fn toasts(&self) -> &ToastManager {
        &self.toasts
    }

    /// Hide the toast scheduled as `generation`, unless it was replaced
    pub fn dismiss_toast(&mut self, generation: u64) -> bool {
        self.toasts.dismiss(generation)
    }

    // ------------------------------------------------------------------
    // Dispatch
    // ------------------------------------------------------------------

    /// Apply an action, returning any effect for the host to perform
    pub fn apply(&mut self, action: TicketAction) -> TicketEffect {
        match action {
            TicketAction::MoveUp => self.selected = self.selected.saturating_sub(1),
            TicketAction::MoveDown => {
                self.selected = (self.selected + 1).min(self.tickets.len().saturating_sub(1));
            }
            TicketAction::GoToTop => self.selected = 0,
            TicketAction::GoToBottom => self.selected = self.tickets.len().saturating_sub(1),

            TicketAction::OpenCreate => self.open_create(),
            TicketAction::OpenEdit(id) => self.open_edit(&id),
            TicketAction::EditSelected => {
                if let Some(id) = self.selected_ticket().map(|t| t.id.clone()) {
                    self.open_edit(&id);
                }
            }
            TicketAction::EditField(edit) => self.update_field(edit),
            TicketAction::InsertChar(c) => self.edit_focused_text(|text| text.push(c)),
            TicketAction::InsertNewline => {
                if self.focused_field() == Some(FormField::Description) {
                    self.edit_focused_text(|text| text.push('\n'));
                }
            }
            TicketAction::DeleteChar => self.edit_focused_text(|text| {
                text.pop();
            }),
            TicketAction::FocusNext => self.move_focus(FormField::next),
            TicketAction::FocusPrev => self.move_focus(FormField::prev),
            TicketAction::SelectNext => self.cycle_focused_select(true),
            TicketAction::SelectPrev => self.cycle_focused_select(false),
            TicketAction::Submit => {
                self.submit();
            }

            TicketAction::RequestDelete(id) => self.request_delete(&id),
            TicketAction::DeleteSelected => {
                if let Some(id) = self.selected_ticket().map(|t| t.id.clone()) {
                    self.request_delete(&id);
                }
            }
            TicketAction::ConfirmDelete => {
                self.confirm_delete();
            }

            TicketAction::Cancel => self.cancel(),
            TicketAction::Reload => self.reload(),
            TicketAction::BackToDashboard => {
                if self.ui.is_idle() {
                    return TicketEffect::BackToDashboard;
                }
            }
            TicketAction::Quit => return TicketEffect::Quit,
        }
        TicketEffect::None
    }

    // ------------------------------------------------------------------
    // Form flow
    // ------------------------------------------------------------------

    /// Open the form with a blank draft
    pub fn open_create(&mut self) {
        if !self.ui.is_idle() {
            return;
        }
        self.ui = UiState::FormOpen {
            target: None,
            draft: TicketDraft::default(),
            errors: FieldErrors::new(),
            focus: FormField::Title,
        };
    }

    /// Open the form on an existing ticket
    ///
    /// Unknown IDs leave the screen idle.
    pub fn open_edit(&mut self, id: &str) {
        if !self.ui.is_idle() {
            return;
        }
        let Some(ticket) = self.find(id) else {
            tracing::debug!("ignoring edit of unknown ticket {}", id);
            return;
        };
        self.ui = UiState::FormOpen {
            target: Some(ticket.id.clone()),
            draft: TicketDraft::from_ticket(ticket),
            errors: FieldErrors::new(),
            focus: FormField::Title,
        };
    }

    /// Replace one draft field, clearing that field's error
    pub fn update_field(&mut self, edit: FieldEdit) {
        if let UiState::FormOpen { draft, errors, .. } = &mut self.ui {
            errors.remove(&edit.field());
            edit.apply_to(draft);
        }
    }

    /// The focused form field, if the form is open
    pub fn focused_field(&self) -> Option<FormField> {
        match &self.ui {
            UiState::FormOpen { focus, .. } => Some(*focus),
            _ => None,
        }
    }

    fn move_focus(&mut self, step: fn(FormField) -> FormField) {
        if let UiState::FormOpen { focus, .. } = &mut self.ui {
            *focus = step(*focus);
        }
    }

    fn edit_focused_text(&mut self, edit: impl FnOnce(&mut String)) {
        let UiState::FormOpen { draft, focus, .. } = &self.ui else {
            return;
        };
        let mut text = match focus {
            FormField::Title => draft.title.clone(),
            FormField::Description => draft.description.clone(),
            FormField::Priority | FormField::Status => return,
        };
        edit(&mut text);
        let field_edit = match focus {
            FormField::Title => FieldEdit::Title(text),
            _ => FieldEdit::Description(text),
        };
        self.update_field(field_edit);
    }

    fn cycle_focused_select(&mut self, forward: bool) {
        let UiState::FormOpen { draft, focus, .. } = &self.ui else {
            return;
        };
        let edit = match focus {
            FormField::Priority => FieldEdit::Priority(Some(cycle_option(draft.priority, forward))),
            FormField::Status => FieldEdit::Status(Some(cycle_option(draft.status, forward))),
            FormField::Title | FormField::Description => return,
        };
        self.update_field(edit);
    }

    /// Validate and persist the open form
    ///
    /// On success the form closes and a success toast is shown. On a
    /// validation error the form stays open with its errors populated. On a
    /// write failure the collection is left untouched and the form stays open.
    pub fn submit(&mut self) -> SubmitOutcome {
        let UiState::FormOpen {
            target,
            draft,
            errors,
            ..
        } = &mut self.ui
        else {
            return SubmitOutcome::NotOpen;
        };

        let found = TicketFormValidator::validate(draft);
        if !found.is_empty() {
            tracing::debug!("rejected submit: {} invalid fields", found.len());
            *errors = found;
            self.toasts.error(MSG_FIX_FORM);
            return SubmitOutcome::Invalid;
        }

        let target = target.clone();
        let draft = draft.clone();
        let now = self.clock.now();

        let (next, id, message) = match target {
            Some(id) => {
                let next = self.updated_collection(&id, &draft, now);
                (next, id, MSG_UPDATED)
            }
            None => {
                let ticket = self.new_ticket(&draft, now);
                let id = ticket.id.clone();
                let mut next = Vec::with_capacity(self.tickets.len() + 1);
                next.push(ticket);
                next.extend(self.tickets.iter().cloned());
                (next, id, MSG_CREATED)
            }
        };

        if !self.commit(next) {
            return SubmitOutcome::SaveFailed;
        }

        let created = message == MSG_CREATED;
        if created {
            self.selected = 0;
        }
        self.ui = UiState::Idle;
        self.toasts.success(message);

        if created {
            tracing::debug!("created ticket {}", id);
            SubmitOutcome::Created(id)
        } else {
            tracing::debug!("updated ticket {}", id);
            SubmitOutcome::Updated(id)
        }
    }

    fn new_ticket(&self, draft: &TicketDraft, now: Timestamp) -> Ticket {
        let id = generate_id(|candidate| self.tickets.iter().any(|t| t.id == candidate));
        Ticket {
            id,
            title: draft.title.clone(),
            description: draft.description.clone(),
            priority: draft.priority.unwrap_or(TicketPriority::Medium).into(),
            status: draft.status.unwrap_or_default().into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Collection with the ticket `id` overwritten by the draft
    ///
    /// A vanished target leaves the collection as it was.
    fn updated_collection(&self, id: &str, draft: &TicketDraft, now: Timestamp) -> Vec<Ticket> {
        self.tickets
            .iter()
            .map(|ticket| {
                if ticket.id != id {
                    return ticket.clone();
                }
                Ticket {
                    id: ticket.id.clone(),
                    title: draft.title.clone(),
                    description: draft.description.clone(),
                    priority: draft
                        .priority
                        .map(StoredValue::from)
                        .unwrap_or_else(|| ticket.priority.clone()),
                    status: draft
                        .status
                        .map(StoredValue::from)
                        .unwrap_or_else(|| ticket.status.clone()),
                    created_at: ticket.created_at,
                    updated_at: advance_timestamp(ticket.updated_at, now),
                }
            })
            .collect()
    }

    // ------------------------------------------------------------------
    // Delete flow
    // ------------------------------------------------------------------

    /// Ask for confirmation before deleting `id`
    pub fn request_delete(&mut self, id: &str) {
        if !self.ui.is_idle() {
            return;
        }
        if self.find(id).is_none() {
            tracing::debug!("ignoring delete of unknown ticket {}", id);
            return;
        }
        self.ui = UiState::ConfirmPending {
            target: id.to_string(),
        };
    }

    /// Delete the ticket awaiting confirmation
    ///
    /// Returns whether the collection was written.
    pub fn confirm_delete(&mut self) -> bool {
        let UiState::ConfirmPending { target } = &self.ui else {
            return false;
        };
        let target = target.clone();

        let next: Vec<Ticket> = self
            .tickets
            .iter()
            .filter(|t| t.id != target)
            .cloned()
            .collect();

        if !self.commit(next) {
            return false;
        }

        self.selected = self.selected.min(self.tickets.len().saturating_sub(1));
        self.ui = UiState::Idle;
        self.toasts.success(MSG_DELETED);
        tracing::debug!("deleted ticket {}", target);
        true
    }

    // ------------------------------------------------------------------
    // Shared
    // ------------------------------------------------------------------

    /// Close any modal without changes
    pub fn cancel(&mut self) {
        self.ui = UiState::Idle;
    }

    /// Re-read the collection from the store
    pub fn reload(&mut self) {
        if !self.ui.is_idle() {
            return;
        }
        self.tickets = self.store.load_all();
        self.selected = self.selected.min(self.tickets.len().saturating_sub(1));
    }

    /// Persist `next` and adopt it as the in-memory collection
    ///
    /// On failure the in-memory collection is kept and an error toast shown.
    fn commit(&mut self, next: Vec<Ticket>) -> bool {
        match self.store.save_all(&next) {
            Ok(()) => {
                self.tickets = next;
                true
            }
            Err(e) => {
                tracing::error!("failed to save tickets: {}", e);
                self.toasts.error(format!("Failed to save tickets: {e}"));
                false
            }
        }
    }
}

/// Next `updatedAt` for a ticket last updated at `previous`
///
/// Always strictly after `previous`, even if the clock stalled or went back.
fn advance_timestamp(previous: Timestamp, now: Timestamp) -> Timestamp {
    if now > previous {
        now
    } else {
        previous
            .checked_add(SignedDuration::from_millis(1))
            .unwrap_or(previous)
    }
}
