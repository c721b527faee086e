//! Keyboard mapping for the ticket screen
//!
//! `key_to_action` is a pure function so the key bindings can be unit tested
//! without the iocraft runtime.

use iocraft::prelude::{KeyCode, KeyModifiers};

use super::draft::FormField;
use super::model::{TicketAction, UiState};

/// Which set of bindings is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyMode {
    /// Card list, no modal open
    #[default]
    List,
    /// Create/edit form with the given field focused
    Form(FormField),
    /// Delete confirmation
    Confirm,
}

impl From<&UiState> for KeyMode {
    fn from(ui: &UiState) -> Self {
        match ui {
            UiState::Idle => KeyMode::List,
            UiState::FormOpen { focus, .. } => KeyMode::Form(*focus),
            UiState::ConfirmPending { .. } => KeyMode::Confirm,
        }
    }
}

/// Convert a key event to a TicketAction
///
/// Returns `None` if the key doesn't map to any action in `mode`.
pub fn key_to_action(code: KeyCode, modifiers: KeyModifiers, mode: KeyMode) -> Option<TicketAction> {
    // Ctrl-Q quits from anywhere
    if modifiers.contains(KeyModifiers::CONTROL) && matches!(code, KeyCode::Char('q')) {
        return Some(TicketAction::Quit);
    }

    match mode {
        KeyMode::List => list_key_to_action(code),
        KeyMode::Form(focus) => form_key_to_action(code, modifiers, focus),
        KeyMode::Confirm => confirm_key_to_action(code),
    }
}

fn list_key_to_action(code: KeyCode) -> Option<TicketAction> {
    match code {
        KeyCode::Char('j') | KeyCode::Down => Some(TicketAction::MoveDown),
        KeyCode::Char('k') | KeyCode::Up => Some(TicketAction::MoveUp),
        KeyCode::Char('g') | KeyCode::Home => Some(TicketAction::GoToTop),
        KeyCode::Char('G') | KeyCode::End => Some(TicketAction::GoToBottom),

        KeyCode::Char('n') => Some(TicketAction::OpenCreate),
        KeyCode::Char('e') | KeyCode::Enter => Some(TicketAction::EditSelected),
        KeyCode::Char('d') | KeyCode::Delete => Some(TicketAction::DeleteSelected),
        KeyCode::Char('r') => Some(TicketAction::Reload),

        KeyCode::Char('b') | KeyCode::Char('q') | KeyCode::Esc => {
            Some(TicketAction::BackToDashboard)
        }

        _ => None,
    }
}

fn form_key_to_action(code: KeyCode, modifiers: KeyModifiers, focus: FormField) -> Option<TicketAction> {
    let ctrl = modifiers.contains(KeyModifiers::CONTROL);

    match code {
        KeyCode::Esc => Some(TicketAction::Cancel),
        KeyCode::Char('s') if ctrl => Some(TicketAction::Submit),
        KeyCode::Tab => Some(TicketAction::FocusNext),
        KeyCode::BackTab => Some(TicketAction::FocusPrev),
        KeyCode::Up if !focus.is_text() => Some(TicketAction::FocusPrev),
        KeyCode::Down if !focus.is_text() => Some(TicketAction::FocusNext),

        KeyCode::Enter => match focus {
            FormField::Description => Some(TicketAction::InsertNewline),
            FormField::Title => Some(TicketAction::FocusNext),
            FormField::Priority | FormField::Status => Some(TicketAction::SelectNext),
        },

        KeyCode::Left if !focus.is_text() => Some(TicketAction::SelectPrev),
        KeyCode::Right | KeyCode::Char(' ') if !focus.is_text() => Some(TicketAction::SelectNext),

        KeyCode::Backspace if focus.is_text() => Some(TicketAction::DeleteChar),
        KeyCode::Char(c) if focus.is_text() && !ctrl && !modifiers.contains(KeyModifiers::ALT) => {
            Some(TicketAction::InsertChar(c))
        }

        _ => None,
    }
}

fn confirm_key_to_action(code: KeyCode) -> Option<TicketAction> {
    match code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Some(TicketAction::ConfirmDelete),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(TicketAction::Cancel),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(code: KeyCode) -> Option<TicketAction> {
        key_to_action(code, KeyModifiers::NONE, KeyMode::List)
    }

    fn form(code: KeyCode, focus: FormField) -> Option<TicketAction> {
        key_to_action(code, KeyModifiers::NONE, KeyMode::Form(focus))
    }

    #[test]
    fn test_list_navigation() {
        assert_eq!(list(KeyCode::Char('j')), Some(TicketAction::MoveDown));
        assert_eq!(list(KeyCode::Down), Some(TicketAction::MoveDown));
        assert_eq!(list(KeyCode::Char('k')), Some(TicketAction::MoveUp));
        assert_eq!(list(KeyCode::Char('g')), Some(TicketAction::GoToTop));
        assert_eq!(list(KeyCode::Char('G')), Some(TicketAction::GoToBottom));
    }

    #[test]
    fn test_list_actions() {
        assert_eq!(list(KeyCode::Char('n')), Some(TicketAction::OpenCreate));
        assert_eq!(list(KeyCode::Char('e')), Some(TicketAction::EditSelected));
        assert_eq!(list(KeyCode::Enter), Some(TicketAction::EditSelected));
        assert_eq!(list(KeyCode::Char('d')), Some(TicketAction::DeleteSelected));
        assert_eq!(list(KeyCode::Char('b')), Some(TicketAction::BackToDashboard));
        assert_eq!(list(KeyCode::Char('q')), Some(TicketAction::BackToDashboard));
        assert_eq!(list(KeyCode::Char('x')), None);
    }

    #[test]
    fn test_ctrl_q_quits_everywhere() {
        for mode in [KeyMode::List, KeyMode::Form(FormField::Title), KeyMode::Confirm] {
            assert_eq!(
                key_to_action(KeyCode::Char('q'), KeyModifiers::CONTROL, mode),
                Some(TicketAction::Quit)
            );
        }
    }

    #[test]
    fn test_form_text_entry() {
        // Letters that are shortcuts on the list are plain text in the form
        assert_eq!(
            form(KeyCode::Char('q'), FormField::Title),
            Some(TicketAction::InsertChar('q'))
        );
        assert_eq!(
            form(KeyCode::Char('d'), FormField::Description),
            Some(TicketAction::InsertChar('d'))
        );
        assert_eq!(
            form(KeyCode::Backspace, FormField::Title),
            Some(TicketAction::DeleteChar)
        );
        assert_eq!(
            form(KeyCode::Enter, FormField::Description),
            Some(TicketAction::InsertNewline)
        );
        assert_eq!(form(KeyCode::Enter, FormField::Title), Some(TicketAction::FocusNext));
    }

    #[test]
    fn test_form_selects() {
        assert_eq!(form(KeyCode::Right, FormField::Priority), Some(TicketAction::SelectNext));
        assert_eq!(form(KeyCode::Left, FormField::Status), Some(TicketAction::SelectPrev));
        assert_eq!(form(KeyCode::Char('a'), FormField::Status), None);
        assert_eq!(form(KeyCode::Left, FormField::Title), None);
    }

    #[test]
    fn test_form_submit_and_cancel() {
        assert_eq!(
            key_to_action(
                KeyCode::Char('s'),
                KeyModifiers::CONTROL,
                KeyMode::Form(FormField::Title)
            ),
            Some(TicketAction::Submit)
        );
        assert_eq!(form(KeyCode::Esc, FormField::Priority), Some(TicketAction::Cancel));
        assert_eq!(form(KeyCode::Tab, FormField::Title), Some(TicketAction::FocusNext));
        assert_eq!(form(KeyCode::BackTab, FormField::Title), Some(TicketAction::FocusPrev));
    }

    #[test]
    fn test_confirm_keys() {
        let confirm = |code| key_to_action(code, KeyModifiers::NONE, KeyMode::Confirm);
        assert_eq!(confirm(KeyCode::Char('y')), Some(TicketAction::ConfirmDelete));
        assert_eq!(confirm(KeyCode::Enter), Some(TicketAction::ConfirmDelete));
        assert_eq!(confirm(KeyCode::Char('n')), Some(TicketAction::Cancel));
        assert_eq!(confirm(KeyCode::Esc), Some(TicketAction::Cancel));
        assert_eq!(confirm(KeyCode::Char('d')), None);
    }

    #[test]
    fn test_mode_from_ui_state() {
        assert_eq!(KeyMode::from(&UiState::Idle), KeyMode::List);
        assert_eq!(
            KeyMode::from(&UiState::ConfirmPending {
                target: "t-1".to_string()
            }),
            KeyMode::Confirm
        );
    }
}
