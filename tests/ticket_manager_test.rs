//! Ticket management flows against on-disk storage
//!
//! Each test drives `TicketManager` the way the TUI does and then checks
//! both the in-memory collection and what a fresh mount would load.

mod common;

use std::collections::HashSet;

use common::fixtures::{ManagerFixture, NOW, ticket, ts};
use iocraft::prelude::{KeyCode, KeyModifiers};
use tickethub::tui::tickets::draft::FormField;
use tickethub::tui::tickets::handlers::{KeyMode, key_to_action};
use tickethub::tui::tickets::model::{MSG_CREATED, MSG_DELETED, MSG_FIX_FORM, MSG_UPDATED};
use tickethub::tui::components::ToastLevel;
use tickethub::{SubmitOutcome, TicketAction, TicketPriority, TicketStatus, UiState};

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_create_ticket_scenario() {
    let mut fx = ManagerFixture::new(&[ticket("1", "Existing ticket")]);

    fx.manager.open_create();
    fx.fill_form(
        "Fix login bug",
        "Users can't log in with SSO",
        Some(TicketPriority::High),
        Some(TicketStatus::Open),
    );
    let outcome = fx.manager.submit();
    assert!(matches!(outcome, SubmitOutcome::Created(_)));

    let persisted = fx.persisted();
    assert_eq!(persisted.len(), 2);
    let created = &persisted[0];
    assert_eq!(created.title, "Fix login bug");
    assert_eq!(created.description, "Users can't log in with SSO");
    assert_eq!(created.priority, TicketPriority::High);
    assert_eq!(created.status, TicketStatus::Open);
    assert_eq!(created.created_at, ts(NOW));
    assert_eq!(created.created_at, created.updated_at);
    assert_ne!(created.id, "1");
    assert_eq!(persisted[1].id, "1");

    assert_eq!(fx.manager.tickets(), persisted.as_slice());
    let toast = fx.manager.toast().unwrap();
    assert_eq!(toast.message, MSG_CREATED);
    assert_eq!(toast.level, ToastLevel::Success);
}

#[test]
fn test_reject_short_title_scenario() {
    let mut fx = ManagerFixture::new(&[]);

    fx.manager.open_create();
    fx.fill_form(
        "Hi",
        "x",
        Some(TicketPriority::Low),
        Some(TicketStatus::Open),
    );
    assert_eq!(fx.manager.submit(), SubmitOutcome::Invalid);

    let UiState::FormOpen { errors, .. } = fx.manager.ui() else {
        panic!("form should stay open");
    };
    assert_eq!(
        errors.get(&FormField::Title).map(String::as_str),
        Some("Title must be at least 3 characters")
    );
    assert_eq!(errors.len(), 1);
    assert!(fx.manager.tickets().is_empty());
    assert!(fx.persisted().is_empty());

    let toast = fx.manager.toast().unwrap();
    assert_eq!(toast.message, MSG_FIX_FORM);
    assert_eq!(toast.level, ToastLevel::Error);
}

#[test]
fn test_edit_status_scenario() {
    let original = ticket("1", "Printer offline");
    let mut fx = ManagerFixture::new(&[original.clone()]);

    fx.manager.open_edit("1");
    fx.manager
        .apply(TicketAction::EditField(
            tickethub::tui::tickets::draft::FieldEdit::Status(Some(TicketStatus::Closed)),
        ));
    assert_eq!(fx.manager.submit(), SubmitOutcome::Updated("1".to_string()));

    let stored = fx.persisted().into_iter().find(|t| t.id == "1").unwrap();
    assert_eq!(stored.status, TicketStatus::Closed);
    assert_eq!(stored.id, original.id);
    assert_eq!(stored.created_at, original.created_at);
    assert!(stored.updated_at > original.updated_at);
    assert_eq!(stored.title, original.title);
    assert_eq!(fx.manager.toast().unwrap().message, MSG_UPDATED);
}

#[test]
fn test_delete_middle_scenario() {
    let mut fx = ManagerFixture::new(&[ticket("1", "First"), ticket("2", "Second"), ticket("3", "Third")]);

    fx.manager.request_delete("2");
    assert!(fx.manager.confirm_delete());

    let ids: Vec<String> = fx.persisted().into_iter().map(|t| t.id).collect();
    assert_eq!(ids, vec!["1", "3"]);
    assert_eq!(fx.manager.toast().unwrap().message, MSG_DELETED);
}

// ============================================================================
// Invariants
// ============================================================================

#[test]
fn test_created_ids_are_unique() {
    let mut fx = ManagerFixture::new(&[ticket("t-00000000", "Seed")]);

    for n in 0..20 {
        fx.manager.open_create();
        fx.fill_form(
            &format!("Ticket number {n}"),
            "Generated",
            Some(TicketPriority::Low),
            Some(TicketStatus::Open),
        );
        assert!(matches!(fx.manager.submit(), SubmitOutcome::Created(_)));
    }

    let persisted = fx.persisted();
    let ids: HashSet<_> = persisted.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids.len(), 21);
    // Newest first
    assert_eq!(persisted[0].title, "Ticket number 19");
}

#[test]
fn test_timestamps_stay_ordered_across_edits() {
    let mut fx = ManagerFixture::new(&[]);
    fx.manager.open_create();
    fx.fill_form("Track me", "Edited repeatedly", Some(TicketPriority::Medium), Some(TicketStatus::Open));
    let SubmitOutcome::Created(id) = fx.manager.submit() else {
        panic!("expected creation");
    };

    let mut previous = fx.manager.find(&id).unwrap().updated_at;
    for _ in 0..3 {
        fx.manager.open_edit(&id);
        assert_eq!(fx.manager.submit(), SubmitOutcome::Updated(id.clone()));
        let current = fx.manager.find(&id).unwrap();
        assert!(current.updated_at > previous);
        assert!(current.created_at <= current.updated_at);
        previous = current.updated_at;
    }
}

#[test]
fn test_validation_rejects_iff_a_field_is_bad() {
    let cases = [
        ("Good title", "Body", Some(TicketPriority::Low), Some(TicketStatus::Open), true),
        ("", "Body", Some(TicketPriority::Low), Some(TicketStatus::Open), false),
        ("ab", "Body", Some(TicketPriority::Low), Some(TicketStatus::Open), false),
        ("   abc   ", "Body", Some(TicketPriority::Low), Some(TicketStatus::Open), true),
        ("Good title", "   ", Some(TicketPriority::Low), Some(TicketStatus::Open), false),
        ("Good title", "Body", None, Some(TicketStatus::Open), false),
        ("Good title", "Body", Some(TicketPriority::Low), None, false),
    ];

    for (title, description, priority, status, accepted) in cases {
        let mut fx = ManagerFixture::new(&[]);
        fx.manager.open_create();
        fx.fill_form(title, description, priority, status);
        let outcome = fx.manager.submit();
        assert_eq!(
            matches!(outcome, SubmitOutcome::Created(_)),
            accepted,
            "title={title:?} description={description:?} priority={priority:?} status={status:?}"
        );
        assert_eq!(fx.persisted().len(), usize::from(accepted));
    }
}

#[test]
fn test_cancel_delete_keeps_ticket() {
    let mut fx = ManagerFixture::new(&[ticket("1", "Keep me")]);
    fx.manager.request_delete("1");
    fx.manager.cancel();

    assert!(fx.manager.ui().is_idle());
    assert_eq!(fx.persisted().len(), 1);
    assert!(fx.manager.toast().is_none());
}

#[test]
fn test_corrupt_store_mounts_empty_and_recovers() {
    let fx = ManagerFixture::new(&[]);
    std::fs::write(fx.dir.path().join("tickets.json"), "{ not json").unwrap();

    let mut fx = ManagerFixture {
        manager: tickethub::TicketManager::new(fx.store.clone()),
        ..fx
    };
    assert!(fx.manager.tickets().is_empty());

    fx.manager.open_create();
    fx.fill_form("After corruption", "Fresh start", Some(TicketPriority::High), Some(TicketStatus::Open));
    assert!(matches!(fx.manager.submit(), SubmitOutcome::Created(_)));
    assert_eq!(fx.persisted().len(), 1);
}

#[test]
fn test_unrecognised_status_does_not_wipe_collection() {
    let fx = ManagerFixture::new(&[]);
    std::fs::write(
        fx.dir.path().join("tickets.json"),
        r#"[{"id":"1","title":"Valid ticket","description":"x","priority":"low","status":"open","createdAt":"2024-01-01T09:00:00Z","updatedAt":"2024-01-01T09:00:00Z"},
            {"id":"2","title":"Archived ticket","description":"y","priority":"medium","status":"archived","createdAt":"2024-01-01T09:00:00Z","updatedAt":"2024-01-01T09:00:00Z"}]"#,
    )
    .unwrap();

    let mut fx = ManagerFixture {
        manager: tickethub::TicketManager::new(fx.store.clone()),
        ..fx
    };
    assert_eq!(fx.manager.tickets().len(), 2);

    fx.manager.open_create();
    fx.fill_form("Brand new", "Added later", Some(TicketPriority::Low), Some(TicketStatus::Open));
    assert!(matches!(fx.manager.submit(), SubmitOutcome::Created(_)));

    let persisted = fx.persisted();
    assert_eq!(persisted.len(), 3);
    let archived = persisted.iter().find(|t| t.id == "2").unwrap();
    assert_eq!(archived.status.as_str(), "archived");
}

#[test]
fn test_editing_unrecognised_status_requires_a_choice() {
    let fx = ManagerFixture::new(&[]);
    std::fs::write(
        fx.dir.path().join("tickets.json"),
        r#"[{"id":"2","title":"Archived ticket","description":"y","priority":"medium","status":"archived","createdAt":"2024-01-01T09:00:00Z","updatedAt":"2024-01-01T09:00:00Z"}]"#,
    )
    .unwrap();
    let mut fx = ManagerFixture {
        manager: tickethub::TicketManager::new(fx.store.clone()),
        ..fx
    };

    fx.manager.open_edit("2");
    assert_eq!(fx.manager.submit(), SubmitOutcome::Invalid);
    fx.manager
        .update_field(tickethub::tui::tickets::draft::FieldEdit::Status(Some(TicketStatus::Closed)));
    assert_eq!(fx.manager.submit(), SubmitOutcome::Updated("2".to_string()));
    assert_eq!(fx.persisted()[0].status, TicketStatus::Closed);
}

// ============================================================================
// Keyboard-driven flow
// ============================================================================

/// Feed keys through the keymap the way the component does
fn press(fx: &mut ManagerFixture, keys: &[(KeyCode, KeyModifiers)]) {
    for (code, modifiers) in keys {
        let mode = KeyMode::from(fx.manager.ui());
        if let Some(action) = key_to_action(*code, *modifiers, mode) {
            fx.manager.apply(action);
        }
    }
}

fn typed(text: &str) -> Vec<(KeyCode, KeyModifiers)> {
    text.chars()
        .map(|c| (KeyCode::Char(c), KeyModifiers::NONE))
        .collect()
}

#[test]
fn test_create_with_keyboard() {
    let mut fx = ManagerFixture::new(&[]);
    let none = KeyModifiers::NONE;

    let mut keys = vec![(KeyCode::Char('n'), none)];
    keys.extend(typed("Queue stuck"));
    keys.push((KeyCode::Tab, none));
    keys.extend(typed("Jobs never drain"));
    keys.push((KeyCode::Tab, none));
    keys.push((KeyCode::Left, none)); // unset -> High
    keys.push((KeyCode::Char('s'), KeyModifiers::CONTROL));
    press(&mut fx, &keys);

    let persisted = fx.persisted();
    assert_eq!(persisted.len(), 1);
    assert_eq!(persisted[0].title, "Queue stuck");
    assert_eq!(persisted[0].description, "Jobs never drain");
    assert_eq!(persisted[0].priority, TicketPriority::High);
    assert_eq!(persisted[0].status, TicketStatus::Open);
    assert!(fx.manager.ui().is_idle());
}

#[test]
fn test_delete_with_keyboard() {
    let mut fx = ManagerFixture::new(&[ticket("1", "First"), ticket("2", "Second")]);
    let none = KeyModifiers::NONE;

    press(
        &mut fx,
        &[
            (KeyCode::Char('j'), none),
            (KeyCode::Char('d'), none),
            (KeyCode::Char('y'), none),
        ],
    );

    let ids: Vec<String> = fx.persisted().into_iter().map(|t| t.id).collect();
    assert_eq!(ids, vec!["1"]);
}

#[test]
fn test_escape_closes_form_without_saving() {
    let mut fx = ManagerFixture::new(&[ticket("1", "Original title")]);
    let none = KeyModifiers::NONE;

    let mut keys = vec![(KeyCode::Char('e'), none)];
    keys.extend(typed(" changed"));
    keys.push((KeyCode::Esc, none));
    press(&mut fx, &keys);

    assert!(fx.manager.ui().is_idle());
    assert_eq!(fx.persisted()[0].title, "Original title");
}
