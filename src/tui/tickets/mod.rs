//! Ticket management screen
//!
//! Lists tickets as cards and hosts the create/edit form and the delete
//! confirmation. State lives in a `TicketManager`; this component only maps
//! key events to actions and draws the derived view.

pub mod confirm_modal;
pub mod draft;
pub mod form;
pub mod handlers;
pub mod model;
pub mod view_model;

use std::sync::Arc;
use std::time::Duration;

use iocraft::prelude::*;

use crate::storage::MemoryStorage;
use crate::store::{StorageTicketStore, TicketStore};
use crate::tui::components::toast::DEFAULT_TOAST_DURATION;
use crate::tui::components::{EmptyState, Footer, Header, TicketCard, render_toast};
use crate::tui::theme::theme;

use confirm_modal::DeleteConfirmModal;
use form::TicketFormModal;
use handlers::{KeyMode, key_to_action};
use model::{TicketEffect, TicketManager};
use view_model::{CARD_HEIGHT, ModalView, compute_view, visible_window};

pub const SCREEN_TITLE: &str = "Ticket Management";
pub const SCREEN_TAGLINE: &str = "Create, view, edit, and manage all your tickets";

/// Props for the TicketManagement component
#[derive(Default, Props)]
pub struct TicketManagementProps {
    /// Persistence for the ticket collection; an in-memory store if unset
    pub store: Option<Arc<dyn TicketStore>>,
    /// How long toasts stay visible
    pub toast_duration: Option<Duration>,
    /// Invoked on `b`/`q` when no modal is open
    pub on_back_to_dashboard: Option<Handler<()>>,
}

/// Ticket management screen
///
/// Layout:
/// ```text
/// +------------------------------------------+
/// | TicketHub - Ticket Management  3 tickets |
/// | Create, view, edit, and manage ...       |
/// +------------------------------------------+
/// | ╭ card ╮                                 |
/// | ╭ card ╮                                 |
/// +------------------------------------------+
/// | Toast                                    |
/// | Footer with shortcuts                    |
/// +------------------------------------------+
/// ```
#[component]
pub fn TicketManagement<'a>(
    props: &TicketManagementProps,
    mut hooks: Hooks,
) -> impl Into<AnyElement<'a>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();

    let toast_duration = props.toast_duration.unwrap_or(DEFAULT_TOAST_DURATION);
    let store = props.store.clone();
    let mut manager: State<TicketManager> = hooks.use_state(move || {
        let store: Arc<dyn TicketStore> =
            store.unwrap_or_else(|| Arc::new(StorageTicketStore::new(MemoryStorage::new())));
        TicketManager::new(store).with_toast_duration(toast_duration)
    });
    let mut should_exit = hooks.use_state(|| false);

    // Toast auto-dismiss: one timer per toast generation; a timer whose toast
    // was replaced finds a newer generation and does nothing
    let mut scheduled_generation = hooks.use_state(|| 0u64);
    let dismiss_handler: Handler<u64> = hooks.use_async_handler(move |generation: u64| {
        let mut manager = manager;
        async move {
            let delay = manager.read().toasts().duration();
            tokio::time::sleep(delay).await;
            manager.write().dismiss_toast(generation);
        }
    });
    let pending = manager
        .read()
        .toasts()
        .pending_dismissal(scheduled_generation.get());
    if let Some(generation) = pending {
        scheduled_generation.set(generation);
        dismiss_handler(generation);
    }

    hooks.use_terminal_events({
        let on_back = props.on_back_to_dashboard.clone();
        move |event| match event {
            TerminalEvent::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) if kind != KeyEventKind::Release => {
                let mode = KeyMode::from(manager.read().ui());
                let Some(action) = key_to_action(code, modifiers, mode) else {
                    return;
                };
                match manager.write().apply(action) {
                    TicketEffect::None => {}
                    TicketEffect::BackToDashboard => match &on_back {
                        Some(handler) => handler(()),
                        None => should_exit.set(true),
                    },
                    TicketEffect::Quit => should_exit.set(true),
                }
            }
            _ => {}
        }
    });

    if should_exit.get() {
        system.exit();
    }

    let view = compute_view(&manager.read());
    let theme = theme();

    // header (1) + tagline (2) + footer (1) + toast (3)
    let list_height = height.saturating_sub(7);
    let capacity = (list_height / CARD_HEIGHT).max(1) as usize;
    let window = visible_window(view.selected, view.cards.len(), capacity);
    let hidden_above = window.start;
    let hidden_below = view.cards.len() - window.end;

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            position: Position::Relative,
        ) {
            Header(subtitle: Some(SCREEN_TITLE), ticket_count: Some(view.ticket_count()))
            View(padding_left: 1, padding_bottom: 1, flex_shrink: 0.0) {
                Text(content: SCREEN_TAGLINE, color: theme.text_dimmed)
            }

            View(
                flex_grow: 1.0,
                width: 100pct,
                flex_direction: FlexDirection::Column,
                padding_left: 1,
                padding_right: 1,
                overflow: Overflow::Hidden,
            ) {
                #(if view.is_empty() {
                    vec![element!(EmptyState).into_any()]
                } else {
                    let mut rows: Vec<AnyElement<'static>> = Vec::new();
                    if hidden_above > 0 {
                        rows.push(element! {
                            Text(content: format!("↑ {} more", hidden_above), color: theme.text_dimmed)
                        }.into_any());
                    }
                    for (index, card) in view.cards[window.clone()].iter().enumerate() {
                        rows.push(element! {
                            TicketCard(
                                card: card.clone(),
                                is_selected: window.start + index == view.selected,
                            )
                        }.into_any());
                    }
                    if hidden_below > 0 {
                        rows.push(element! {
                            Text(content: format!("↓ {} more", hidden_below), color: theme.text_dimmed)
                        }.into_any());
                    }
                    rows
                })
            }

            #(render_toast(&view.toast))
            Footer(shortcuts: view.shortcuts.clone())

            #(match &view.modal {
                ModalView::None => None,
                ModalView::Form(form) => Some(element! {
                    TicketFormModal(form: form.clone())
                }.into_any()),
                ModalView::Confirm(confirm) => Some(element! {
                    DeleteConfirmModal(confirm: confirm.clone())
                }.into_any()),
            })
        }
    }
}
