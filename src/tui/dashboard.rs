//! Dashboard screen
//!
//! Summary of the stored tickets with a shortcut into ticket management.

use std::sync::Arc;

use iocraft::prelude::*;

use crate::store::TicketStore;
use crate::tui::components::{Footer, Header, dashboard_shortcuts};
use crate::tui::theme::{format_label, theme};
use crate::types::{Ticket, TicketStatus};

/// Ticket counts shown on the dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TicketStats {
    pub total: usize,
    pub open: usize,
    pub in_progress: usize,
    pub closed: usize,
}

impl TicketStats {
    pub fn from_tickets(tickets: &[Ticket]) -> Self {
        tickets.iter().fold(Self::default(), |mut stats, ticket| {
            stats.total += 1;
            // Unrecognised statuses only count toward the total
            match ticket.status.known() {
                Some(TicketStatus::Open) => stats.open += 1,
                Some(TicketStatus::InProgress) => stats.in_progress += 1,
                Some(TicketStatus::Closed) => stats.closed += 1,
                None => {}
            }
            stats
        })
    }

    /// Count for one status
    pub fn count(&self, status: TicketStatus) -> usize {
        match status {
            TicketStatus::Open => self.open,
            TicketStatus::InProgress => self.in_progress,
            TicketStatus::Closed => self.closed,
        }
    }
}

/// Props for the Dashboard component
#[derive(Default, Props)]
pub struct DashboardProps {
    pub store: Option<Arc<dyn TicketStore>>,
    /// Invoked on `t`/Enter
    pub on_navigate_to_tickets: Option<Handler<()>>,
}

/// A single statistic box
fn stat_box(label: String, value: usize, color: Color) -> AnyElement<'static> {
    let theme = theme();
    element! {
        View(
            width: 18,
            border_style: BorderStyle::Round,
            border_color: color,
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::Center,
            padding_left: 1,
            padding_right: 1,
        ) {
            Text(content: label, color: theme.text_dimmed)
            Text(content: value.to_string(), color: color, weight: Weight::Bold)
        }
    }
    .into_any()
}

#[component]
pub fn Dashboard<'a>(props: &DashboardProps, mut hooks: Hooks) -> impl Into<AnyElement<'a>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();

    // Counted once per mount; returning from the ticket screen remounts
    let store = props.store.clone();
    let stats = hooks.use_state(move || {
        store
            .map(|s| TicketStats::from_tickets(&s.load_all()))
            .unwrap_or_default()
    });
    let mut should_exit = hooks.use_state(|| false);

    hooks.use_terminal_events({
        let on_tickets = props.on_navigate_to_tickets.clone();
        move |event| match event {
            TerminalEvent::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) if kind != KeyEventKind::Release => match code {
                KeyCode::Char('t') | KeyCode::Enter => {
                    if let Some(handler) = &on_tickets {
                        handler(());
                    }
                }
                KeyCode::Char('q') | KeyCode::Esc => should_exit.set(true),
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    should_exit.set(true)
                }
                _ => {}
            },
            _ => {}
        }
    });

    if should_exit.get() {
        system.exit();
    }

    let theme = theme();
    let stats = stats.get();

    element! {
        View(width, height, flex_direction: FlexDirection::Column) {
            Header(subtitle: Some("Dashboard"), ticket_count: Some(stats.total))
            View(
                flex_grow: 1.0,
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                gap: 1,
            ) {
                Text(content: "Welcome back!", color: theme.text, weight: Weight::Bold)
                Text(content: "Here's an overview of your tickets", color: theme.text_dimmed)
                View(flex_direction: FlexDirection::Row, gap: 2) {
                    #(stat_box("Total".to_string(), stats.total, theme.highlight))
                    #([TicketStatus::Open, TicketStatus::InProgress, TicketStatus::Closed]
                        .into_iter()
                        .map(|status| stat_box(
                            format_label(status.as_str()),
                            stats.count(status),
                            theme.status_color(status.as_str()),
                        )))
                }
                Text(content: "Press 't' to manage tickets", color: theme.highlight)
            }
            Footer(shortcuts: dashboard_shortcuts())
        }
    }
}
