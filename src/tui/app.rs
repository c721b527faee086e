//! Root component: routes between the dashboard and the ticket screen

use std::sync::Arc;
use std::time::Duration;

use iocraft::prelude::*;

use crate::store::TicketStore;
use crate::tui::dashboard::Dashboard;
use crate::tui::tickets::TicketManagement;

/// Screens the app can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Dashboard,
    Tickets,
}

/// Props for the App component
#[derive(Default, Props)]
pub struct AppProps {
    pub store: Option<Arc<dyn TicketStore>>,
    pub start: Screen,
    pub toast_duration: Option<Duration>,
}

#[component]
pub fn App<'a>(props: &AppProps, mut hooks: Hooks) -> impl Into<AnyElement<'a>> {
    let start = props.start;
    let screen: State<Screen> = hooks.use_state(move || start);

    let to_tickets: Handler<()> = hooks.use_async_handler(move |()| {
        let mut screen = screen;
        async move {
            tracing::debug!("opening ticket management");
            screen.set(Screen::Tickets);
        }
    });
    let to_dashboard: Handler<()> = hooks.use_async_handler(move |()| {
        let mut screen = screen;
        async move {
            tracing::debug!("back to dashboard");
            screen.set(Screen::Dashboard);
        }
    });

    match screen.get() {
        Screen::Dashboard => element! {
            Dashboard(
                store: props.store.clone(),
                on_navigate_to_tickets: Some(to_tickets),
            )
        }
        .into_any(),
        Screen::Tickets => element! {
            TicketManagement(
                store: props.store.clone(),
                toast_duration: props.toast_duration,
                on_back_to_dashboard: Some(to_dashboard),
            )
        }
        .into_any(),
    }
}
