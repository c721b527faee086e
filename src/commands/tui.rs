//! Interactive TUI command (`tickethub dashboard` / `tickethub tickets`)

use std::sync::Arc;

use iocraft::prelude::*;

use super::AppContext;
use crate::error::{Result, TicketHubError};
use crate::store::TicketStore;
use crate::tui::{App, Screen};

/// Launch the fullscreen TUI on `start`
pub async fn cmd_tui(ctx: &AppContext, start: Screen) -> Result<()> {
    let store: Arc<dyn TicketStore> = Arc::new(ctx.open_store()?);
    let toast_duration = ctx.config.toast_duration();
    tracing::info!("starting TUI on {:?} with data in {}", start, ctx.data_dir.display());

    element!(App(
        store: Some(store),
        start: start,
        toast_duration: Some(toast_duration),
    ))
    .fullscreen()
    .await
    .map_err(|e| TicketHubError::Tui(e.to_string()))
}
