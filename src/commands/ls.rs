use super::AppContext;
use crate::display::format_ticket_line;
use crate::error::Result;
use crate::store::TicketStore;
use crate::types::TicketStatus;

/// List stored tickets, newest first, optionally filtered by status
pub fn cmd_ls(ctx: &AppContext, status_filter: Option<TicketStatus>, output_json: bool) -> Result<()> {
    let tickets = ctx.open_store()?.load_all();
    let filtered: Vec<_> = tickets
        .iter()
        .filter(|t| status_filter.is_none_or(|status| t.status == status))
        .collect();

    if output_json {
        println!("{}", serde_json::to_string_pretty(&filtered)?);
        return Ok(());
    }

    for ticket in filtered {
        println!("{}", format_ticket_line(ticket));
    }
    Ok(())
}
