use super::AppContext;
use crate::error::Result;

/// Print the file holding the ticket collection
pub fn cmd_path(ctx: &AppContext) -> Result<()> {
    let store = ctx.open_store()?;
    println!("{}", store.storage().slot_path(store.key())?.display());
    Ok(())
}
