//! CLI subcommands

mod ls;
mod path;
mod tui;

pub use ls::cmd_ls;
pub use path::cmd_path;
pub use tui::cmd_tui;

use std::path::PathBuf;

use crate::config::Config;
use crate::error::Result;
use crate::storage::FileStorage;
use crate::store::StorageTicketStore;

/// Resolved settings shared by all commands
#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: Config,
    pub data_dir: PathBuf,
}

impl AppContext {
    pub fn new(config: Config, data_dir: PathBuf) -> Self {
        Self { config, data_dir }
    }

    /// Open the on-disk ticket store, creating the data directory if needed
    pub fn open_store(&self) -> Result<StorageTicketStore<FileStorage>> {
        let storage = FileStorage::open(&self.data_dir)?;
        Ok(StorageTicketStore::with_key(
            storage,
            self.config.storage_key.clone(),
        ))
    }
}
