pub mod clock;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod storage;
pub mod store;
pub mod tui;
pub mod types;
pub mod utils;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::Config;
pub use error::{Result, TicketHubError};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use store::{StorageTicketStore, TicketStore};
pub use tui::tickets::model::{SubmitOutcome, TicketAction, TicketManager, UiState};
pub use types::{StoredValue, TICKETS_KEY, Ticket, TicketPriority, TicketStatus};
