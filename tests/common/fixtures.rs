//! Ticket fixtures and manager setup shared by the integration tests

use std::sync::Arc;

use jiff::{SignedDuration, Timestamp};
use tempfile::TempDir;

use tickethub::tui::tickets::draft::FieldEdit;
use tickethub::{
    FileStorage, ManualClock, StorageTicketStore, Ticket, TicketManager, TicketPriority,
    TicketStatus, TicketStore,
};

pub const EPOCH: &str = "2024-01-01T09:00:00Z";
pub const NOW: &str = "2024-06-01T12:00:00Z";

pub fn ts(s: &str) -> Timestamp {
    s.parse().expect("valid timestamp")
}

pub fn ticket(id: &str, title: &str) -> Ticket {
    Ticket {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("Details for {title}"),
        priority: TicketPriority::Medium.into(),
        status: TicketStatus::Open.into(),
        created_at: ts(EPOCH),
        updated_at: ts(EPOCH),
    }
}

/// A manager over on-disk storage seeded with `tickets`, with a clock
/// starting at `NOW` and ticking one second per reading
pub struct ManagerFixture {
    pub dir: TempDir,
    pub store: Arc<StorageTicketStore<FileStorage>>,
    pub manager: TicketManager,
}

impl ManagerFixture {
    pub fn new(tickets: &[Ticket]) -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let storage = FileStorage::open(dir.path()).expect("Failed to open storage");
        let store = Arc::new(StorageTicketStore::new(storage));
        store.save_all(tickets).expect("Failed to seed tickets");

        let clock = Arc::new(ManualClock::with_step(ts(NOW), SignedDuration::from_secs(1)));
        let manager = TicketManager::with_clock(store.clone(), clock);
        ManagerFixture {
            dir,
            store,
            manager,
        }
    }

    /// What a fresh mount would see
    pub fn persisted(&self) -> Vec<Ticket> {
        self.store.load_all()
    }

    pub fn fill_form(
        &mut self,
        title: &str,
        description: &str,
        priority: Option<TicketPriority>,
        status: Option<TicketStatus>,
    ) {
        self.manager.update_field(FieldEdit::Title(title.to_string()));
        self.manager
            .update_field(FieldEdit::Description(description.to_string()));
        self.manager.update_field(FieldEdit::Priority(priority));
        self.manager.update_field(FieldEdit::Status(status));
    }
}
