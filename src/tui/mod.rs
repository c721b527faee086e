//! TUI module for the interactive terminal interface
//!
//! - `dashboard` - ticket summary
//! - `tickets` - ticket list with create/edit/delete

pub mod app;
pub mod components;
pub mod dashboard;
pub mod services;
pub mod theme;
pub mod tickets;

pub use app::{App, AppProps, Screen};
pub use dashboard::{Dashboard, DashboardProps, TicketStats};
pub use theme::{Theme, format_label};
pub use tickets::{TicketManagement, TicketManagementProps};
