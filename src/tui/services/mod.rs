//! Service layer for TUI business rules
//!
//! Logic here is independent of iocraft so components stay thin.

mod validator;

pub use validator::{
    DESCRIPTION_REQUIRED, MIN_TITLE_LEN, PRIORITY_REQUIRED, STATUS_REQUIRED, TITLE_REQUIRED,
    TITLE_TOO_SHORT, TicketFormValidator,
};
