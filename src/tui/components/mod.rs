//! Shared TUI components

pub mod empty_state;
pub mod footer;
pub mod header;
pub mod modal_container;
pub mod modal_overlay;
pub mod select;
pub mod shortcuts;
pub mod ticket_card;
pub mod toast;

pub use empty_state::{EmptyState, EmptyStateProps};
pub use footer::{
    Footer, FooterProps, Shortcut, confirm_shortcuts, dashboard_shortcuts, empty_shortcuts,
    form_shortcuts, list_shortcuts,
};
pub use header::{Header, HeaderProps};
pub use modal_container::{ModalBorderColor, ModalContainer, ModalContainerProps, ModalWidth};
pub use modal_overlay::{MODAL_BACKDROP, ModalOverlay, ModalOverlayProps};
pub use select::{Select, SelectProps, Selectable, cycle_option, options_for};
pub use ticket_card::{CardView, TicketCard, TicketCardProps};
pub use toast::{Toast, ToastLevel, ToastManager, render_toast};
