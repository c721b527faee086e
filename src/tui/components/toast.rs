//! Toast notification system
//!
//! Provides the toast value, the manager that owns the single visible toast
//! and its dismissal bookkeeping, and the element that renders it.

use iocraft::prelude::*;
use std::time::Duration;

/// How long a toast stays on screen unless replaced
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(3);

/// A toast notification message
#[derive(Debug, Clone)]
pub struct Toast {
    /// The message to display
    pub message: String,
    /// The severity level of the toast
    pub level: ToastLevel,
    /// Sequence number assigned by the `ToastManager`
    pub generation: u64,
}

/// Severity level for toast notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    /// Error message
    Error,
    /// Success message
    Success,
}

impl Toast {
    /// Create a new toast with the given message and level
    pub fn new(message: String, level: ToastLevel) -> Self {
        Self {
            message,
            level,
            generation: 0,
        }
    }

    /// Create an error toast
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Error)
    }

    /// Create a success toast
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Success)
    }

    /// Get the color associated with this toast's level
    pub fn color(&self) -> Color {
        match self.level {
            ToastLevel::Error => Color::Red,
            ToastLevel::Success => Color::Green,
        }
    }
}

/// Owner of the currently visible toast
///
/// Showing a toast replaces the previous one and bumps the generation.
/// A dismissal carries the generation it was scheduled for, so a timer that
/// belongs to a replaced toast does nothing when it fires.
#[derive(Debug, Clone)]
pub struct ToastManager {
    current: Option<Toast>,
    generation: u64,
    duration: Duration,
}

impl Default for ToastManager {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_DURATION)
    }
}

impl ToastManager {
    pub fn new(duration: Duration) -> Self {
        Self {
            current: None,
            generation: 0,
            duration,
        }
    }

    /// Show a toast, replacing any visible one
    ///
    /// Returns the generation to pass to `dismiss` once the delay elapses.
    pub fn notify(&mut self, mut toast: Toast) -> u64 {
        self.generation += 1;
        toast.generation = self.generation;
        tracing::debug!("toast #{} ({:?}): {}", self.generation, toast.level, toast.message);
        self.current = Some(toast);
        self.generation
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.notify(Toast::success(message))
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.notify(Toast::error(message))
    }

    /// Hide the toast if it is still the one scheduled as `generation`
    ///
    /// Returns whether a toast was hidden.
    pub fn dismiss(&mut self, generation: u64) -> bool {
        match &self.current {
            Some(toast) if toast.generation == generation => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    /// Generation that still needs a dismissal timer
    ///
    /// `scheduled` is the last generation a timer was started for. Returns
    /// the visible toast's generation when it has no timer yet.
    pub fn pending_dismissal(&self, scheduled: u64) -> Option<u64> {
        self.current
            .as_ref()
            .map(|toast| toast.generation)
            .filter(|generation| *generation != scheduled)
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

/// Render a toast notification as an optional element
///
/// This is a convenience function for use in element! macros where you need
/// to conditionally render a toast.
pub fn render_toast(toast: &Option<Toast>) -> Option<AnyElement<'static>> {
    toast.as_ref().map(|t| {
        element! {
            View(
                width: 100pct,
                height: 3,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                background_color: Color::Black,
                border_edges: Edges::Top,
                border_style: BorderStyle::Single,
                border_color: t.color(),
            ) {
                Text(content: t.message.clone(), color: t.color())
            }
        }
        .into_any()
    })
}
