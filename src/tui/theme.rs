//! Theme system for TUI colors and styles
//!
//! Badge colors match the CLI output in display/mod.rs.

use iocraft::prelude::Color;

use crate::utils::capitalize;

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    // Status badges
    pub status_open: Color,
    pub status_in_progress: Color,
    pub status_closed: Color,

    // Priority badges
    pub priority_low: Color,
    pub priority_medium: Color,
    pub priority_high: Color,

    /// Badge color for values with no entry above
    pub badge_neutral: Color,

    // UI colors
    pub border: Color,
    pub border_focused: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub highlight: Color,
    pub error: Color,
    pub id_color: Color,
}

const GREY: Color = Color::Rgb {
    r: 120,
    g: 120,
    b: 120,
};

impl Default for Theme {
    fn default() -> Self {
        Self {
            status_open: Color::Blue,
            status_in_progress: Color::Yellow,
            status_closed: Color::Green,

            priority_low: Color::Green,
            priority_medium: Color::Yellow,
            priority_high: Color::Red,

            badge_neutral: GREY,

            border: GREY,
            border_focused: Color::Blue,
            text: Color::White,
            text_dimmed: GREY,
            highlight: Color::Blue,
            error: Color::Red,
            id_color: Color::Cyan,
        }
    }
}

impl Theme {
    /// Badge color for a stored status value
    pub fn status_color(&self, status: &str) -> Color {
        match status {
            "open" => self.status_open,
            "in_progress" => self.status_in_progress,
            "closed" => self.status_closed,
            _ => self.badge_neutral,
        }
    }

    /// Badge color for a stored priority value
    pub fn priority_color(&self, priority: &str) -> Color {
        match priority {
            "low" => self.priority_low,
            "medium" => self.priority_medium,
            "high" => self.priority_high,
            _ => self.badge_neutral,
        }
    }
}

/// Human label for an underscore-joined value: `in_progress` -> `In Progress`
pub fn format_label(value: &str) -> String {
    value
        .split('_')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Get a reference to the global theme
pub fn theme() -> &'static Theme {
    &THEME
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_label() {
        assert_eq!(format_label("in_progress"), "In Progress");
        assert_eq!(format_label("open"), "Open");
        assert_eq!(format_label("high"), "High");
        assert_eq!(format_label(""), "");
    }

    #[test]
    fn test_unknown_values_get_neutral_badge() {
        let theme = Theme::default();
        assert_eq!(theme.status_color("archived"), theme.badge_neutral);
        assert_eq!(theme.priority_color("urgent"), theme.badge_neutral);
        assert_eq!(theme.status_color("closed"), Color::Green);
        assert_eq!(theme.priority_color("high"), Color::Red);
    }
}
