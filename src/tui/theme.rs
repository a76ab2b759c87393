//! Color themes and styling for TUI components.

use ratatui::style::{Color, Modifier, Style};

use crate::core::Category;

/// Color scheme for the form
pub struct Theme {
    /// Primary accent color (cyan for the focused field)
    pub primary: Color,
    /// Error color (red for validation messages)
    pub error: Color,
    /// Muted color (dark gray for hints and borders)
    pub muted: Color,
    /// Text color (white for normal text)
    pub text: Color,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            primary: Color::Cyan,
            error: Color::Red,
            muted: Color::DarkGray,
            text: Color::White,
        }
    }

    /// Color of a classification band
    pub fn category_color(&self, category: Category) -> Color {
        match category {
            Category::Underweight => Color::LightBlue,
            Category::Normal => Color::Green,
            Category::Overweight => Color::Yellow,
            Category::Obese => Color::Red,
        }
    }

    pub fn category_style(&self, category: Category) -> Style {
        Style::default()
            .fg(self.category_color(category))
            .add_modifier(Modifier::BOLD)
    }

    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Border of an input box
    pub fn field_border_style(&self, focused: bool, has_error: bool) -> Style {
        match (focused, has_error) {
            (_, true) => Style::default().fg(self.error),
            (true, false) => Style::default().fg(self.primary),
            (false, false) => Style::default().fg(self.muted),
        }
    }

    pub fn input_text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    pub fn banner_style(&self) -> Style {
        Style::default()
            .fg(self.error)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }

    /// Border of the result card; bold while highlighted
    pub fn result_border_style(&self, category: Category, highlighted: bool) -> Style {
        let style = Style::default().fg(self.category_color(category));
        if highlighted {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    pub fn hint_style(&self) -> Style {
        Style::default().fg(self.muted)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}
