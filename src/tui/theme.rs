//! Color themes and styling for TUI components.

use ratatui::style::{Color, Modifier, Style};

use crate::insights::TextStyle;

/// Zen minimalist color scheme for the depmap dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Focused panel, selection and key hints
    pub focus: Color,
    /// Scores and healthy states
    pub healthy: Color,
    /// Skip notices and load errors
    pub warning: Color,
    /// Descriptions and inactive borders
    pub muted: Color,
    pub text: Color,
}

impl Theme {
    /// Create the default zen minimalist theme
    pub fn default_theme() -> Self {
        Self {
            focus: Color::Cyan,
            healthy: Color::Green,
            warning: Color::Yellow,
            muted: Color::DarkGray,
            text: Color::White,
        }
    }

    /// Accent color for key hints and the focus label
    pub fn accent(&self) -> Color {
        self.focus
    }

    fn emphasis(&self, color: Color) -> Style {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    /// Border of a panel, highlighted when it has focus
    pub fn border_style(&self, focused: bool) -> Style {
        Style::default().fg(if focused { self.focus } else { self.muted })
    }

    /// Panel title, bold when focused
    pub fn title_style(&self, focused: bool) -> Style {
        if focused {
            self.emphasis(self.focus)
        } else {
            Style::default().fg(self.text)
        }
    }

    /// Row carrying the selection marker
    pub fn selected_style(&self) -> Style {
        self.emphasis(self.focus)
    }

    /// Right-aligned score badge of a row
    pub fn badge_style(&self) -> Style {
        Style::default().fg(self.healthy)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Healthy empty state (no cycles)
    pub fn healthy_style(&self) -> Style {
        Style::default().fg(self.healthy)
    }

    pub fn skipped_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    /// Style for a segment of explanation text
    pub fn segment_style(&self, style: TextStyle) -> Style {
        match style {
            TextStyle::Divider => self.emphasis(self.focus),
            TextStyle::Formula => self.muted_style().add_modifier(Modifier::ITALIC),
            TextStyle::Label => Style::default().fg(self.text),
            TextStyle::Value => self.emphasis(self.healthy),
            TextStyle::Item => Style::default().fg(self.focus),
            TextStyle::Muted => self.muted_style(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}
