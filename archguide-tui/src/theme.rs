//! Blueprint theme tokens for the archguide TUI
//!
//! Provides a consistent color palette inspired by:
//! - Blue-to-violet banner of an architecture poster
//! - Terminal aesthetic with high contrast on the default background
//!
//! # Color Palette
//! - **Accent**: Azure blue (selected tab, principles, focus)
//! - **Positive**: Leaf green (monitoring and autoscaling)
//! - **Negative**: Signal red (security layer headers)
//! - **Warning**: Amber (infrastructure, guidance note)
//! - **Neutral**: Violet (compliance, chips)
//! - **Notice**: Indigo (documentation standards)
//! - **Muted**: Slate (secondary text, hints)

use ratatui::style::{Color, Modifier, Style};

use archguide_core::view::Tone;

/// Blueprint theme for the archguide TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Azure (selected tab, focus, principles)
    pub accent: Color,
    /// Green (monitoring callout)
    pub positive: Color,
    /// Red (security layer lock marker)
    pub negative: Color,
    /// Amber (infrastructure callout, guidance)
    pub warning: Color,
    /// Violet (compliance callouts, chips)
    pub neutral: Color,
    /// Indigo (documentation callout)
    pub notice: Color,
    /// Slate (hints, secondary text)
    pub muted: Color,
    /// Banner background
    pub banner: Color,
    /// White (primary text)
    pub text_primary: Color,
    /// Light gray (secondary text)
    pub text_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::blueprint()
    }
}

impl Theme {
    /// Create the default blueprint theme
    pub const fn blueprint() -> Self {
        Self {
            accent: Color::Rgb(59, 130, 246),
            positive: Color::Rgb(34, 197, 94),
            negative: Color::Rgb(220, 38, 38),
            warning: Color::Rgb(245, 158, 11),
            neutral: Color::Rgb(168, 85, 247),
            notice: Color::Rgb(99, 102, 241),
            muted: Color::Rgb(100, 116, 139),
            banner: Color::Rgb(37, 99, 235),
            text_primary: Color::White,
            text_secondary: Color::Rgb(170, 170, 170),
        }
    }

    /// Color for a callout tone
    pub fn tone_color(&self, tone: Tone) -> Color {
        match tone {
            Tone::Accent => self.accent,
            Tone::Positive => self.positive,
            Tone::Neutral => self.neutral,
            Tone::Notice => self.notice,
            Tone::Warning => self.warning,
        }
    }
}

const PALETTE: Theme = Theme::blueprint();

pub fn accent() -> Style {
    Style::default().fg(PALETTE.accent)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(PALETTE.muted)
}

pub fn text() -> Style {
    Style::default().fg(PALETTE.text_primary)
}

pub fn text_secondary() -> Style {
    Style::default().fg(PALETTE.text_secondary)
}

pub fn heading() -> Style {
    text().add_modifier(Modifier::BOLD)
}

pub fn negative() -> Style {
    Style::default().fg(PALETTE.negative)
}

pub fn warning() -> Style {
    Style::default().fg(PALETTE.warning)
}

pub fn chip() -> Style {
    Style::default().fg(PALETTE.neutral)
}

pub fn tone(t: Tone) -> Style {
    Style::default().fg(PALETTE.tone_color(t))
}

pub fn banner_title() -> Style {
    Style::default()
        .fg(PALETTE.text_primary)
        .bg(PALETTE.banner)
        .add_modifier(Modifier::BOLD)
}

pub fn banner_subtitle() -> Style {
    Style::default().fg(Color::Rgb(219, 234, 254)).bg(PALETTE.banner)
}

/// Style for a tab label; the selected tab is reversed in the accent color.
pub fn tab(selected: bool) -> Style {
    if selected {
        accent_bold().add_modifier(Modifier::REVERSED)
    } else {
        text_secondary()
    }
}

/// Style for a security layer header; the focused header is reversed.
pub fn layer_header(focused: bool) -> Style {
    if focused {
        heading().add_modifier(Modifier::REVERSED)
    } else {
        heading()
    }
}

pub fn panel_border() -> Style {
    muted()
}

pub fn panel_title() -> Style {
    accent_bold()
}
