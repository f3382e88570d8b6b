//! Theming and color definitions.
//!
//! The whole page renders through a [`Palette`] selected by the applied
//! [`ThemeKind`]. The palette colors follow semantic ANSI/indexed
//! values that hold up on both dark and light terminal backgrounds.

use ratatui::style::{Color, Modifier, Style};

use crate::portfolio::LineType;

/// The applied visual mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Light,
    Dark,
}

impl ThemeKind {
    /// The opposite mode; toggling twice returns the original.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

/// Resolve the startup theme.
///
/// Precedence: stored user choice, then the detected terminal
/// background, then light.
pub const fn preferred_theme(
    stored: Option<ThemeKind>,
    detected: Option<ThemeKind>,
) -> ThemeKind {
    match stored {
        Some(theme) => theme,
        None => match detected {
            Some(theme) => theme,
            None => ThemeKind::Light,
        },
    }
}

/// Color palette for the entire application.
#[derive(Debug, Clone)]
pub struct Palette {
    /// Page background
    pub background: Color,
    /// Default text color
    pub foreground: Color,
    /// Section title style
    pub heading: Style,
    /// Sub-heading style inside a section body
    pub subheading: Style,
    pub paragraph: Style,
    pub list: Style,
    pub quote: Style,
    pub code: Style,
    /// Sidebar border and title
    pub nav_border: Style,
    /// Inactive sidebar entry
    pub nav_entry: Style,
    /// The single active sidebar entry
    pub nav_active: Style,
    /// Status bar background
    pub status_bg: Color,
    /// Status bar foreground
    pub status_fg: Color,
}

impl Palette {
    pub fn of(theme: ThemeKind) -> Self {
        match theme {
            ThemeKind::Light => Self::light(),
            ThemeKind::Dark => Self::dark(),
        }
    }

    /// Palette for the dark mode.
    pub fn dark() -> Self {
        Self {
            background: Color::Indexed(233),
            foreground: Color::Indexed(252),
            heading: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            subheading: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            paragraph: Style::default().fg(Color::Indexed(252)),
            list: Style::default().fg(Color::Indexed(252)),
            quote: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::ITALIC),
            code: Style::default()
                .fg(Color::Indexed(245))
                .add_modifier(Modifier::DIM),
            nav_border: Style::default().fg(Color::Indexed(240)),
            nav_entry: Style::default().fg(Color::Indexed(250)),
            nav_active: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            status_bg: Color::Indexed(236),
            status_fg: Color::Indexed(252),
        }
    }

    /// Palette for the light mode. Indexed values are darker variants
    /// that stay readable on a bright background.
    pub fn light() -> Self {
        Self {
            background: Color::Indexed(255),
            foreground: Color::Indexed(235),
            heading: Style::default()
                .fg(Color::Indexed(24))
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            subheading: Style::default()
                .fg(Color::Indexed(22))
                .add_modifier(Modifier::BOLD),
            paragraph: Style::default().fg(Color::Indexed(235)),
            list: Style::default().fg(Color::Indexed(235)),
            quote: Style::default()
                .fg(Color::Indexed(25))
                .add_modifier(Modifier::ITALIC),
            code: Style::default().fg(Color::Indexed(240)),
            nav_border: Style::default().fg(Color::Indexed(245)),
            nav_entry: Style::default().fg(Color::Indexed(238)),
            nav_active: Style::default()
                .fg(Color::Indexed(24))
                .add_modifier(Modifier::BOLD),
            status_bg: Color::Indexed(252),
            status_fg: Color::Indexed(235),
        }
    }

    /// Style for a section body line.
    pub fn style_for(&self, line_type: LineType) -> Style {
        match line_type {
            LineType::Heading(1) => self.heading,
            LineType::Heading(_) => self.subheading,
            LineType::ListItem => self.list,
            LineType::Quote => self.quote,
            LineType::CodeBlock => self.code,
            LineType::Paragraph | LineType::Empty => self.paragraph,
        }
    }
}
