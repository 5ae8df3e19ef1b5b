use crate::error::PreferenceError;
use crate::preferences::PreferenceStore;
use ratatui::style::{Color, Modifier, Style};

pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Only an exact `"light"` selects the light theme.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Toggle button glyph: a sun in light mode, a moon in dark mode.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "☀",
            Self::Dark => "☾",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Self::Dark => Palette {
                bg: Color::Reset,
                fg: Color::White,
                muted: Color::DarkGray,
                accent: Color::Cyan,
                highlight: Color::Yellow,
                tag_fg: Color::Black,
                tag_bg: Color::Cyan,
                link: Color::Blue,
                selected_bg: Color::DarkGray,
            },
            Self::Light => Palette {
                bg: Color::White,
                fg: Color::Black,
                muted: Color::Gray,
                accent: Color::Blue,
                highlight: Color::Magenta,
                tag_fg: Color::White,
                tag_bg: Color::Blue,
                link: Color::Blue,
                selected_bg: Color::Gray,
            },
        }
    }
}

/// Colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub accent: Color,
    pub highlight: Color,
    pub tag_fg: Color,
    pub tag_bg: Color,
    pub link: Color,
    pub selected_bg: Color,
}

impl Palette {
    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn tag(&self) -> Style {
        Style::default().fg(self.tag_fg).bg(self.tag_bg)
    }

    pub fn link(&self) -> Style {
        Style::default().fg(self.link).add_modifier(Modifier::UNDERLINED)
    }
}

/// Theme preference backed by the `theme` key of the preference store.
#[derive(Debug)]
pub struct ThemeSetting {
    store: PreferenceStore,
    current: Theme,
}

impl ThemeSetting {
    pub fn load(store: PreferenceStore) -> Self {
        let current = Theme::from_stored(store.get(THEME_KEY));
        Self { store, current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Switch theme and persist it. The in-memory theme changes even if the
    /// write fails.
    pub fn set(&mut self, theme: Theme) -> Result<(), PreferenceError> {
        self.current = theme;
        tracing::info!(theme = theme.as_str(), "theme changed");
        self.store.set(THEME_KEY, theme.as_str())
    }

    pub fn toggle(&mut self) -> Result<Theme, PreferenceError> {
        let next = self.current.toggled();
        self.set(next)?;
        Ok(next)
    }
}
