use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

use crate::status::{StatusStyle, Tone};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::Light => "☀ Light",
            ThemeMode::Dark => "☾ Dark",
        }
    }
}

/// Colors every page draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub focus: Color,
    pub positive: Color,
    pub warning: Color,
    pub negative: Color,
    pub info: Color,
}

impl Palette {
    pub const DARK: Palette = Palette {
        background: Color::Reset,
        text: Color::White,
        muted: Color::DarkGray,
        accent: Color::Cyan,
        border: Color::Gray,
        focus: Color::Yellow,
        positive: Color::Green,
        warning: Color::Yellow,
        negative: Color::Red,
        info: Color::LightBlue,
    };

    pub const LIGHT: Palette = Palette {
        background: Color::White,
        text: Color::Black,
        muted: Color::Gray,
        accent: Color::Blue,
        border: Color::DarkGray,
        focus: Color::Magenta,
        positive: Color::Rgb(0, 120, 60),
        warning: Color::Rgb(176, 110, 0),
        negative: Color::Rgb(180, 30, 30),
        info: Color::Rgb(20, 80, 170),
    };

    pub fn tone(&self, tone: Tone) -> Color {
        match tone {
            Tone::Positive => self.positive,
            Tone::Warning => self.warning,
            Tone::Negative => self.negative,
            Tone::Info => self.info,
            Tone::Neutral => self.muted,
        }
    }

    pub fn status<S: StatusStyle>(&self, status: S) -> Style {
        Style::new().fg(self.tone(status.tone()))
    }

    pub fn base(&self) -> Style {
        Style::new().fg(self.text).bg(self.background)
    }

    pub fn highlight(&self) -> Style {
        Style::new().add_modifier(Modifier::REVERSED)
    }
}

/// Application-wide light/dark setting.
///
/// Owned by the `App` for the lifetime of the run loop and lent to renders
/// through `RenderContext`; nothing else holds it.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    mode: ThemeMode,
}

impl ThemeStore {
    pub fn new(mode: ThemeMode) -> Self {
        tracing::debug!(?mode, "theme store initialised");
        Self { mode }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        tracing::info!(mode = ?self.mode, "theme toggled");
        self.mode
    }

    pub fn palette(&self) -> &'static Palette {
        match self.mode {
            ThemeMode::Light => &Palette::LIGHT,
            ThemeMode::Dark => &Palette::DARK,
        }
    }
}

impl Drop for ThemeStore {
    fn drop(&mut self) {
        tracing::debug!(mode = ?self.mode, "theme store torn down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::PaymentStatus;

    #[test]
    fn test_toggle_switches_palette() {
        let mut store = ThemeStore::new(ThemeMode::Dark);
        assert_eq!(store.palette(), &Palette::DARK);
        assert_eq!(store.toggle(), ThemeMode::Light);
        assert_eq!(store.palette(), &Palette::LIGHT);
    }

    #[test]
    fn test_double_toggle_restores_mode() {
        let mut store = ThemeStore::new(ThemeMode::Light);
        store.toggle();
        store.toggle();
        assert_eq!(store.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_status_style_uses_tone_color() {
        let style = Palette::DARK.status(PaymentStatus::Failed);
        assert_eq!(style.fg, Some(Palette::DARK.negative));
    }

    #[test]
    fn test_theme_mode_deserializes_lowercase() {
        let mode: ThemeMode = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(mode, ThemeMode::Light);
    }
}
