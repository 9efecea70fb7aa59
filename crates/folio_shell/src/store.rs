//! Host-side state the session signals into.

use std::env;

use folio_term::{ContactSink, Mode, ModeSink, Theme, ThemeSink};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioStore {
    pub theme: Theme,
    pub mode: Mode,
    pub contact_open: bool,
}

impl Default for PortfolioStore {
    fn default() -> Self {
        Self::new(Theme::Dark)
    }
}

impl PortfolioStore {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            mode: Mode::Dev,
            contact_open: false,
        }
    }

    /// Starts with the theme the terminal advertises through `COLORFGBG`.
    pub fn from_env() -> Self {
        Self::new(initial_theme(env::var("COLORFGBG").ok().as_deref()))
    }

    pub fn close_contact(&mut self) {
        self.contact_open = false;
    }
}

impl ThemeSink for PortfolioStore {
    fn set_theme(&mut self, theme: Theme) {
        debug!(%theme, "store theme updated");
        self.theme = theme;
    }
}

impl ModeSink for PortfolioStore {
    fn set_mode(&mut self, mode: Mode) {
        debug!(%mode, "store mode updated");
        self.mode = mode;
    }
}

impl ContactSink for PortfolioStore {
    fn open_contact(&mut self) {
        self.contact_open = true;
    }
}

/// `COLORFGBG` is `fg;bg` (sometimes `fg;default;bg`). Backgrounds 0-6 and 8
/// are dark palette slots; anything else reads as light.
pub fn initial_theme(colorfgbg: Option<&str>) -> Theme {
    let background = colorfgbg
        .and_then(|value| value.rsplit(';').next())
        .and_then(|bg| bg.trim().parse::<u8>().ok());

    match background {
        Some(0..=6 | 8) | None => Theme::Dark,
        Some(_) => Theme::Light,
    }
}
