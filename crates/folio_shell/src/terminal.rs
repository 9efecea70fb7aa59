//! Raw-mode and alternate-screen setup with guaranteed teardown.

use std::io::{self, Write};

use crossterm::{cursor, execute, terminal};
use tracing::warn;

/// Restores the terminal when dropped, including when entering the alternate
/// screen fails halfway through setup.
pub struct TerminalGuard<W: Write> {
    out: W,
    raw_mode: bool,
    restored: bool,
}

impl<W: Write> TerminalGuard<W> {
    pub fn enter(out: W) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Self::enter_screen(out, true)
    }

    fn enter_screen(out: W, raw_mode: bool) -> io::Result<Self> {
        let mut guard = Self {
            out,
            raw_mode,
            restored: false,
        };
        execute!(guard.out, terminal::EnterAlternateScreen)?;
        Ok(guard)
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn restore(mut self) -> io::Result<()> {
        self.restore_terminal()
    }

    fn restore_terminal(&mut self) -> io::Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;

        let screen = execute!(self.out, terminal::LeaveAlternateScreen, cursor::Show);
        if self.raw_mode {
            terminal::disable_raw_mode()?;
        }
        screen
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if let Err(error) = self.restore_terminal() {
            warn!(%error, "failed to restore terminal");
        }
    }
}
