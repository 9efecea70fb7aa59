//! Key routing between the terminal session and the overlays the host owns.

use std::time::Instant;

use crossterm::event::KeyEvent;
use folio_term::{ActionOutcome, Mode, ModeSink, Session, TerminalKeybindings};
use tracing::debug;

use crate::keys::{translate, KeyInput};
use crate::store::PortfolioStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

pub struct Shell {
    session: Session<PortfolioStore>,
    keybindings: TerminalKeybindings,
}

impl Shell {
    pub fn new(session: Session<PortfolioStore>) -> Self {
        Self::with_keybindings(session, TerminalKeybindings::default())
    }

    pub fn with_keybindings(
        session: Session<PortfolioStore>,
        keybindings: TerminalKeybindings,
    ) -> Self {
        Self {
            session,
            keybindings,
        }
    }

    pub fn session(&self) -> &Session<PortfolioStore> {
        &self.session
    }

    pub fn store(&self) -> &PortfolioStore {
        self.session.host()
    }

    pub fn handle_key(&mut self, event: &KeyEvent) -> Control {
        let Some(input) = translate(event) else {
            return Control::Continue;
        };

        if self.store().contact_open {
            return self.handle_contact_key(&input);
        }

        match self.store().mode {
            Mode::Hr => self.handle_profile_key(&input),
            Mode::Dev => self.handle_terminal_key(input),
        }
    }

    /// Applies a due mode switch. Returns true when the view changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        !self.session.poll_deferred(now).is_empty()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.session.next_deadline()
    }

    pub fn shutdown(&mut self) {
        self.session.shutdown();
    }

    fn handle_contact_key(&mut self, input: &KeyInput) -> Control {
        match input {
            KeyInput::Named(key) if key == "esc" => {
                debug!("contact panel closed");
                self.session.host_mut().close_contact();
                Control::Continue
            }
            KeyInput::Named(key) if self.is_quit(key) => Control::Quit,
            _ => Control::Continue,
        }
    }

    fn handle_profile_key(&mut self, input: &KeyInput) -> Control {
        match input {
            KeyInput::Char('d') => {
                self.session.host_mut().set_mode(Mode::Dev);
                Control::Continue
            }
            KeyInput::Char('q') => Control::Quit,
            KeyInput::Named(key) if self.is_quit(key) => Control::Quit,
            _ => Control::Continue,
        }
    }

    fn handle_terminal_key(&mut self, input: KeyInput) -> Control {
        match input {
            KeyInput::Char(ch) => {
                self.session.insert_char(ch);
                Control::Continue
            }
            KeyInput::Named(key) => match self.keybindings.action_for(&key) {
                Some(action) => match self.session.apply_action(action) {
                    ActionOutcome::Quit => Control::Quit,
                    ActionOutcome::Handled | ActionOutcome::Submitted(_) => Control::Continue,
                },
                None => Control::Continue,
            },
        }
    }

    fn is_quit(&self, key: &str) -> bool {
        self.keybindings.action_for(key) == Some(folio_term::TerminalAction::Quit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use crossterm::event::{KeyCode, KeyModifiers};
    use folio_term::{Content, SessionOptions, Theme};
    use pretty_assertions::assert_eq;

    fn shell(delay: Duration) -> Shell {
        let options = SessionOptions {
            mode_switch_delay: delay,
            ..SessionOptions::default()
        };
        let content = Arc::new(Content::builtin().expect("builtin content is valid"));
        Shell::new(Session::new(content, PortfolioStore::default(), options))
    }

    fn press(shell: &mut Shell, code: KeyCode) -> Control {
        shell.handle_key(&KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_line(shell: &mut Shell, line: &str) {
        for ch in line.chars() {
            press(shell, KeyCode::Char(ch));
        }
        press(shell, KeyCode::Enter);
    }

    #[test]
    fn typed_theme_command_updates_store() {
        let mut shell = shell(Duration::ZERO);
        type_line(&mut shell, "theme light");
        assert_eq!(shell.store().theme, Theme::Light);
        assert_eq!(shell.session().history().entries(), &["theme light"]);
    }

    #[test]
    fn contact_panel_swallows_keys_until_escape() {
        let mut shell = shell(Duration::ZERO);
        type_line(&mut shell, "contact");
        assert!(shell.store().contact_open);

        press(&mut shell, KeyCode::Char('x'));
        assert_eq!(shell.session().buffer(), "");

        press(&mut shell, KeyCode::Esc);
        assert!(!shell.store().contact_open);
    }

    #[test]
    fn profile_card_returns_to_dev_or_quits() {
        let mut shell = shell(Duration::ZERO);
        type_line(&mut shell, "mode hr");
        assert_eq!(shell.store().mode, Mode::Hr);

        press(&mut shell, KeyCode::Char('d'));
        assert_eq!(shell.store().mode, Mode::Dev);

        type_line(&mut shell, "mode hr");
        assert_eq!(press(&mut shell, KeyCode::Char('q')), Control::Quit);
    }

    #[test]
    fn deferred_switch_lands_on_tick() {
        let mut shell = shell(Duration::from_millis(500));
        type_line(&mut shell, "mode hr");
        assert_eq!(shell.store().mode, Mode::Dev);

        let due = shell.next_deadline().expect("switch is pending");
        assert!(shell.tick(due));
        assert_eq!(shell.store().mode, Mode::Hr);
    }

    #[test]
    fn ctrl_c_quits_from_the_terminal() {
        let mut shell = shell(Duration::ZERO);
        let control = shell.handle_key(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(control, Control::Quit);
    }
}
