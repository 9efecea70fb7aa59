use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use folio_shell::{compose, Control, PortfolioStore, Shell, Style};
use folio_term::{Content, Mode, Session, SessionOptions, Theme};
use pretty_assertions::assert_eq;

fn shell() -> Shell {
    let options = SessionOptions {
        mode_switch_delay: Duration::from_millis(500),
        ..SessionOptions::default()
    };
    let content = Arc::new(Content::builtin().expect("builtin content is valid"));
    Shell::new(Session::new(content, PortfolioStore::new(Theme::Dark), options))
}

fn key(shell: &mut Shell, code: KeyCode) -> Control {
    shell.handle_key(&KeyEvent::new(code, KeyModifiers::NONE))
}

fn type_text(shell: &mut Shell, text: &str) {
    for ch in text.chars() {
        key(shell, KeyCode::Char(ch));
    }
}

#[test]
fn tab_completion_and_submit_render_project_details() {
    let mut shell = shell();
    type_text(&mut shell, "op");
    key(&mut shell, KeyCode::Tab);
    assert_eq!(shell.session().buffer(), "open ");

    type_text(&mut shell, "atlas relay atlas");
    key(&mut shell, KeyCode::Enter);

    let frame = compose(shell.session(), 120, 200);
    let success: Vec<&str> = frame
        .lines
        .iter()
        .filter(|line| line.style == Style::Success)
        .map(|line| line.text.as_str())
        .collect();
    assert_eq!(success.iter().filter(|text| text.starts_with("Stack:")).count(), 2);
}

#[test]
fn history_recall_with_arrow_keys() {
    let mut shell = shell();
    type_text(&mut shell, "about");
    key(&mut shell, KeyCode::Enter);
    type_text(&mut shell, "skills");
    key(&mut shell, KeyCode::Enter);

    key(&mut shell, KeyCode::Up);
    key(&mut shell, KeyCode::Up);
    assert_eq!(shell.session().buffer(), "about");
    key(&mut shell, KeyCode::Down);
    assert_eq!(shell.session().buffer(), "skills");
}

#[test]
fn quitting_before_the_deadline_cancels_the_switch() {
    let mut shell = shell();
    type_text(&mut shell, "mode hr");
    key(&mut shell, KeyCode::Enter);
    let due = shell.next_deadline().expect("switch is pending");

    shell.shutdown();
    assert!(!shell.tick(due + Duration::from_secs(1)));
    assert_eq!(shell.store().mode, Mode::Dev);
}
