//! Frame composition and painting.
//!
//! [`compose`] turns session and store state into styled lines without touching
//! the terminal; [`paint`] writes a composed frame through crossterm.

use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use crossterm::queue;
use folio_content::Profile;
use folio_term::{
    pad_to_width, truncate_to_width, visible_width, Mode, ResultKind, Session, Theme,
    TranscriptEntry,
};

use crate::store::PortfolioStore;

const SUGGESTION_GAP: &str = "  ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Plain,
    Prompt,
    Muted,
    Success,
    Error,
    Info,
    Accent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub style: Style,
    pub text: String,
}

impl Line {
    fn new(style: Style, text: impl Into<String>) -> Self {
        Self {
            style,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub lines: Vec<Line>,
    /// Column and row of the input caret, when the terminal has focus.
    pub cursor: Option<(u16, u16)>,
    pub theme: Theme,
}

pub fn compose(session: &Session<PortfolioStore>, width: u16, height: u16) -> Frame {
    let width = usize::from(width.max(1));
    let height = usize::from(height.max(1));
    let store = session.host();

    let mut frame = match store.mode {
        Mode::Hr => profile_card(&session.content().profile, width),
        Mode::Dev => terminal_frame(session, width, height),
    };
    if store.contact_open {
        frame.lines.extend(contact_panel(&session.content().profile, width));
        frame.cursor = None;
    }

    let overflow = frame.lines.len().saturating_sub(height);
    if overflow > 0 {
        frame.lines.drain(..overflow);
        frame.cursor = frame
            .cursor
            .map(|(col, row)| (col, row.saturating_sub(overflow as u16)));
    }
    frame.theme = store.theme;
    frame
}

fn terminal_frame(session: &Session<PortfolioStore>, width: usize, height: usize) -> Frame {
    let prompt = session.prompt();
    let mut body = Vec::new();

    for entry in session.transcript().entries() {
        match entry {
            TranscriptEntry::Command(text) => {
                body.push(Line::new(Style::Prompt, fit(&format!("{prompt} {text}"), width)));
            }
            TranscriptEntry::Result { kind, payload } => {
                let style = result_style(*kind);
                for line in payload.to_plain_lines() {
                    body.push(Line::new(style, fit(&line, width)));
                }
            }
        }
    }

    let mut footer = Vec::new();
    let buffer = session.buffer();
    let input = if buffer.is_empty() {
        Line::new(Style::Muted, fit(&format!("{prompt} {}", session.placeholder()), width))
    } else {
        Line::new(Style::Plain, fit(&format!("{prompt} {buffer}"), width))
    };
    let caret_col = (visible_width(prompt) + 1 + visible_width(buffer)).min(width - 1);
    footer.push(input);

    if let Some(strip) = suggestion_strip(
        session.visible_suggestions(),
        session.suggestion_cursor(),
        width,
    ) {
        footer.push(strip);
    }

    let room = height.saturating_sub(footer.len());
    let skip = body.len().saturating_sub(room);
    let mut lines: Vec<Line> = body.into_iter().skip(skip).collect();
    let caret_row = lines.len();
    lines.extend(footer);

    Frame {
        lines,
        cursor: Some((caret_col as u16, caret_row as u16)),
        theme: Theme::Dark,
    }
}

fn suggestion_strip(suggestions: &[String], selected: Option<usize>, width: usize) -> Option<Line> {
    if suggestions.is_empty() {
        return None;
    }
    let text = suggestions
        .iter()
        .enumerate()
        .map(|(index, suggestion)| {
            if Some(index) == selected {
                format!("[{suggestion}]")
            } else {
                suggestion.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(SUGGESTION_GAP);
    Some(Line::new(Style::Accent, fit(&text, width)))
}

fn profile_card(profile: &Profile, width: usize) -> Frame {
    let contact = &profile.contact;
    let field = |label: &str, value: &str| {
        Line::new(Style::Plain, fit(&format!("{} {value}", pad_to_width(label, 10)), width))
    };
    Frame {
        lines: vec![
            Line::new(Style::Accent, fit(&profile.name, width)),
            Line::new(Style::Muted, fit(&format!("{} · {}", profile.role, profile.tagline), width)),
            Line::new(Style::Plain, ""),
            Line::new(Style::Plain, fit(&profile.long_description, width)),
            Line::new(Style::Plain, ""),
            field("Email", &contact.email),
            field("Phone", &contact.phone),
            field("LinkedIn", &contact.linkedin),
            field("Location", &contact.location),
            Line::new(Style::Plain, ""),
            Line::new(Style::Muted, fit("[d] dev mode  [q] quit", width)),
        ],
        cursor: None,
        theme: Theme::Dark,
    }
}

fn contact_panel(profile: &Profile, width: usize) -> Vec<Line> {
    let contact = &profile.contact;
    vec![
        Line::new(Style::Plain, ""),
        Line::new(Style::Accent, fit("Contact", width)),
        Line::new(Style::Plain, fit(&format!("Email     {}", contact.email), width)),
        Line::new(Style::Plain, fit(&format!("Phone     {}", contact.phone), width)),
        Line::new(Style::Plain, fit(&format!("LinkedIn  {}", contact.linkedin), width)),
        Line::new(Style::Muted, fit("[esc] close", width)),
    ]
}

fn result_style(kind: ResultKind) -> Style {
    match kind {
        ResultKind::Success => Style::Success,
        ResultKind::Error => Style::Error,
        ResultKind::Info | ResultKind::ModeSwitch | ResultKind::Contact => Style::Info,
        ResultKind::Clear => Style::Plain,
    }
}

fn fit(text: &str, width: usize) -> String {
    truncate_to_width(text, width, "…")
}

fn color(style: Style, theme: Theme) -> Color {
    match (style, theme) {
        (Style::Plain, _) => Color::Reset,
        (Style::Prompt, Theme::Dark) => Color::Green,
        (Style::Prompt, Theme::Light) => Color::DarkGreen,
        (Style::Muted, Theme::Dark) => Color::DarkGrey,
        (Style::Muted, Theme::Light) => Color::Grey,
        (Style::Success, Theme::Dark) => Color::Green,
        (Style::Success, Theme::Light) => Color::DarkGreen,
        (Style::Error, Theme::Dark) => Color::Red,
        (Style::Error, Theme::Light) => Color::DarkRed,
        (Style::Info, Theme::Dark) => Color::Cyan,
        (Style::Info, Theme::Light) => Color::DarkBlue,
        (Style::Accent, Theme::Dark) => Color::Yellow,
        (Style::Accent, Theme::Light) => Color::DarkMagenta,
    }
}

pub fn paint(out: &mut impl Write, frame: &Frame) -> io::Result<()> {
    queue!(out, Hide, MoveTo(0, 0), Clear(ClearType::All))?;
    for (row, line) in frame.lines.iter().enumerate() {
        queue!(
            out,
            MoveTo(0, row as u16),
            SetForegroundColor(color(line.style, frame.theme)),
            Print(&line.text),
            ResetColor
        )?;
    }
    if let Some((col, row)) = frame.cursor {
        queue!(out, MoveTo(col, row), Show)?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use folio_term::{Content, SessionOptions};
    use pretty_assertions::assert_eq;

    fn session() -> Session<PortfolioStore> {
        let options = SessionOptions {
            mode_switch_delay: std::time::Duration::ZERO,
            ..SessionOptions::default()
        };
        let content = Arc::new(Content::builtin().expect("builtin content is valid"));
        Session::new(content, PortfolioStore::default(), options)
    }

    fn texts(frame: &Frame) -> Vec<&str> {
        frame.lines.iter().map(|line| line.text.as_str()).collect()
    }

    #[test]
    fn empty_buffer_shows_placeholder() {
        let session = session();
        let frame = compose(&session, 80, 24);
        let prompt = session.prompt().to_string();

        let last = frame.lines.last().expect("input line");
        assert_eq!(last.style, Style::Muted);
        assert_eq!(last.text, format!("{prompt} {}", session.placeholder()));
        assert_eq!(frame.cursor, Some(((visible_width(&prompt) + 1) as u16, 1)));
    }

    #[test]
    fn suggestions_render_below_the_input() {
        let mut session = session();
        session.replace_input("c");
        session.cycle_completion();

        let frame = compose(&session, 80, 24);
        let strip = frame.lines.last().expect("suggestion strip");
        assert_eq!(strip.style, Style::Accent);
        assert_eq!(strip.text, "[contact]  clear");
    }

    #[test]
    fn transcript_is_scrolled_to_fit() {
        let mut session = session();
        session.replace_input("help");
        session.on_submit();

        let frame = compose(&session, 80, 5);
        assert_eq!(frame.lines.len(), 5);
        assert_eq!(frame.cursor, Some(((visible_width(session.prompt()) + 1) as u16, 4)));
    }

    #[test]
    fn errors_use_error_style() {
        let mut session = session();
        session.replace_input("nope");
        session.on_submit();

        let frame = compose(&session, 80, 24);
        assert!(frame
            .lines
            .iter()
            .any(|line| line.style == Style::Error && line.text.starts_with("Command not found")));
    }

    #[test]
    fn hr_mode_shows_profile_card() {
        let mut session = session();
        session.replace_input("mode hr");
        session.on_submit();

        let frame = compose(&session, 80, 24);
        assert_eq!(frame.cursor, None);
        assert_eq!(texts(&frame)[0], session.content().profile.name);
        assert_eq!(texts(&frame).last(), Some(&"[d] dev mode  [q] quit"));
    }

    #[test]
    fn contact_panel_overlays_the_terminal() {
        let mut session = session();
        session.replace_input("contact");
        session.on_submit();

        let frame = compose(&session, 80, 40);
        assert_eq!(frame.cursor, None);
        assert_eq!(texts(&frame).last(), Some(&"[esc] close"));
    }

    #[test]
    fn theme_follows_the_store() {
        let mut session = session();
        session.replace_input("theme light");
        session.on_submit();
        assert_eq!(compose(&session, 80, 24).theme, Theme::Light);
    }

    #[test]
    fn paint_emits_every_line() {
        let session = session();
        let frame = compose(&session, 80, 24);
        let mut out = Vec::new();
        paint(&mut out, &frame).expect("painting into a buffer succeeds");

        let written = String::from_utf8_lossy(&out);
        assert!(written.contains(session.placeholder()));
    }
}
