//! The terminal session: editor, transcript, submission pipeline, and the
//! collaborators it signals.
//!
//! Everything runs on the host's event loop. The only deferred effect is the
//! mode switch: each `mode` submission queues its own deadline, the host calls
//! [`Session::poll_deferred`] between events, and [`Session::shutdown`] (or
//! dropping the session) discards whatever is still queued.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{Duration, Instant};

use folio_content::Content;
use tracing::{debug, info, warn};

use crate::config::{EnvConfig, DEFAULT_MODE_SWITCH_DELAY_MS, DEFAULT_SUGGESTION_LIMIT};
use crate::core::autocomplete::CatalogAutocompleteProvider;
use crate::core::command::{CommandId, CommandResult, Mode, ResultKind, Theme};
use crate::core::editor::LineEditor;
use crate::core::history::InputHistory;
use crate::core::keybindings::TerminalAction;
use crate::core::parser::{validate, Invocation};
use crate::core::payload::Payload;
use crate::core::render::{dispatch, RenderContext};
use crate::core::transcript::Transcript;

const CONTACT_OPENING_MESSAGE: &str = "Opening contact form...";

pub trait ThemeSink {
    fn set_theme(&mut self, theme: Theme);
}

pub trait ModeSink {
    fn set_mode(&mut self, mode: Mode);
}

pub trait ContactSink {
    fn open_contact(&mut self);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    pub mode_switch_delay: Duration,
    pub suggestion_limit: usize,
    pub welcome: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            mode_switch_delay: Duration::from_millis(DEFAULT_MODE_SWITCH_DELAY_MS),
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            welcome: true,
        }
    }
}

impl SessionOptions {
    pub fn from_config(config: &EnvConfig) -> Self {
        Self {
            mode_switch_delay: config.mode_switch_delay,
            suggestion_limit: config.suggestion_limit,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingModeSwitch {
    pub mode: Mode,
    pub due: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank buffer; nothing recorded.
    Ignored,
    /// Unknown command or arity mismatch.
    Rejected,
    /// Transcript was reset.
    Cleared,
    Committed(ResultKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Handled,
    Submitted(SubmitOutcome),
    Quit,
}

pub struct Session<H> {
    content: Arc<Content>,
    editor: LineEditor,
    transcript: Transcript,
    host: H,
    options: SessionOptions,
    started: Instant,
    pending_mode_switches: VecDeque<PendingModeSwitch>,
    closed: bool,
}

impl<H> Session<H>
where
    H: ThemeSink + ModeSink + ContactSink,
{
    pub fn new(content: Arc<Content>, host: H, options: SessionOptions) -> Self {
        let provider = CatalogAutocompleteProvider::new(Arc::clone(&content));
        let mut transcript = Transcript::default();
        if options.welcome {
            transcript.push_result(
                ResultKind::Info,
                Payload::text(content.ui.terminal.welcome_message.clone()),
            );
        }

        Self {
            editor: LineEditor::new(Box::new(provider)),
            content,
            transcript,
            host,
            options,
            started: Instant::now(),
            pending_mode_switches: VecDeque::new(),
            closed: false,
        }
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn buffer(&self) -> &str {
        self.editor.buffer()
    }

    pub fn history(&self) -> &InputHistory {
        self.editor.history()
    }

    /// Full candidate list for the current buffer.
    pub fn suggestions(&self) -> &[String] {
        self.editor.suggestions()
    }

    /// Candidates to display, capped at the configured limit.
    pub fn visible_suggestions(&self) -> &[String] {
        let suggestions = self.editor.suggestions();
        &suggestions[..suggestions.len().min(self.options.suggestion_limit)]
    }

    pub fn suggestion_cursor(&self) -> Option<usize> {
        self.editor.suggestion_cursor()
    }

    pub fn prompt(&self) -> &str {
        &self.content.ui.terminal.prompt
    }

    pub fn placeholder(&self) -> &str {
        &self.content.ui.terminal.placeholder
    }

    /// Queued mode switches, earliest deadline first.
    pub fn pending_mode_switches(&self) -> impl Iterator<Item = &PendingModeSwitch> {
        self.pending_mode_switches.iter()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn replace_input(&mut self, text: impl Into<String>) {
        self.editor.replace_input(text);
    }

    pub fn insert_char(&mut self, ch: char) {
        self.editor.insert_char(ch);
    }

    pub fn insert_str(&mut self, text: &str) {
        self.editor.insert_str(text);
    }

    pub fn delete_char_backward(&mut self) {
        self.editor.delete_char_backward();
    }

    pub fn clear_buffer(&mut self) {
        self.editor.clear_buffer();
    }

    pub fn history_previous(&mut self) {
        self.editor.history_previous();
    }

    pub fn history_next(&mut self) {
        self.editor.history_next();
    }

    pub fn cycle_completion(&mut self) {
        self.editor.cycle_completion();
    }

    pub fn accept_suggestion(&mut self, index: usize) {
        self.editor.accept_suggestion(index);
    }

    pub fn apply_action(&mut self, action: TerminalAction) -> ActionOutcome {
        match action {
            TerminalAction::HistoryPrevious => self.history_previous(),
            TerminalAction::HistoryNext => self.history_next(),
            TerminalAction::CycleCompletion => self.cycle_completion(),
            TerminalAction::DeleteCharBackward => self.delete_char_backward(),
            TerminalAction::ClearLine => self.clear_buffer(),
            TerminalAction::Submit => return ActionOutcome::Submitted(self.on_submit()),
            TerminalAction::Quit => return ActionOutcome::Quit,
        }
        ActionOutcome::Handled
    }

    pub fn on_submit(&mut self) -> SubmitOutcome {
        self.on_submit_at(Instant::now())
    }

    /// Runs the submission pipeline with `now` as the reference time for
    /// `inspect` and for scheduling a deferred mode switch.
    pub fn on_submit_at(&mut self, now: Instant) -> SubmitOutcome {
        if self.closed {
            return SubmitOutcome::Ignored;
        }

        let Some(submitted) = self.editor.take_submission() else {
            return SubmitOutcome::Ignored;
        };

        let invocation = match validate(&self.content.catalog, &submitted) {
            Ok(invocation) => invocation,
            Err(error) => {
                warn!(input = %submitted, %error, "invocation rejected");
                self.transcript.push_exchange(
                    submitted,
                    ResultKind::Error,
                    Payload::text(error.to_string()),
                );
                return SubmitOutcome::Rejected;
            }
        };

        let ctx = RenderContext {
            content: &self.content,
            elapsed: now.saturating_duration_since(self.started),
        };
        let result = dispatch(&invocation, &ctx);
        self.commit(submitted, &invocation, result, now)
    }

    /// Applies every queued mode switch whose deadline has passed, in
    /// deadline order. Returns the modes applied.
    pub fn poll_deferred(&mut self, now: Instant) -> Vec<Mode> {
        let mut applied = Vec::new();
        if self.closed {
            return applied;
        }

        while let Some(pending) = self.pending_mode_switches.front().copied() {
            if now < pending.due {
                break;
            }
            self.pending_mode_switches.pop_front();
            self.apply_mode(pending.mode);
            applied.push(pending.mode);
        }
        applied
    }

    /// Earliest queued deadline, for hosts that sleep between events.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending_mode_switches.front().map(|pending| pending.due)
    }

    /// Cancels deferred work. The session ignores further submissions.
    pub fn shutdown(&mut self) {
        self.cancel_pending("shutdown");
        self.closed = true;
    }

    fn commit(
        &mut self,
        submitted: String,
        invocation: &Invocation,
        result: CommandResult,
        now: Instant,
    ) -> SubmitOutcome {
        match result {
            CommandResult::Clear => {
                debug!("transcript cleared");
                self.transcript.clear();
                SubmitOutcome::Cleared
            }
            CommandResult::ModeSwitch { mode, payload } => {
                self.transcript
                    .push_exchange(submitted, ResultKind::Info, payload);
                self.schedule_mode_switch(mode, now);
                SubmitOutcome::Committed(ResultKind::ModeSwitch)
            }
            CommandResult::Contact => {
                self.transcript.push_exchange(
                    submitted,
                    ResultKind::Info,
                    Payload::text(CONTACT_OPENING_MESSAGE),
                );
                info!("opening contact form");
                self.host.open_contact();
                SubmitOutcome::Committed(ResultKind::Contact)
            }
            result => {
                let kind = result.kind();
                if kind == ResultKind::Success && invocation.id == Some(CommandId::Theme) {
                    if let Some(theme) = invocation
                        .args
                        .first()
                        .and_then(|value| value.parse::<Theme>().ok())
                    {
                        info!(%theme, "theme changed");
                        self.host.set_theme(theme);
                    }
                }
                self.transcript
                    .push_exchange(submitted, kind, result.into_payload());
                SubmitOutcome::Committed(kind)
            }
        }
    }

    fn schedule_mode_switch(&mut self, mode: Mode, now: Instant) {
        if self.options.mode_switch_delay.is_zero() {
            self.apply_mode(mode);
            return;
        }

        let due = now + self.options.mode_switch_delay;
        let index = self
            .pending_mode_switches
            .partition_point(|pending| pending.due <= due);
        self.pending_mode_switches
            .insert(index, PendingModeSwitch { mode, due });
        debug!(%mode, queued = self.pending_mode_switches.len(), "mode switch scheduled");
    }

    fn cancel_pending(&mut self, reason: &str) {
        for pending in self.pending_mode_switches.drain(..) {
            warn!(mode = %pending.mode, reason, "cancelled pending mode switch");
        }
    }

    fn apply_mode(&mut self, mode: Mode) {
        info!(%mode, "mode changed");
        self.host.set_mode(mode);
    }
}
