use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::event::{self, Event};
use crossterm::terminal;
use folio_shell::{compose, paint, Control, PortfolioStore, Shell, TerminalGuard};
use folio_term::{logging, Content, EnvConfig, Session, SessionOptions};
use signal_hook::consts::{SIGHUP, SIGTERM};
use tracing::{info, warn};

const IDLE_POLL: Duration = Duration::from_millis(100);

fn main() -> anyhow::Result<()> {
    let config = EnvConfig::from_env();
    logging::init(&config).context("failed to initialize logging")?;

    let content = load_content(&config)?;
    let options = SessionOptions::from_config(&config);
    let session = Session::new(Arc::new(content), PortfolioStore::from_env(), options);
    let mut shell = Shell::new(session);

    let terminate = Arc::new(AtomicBool::new(false));
    for signal in [SIGTERM, SIGHUP] {
        signal_hook::flag::register(signal, Arc::clone(&terminate))
            .with_context(|| format!("failed to register handler for signal {signal}"))?;
    }

    let mut screen = TerminalGuard::enter(io::stdout()).context("failed to set up the terminal")?;

    let result = run_loop(&mut shell, &terminate, screen.writer());

    shell.shutdown();
    screen.restore().context("failed to restore the terminal")?;
    info!("folio shell exited");

    result
}

fn load_content(config: &EnvConfig) -> anyhow::Result<Content> {
    match &config.content_dir {
        Some(dir) => Content::load_dir(dir)
            .with_context(|| format!("failed to load content from {}", dir.display())),
        None => Content::builtin().context("built-in content is invalid"),
    }
}

fn run_loop(shell: &mut Shell, terminate: &AtomicBool, out: &mut impl Write) -> anyhow::Result<()> {
    let mut dirty = true;
    loop {
        if terminate.load(Ordering::Relaxed) {
            warn!("termination signal received");
            return Ok(());
        }

        if dirty {
            let (width, height) = terminal::size()?;
            paint(out, &compose(shell.session(), width, height))?;
            dirty = false;
        }

        let timeout = match shell.next_deadline() {
            Some(due) => due.saturating_duration_since(Instant::now()).min(IDLE_POLL),
            None => IDLE_POLL,
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if shell.handle_key(&key) == Control::Quit {
                        return Ok(());
                    }
                    dirty = true;
                }
                Event::Resize(_, _) => dirty = true,
                _ => {}
            }
        }

        if shell.tick(Instant::now()) {
            dirty = true;
        }
    }
}
