//! Terminal LED panel runner (default binary).
//!
//! Runs the game at a fixed 30 Hz frame rate on a virtual 8x8 panel drawn
//! with crossterm. Keys are reduced to one action per frame, so play feels
//! the same as on the hardware panel.

use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use ledtris::input::{should_quit, KeyState};
use ledtris::logging;
use ledtris::session::Session;
use ledtris::term::{PanelView, TermBuffer, TerminalRenderer, Viewport};
use ledtris::types::{Action, FRAME_MS};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Seed for piece kinds and spawn columns. Defaults to the clock.
    #[arg(long)]
    seed: Option<u32>,
    /// Log destination, used only when LEDTRIS_LOG is set.
    #[arg(long, env = "LEDTRIS_LOG_FILE", default_value = "ledtris.log")]
    log_file: PathBuf,
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    logging::init_file(&args.log_file)?;

    let seed = args.seed.unwrap_or_else(clock_seed);
    info!(seed, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!("exited");
    result
}

fn run(term: &mut TerminalRenderer, seed: u32) -> Result<()> {
    let mut session = Session::new(seed);
    let view = PanelView::default();
    let mut keys = if term.key_release_events() {
        KeyState::new().without_release_timeout()
    } else {
        KeyState::new()
    };
    let mut buf = TermBuffer::new(0, 0);

    let frame_duration = Duration::from_millis(FRAME_MS);
    let mut deadline = Instant::now() + frame_duration;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(session.levels(), &session.status(), Viewport::new(w, h), &mut buf);
        term.draw_swap(&mut buf)?;

        // Collect input until the frame deadline.
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        keys.press_key(key.code);
                    }
                    // Refreshes the release timeout while a key is held.
                    KeyEventKind::Repeat => {
                        keys.press_key(key.code);
                    }
                    KeyEventKind::Release => keys.release_key(key.code),
                },
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Fell behind (e.g. suspended): resync instead of bursting frames.
        let now = Instant::now();
        deadline += frame_duration;
        if deadline < now {
            deadline = now + frame_duration;
        }

        let action = keys.next_action();
        if action == Action::Quit {
            return Ok(());
        }
        session.advance(action);
    }
}
