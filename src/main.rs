//! Terminal Snake runner (default binary).
//!
//! crossterm supplies input and terminal control; drawing goes through the
//! framebuffer renderer in `tui_snake::term`.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_snake::config::GameConfig;
use tui_snake::core::{FrameOutcome, GameBoard, Session};
use tui_snake::input::{key_token, should_quit};
use tui_snake::logging;
use tui_snake::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

/// Poll interval once the game is over and only quitting is left.
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    logging::init(&config)?;
    log::info!("starting with {:?}", config);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        log::error!("terminated: {err:#}");
    }
    result
}

fn viewport() -> Viewport {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    Viewport::new(w, h)
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<()> {
    let view = GameView::default();
    let (width, height) = config.grid_size(view.fit_grid(viewport()));
    let board = match config.seed {
        Some(seed) => GameBoard::with_seed(width, height, seed),
        None => GameBoard::new(width, height),
    };
    log::info!("grid {}x{}", width, height);

    let mut session = Session::new(board);
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(config.tick_ms as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        view.render_into(&session, viewport(), &mut fb);
        term.present(&fb)?;

        // Input with timeout until next tick.
        let timeout = if session.halted() {
            IDLE_POLL
        } else {
            tick_duration.saturating_sub(last_tick.elapsed())
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        log::info!("quit at score {}", session.board().score());
                        return Ok(());
                    }
                    if let Some(token) = key_token(key) {
                        session.handle_input(token);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if !session.halted() && last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            if let FrameOutcome::Running(outcome) = session.frame() {
                if outcome.ate {
                    log::debug!("score {}", session.board().score());
                }
            }
        }
    }
}
