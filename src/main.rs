//! Terminal Mattris runner.
//!
//! Reads keys with crossterm, advances the game once per fixed tick and draws
//! with the framebuffer renderer.

#[macro_use]
extern crate tracing;

use std::fs::File;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing_subscriber::EnvFilter;

use mattris::core::{Game, GameSnapshot};
use mattris::input::{map_key, should_quit};
use mattris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use mattris::types::TICK_MS;
use mattris::AppConfig;

const LOG_ENV: &str = "MATTRIS_LOG";
const DEFAULT_LOG_FILTER: &str = "mattris=info,mattris_core=info";

fn main() -> Result<()> {
    let config = AppConfig::from_env()?;
    init_logging()?;
    info!(?config, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        error!("{err:#}");
    }
    result
}

/// Log to the file named by `MATTRIS_LOG`; the terminal belongs to the game.
fn init_logging() -> Result<()> {
    let Some(path) = std::env::var_os(LOG_ENV) else {
        return Ok(());
    };
    let file = File::create(&path)
        .with_context(|| format!("failed to create log file {}", path.to_string_lossy()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_writer(Mutex::new(file))
        .compact()
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: AppConfig) -> Result<()> {
    let mut input = config.input.handler();
    let mut game = Game::new(config.game)?;

    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Release && should_quit(key) {
                        info!(score = game.score(), "quit");
                        return Ok(());
                    }
                    // Repeat events keep a held key alive without retriggering it.
                    let action = map_key(key).and_then(|logical| match key.kind {
                        KeyEventKind::Press | KeyEventKind::Repeat => input.handle_key_press(logical),
                        KeyEventKind::Release => input.handle_key_release(logical),
                    });
                    if let Some(action) = action {
                        game.apply_action(action);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            for action in input.update(TICK_MS) {
                game.apply_action(action);
            }
            game.tick(TICK_MS);

            if game.take_last_event().is_some_and(|event| event.topped_out) {
                input.reset();
            }
        }
    }
}
