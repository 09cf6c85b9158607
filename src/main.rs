//! Terminal falling-block game (default binary).
//!
//! Polls crossterm key events, feeds one control snapshot per frame into the
//! simulation, and draws the resulting board through the framebuffer
//! renderer.

use std::fs::File;
use std::str::FromStr;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, Level};
use tracing_subscriber::prelude::*;

use blockfall::core::{GameConfig, GameSnapshot, Session};
use blockfall::input::{map_key, should_quit, ControlTracker};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::{Control, TICK_MS};

fn main() -> Result<()> {
    init_logging()?;

    let config = GameConfig::from_env();
    info!(?config, "starting session");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Log to the file named by `BLOCKFALL_LOG_PATH`; stdout belongs to the game.
fn init_logging() -> Result<()> {
    let Some(path) = std::env::var("BLOCKFALL_LOG_PATH")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
    else {
        return Ok(());
    };

    let level = std::env::var("BLOCKFALL_LOG_LEVEL")
        .ok()
        .and_then(|s| Level::from_str(s.trim()).ok())
        .unwrap_or(Level::INFO);

    let file = File::create(&path).with_context(|| format!("creating log file {path}"))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(level))
        .init();

    info!("Logging initialized at level: {}", level);
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: GameConfig) -> Result<()> {
    let mut session = Session::initialize(config);
    let mut tracker = ControlTracker::new();

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            info!(cleared_rows = snap.cleared_rows, "quit");
                            return Ok(());
                        }
                        if let Some(control) = map_key(key) {
                            tracker.press(control);
                        }
                    }
                    KeyEventKind::Repeat => {
                        // Only keeps the hold alive; DAS/ARR decides repeats.
                        match map_key(key) {
                            Some(Control::Rotate) | None => {}
                            Some(control) => tracker.press(control),
                        }
                    }
                    KeyEventKind::Release => {
                        if let Some(control) = map_key(key) {
                            tracker.release(control);
                        }
                    }
                },
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            let controls = tracker.sample(elapsed_ms(elapsed));
            session.tick(elapsed.as_secs_f32(), controls);

            // Keys held into the frozen board must not replay on a later frame.
            if session.is_match_over() {
                tracker.reset();
            }
        }
    }
}

/// Whole milliseconds in `elapsed`, saturating at `u32::MAX`.
fn elapsed_ms(elapsed: Duration) -> u32 {
    u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX)
}
