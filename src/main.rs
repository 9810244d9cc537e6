//! Quadfall terminal binary.
//!
//! Wires the deterministic core to crossterm: keys become actions, wall-clock
//! time drives the scheduler, and each 16ms frame renders a fresh snapshot
//! through the framebuffer screen.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use quadfall::core::{GameSnapshot, GameState};
use quadfall::input::{action_for_key, is_quit};
use quadfall::scheduler::Scheduler;
use quadfall::store::ScoreStore;
use quadfall::term::{GameView, Screen, Viewport};
use quadfall::types::{Action, TICK_MS};

const SEED_ENV: &str = "QUADFALL_SEED";

fn main() -> Result<()> {
    let mut store = ScoreStore::from_env();
    let best = match store.load() {
        Ok(best) => best,
        Err(err) => {
            eprintln!("warning: could not read high score: {err:#}");
            0
        }
    };

    let mut game = GameState::new(seed_from_env());
    game.apply(Action::HydrateHighScore(best));

    let mut term = Screen::new();
    term.enter()?;

    let result = run(&mut term, &mut game, &mut store);

    // Always try to restore terminal state.
    let _ = term.exit();
    let _ = store.record(game.high_score());
    result
}

fn run(term: &mut Screen, game: &mut GameState, store: &mut ScoreStore) -> Result<()> {
    let view = GameView::new();
    let mut scheduler = Scheduler::new();
    let mut snapshot = GameSnapshot::default();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        game.snapshot_into(&mut snapshot);
        // Only writes when the score improves on what is already on disk.
        let _ = store.record(snapshot.metrics.score);

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let frame = view.render(&snapshot, Viewport { width: w, height: h });
        term.present(frame)?;

        // Input with timeout until the next frame boundary.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_default();

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key)
                    if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                {
                    if is_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = action_for_key(key, game.status()) {
                        game.apply(action);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            scheduler.sync(
                game.status(),
                game.metrics().level,
                !game.pending_achievements().is_empty(),
            );
            for action in scheduler.advance(elapsed.as_millis() as u32) {
                game.apply(action);
            }
        }
    }
}

fn seed_from_env() -> u32 {
    if let Ok(raw) = std::env::var(SEED_ENV) {
        if let Ok(seed) = raw.trim().parse() {
            return seed;
        }
    }
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1)
        .max(1)
}
