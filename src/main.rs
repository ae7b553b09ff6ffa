//! Terminal blockfall runner (default binary).
//!
//! Cooperative single-threaded loop: poll input with a timeout until the
//! next frame tick, apply input immediately, feed elapsed time to the
//! gravity clock. The loop stops for good once the engine reports game over.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::engine::{Engine, GameConfig};
use blockfall::input::{action_for_key, should_quit};
use blockfall::term::TermSurface;
use blockfall::types::{DEFAULT_COLUMNS, DEFAULT_ROWS, DEFAULT_SQUARE_SIZE, TICK_MS};

#[derive(Debug, Parser)]
#[command(name = "blockfall", about = "Falling-block puzzle in the terminal")]
struct Cli {
    /// Board width in cells
    #[arg(long, default_value_t = DEFAULT_COLUMNS)]
    columns: u16,

    /// Board height in cells
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: u16,

    /// Cell edge length hint for pixel surfaces
    #[arg(long, default_value_t = DEFAULT_SQUARE_SIZE)]
    square_size: u16,

    /// RNG seed; defaults to wall clock
    #[arg(long)]
    seed: Option<u32>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let seed = cli.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos())
            .unwrap_or(1)
    });

    let config = GameConfig {
        columns: cli.columns,
        rows: cli.rows,
        square_size: cli.square_size,
        seed,
        ..GameConfig::default()
    };

    // Construction validates the config before the terminal is touched.
    let mut engine = Engine::new(config, TermSurface::new(config.columns, config.rows))?;
    engine.surface_mut().enter()?;

    let (score, result) = run(engine);

    if result.is_ok() {
        println!("final score: {}", score);
    }
    result
}

fn run(mut engine: Engine<TermSurface>) -> (u32, Result<()>) {
    engine.start();

    let tick_duration = Duration::from_millis(u64::from(TICK_MS));
    let mut last_tick = Instant::now();

    loop {
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        match event::poll(timeout) {
            Ok(true) => match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        break;
                    }
                    if let Some(action) = action_for_key(key.code) {
                        engine.apply_action(action);
                    }
                }
                Ok(_) => {}
                Err(err) => {
                    let score = engine.score();
                    let mut surface = engine.into_surface();
                    let _ = surface.exit();
                    return (score, Err(err.into()));
                }
            },
            Ok(false) => {}
            Err(err) => {
                let score = engine.score();
                let mut surface = engine.into_surface();
                let _ = surface.exit();
                return (score, Err(err.into()));
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            if !engine.tick(TICK_MS) {
                break;
            }
        }
    }

    let score = engine.score();
    let mut surface = engine.into_surface();
    let result = surface.exit();
    (score, result)
}
