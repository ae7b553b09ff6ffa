//! Engine boundary: configuration, the render-adapter contract, and the
//! gravity clock.
//!
//! Hosts construct an [`Engine`] around a [`CellSurface`] of their choosing,
//! wire input signals to the movement methods, and feed elapsed time to
//! [`Engine::tick`] from whatever frame scheduler they run. The engine owns
//! all game state; the surface only ever receives `draw_cell` calls.

use anyhow::{bail, Result};

use crate::core::{Game, StepOutcome};
use crate::types::{
    Rgb, BOARD_BACKGROUND, DEFAULT_COLUMNS, DEFAULT_ROWS, DEFAULT_SQUARE_SIZE, GameAction,
};

/// Render adapter contract. Implementations draw one cell at board
/// coordinates (col, row) in the given color; they must accept every board
/// cell and every visible piece sub-cell, and must not reach back into the
/// engine.
pub trait CellSurface {
    fn draw_cell(&mut self, col: i32, row: i32, color: Rgb);

    /// Flush hook, called once after a full repaint. Default no-op for
    /// surfaces that draw immediately.
    fn present(&mut self) {}
}

/// Surface that draws nothing. For headless hosts, tests, and benches.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSurface;

impl CellSurface for NullSurface {
    fn draw_cell(&mut self, _col: i32, _row: i32, _color: Rgb) {}
}

/// Engine construction parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    pub columns: u16,
    pub rows: u16,
    /// Cell edge length hint for pixel-based surfaces.
    pub square_size: u16,
    pub background: Rgb,
    pub seed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            square_size: DEFAULT_SQUARE_SIZE,
            background: BOARD_BACKGROUND,
            seed: 1,
        }
    }
}

impl GameConfig {
    fn validate(&self) -> Result<()> {
        if self.columns == 0 {
            bail!("board must have at least one column");
        }
        if self.rows == 0 {
            bail!("board must have at least one row");
        }
        if self.square_size == 0 {
            bail!("square size hint must be positive");
        }
        Ok(())
    }
}

/// The boundary API: construction, the four input transitions, the gravity
/// clock, and a full repaint.
pub struct Engine<S: CellSurface> {
    game: Game,
    surface: S,
    config: GameConfig,
    started: bool,
    /// Milliseconds accumulated since the last gravity step.
    gravity_elapsed_ms: u32,
}

impl<S: CellSurface> Engine<S> {
    /// Build an engine. The surface is required; malformed dimensions are a
    /// construction error, never silently defaulted.
    pub fn new(config: GameConfig, surface: S) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            game: Game::new(config.columns, config.rows, config.seed),
            surface,
            config,
            started: false,
            gravity_elapsed_ms: 0,
        })
    }

    /// Begin play: resets the gravity reference and paints the first frame.
    pub fn start(&mut self) {
        self.started = true;
        self.gravity_elapsed_ms = 0;
        self.draw_board();
    }

    pub fn move_left(&mut self) {
        if self.game.move_left() {
            self.draw_board();
        }
    }

    pub fn move_right(&mut self) {
        if self.game.move_right() {
            self.draw_board();
        }
    }

    pub fn move_down(&mut self) {
        if self.game.move_down() != StepOutcome::Ignored {
            self.draw_board();
        }
    }

    pub fn rotate(&mut self) {
        if self.game.rotate() {
            self.draw_board();
        }
    }

    /// Apply one discrete input signal immediately.
    pub fn apply_action(&mut self, action: GameAction) {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::MoveDown => self.move_down(),
            GameAction::Rotate => self.rotate(),
        }
    }

    /// Gravity clock. Accumulates elapsed time; when it exceeds the current
    /// gravity interval, performs one downward step and resets the
    /// reference. Returns false once the game is over, at which point the
    /// host should stop rescheduling (there is no resume).
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if !self.started || self.game.is_game_over() {
            return false;
        }

        self.gravity_elapsed_ms += elapsed_ms;
        if f64::from(self.gravity_elapsed_ms) >= self.game.gravity_interval_ms() {
            self.gravity_elapsed_ms = 0;
            self.move_down();
        }

        !self.game.is_game_over()
    }

    /// Full repaint: every board cell, then the visible sub-cells of the
    /// falling piece.
    pub fn draw_board(&mut self) {
        let background = self.config.background;
        let surface = &mut self.surface;
        self.game
            .board()
            .render(background, &mut |col, row, color| {
                surface.draw_cell(col, row, color);
            });

        let piece = self.game.active();
        let color = piece.kind.color();
        for (col, row) in piece.cells() {
            if row >= 0 {
                surface.draw_cell(col, row, color);
            }
        }

        surface.present();
    }

    pub fn score(&self) -> u32 {
        self.game.score()
    }

    pub fn speed(&self) -> f64 {
        self.game.speed()
    }

    pub fn is_game_over(&self) -> bool {
        self.game.is_game_over()
    }

    /// Cell edge length hint for pixel-based surfaces.
    pub fn square_size(&self) -> u16 {
        self.config.square_size
    }

    /// Read access to the underlying session state.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Host access to its own surface, e.g. to set up a terminal before
    /// `start`.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Hand the surface back, e.g. to restore a terminal on shutdown.
    pub fn into_surface(self) -> S {
        self.surface
    }
}
