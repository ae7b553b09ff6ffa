//! TermSurface: a crossterm-backed cell surface.
//!
//! Implements the engine's render contract on a raw-mode alternate screen.
//! Each board cell maps to a 2x1 run of terminal cells to compensate for the
//! typical glyph aspect ratio. Draw calls are queued; one flush per frame.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor},
    terminal, QueueableCommand,
};

use crate::engine::CellSurface;
use crate::types::Rgb;

/// Board cell footprint in terminal cells.
const CELL_W: u16 = 2;
const CELL_H: u16 = 1;

/// Top-left of the playfield on screen, leaving room for the frame.
const ORIGIN_X: u16 = 2;
const ORIGIN_Y: u16 = 1;

pub struct TermSurface {
    stdout: io::Stdout,
    columns: u16,
    rows: u16,
}

impl TermSurface {
    pub fn new(columns: u16, rows: u16) -> Self {
        Self {
            stdout: io::stdout(),
            columns,
            rows,
        }
    }

    /// Enter raw mode on the alternate screen and draw the static frame.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;
        self.draw_frame()?;
        self.stdout.flush()?;
        Ok(())
    }

    /// Restore the terminal. Safe to call even if `enter` failed partway.
    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    fn draw_frame(&mut self) -> Result<()> {
        let inner_w = self.columns * CELL_W;
        let inner_h = self.rows * CELL_H;
        let left = ORIGIN_X - 1;
        let top = ORIGIN_Y - 1;
        let right = ORIGIN_X + inner_w;
        let bottom = ORIGIN_Y + inner_h;

        self.stdout.queue(ResetColor)?;
        self.stdout.queue(cursor::MoveTo(left, top))?;
        self.stdout.queue(Print('┌'))?;
        for _ in 0..inner_w {
            self.stdout.queue(Print('─'))?;
        }
        self.stdout.queue(Print('┐'))?;

        for y in (top + 1)..bottom {
            self.stdout.queue(cursor::MoveTo(left, y))?;
            self.stdout.queue(Print('│'))?;
            self.stdout.queue(cursor::MoveTo(right, y))?;
            self.stdout.queue(Print('│'))?;
        }

        self.stdout.queue(cursor::MoveTo(left, bottom))?;
        self.stdout.queue(Print('└'))?;
        for _ in 0..inner_w {
            self.stdout.queue(Print('─'))?;
        }
        self.stdout.queue(Print('┘'))?;
        Ok(())
    }

    fn queue_cell(&mut self, col: i32, row: i32, color: Rgb) -> io::Result<()> {
        let x = ORIGIN_X + col as u16 * CELL_W;
        let y = ORIGIN_Y + row as u16 * CELL_H;
        self.stdout.queue(cursor::MoveTo(x, y))?;
        self.stdout.queue(SetBackgroundColor(Color::Rgb {
            r: color.r,
            g: color.g,
            b: color.b,
        }))?;
        for _ in 0..CELL_W {
            self.stdout.queue(Print(' '))?;
        }
        Ok(())
    }
}

impl CellSurface for TermSurface {
    fn draw_cell(&mut self, col: i32, row: i32, color: Rgb) {
        // Cells above the board have no screen position.
        if row < 0 || row >= i32::from(self.rows) || col < 0 || col >= i32::from(self.columns) {
            return;
        }
        // Queued writes only fail on a broken stdout; the flush in
        // `present` is where errors would surface.
        let _ = self.queue_cell(col, row, color);
    }

    fn present(&mut self) {
        let _ = self.stdout.queue(ResetColor);
        let _ = self.stdout.flush();
    }
}
