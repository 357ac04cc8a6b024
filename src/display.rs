//! Rendering layer: all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! game session.  No game logic is performed; this module only translates
//! state into terminal commands, scaling the 800×600 playfield onto
//! whatever cell grid the terminal offers.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::entities::{EntityRef, GameSession, Rect};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BACKGROUND: Color = Color::Black;
const C_PLAYER: Color = Color::Blue;
const C_ENEMY: Color = Color::Red;
const C_BULLET: Color = Color::White;
const C_SCORE: Color = Color::White;

const BLOCK: char = '█';

/// Logical position of the score overlay.
const SCORE_X: i32 = 10;
const SCORE_Y: i32 = 10;

// ── Coordinate mapping ────────────────────────────────────────────────────────

/// Terminal size in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
}

/// Half-open cell range `[col, col + width) × [row, row + height)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellRect {
    pub col: u16,
    pub row: u16,
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self { cols, rows }
    }

    /// Cells covered by a logical rectangle.  Edges are widened outward
    /// (floor on the leading edge, ceil on the trailing one) so anything
    /// visible gets at least one cell.  `None` when fully off-screen.
    pub fn to_cells(&self, rect: &Rect) -> Option<CellRect> {
        let (col, width) = scale_span(rect.left(), rect.right(), SCREEN_WIDTH, self.cols)?;
        let (row, height) = scale_span(rect.top(), rect.bottom(), SCREEN_HEIGHT, self.rows)?;
        Some(CellRect { col, row, width, height })
    }

    /// Cell holding a logical point, clamped onto the grid.
    pub fn to_cell(&self, x: i32, y: i32) -> (u16, u16) {
        (
            scale_point(x, SCREEN_WIDTH, self.cols),
            scale_point(y, SCREEN_HEIGHT, self.rows),
        )
    }
}

/// Map logical `[start, end)` on an axis of length `extent` onto `cells`.
fn scale_span(start: i32, end: i32, extent: i32, cells: u16) -> Option<(u16, u16)> {
    let start = i64::from(start.max(0));
    let end = i64::from(end.min(extent));
    if start >= end || cells == 0 {
        return None;
    }
    let cells = i64::from(cells);
    let extent = i64::from(extent);
    let first = start * cells / extent;
    let last = ((end * cells + extent - 1) / extent).clamp(first + 1, cells);
    Some((first as u16, (last - first) as u16))
}

fn scale_point(v: i32, extent: i32, cells: u16) -> u16 {
    let v = i64::from(v.clamp(0, extent));
    let cell = v * i64::from(cells) / i64::from(extent);
    cell.min(i64::from(cells.saturating_sub(1))) as u16
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    state: &GameSession,
    viewport: Viewport,
) -> std::io::Result<()> {
    out.queue(style::SetBackgroundColor(C_BACKGROUND))?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    for entity in state.world.all() {
        draw_entity(out, &entity, viewport)?;
    }

    draw_score(out, state.score, viewport)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, viewport.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn colour_of(entity: &EntityRef<'_>) -> Color {
    match entity {
        EntityRef::Player(_) => C_PLAYER,
        EntityRef::Enemy(_) => C_ENEMY,
        EntityRef::Bullet(_) => C_BULLET,
    }
}

fn draw_entity<W: Write>(
    out: &mut W,
    entity: &EntityRef<'_>,
    viewport: Viewport,
) -> std::io::Result<()> {
    let Some(cells) = viewport.to_cells(&entity.rect()) else {
        return Ok(());
    };

    let line: String = std::iter::repeat(BLOCK).take(cells.width as usize).collect();
    out.queue(style::SetForegroundColor(colour_of(entity)))?;
    for row in cells.row..cells.row + cells.height {
        out.queue(cursor::MoveTo(cells.col, row))?;
        out.queue(Print(&line))?;
    }
    Ok(())
}

// ── HUD ───────────────────────────────────────────────────────────────────────

fn draw_score<W: Write>(out: &mut W, score: u32, viewport: Viewport) -> std::io::Result<()> {
    let (col, row) = viewport.to_cell(SCORE_X, SCORE_Y);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(C_SCORE))?;
    out.queue(Print(format!("Score: {}", score)))?;
    Ok(())
}
