//! Hardcoded tuning.  Positions and sizes are in logical playfield units
//! (800×600); the display layer scales them onto terminal cells.

use std::ops::Range;
use std::time::Duration;

// ── Playfield ─────────────────────────────────────────────────────────────────

pub const SCREEN_WIDTH: i32 = 800;
pub const SCREEN_HEIGHT: i32 = 600;

pub const FPS: u32 = 60;
pub const FRAME: Duration = Duration::from_micros(1_000_000 / FPS as u64); // ≈60 FPS

// ── Player ────────────────────────────────────────────────────────────────────

pub const PLAYER_WIDTH: i32 = 50;
pub const PLAYER_HEIGHT: i32 = 50;
pub const PLAYER_SPEED: i32 = 5;
/// Gap between the player's bottom edge and the bottom of the playfield.
pub const PLAYER_BOTTOM_MARGIN: i32 = 10;

// ── Bullets ───────────────────────────────────────────────────────────────────

pub const BULLET_WIDTH: i32 = 5;
pub const BULLET_HEIGHT: i32 = 10;
/// Pixels travelled upward per frame.
pub const BULLET_SPEED: i32 = 10;

// ── Enemies ───────────────────────────────────────────────────────────────────

pub const ENEMY_COUNT: usize = 8;
pub const ENEMY_WIDTH: i32 = 30;
pub const ENEMY_HEIGHT: i32 = 30;
pub const ENEMY_SPEED_RANGE: Range<i32> = 1..4;
pub const ENEMY_SPAWN_Y_RANGE: Range<i32> = -100..-40;

// ── Input ─────────────────────────────────────────────────────────────────────

/// A direction key is considered "held" if its last press/repeat event
/// arrived within this many frames.  8 frames @ 60 FPS ≈ 133 ms, which is
/// shorter than any OS key-repeat interval once repeating has started.
pub const HOLD_WINDOW: u64 = 8;

// ── Terminal ──────────────────────────────────────────────────────────────────

pub const MIN_TERMINAL_COLS: u16 = 40;
pub const MIN_TERMINAL_ROWS: u16 = 12;

pub const TITLE: &str = "Space Shooter";
