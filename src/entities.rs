//! Game entity types and their per-frame movement rules.
//!
//! Entities never reach back into the world: collisions, scoring and
//! replacement spawns are resolved by `compute`, not here.

use rand::Rng;

use crate::config::{
    BULLET_HEIGHT, BULLET_SPEED, BULLET_WIDTH, ENEMY_HEIGHT, ENEMY_SPAWN_Y_RANGE,
    ENEMY_SPEED_RANGE, ENEMY_WIDTH, PLAYER_BOTTOM_MARGIN, PLAYER_HEIGHT, PLAYER_SPEED,
    PLAYER_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH,
};

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle in playfield units.  Used both for drawing and as
/// the hitbox.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle whose horizontal centre is `center_x` and whose bottom edge
    /// sits at `bottom`.  An odd width rounds the left edge down.
    pub fn from_center_bottom(center_x: i32, bottom: i32, w: i32, h: i32) -> Self {
        Self::new(center_x - w / 2, bottom - h, w, h)
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn center_x(&self) -> i32 {
        self.x + self.w / 2
    }

    /// Strict AABB overlap: touching edges do not count.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

// ── Entity capability ─────────────────────────────────────────────────────────

/// Directional controls sampled once per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Controls {
    pub left: bool,
    pub right: bool,
}

/// What the owning collection should do with an entity after it advanced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fate {
    Keep,
    Remove,
}

pub trait Entity {
    fn rect(&self) -> Rect;

    /// Apply one frame of movement.
    fn advance<R: Rng>(&mut self, controls: Controls, rng: &mut R) -> Fate;
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub rect: Rect,
    pub speed: i32,
}

impl Player {
    /// Centred horizontally, resting just above the bottom edge.
    pub fn new() -> Self {
        Self {
            rect: Rect::from_center_bottom(
                SCREEN_WIDTH / 2,
                SCREEN_HEIGHT - PLAYER_BOTTOM_MARGIN,
                PLAYER_WIDTH,
                PLAYER_HEIGHT,
            ),
            speed: PLAYER_SPEED,
        }
    }

    /// A bullet leaving the nose of the ship.
    pub fn shoot(&self) -> Bullet {
        Bullet::new(self.rect.center_x(), self.rect.top())
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for Player {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn advance<R: Rng>(&mut self, controls: Controls, _rng: &mut R) -> Fate {
        // Both keys held cancel out, as each is applied independently.
        if controls.left {
            self.rect.x = (self.rect.x - self.speed).max(0);
        }
        if controls.right {
            self.rect.x = (self.rect.x + self.speed).min(SCREEN_WIDTH - self.rect.w);
        }
        Fate::Keep
    }
}

// ── Bullet ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub rect: Rect,
    /// Pixels travelled upward per frame.
    pub speed: i32,
}

impl Bullet {
    pub fn new(center_x: i32, bottom: i32) -> Self {
        Self {
            rect: Rect::from_center_bottom(center_x, bottom, BULLET_WIDTH, BULLET_HEIGHT),
            speed: BULLET_SPEED,
        }
    }
}

impl Entity for Bullet {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn advance<R: Rng>(&mut self, _controls: Controls, _rng: &mut R) -> Fate {
        self.rect.y -= self.speed;
        if self.rect.bottom() < 0 {
            Fate::Remove
        } else {
            Fate::Keep
        }
    }
}

// ── Enemy ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub rect: Rect,
    /// Pixels travelled downward per frame, fixed at spawn.
    pub speed: i32,
}

impl Enemy {
    /// A fresh enemy above the top edge with a random column and speed.
    pub fn spawn<R: Rng>(rng: &mut R) -> Self {
        let mut rect = Rect::new(0, 0, ENEMY_WIDTH, ENEMY_HEIGHT);
        place_above_screen(&mut rect, rng);
        Self {
            rect,
            speed: rng.gen_range(ENEMY_SPEED_RANGE),
        }
    }
}

fn place_above_screen<R: Rng>(rect: &mut Rect, rng: &mut R) {
    rect.x = rng.gen_range(0..SCREEN_WIDTH - rect.w);
    rect.y = rng.gen_range(ENEMY_SPAWN_Y_RANGE);
}

impl Entity for Enemy {
    fn rect(&self) -> Rect {
        self.rect
    }

    /// Enemies never leave their collection by moving: once fully below the
    /// bottom edge they wrap back above the top, keeping their speed.
    fn advance<R: Rng>(&mut self, _controls: Controls, rng: &mut R) -> Fate {
        self.rect.y += self.speed;
        if self.rect.top() > SCREEN_HEIGHT {
            place_above_screen(&mut self.rect, rng);
        }
        Fate::Keep
    }
}

// ── World ─────────────────────────────────────────────────────────────────────

/// Borrowed view of any live entity, used to walk the whole world at once.
#[derive(Clone, Copy, Debug)]
pub enum EntityRef<'a> {
    Player(&'a Player),
    Enemy(&'a Enemy),
    Bullet(&'a Bullet),
}

impl EntityRef<'_> {
    pub fn rect(&self) -> Rect {
        match self {
            EntityRef::Player(p) => p.rect(),
            EntityRef::Enemy(e) => e.rect(),
            EntityRef::Bullet(b) => b.rect(),
        }
    }
}

/// Every live entity, partitioned by role.
#[derive(Clone, Debug)]
pub struct World {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub bullets: Vec<Bullet>,
}

impl World {
    /// All entities in draw order: player, enemies, bullets.
    pub fn all(&self) -> impl Iterator<Item = EntityRef<'_>> {
        std::iter::once(EntityRef::Player(&self.player))
            .chain(self.enemies.iter().map(EntityRef::Enemy))
            .chain(self.bullets.iter().map(EntityRef::Bullet))
    }

    /// Advance every entity by one frame, dropping those that expire.
    pub fn advance<R: Rng>(&mut self, controls: Controls, rng: &mut R) {
        self.player.advance(controls, rng);
        self.enemies
            .retain_mut(|e| e.advance(controls, rng) == Fate::Keep);
        self.bullets
            .retain_mut(|b| b.advance(controls, rng) == Fate::Keep);
    }
}

// ── Session ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub enum EndReason {
    Quit,
    Collision,
}

#[derive(Clone, Debug, PartialEq)]
pub enum GameStatus {
    Running,
    GameOver(EndReason),
}

/// One game session, from start to game over.  Cloneable so pure update
/// functions can return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameSession {
    pub world: World,
    /// Enemies destroyed this session.
    pub score: u32,
    pub status: GameStatus,
    pub frame: u64,
}

impl GameSession {
    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }
}
