//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `GameSession` (and, where needed, an RNG handle) and returns a brand-new
//! `GameSession`.  Side effects are limited to the injected RNG and logging.

use rand::Rng;
use tracing::{debug, info};

use crate::config::ENEMY_COUNT;
use crate::entities::{
    Controls, EndReason, Enemy, Entity, GameSession, GameStatus, Player, World,
};

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build a fresh session: player at the bottom centre, a full enemy wave
/// above the screen, score zero.
pub fn init_session<R: Rng>(rng: &mut R) -> GameSession {
    let enemies = (0..ENEMY_COUNT).map(|_| Enemy::spawn(rng)).collect();
    GameSession {
        world: World {
            player: Player::new(),
            enemies,
            bullets: Vec::new(),
        },
        score: 0,
        status: GameStatus::Running,
        frame: 0,
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// Fire one bullet from the player's nose.  No cooldown and no cap: every
/// call adds a bullet.
pub fn player_shoot(state: &GameSession) -> GameSession {
    let mut next = state.clone();
    next.world.bullets.push(state.world.player.shoot());
    next
}

// ── Collision queries ────────────────────────────────────────────────────────

/// Every `(enemy index, bullet index)` pair that collides this frame.  An
/// enemy or bullet appears in at most one pair; earlier bullets win.
pub fn find_bullet_hits(world: &World) -> Vec<(usize, usize)> {
    let mut used_bullets = vec![false; world.bullets.len()];
    let mut hits = Vec::new();

    for (ei, enemy) in world.enemies.iter().enumerate() {
        let enemy_rect = enemy.rect();
        let hit = world
            .bullets
            .iter()
            .enumerate()
            .find(|(bi, bullet)| !used_bullets[*bi] && bullet.rect().intersects(&enemy_rect));
        if let Some((bi, _)) = hit {
            used_bullets[bi] = true;
            hits.push((ei, bi));
        }
    }
    hits
}

/// True if any enemy overlaps the player.
pub fn player_hit(world: &World) -> bool {
    let player = world.player.rect();
    world.enemies.iter().any(|e| e.rect().intersects(&player))
}

// ── Per-frame tick (RNG is injected) ────────────────────────────────────────

/// Advance the simulation by one frame.  All randomness comes through `rng`
/// so callers control determinism (useful for tests with a seeded RNG).
///
/// Order: move everything, resolve bullet↔enemy hits (each hit removes both,
/// scores one point and spawns a replacement enemy), then check the player
/// against the surviving enemies.
pub fn tick<R: Rng>(state: &GameSession, controls: Controls, rng: &mut R) -> GameSession {
    if !state.is_running() {
        return state.clone();
    }

    let mut next = state.clone();
    next.frame += 1;

    // ── 1. Move everything ───────────────────────────────────────────────────
    next.world.advance(controls, rng);

    // ── 2. Collision: bullets ↔ enemies ──────────────────────────────────────
    let hits = find_bullet_hits(&next.world);
    if !hits.is_empty() {
        let mut dead_enemies = vec![false; next.world.enemies.len()];
        let mut dead_bullets = vec![false; next.world.bullets.len()];
        for &(ei, bi) in &hits {
            dead_enemies[ei] = true;
            dead_bullets[bi] = true;
        }

        let mut enemy_flags = dead_enemies.iter();
        next.world
            .enemies
            .retain(|_| !enemy_flags.next().copied().unwrap_or(false));
        let mut bullet_flags = dead_bullets.iter();
        next.world
            .bullets
            .retain(|_| !bullet_flags.next().copied().unwrap_or(false));

        for _ in &hits {
            next.world.enemies.push(Enemy::spawn(rng));
        }
        next.score += hits.len() as u32;
        debug!(frame = next.frame, hits = hits.len(), score = next.score, "enemies destroyed");
    }

    // ── 3. Collision: player ↔ enemies ───────────────────────────────────────
    if player_hit(&next.world) {
        info!(frame = next.frame, score = next.score, "player collided with an enemy");
        next.status = GameStatus::GameOver(EndReason::Collision);
    }

    next
}
