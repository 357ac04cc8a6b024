use space_shooter::config::*;
use space_shooter::entities::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

// ── Rect ──────────────────────────────────────────────────────────────────────

#[test]
fn rect_derived_edges() {
    let r = Rect::new(375, 540, 50, 50);
    assert_eq!(r.left(), 375);
    assert_eq!(r.right(), 425);
    assert_eq!(r.top(), 540);
    assert_eq!(r.bottom(), 590);
    assert_eq!(r.center_x(), 400);
}

#[test]
fn rect_from_center_bottom_rounds_left_edge_down() {
    // Odd width: centre 400, width 5 → x = 400 - 2
    let r = Rect::from_center_bottom(400, 540, 5, 10);
    assert_eq!(r, Rect::new(398, 530, 5, 10));
}

#[test]
fn rect_overlap_detected() {
    let a = Rect::new(0, 0, 10, 10);
    let b = Rect::new(5, 5, 10, 10);
    assert!(a.intersects(&b));
    assert!(b.intersects(&a));
}

#[test]
fn rect_containment_is_overlap() {
    let outer = Rect::new(0, 0, 30, 30);
    let inner = Rect::new(10, 10, 5, 5);
    assert!(outer.intersects(&inner));
    assert!(inner.intersects(&outer));
}

#[test]
fn rect_touching_edges_do_not_overlap() {
    let a = Rect::new(0, 0, 10, 10);
    assert!(!a.intersects(&Rect::new(10, 0, 10, 10))); // shares right edge
    assert!(!a.intersects(&Rect::new(0, 10, 10, 10))); // shares bottom edge
}

#[test]
fn rect_overlap_needs_both_axes() {
    let a = Rect::new(0, 0, 10, 10);
    assert!(!a.intersects(&Rect::new(5, 50, 10, 10))); // x overlaps, y doesn't
    assert!(!a.intersects(&Rect::new(50, 5, 10, 10))); // y overlaps, x doesn't
}

// ── Player ────────────────────────────────────────────────────────────────────

#[test]
fn player_starts_bottom_centre() {
    let p = Player::new();
    assert_eq!(p.rect, Rect::new(375, 540, 50, 50));
    assert_eq!(p.speed, PLAYER_SPEED);
}

#[test]
fn player_shoot_spawns_bullet_at_nose() {
    let p = Player::new();
    let b = p.shoot();
    assert_eq!(b.rect.center_x(), p.rect.center_x());
    assert_eq!(b.rect.bottom(), p.rect.top());
    assert_eq!(b.rect.w, BULLET_WIDTH);
    assert_eq!(b.rect.h, BULLET_HEIGHT);
}

#[test]
fn player_moves_left_and_right() {
    let mut rng = seeded_rng();
    let mut p = Player::new();
    p.advance(Controls { left: true, right: false }, &mut rng);
    assert_eq!(p.rect.x, 370);
    p.advance(Controls { left: false, right: true }, &mut rng);
    p.advance(Controls { left: false, right: true }, &mut rng);
    assert_eq!(p.rect.x, 380);
}

#[test]
fn player_both_keys_cancel_out() {
    let mut rng = seeded_rng();
    let mut p = Player::new();
    p.advance(Controls { left: true, right: true }, &mut rng);
    assert_eq!(p.rect.x, 375);
}

#[test]
fn player_clamps_at_left_edge() {
    let mut rng = seeded_rng();
    let mut p = Player::new();
    p.rect.x = 3; // less than one step from the edge
    p.advance(Controls { left: true, right: false }, &mut rng);
    assert_eq!(p.rect.x, 0);
}

#[test]
fn player_clamps_at_right_edge() {
    let mut rng = seeded_rng();
    let mut p = Player::new();
    p.rect.x = SCREEN_WIDTH - PLAYER_WIDTH - 2;
    p.advance(Controls { left: false, right: true }, &mut rng);
    assert_eq!(p.rect.right(), SCREEN_WIDTH);
}

// ── Bullet ────────────────────────────────────────────────────────────────────

#[test]
fn bullet_moves_straight_up() {
    let mut rng = seeded_rng();
    let mut b = Bullet::new(100, 300);
    let x = b.rect.x;
    assert_eq!(b.advance(Controls::default(), &mut rng), Fate::Keep);
    assert_eq!(b.rect.y, 290 - BULLET_SPEED);
    assert_eq!(b.rect.x, x);
}

#[test]
fn bullet_expires_once_bottom_above_screen() {
    let mut rng = seeded_rng();
    // bottom at 10 → 0 after one step: still on the edge, kept
    let mut b = Bullet::new(100, 10);
    assert_eq!(b.advance(Controls::default(), &mut rng), Fate::Keep);
    assert_eq!(b.rect.bottom(), 0);
    // bottom at 0 → -10: gone
    assert_eq!(b.advance(Controls::default(), &mut rng), Fate::Remove);
}

// ── Enemy ─────────────────────────────────────────────────────────────────────

#[test]
fn enemy_spawn_ranges() {
    let mut rng = seeded_rng();
    for _ in 0..500 {
        let e = Enemy::spawn(&mut rng);
        assert!((0..SCREEN_WIDTH - ENEMY_WIDTH).contains(&e.rect.x));
        assert!(ENEMY_SPAWN_Y_RANGE.contains(&e.rect.y));
        assert!(ENEMY_SPEED_RANGE.contains(&e.speed));
        assert_eq!((e.rect.w, e.rect.h), (ENEMY_WIDTH, ENEMY_HEIGHT));
    }
}

#[test]
fn enemy_moves_down_by_its_speed() {
    let mut rng = seeded_rng();
    let mut e = Enemy { rect: Rect::new(100, 100, 30, 30), speed: 3 };
    assert_eq!(e.advance(Controls::default(), &mut rng), Fate::Keep);
    assert_eq!(e.rect, Rect::new(100, 103, 30, 30));
}

#[test]
fn enemy_ignores_controls() {
    let mut rng = seeded_rng();
    let mut e = Enemy { rect: Rect::new(100, 100, 30, 30), speed: 1 };
    e.advance(Controls { left: true, right: false }, &mut rng);
    assert_eq!(e.rect.x, 100);
}

#[test]
fn enemy_at_bottom_edge_is_not_wrapped_yet() {
    let mut rng = seeded_rng();
    let mut e = Enemy { rect: Rect::new(100, 599, 30, 30), speed: 1 };
    e.advance(Controls::default(), &mut rng);
    assert_eq!(e.rect.y, SCREEN_HEIGHT); // top == 600 is not past the edge
}

#[test]
fn enemy_wraps_to_top_keeping_speed() {
    let mut rng = seeded_rng();
    let mut e = Enemy { rect: Rect::new(100, 600, 30, 30), speed: 2 };
    assert_eq!(e.advance(Controls::default(), &mut rng), Fate::Keep);
    assert!(ENEMY_SPAWN_Y_RANGE.contains(&e.rect.y));
    assert!((0..SCREEN_WIDTH - ENEMY_WIDTH).contains(&e.rect.x));
    assert_eq!(e.speed, 2);
}

// ── World ─────────────────────────────────────────────────────────────────────

fn small_world() -> World {
    World {
        player: Player::new(),
        enemies: vec![
            Enemy { rect: Rect::new(0, 0, 30, 30), speed: 1 },
            Enemy { rect: Rect::new(100, 0, 30, 30), speed: 2 },
        ],
        bullets: vec![Bullet::new(400, 300)],
    }
}

#[test]
fn world_all_lists_every_entity_in_draw_order() {
    let w = small_world();
    let all: Vec<_> = w.all().collect();
    assert_eq!(all.len(), 4);
    assert!(matches!(all[0], EntityRef::Player(_)));
    assert!(matches!(all[1], EntityRef::Enemy(_)));
    assert!(matches!(all[2], EntityRef::Enemy(_)));
    assert!(matches!(all[3], EntityRef::Bullet(_)));
    assert_eq!(all[1].rect(), Rect::new(0, 0, 30, 30));
}

#[test]
fn world_advance_moves_everything() {
    let mut rng = seeded_rng();
    let mut w = small_world();
    w.advance(Controls { left: true, right: false }, &mut rng);
    assert_eq!(w.player.rect.x, 370);
    assert_eq!(w.enemies[0].rect.y, 1);
    assert_eq!(w.enemies[1].rect.y, 2);
    assert_eq!(w.bullets[0].rect.y, 290 - BULLET_SPEED);
}

#[test]
fn world_advance_drops_expired_bullets_only() {
    let mut rng = seeded_rng();
    let mut w = small_world();
    w.bullets.push(Bullet { rect: Rect::new(10, -9, 5, 10), speed: BULLET_SPEED });
    w.advance(Controls::default(), &mut rng);
    assert_eq!(w.bullets.len(), 1);
    assert_eq!(w.enemies.len(), 2);
}

// ── Session ───────────────────────────────────────────────────────────────────

#[test]
fn status_equality() {
    assert_eq!(GameStatus::Running, GameStatus::Running);
    assert_ne!(GameStatus::Running, GameStatus::GameOver(EndReason::Quit));
    assert_ne!(
        GameStatus::GameOver(EndReason::Quit),
        GameStatus::GameOver(EndReason::Collision)
    );
}

#[test]
fn game_session_clone_is_independent() {
    let original = GameSession {
        world: small_world(),
        score: 0,
        status: GameStatus::Running,
        frame: 0,
    };
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.world.player.rect.x = 99;
    cloned.score = 999;
    cloned.world.enemies.clear();

    assert_eq!(original.world.player.rect.x, 375);
    assert_eq!(original.score, 0);
    assert_eq!(original.world.enemies.len(), 2);
    assert!(original.is_running());
}
