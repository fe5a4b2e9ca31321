//! Integration tests for game logic
//!
//! These tests drive the public `Game` API tick by tick and check movement,
//! collision, scoring and the Menu -> Playing -> GameOver cycle.
use proptest::prelude::*;
use space_invaders::constants::{
    BREACH_THRESHOLD_Y, ENEMY_STEP_DOWN, GRID_COLS, GRID_ROWS, SCORE_PER_ENEMY,
};
use space_invaders::{Bullet, Enemy, Game, GameState};

fn playing_game() -> Game {
    let mut game = Game::new();
    game.press_fire();
    assert_eq!(game.state(), GameState::Playing);
    game
}

/// Shoots down the first enemy of the grid with a bullet placed right on it
fn score_one_hit(game: &mut Game) {
    let target = game.enemies[0].clone();
    let dx = target.speed * target.direction;
    game.bullets.push(Bullet::new(target.x + dx + 10, target.y + 17));
    game.update();
}

#[test]
fn test_menu_fire_starts_without_spawning() {
    let mut game = Game::new();
    assert!(!game.state().is_started());

    game.press_fire();

    assert!(game.state().is_started());
    assert!(!game.state().is_game_over());
    assert!(game.bullets.is_empty());
}

#[test]
fn test_bullet_flies_off_screen_and_is_removed() {
    let mut game = playing_game();
    // Nothing in the way
    game.enemies = vec![Enemy::new(700, 100)];
    game.player.x = 0;
    game.press_fire();
    assert_eq!(game.bullets.len(), 1);

    let mut last_y = game.bullets[0].y;
    let mut ticks = 0;
    while !game.bullets.is_empty() {
        game.update();
        if let Some(bullet) = game.bullets.first() {
            assert!(bullet.y < last_y);
            assert!(bullet.y >= 0);
            last_y = bullet.y;
        }
        ticks += 1;
        assert!(ticks < 200, "bullet never left the screen");
    }

    // 540 / 7 rounds up to 78 ticks before y drops below zero
    assert_eq!(ticks, 78);
    assert_eq!(game.score(), 0);
}

#[test]
fn test_grid_bounces_off_right_edge() {
    let mut game = playing_game();
    let start_y: Vec<i32> = game.enemies.iter().map(|e| e.y).collect();

    // The rightmost column starts at x=540 and reaches 760 after 110 ticks
    for _ in 0..109 {
        game.update();
    }
    assert!(game.enemies.iter().all(|e| e.direction == 1));
    assert_eq!(game.enemies.iter().map(|e| e.y).collect::<Vec<_>>(), start_y);

    game.update();

    assert!(game.enemies.iter().all(|e| e.direction == -1));
    for (enemy, y) in game.enemies.iter().zip(&start_y) {
        assert_eq!(enemy.y, y + ENEMY_STEP_DOWN);
    }
}

#[test]
fn test_hit_scores_and_updates_high_score() {
    let mut game = playing_game();
    score_one_hit(&mut game);

    assert_eq!(game.score(), SCORE_PER_ENEMY);
    assert_eq!(game.high_score(), SCORE_PER_ENEMY);
    assert_eq!(game.enemies.len(), GRID_ROWS * GRID_COLS - 1);
    assert!(game.bullets.is_empty());
}

#[test]
fn test_breach_then_restart() {
    let mut game = playing_game();
    score_one_hit(&mut game);
    score_one_hit(&mut game);
    assert_eq!(game.score(), 2 * SCORE_PER_ENEMY);

    game.enemies = vec![Enemy::new(2, BREACH_THRESHOLD_Y - ENEMY_STEP_DOWN)];
    game.enemies[0].direction = -1;
    game.update();
    assert!(game.state().is_game_over());

    // Frozen until restart
    game.press_fire();
    assert_eq!(game.state(), GameState::Playing);
    assert_eq!(game.score(), 0);
    assert_eq!(game.high_score(), 2 * SCORE_PER_ENEMY);
    assert_eq!(game.enemies.len(), GRID_ROWS * GRID_COLS);
    assert_eq!(game.wave(), 1);
}

#[test]
fn test_untouched_grid_eventually_breaches() {
    let mut game = playing_game();
    let mut ticks = 0;
    while !game.state().is_game_over() {
        game.update();
        ticks += 1;
        assert!(ticks < 10_000, "grid never reached the defence line");
    }

    assert!(game.enemies.iter().any(|e| e.y >= BREACH_THRESHOLD_Y));
    assert_eq!(game.score(), 0);
}

#[test]
fn test_game_over_freezes_movement() {
    let mut game = playing_game();
    game.enemies = vec![Enemy::new(758, 480)];
    game.update();
    assert!(game.state().is_game_over());

    let player_x = game.player.x;
    game.move_right();
    game.update();
    assert_eq!(game.player.x, player_x);
    assert_eq!(game.enemies[0].x, 760);
}

proptest! {
    #[test]
    fn test_high_score_never_decreases(
        plan in prop::collection::vec(0u8..4, 1..60)
    ) {
        let mut game = playing_game();
        let mut high = game.high_score();

        for step in plan {
            match step {
                0 => score_one_hit(&mut game),
                1 => game.update(),
                2 => game.restart(),
                _ => game.press_fire(),
            }
            prop_assert!(game.high_score() >= high);
            prop_assert!(game.high_score() >= game.score());
            high = game.high_score();
        }
    }

    #[test]
    fn test_fire_while_playing_adds_exactly_one_bullet(presses in 1usize..20) {
        let mut game = playing_game();
        for n in 1..=presses {
            game.press_fire();
            prop_assert_eq!(game.bullets.len(), n);
        }
    }

    #[test]
    fn test_score_moves_in_fixed_increments(hits in 1usize..10) {
        let mut game = playing_game();
        for _ in 0..hits {
            let before = game.score();
            score_one_hit(&mut game);
            prop_assert_eq!(game.score(), before + SCORE_PER_ENEMY);
        }
        prop_assert_eq!(game.enemies.len(), GRID_ROWS * GRID_COLS - hits);
    }
}
