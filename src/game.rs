use crate::constants::{BREACH_THRESHOLD_Y, SCORE_PER_ENEMY};
use crate::entities::{Bullet, Enemy, GameState, Player, create_enemy_grid};

/// Game rules: owns every entity and drives the Menu -> Playing -> GameOver cycle.
///
/// Nothing here touches the terminal, so the whole rule set can be stepped tick
/// by tick from tests.
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    score: u32,
    /// Best score of this session, survives restarts
    high_score: u32,
    /// Grids spawned since the last restart, starting at 1
    wave: u32,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self {
            state: GameState::Menu,
            player: Player::new(),
            bullets: Vec::new(),
            enemies: create_enemy_grid(),
            score: 0,
            high_score: 0,
            wave: 1,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn wave(&self) -> u32 {
        self.wave
    }

    /// Handles the fire key, which also starts and restarts the game
    pub fn press_fire(&mut self) {
        match self.state {
            GameState::Menu => {
                self.state = GameState::Playing;
                log::info!("game started");
            }
            GameState::Playing => {
                self.bullets.push(self.player.fire());
            }
            GameState::GameOver => self.restart(),
        }
    }

    /// Rebuilds every entity and resets the score, keeping the high score
    pub fn restart(&mut self) {
        self.player = Player::new();
        self.bullets.clear();
        self.enemies = create_enemy_grid();
        self.score = 0;
        self.wave = 1;
        self.state = GameState::Playing;
        log::info!("game restarted (high score {})", self.high_score);
    }

    pub fn move_left(&mut self) {
        if self.state == GameState::Playing {
            self.player.move_left();
        }
    }

    pub fn move_right(&mut self) {
        if self.state == GameState::Playing {
            self.player.move_right();
        }
    }

    /// Advances the world by one tick. Does nothing outside of Playing.
    pub fn update(&mut self) {
        if self.state != GameState::Playing {
            return;
        }

        for bullet in &mut self.bullets {
            bullet.update();
        }
        self.bullets.retain(|b| b.active);

        let mut reached_edge = false;
        for enemy in &mut self.enemies {
            enemy.update();
            reached_edge |= enemy.at_edge();
        }

        if reached_edge {
            for enemy in &mut self.enemies {
                enemy.step_down();
            }

            if self.enemies.iter().any(|e| e.y >= BREACH_THRESHOLD_Y) {
                self.state = GameState::GameOver;
                log::info!(
                    "enemies breached the defence line, final score {}",
                    self.score
                );
                return;
            }
        }

        self.handle_collisions();

        if self.enemies.is_empty() {
            self.wave += 1;
            self.enemies = create_enemy_grid();
            log::info!("wave {} incoming", self.wave);
        }
    }

    fn handle_collisions(&mut self) {
        let mut bullets_to_remove = Vec::new();
        let mut enemies_to_remove: Vec<usize> = Vec::new();

        // A bullet takes out at most one enemy, and an enemy dies only once
        for (b_idx, bullet) in self.bullets.iter().enumerate() {
            let bullet_bounds = bullet.bounds();
            let target = self
                .enemies
                .iter()
                .enumerate()
                .find(|&(e_idx, enemy)| {
                    !enemies_to_remove.contains(&e_idx)
                        && enemy.bounds().intersects(&bullet_bounds)
                })
                .map(|(e_idx, _)| e_idx);

            if let Some(e_idx) = target {
                bullets_to_remove.push(b_idx);
                enemies_to_remove.push(e_idx);
            }
        }

        if enemies_to_remove.is_empty() {
            return;
        }

        // Remove in reverse order to avoid index issues
        bullets_to_remove.reverse();
        for idx in bullets_to_remove {
            self.bullets.remove(idx);
        }

        enemies_to_remove.sort_unstable();
        enemies_to_remove.reverse();
        for &idx in &enemies_to_remove {
            self.enemies.remove(idx);
        }

        for _ in 0..enemies_to_remove.len() {
            self.award(SCORE_PER_ENEMY);
        }
    }

    fn award(&mut self, points: u32) {
        self.score += points;
        if self.score > self.high_score {
            self.high_score = self.score;
            log::debug!("new high score {}", self.high_score);
        }
    }
}
