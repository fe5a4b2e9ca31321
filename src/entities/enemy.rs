use super::bounds::Bounds;
use crate::constants::{
    ENEMY_ANIMATION_TICKS, ENEMY_HEIGHT, ENEMY_SPEED, ENEMY_STEP_DOWN, ENEMY_WIDTH,
    GRID_COLS, GRID_ORIGIN_X, GRID_ORIGIN_Y, GRID_PITCH_X, GRID_PITCH_Y, GRID_ROWS, SCREEN_WIDTH,
};

#[derive(Debug, Clone)]
pub struct Enemy {
    pub x: i32,
    pub y: i32,
    pub speed: i32,
    /// +1 while marching right, -1 while marching left
    pub direction: i32,
    /// Ticks into the current two-pose animation cycle
    pub animation_frame: u8,
}

impl Enemy {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            speed: ENEMY_SPEED,
            direction: 1,
            animation_frame: 0,
        }
    }

    pub fn update(&mut self) {
        self.x += self.speed * self.direction;
        self.animation_frame = (self.animation_frame + 1) % (ENEMY_ANIMATION_TICKS * 2);
    }

    /// Whether the enemy has reached the left or right edge of the screen
    pub fn at_edge(&self) -> bool {
        self.x <= 0 || self.x >= SCREEN_WIDTH - ENEMY_WIDTH
    }

    /// Reverses the march and drops one row
    pub fn step_down(&mut self) {
        self.direction = -self.direction;
        self.y += ENEMY_STEP_DOWN;
    }

    /// Second animation pose
    pub fn is_alternate_pose(&self) -> bool {
        self.animation_frame >= ENEMY_ANIMATION_TICKS
    }

    pub fn get_width(&self) -> i32 {
        ENEMY_WIDTH
    }

    pub fn get_height(&self) -> i32 {
        ENEMY_HEIGHT
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, ENEMY_WIDTH, ENEMY_HEIGHT)
    }
}

/// Lays out a fresh grid of enemies, row by row
pub fn create_enemy_grid() -> Vec<Enemy> {
    let mut enemies = Vec::with_capacity(GRID_ROWS * GRID_COLS);
    for row in 0..GRID_ROWS as i32 {
        for col in 0..GRID_COLS as i32 {
            let x = col * GRID_PITCH_X + GRID_ORIGIN_X;
            let y = row * GRID_PITCH_Y + GRID_ORIGIN_Y;
            enemies.push(Enemy::new(x, y));
        }
    }
    enemies
}
