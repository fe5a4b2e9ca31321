use super::bounds::Bounds;
use super::bullet::Bullet;
use crate::constants::{
    BULLET_WIDTH, PLAYER_BOTTOM_MARGIN, PLAYER_HEIGHT, PLAYER_SPEED, PLAYER_WIDTH, SCREEN_HEIGHT,
    SCREEN_WIDTH,
};

#[derive(Debug, Clone)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    pub speed: i32,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    /// Spawns the ship centred horizontally near the bottom edge
    pub fn new() -> Self {
        Self {
            x: SCREEN_WIDTH / 2 - PLAYER_WIDTH / 2,
            y: SCREEN_HEIGHT - PLAYER_HEIGHT - PLAYER_BOTTOM_MARGIN,
            speed: PLAYER_SPEED,
        }
    }

    pub fn move_left(&mut self) {
        self.x = (self.x - self.speed).max(0);
    }

    pub fn move_right(&mut self) {
        self.x = (self.x + self.speed).min(SCREEN_WIDTH - PLAYER_WIDTH);
    }

    pub fn get_width(&self) -> i32 {
        PLAYER_WIDTH
    }

    pub fn get_height(&self) -> i32 {
        PLAYER_HEIGHT
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, PLAYER_WIDTH, PLAYER_HEIGHT)
    }

    /// Creates a bullet leaving the nose of the ship
    pub fn fire(&self) -> Bullet {
        Bullet::new(self.x + PLAYER_WIDTH / 2 - BULLET_WIDTH / 2, self.y)
    }
}
