use super::bounds::Bounds;
use crate::constants::{BULLET_HEIGHT, BULLET_SPEED, BULLET_WIDTH};

#[derive(Debug, Clone)]
pub struct Bullet {
    pub x: i32,
    pub y: i32,
    pub speed: i32,
    /// Cleared once the bullet has left the top of the screen
    pub active: bool,
}

impl Bullet {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            speed: BULLET_SPEED,
            active: true,
        }
    }

    pub fn update(&mut self) {
        self.y -= self.speed;
        if self.y < 0 {
            self.active = false;
        }
    }

    pub fn get_width(&self) -> i32 {
        BULLET_WIDTH
    }

    pub fn get_height(&self) -> i32 {
        BULLET_HEIGHT
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, BULLET_WIDTH, BULLET_HEIGHT)
    }
}
