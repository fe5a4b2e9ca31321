//! Gameplay tuning, expressed in world units (an 800x600 playfield, y grows downward).

pub const SCREEN_WIDTH: i32 = 800;
pub const SCREEN_HEIGHT: i32 = 600;
pub const WINDOW_TITLE: &str = "Space Invaders";

/// Target tick rate of the game loop
pub const TICKS_PER_SECOND: u64 = 60;

// Player ship
pub const PLAYER_WIDTH: i32 = 50;
pub const PLAYER_HEIGHT: i32 = 40;
pub const PLAYER_SPEED: i32 = 5;
/// Gap between the bottom of the ship and the bottom edge
pub const PLAYER_BOTTOM_MARGIN: i32 = 20;

// Bullets
pub const BULLET_WIDTH: i32 = 4;
pub const BULLET_HEIGHT: i32 = 15;
pub const BULLET_SPEED: i32 = 7;

// Enemies
pub const ENEMY_WIDTH: i32 = 40;
pub const ENEMY_HEIGHT: i32 = 40;
pub const ENEMY_SPEED: i32 = 2;
/// How far the whole grid drops when it bounces off an edge
pub const ENEMY_STEP_DOWN: i32 = 20;
/// Ticks spent in each of the two animation poses
pub const ENEMY_ANIMATION_TICKS: u8 = 10;

// Enemy grid layout
pub const GRID_ROWS: usize = 5;
pub const GRID_COLS: usize = 8;
pub const GRID_ORIGIN_X: i32 = 50;
pub const GRID_ORIGIN_Y: i32 = 80;
/// Horizontal distance between neighbouring enemies in the grid
pub const GRID_PITCH_X: i32 = 70;
/// Vertical distance between grid rows
pub const GRID_PITCH_Y: i32 = 60;

/// Enemies at or below this y end the game
pub const BREACH_THRESHOLD_Y: i32 = SCREEN_HEIGHT - 100;

/// Points awarded per destroyed enemy
pub const SCORE_PER_ENEMY: u32 = 10;

/// Number of stars drawn behind the playfield each frame
pub const STAR_COUNT: usize = 50;
