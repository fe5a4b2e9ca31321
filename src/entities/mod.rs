mod bounds;
mod bullet;
mod enemy;
mod game_state;
mod player;

// Re-export all public types
pub use bounds::Bounds;
pub use bullet::Bullet;
pub use enemy::{Enemy, create_enemy_grid};
pub use game_state::GameState;
pub use player::Player;
