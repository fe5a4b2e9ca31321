// Library exports for testing
pub use entities::{Bounds, Bullet, Enemy, GameState, Player, create_enemy_grid};
pub use game::Game;

pub mod app;
pub mod constants;
pub mod entities;
pub mod game;
pub mod input;
pub mod logging;
pub mod renderer;
