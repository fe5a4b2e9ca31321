#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// Title screen, nothing moves until the player starts
    #[default]
    Menu,
    Playing,
    GameOver,
}

impl GameState {
    pub fn is_started(&self) -> bool {
        *self != GameState::Menu
    }

    pub fn is_game_over(&self) -> bool {
        *self == GameState::GameOver
    }
}
