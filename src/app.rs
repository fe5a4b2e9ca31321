use color_eyre::Result;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::time::{Duration, Instant};

use crate::constants::TICKS_PER_SECOND;
use crate::game::Game;
use crate::input::{InputAction, InputManager};
use crate::renderer::{GameRenderer, RenderView};

/// The main application which holds the state and logic of the application.
pub struct App {
    running: bool,
    game: Game,
    /// internal components
    input_manager: InputManager,
    renderer: GameRenderer,
}

impl App {
    /// `release_events` tells the input layer whether the terminal reports key releases
    pub fn new(release_events: bool) -> Self {
        Self {
            running: true,
            game: Game::new(),
            input_manager: InputManager::new(release_events),
            renderer: GameRenderer::new(),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
        let frame_time = Duration::from_micros(1_000_000 / TICKS_PER_SECOND);

        while self.running {
            let frame_start = Instant::now();

            // Poll input events and get actions
            self.input_manager.poll_events()?;
            let actions = self.input_manager.get_actions(self.game.state());
            self.process_actions(&actions);
            if !self.running {
                break;
            }

            self.game.update();

            terminal.draw(|frame| {
                let view = RenderView::new(&self.game, frame.area());
                self.renderer.render(frame, &view);
            })?;

            // Sleep off the rest of the frame to hold a steady tick rate
            std::thread::sleep(frame_time.saturating_sub(frame_start.elapsed()));
        }

        log::info!("quitting with high score {}", self.game.high_score());
        Ok(())
    }

    /// Process input actions and update game state accordingly
    fn process_actions(&mut self, actions: &[InputAction]) {
        for action in actions {
            match action {
                InputAction::Quit => {
                    self.running = false;
                    return;
                }
                InputAction::MoveLeft => self.game.move_left(),
                InputAction::MoveRight => self.game.move_right(),
                InputAction::Fire => self.game.press_fire(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::GameState;

    #[test]
    fn test_fire_action_drives_state_machine() {
        let mut app = App::new(true);
        app.process_actions(&[InputAction::Fire]);
        assert_eq!(app.game.state(), GameState::Playing);
        assert!(app.game.bullets.is_empty());

        app.process_actions(&[InputAction::Fire]);
        assert_eq!(app.game.bullets.len(), 1);
    }

    #[test]
    fn test_quit_stops_processing() {
        let mut app = App::new(true);
        app.process_actions(&[InputAction::Quit, InputAction::Fire]);
        assert!(!app.running);
        assert_eq!(app.game.state(), GameState::Menu);
    }

    #[test]
    fn test_move_actions_steer_player() {
        let mut app = App::new(true);
        app.process_actions(&[InputAction::Fire, InputAction::MoveRight]);
        assert_eq!(app.game.player.x, 380);
        app.process_actions(&[InputAction::MoveLeft, InputAction::MoveLeft]);
        assert_eq!(app.game.player.x, 370);
    }
}
