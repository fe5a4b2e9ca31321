use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use crate::entities::GameState;

/// How long a press keeps the ship moving when the terminal never reports key
/// releases. Auto-repeat presses refresh it while the key stays down.
const REPEAT_HOLD_TICKS: u8 = 10;

/// Represents semantic game actions that can be triggered by input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    MoveLeft,
    MoveRight,
    /// Space bar: starts, fires or restarts depending on the game state
    Fire,
    Quit,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum Hold {
    #[default]
    Released,
    UntilRelease,
    Ticks(u8),
}

impl Hold {
    fn is_held(&self) -> bool {
        *self != Hold::Released
    }

    fn age(&mut self) {
        if let Hold::Ticks(ticks) = *self {
            *self = if ticks > 1 {
                Hold::Ticks(ticks - 1)
            } else {
                Hold::Released
            };
        }
    }
}

/// Tracks the state of keys that can be held down for continuous input
#[derive(Debug, Default)]
struct KeyState {
    left: Hold,
    right: Hold,
}

/// Manages input polling and translates raw key events into game actions
pub struct InputManager {
    key_state: KeyState,
    oneshot_actions: Vec<InputAction>,
    /// Whether the terminal reports key releases (kitty keyboard protocol)
    release_events: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new(false)
    }
}

impl InputManager {
    pub fn new(release_events: bool) -> Self {
        Self {
            key_state: KeyState::default(),
            oneshot_actions: Vec::new(),
            release_events,
        }
    }

    /// Polls for all input events and stores one-shot actions
    /// Should be called once per frame before getting actions
    pub fn poll_events(&mut self) -> color_eyre::Result<()> {
        self.begin_frame();

        // Poll for all available events without blocking
        while event::poll(Duration::from_millis(0))? {
            if let Event::Key(key_event) = event::read()? {
                self.handle_key_event(key_event);
            }
        }

        Ok(())
    }

    /// Drops last frame's one-shot actions and ages timed holds
    pub fn begin_frame(&mut self) {
        self.oneshot_actions.clear();
        self.key_state.left.age();
        self.key_state.right.age();
    }

    /// Processes a key event and updates key state and one-shot actions
    pub fn handle_key_event(&mut self, key_event: KeyEvent) {
        match key_event.kind {
            KeyEventKind::Press => self.handle_key_press(key_event, false),
            KeyEventKind::Repeat => self.handle_key_press(key_event, true),
            KeyEventKind::Release => self.handle_key_release(key_event.code),
        }
    }

    fn handle_key_press(&mut self, key_event: KeyEvent, repeat: bool) {
        if matches!(
            key_event.code,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
        ) || (key_event.code == KeyCode::Char('c')
            && key_event.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.oneshot_actions.push(InputAction::Quit);
            return;
        }

        let hold = if self.release_events {
            Hold::UntilRelease
        } else {
            Hold::Ticks(REPEAT_HOLD_TICKS)
        };

        match key_event.code {
            KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                self.key_state.left = hold;
                self.key_state.right = Hold::Released;
            }
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                self.key_state.right = hold;
                self.key_state.left = Hold::Released;
            }
            // One bullet per key-down, holding the key does not autofire
            KeyCode::Char(' ') if !repeat => {
                self.oneshot_actions.push(InputAction::Fire);
            }
            _ => {}
        }
    }

    fn handle_key_release(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                self.key_state.left = Hold::Released;
            }
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                self.key_state.right = Hold::Released;
            }
            _ => {}
        }
    }

    /// Returns all actions for this frame (both continuous and one-shot)
    /// Must be called after poll_events()
    pub fn get_actions(&self, game_state: GameState) -> Vec<InputAction> {
        let mut actions = Vec::new();

        // Add one-shot actions first
        actions.extend_from_slice(&self.oneshot_actions);

        // Held movement only matters while playing
        if game_state == GameState::Playing {
            if self.key_state.left.is_held() {
                actions.push(InputAction::MoveLeft);
            }
            if self.key_state.right.is_held() {
                actions.push(InputAction::MoveRight);
            }
        }

        actions
    }
}
