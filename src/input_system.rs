use crate::game::GameStatus;
use sdl2::event::Event;
use sdl2::keyboard::{KeyboardState, Keycode, Scancode};
use sdl2::mouse::MouseButton;

/// Actions the player can trigger
///
/// Decouples raw SDL2 events from what the game loop does with them.
/// Arrow-key movement is not an action: it is read from the held key state
/// every frame with [`InputSystem::movement`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameAction {
    // === Playing ===
    Pause,
    ToggleHitboxes,

    // === Pause menu ===
    Resume,
    MenuUp,
    MenuDown,
    MenuConfirm,
    MouseMove(i32, i32),
    Click(i32, i32),

    // === Game over ===
    Restart,

    // === System ===
    Quit,
}

/// Input context determines which actions are available
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    Playing,
    PauseMenu,
    GameOver,
}

impl From<GameStatus> for InputContext {
    fn from(status: GameStatus) -> Self {
        match status {
            GameStatus::Playing => InputContext::Playing,
            GameStatus::Paused => InputContext::PauseMenu,
            GameStatus::GameOver => InputContext::GameOver,
        }
    }
}

/// InputSystem turns SDL2 events into GameActions for the current context
pub struct InputSystem {
    pub context: InputContext,
}

impl InputSystem {
    pub fn new() -> Self {
        InputSystem {
            context: InputContext::Playing,
        }
    }

    pub fn update_context(&mut self, status: GameStatus) {
        self.context = InputContext::from(status);
    }

    /// Translate one event for the game's current status.
    ///
    /// The status is passed per event because an earlier event in the same
    /// batch may already have paused, resumed or restarted the game.
    pub fn translate(&mut self, event: &Event, status: GameStatus) -> Option<GameAction> {
        self.update_context(status);
        match *event {
            Event::Quit { .. } => Some(GameAction::Quit),
            Event::KeyDown {
                keycode: Some(key),
                repeat: false,
                ..
            } => self.handle_key(key),
            Event::MouseMotion { x, y, .. } => self.handle_mouse_move(x, y),
            Event::MouseButtonDown { mouse_btn, x, y, .. } => self.handle_mouse_down(mouse_btn, x, y),
            _ => None,
        }
    }

    /// Routes a key press to the handler for the current context
    pub fn handle_key(&self, key: Keycode) -> Option<GameAction> {
        match self.context {
            InputContext::Playing => match key {
                Keycode::Escape => Some(GameAction::Pause),
                Keycode::B => Some(GameAction::ToggleHitboxes),
                _ => None,
            },
            InputContext::PauseMenu => match key {
                Keycode::Escape => Some(GameAction::Resume),
                Keycode::Up => Some(GameAction::MenuUp),
                Keycode::Down => Some(GameAction::MenuDown),
                Keycode::Return | Keycode::KpEnter => Some(GameAction::MenuConfirm),
                _ => None,
            },
            InputContext::GameOver => match key {
                Keycode::Return | Keycode::KpEnter => Some(GameAction::Restart),
                _ => None,
            },
        }
    }

    pub fn handle_mouse_move(&self, x: i32, y: i32) -> Option<GameAction> {
        (self.context == InputContext::PauseMenu).then_some(GameAction::MouseMove(x, y))
    }

    pub fn handle_mouse_down(&self, button: MouseButton, x: i32, y: i32) -> Option<GameAction> {
        (self.context == InputContext::PauseMenu && button == MouseButton::Left).then_some(GameAction::Click(x, y))
    }

    /// Direction held on the arrow keys
    pub fn movement(keyboard_state: &KeyboardState) -> (i32, i32) {
        direction_from_keys(
            keyboard_state.is_scancode_pressed(Scancode::Left),
            keyboard_state.is_scancode_pressed(Scancode::Right),
            keyboard_state.is_scancode_pressed(Scancode::Up),
            keyboard_state.is_scancode_pressed(Scancode::Down),
        )
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// Opposite keys held together cancel out
pub fn direction_from_keys(left: bool, right: bool, up: bool, down: bool) -> (i32, i32) {
    let dx = right as i32 - left as i32;
    let dy = down as i32 - up as i32;
    (dx, dy)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn system_in(status: GameStatus) -> InputSystem {
        let mut input = InputSystem::new();
        input.update_context(status);
        input
    }

    #[test]
    fn test_context_follows_status() {
        assert_eq!(system_in(GameStatus::Playing).context, InputContext::Playing);
        assert_eq!(system_in(GameStatus::Paused).context, InputContext::PauseMenu);
        assert_eq!(system_in(GameStatus::GameOver).context, InputContext::GameOver);
    }

    #[test]
    fn test_playing_keys() {
        let input = system_in(GameStatus::Playing);
        assert_eq!(input.handle_key(Keycode::Escape), Some(GameAction::Pause));
        assert_eq!(input.handle_key(Keycode::B), Some(GameAction::ToggleHitboxes));
        assert_eq!(input.handle_key(Keycode::Return), None);
    }

    #[test]
    fn test_pause_menu_keys() {
        let input = system_in(GameStatus::Paused);
        assert_eq!(input.handle_key(Keycode::Escape), Some(GameAction::Resume));
        assert_eq!(input.handle_key(Keycode::Up), Some(GameAction::MenuUp));
        assert_eq!(input.handle_key(Keycode::Down), Some(GameAction::MenuDown));
        assert_eq!(input.handle_key(Keycode::Return), Some(GameAction::MenuConfirm));
        assert_eq!(input.handle_key(Keycode::B), None);
    }

    #[test]
    fn test_game_over_keys() {
        let input = system_in(GameStatus::GameOver);
        assert_eq!(input.handle_key(Keycode::Return), Some(GameAction::Restart));
        assert_eq!(input.handle_key(Keycode::KpEnter), Some(GameAction::Restart));
        assert_eq!(input.handle_key(Keycode::Escape), None);
    }

    #[test]
    fn test_mouse_only_in_pause_menu() {
        let playing = system_in(GameStatus::Playing);
        assert_eq!(playing.handle_mouse_move(10, 10), None);
        assert_eq!(playing.handle_mouse_down(MouseButton::Left, 10, 10), None);

        let paused = system_in(GameStatus::Paused);
        assert_eq!(paused.handle_mouse_move(10, 20), Some(GameAction::MouseMove(10, 20)));
        assert_eq!(paused.handle_mouse_down(MouseButton::Left, 30, 40), Some(GameAction::Click(30, 40)));
        assert_eq!(paused.handle_mouse_down(MouseButton::Right, 30, 40), None);
    }

    #[test]
    fn test_keys_after_pause_use_menu_context() {
        use crate::config::GameConfig;
        use crate::game::{Game, SpriteMetrics};

        let config = GameConfig::default();
        let mut game = Game::new(config.clone(), SpriteMetrics::from_config(&config));
        let mut input = InputSystem::new();

        // Esc and Down arrive in the same frame; Down must reach the menu
        let mut actions = Vec::new();
        for key in [Keycode::Escape, Keycode::Down] {
            input.update_context(game.status());
            let action = input.handle_key(key);
            if action == Some(GameAction::Pause) {
                game.pause();
            }
            actions.push(action);
        }

        assert_eq!(actions, vec![Some(GameAction::Pause), Some(GameAction::MenuDown)]);
        assert_eq!(input.context, InputContext::PauseMenu);
    }

    #[test]
    fn test_direction_from_keys() {
        assert_eq!(direction_from_keys(false, false, false, false), (0, 0));
        assert_eq!(direction_from_keys(true, false, false, false), (-1, 0));
        assert_eq!(direction_from_keys(false, true, true, false), (1, -1));
        assert_eq!(direction_from_keys(false, false, false, true), (0, 1));
        // Opposites cancel
        assert_eq!(direction_from_keys(true, true, true, true), (0, 0));
    }
}
