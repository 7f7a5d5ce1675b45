// Shared enums and helper structs used by the game loop

use crate::car::{CarColor, CarSizes, Lane};
use crate::config::GameConfig;

/// Which branch of the frame loop runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Paused,
    GameOver,
}

impl GameStatus {
    /// Overlays draw over a frozen, blurred snapshot of the road
    pub fn shows_overlay(&self) -> bool {
        !matches!(self, GameStatus::Playing)
    }
}

/// Things that happened during a tick, for logging and the HUD
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    CarSpawned { color: CarColor, lane: Lane },
    CarPassed,
    Crashed { score: u32 },
}

/// Sprite sizes, taken from the loaded textures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteMetrics {
    pub cars: CarSizes,
    pub player: (u32, u32),
}

impl SpriteMetrics {
    /// Sizes from config, for when no textures are available
    pub fn from_config(config: &GameConfig) -> Self {
        SpriteMetrics {
            cars: CarSizes::uniform((config.car_width, config.car_height)),
            player: (config.player_width, config.player_height),
        }
    }
}
