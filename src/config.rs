//! Game configuration
//!
//! Tunables live in `assets/config/game.json`. Every field has a default, so
//! the file may list only the values it wants to override, and a missing file
//! just means "play with the defaults".

use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "assets/config/game.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window_width: u32,
    pub window_height: u32,
    pub target_fps: u32,

    /// Milliseconds between car spawns (each spawn is worth one point)
    pub spawn_interval_ms: u64,
    /// Y position new cars start at, above the top edge
    pub spawn_y: i32,
    /// Cars pick a speed in `car_speed_min..=car_speed_max` pixels per step
    pub car_speed_min: i32,
    pub car_speed_max: i32,

    pub player_speed: i32,
    /// Gap between the player's starting position and the bottom edge
    pub player_bottom_margin: i32,

    pub blur_radius: u32,
    pub asset_dir: PathBuf,

    // Sprite sizes used when the matching image can't be loaded
    pub car_width: u32,
    pub car_height: u32,
    pub player_width: u32,
    pub player_height: u32,

    pub show_hitboxes: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            window_width: 500,
            window_height: 800,
            target_fps: 60,
            spawn_interval_ms: 1000,
            spawn_y: -150,
            car_speed_min: 4,
            car_speed_max: 4,
            player_speed: 4,
            player_bottom_margin: 50,
            blur_radius: 7,
            asset_dir: PathBuf::from("assets"),
            car_width: 60,
            car_height: 110,
            player_width: 48,
            player_height: 48,
            show_hitboxes: false,
        }
    }
}

impl GameConfig {
    /// Parse and validate a config file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the config if the file exists, otherwise fall back to defaults.
    ///
    /// A file that exists but doesn't parse is still an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        if !path.exists() {
            println!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let config = Self::load_from_file(path)?;
        println!("✓ Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err(GameError::InvalidConfig("window size must be non-zero".to_string()));
        }
        if self.target_fps == 0 {
            return Err(GameError::InvalidConfig("target_fps must be > 0".to_string()));
        }
        if self.spawn_interval_ms == 0 {
            return Err(GameError::InvalidConfig("spawn_interval_ms must be > 0".to_string()));
        }
        if self.car_speed_min <= 0 || self.car_speed_min > self.car_speed_max {
            return Err(GameError::InvalidConfig(format!(
                "car speed range {}..={} is invalid",
                self.car_speed_min, self.car_speed_max
            )));
        }
        if self.player_speed <= 0 {
            return Err(GameError::InvalidConfig("player_speed must be > 0".to_string()));
        }
        if self.car_width == 0 || self.car_height == 0 || self.player_width == 0 || self.player_height == 0 {
            return Err(GameError::InvalidConfig("fallback sprite sizes must be non-zero".to_string()));
        }
        Ok(())
    }

    /// Path of an image inside the asset directory
    pub fn asset_path(&self, file_name: &str) -> PathBuf {
        self.asset_dir.join(file_name)
    }

    /// Where the pause/game-over screenshot is written
    pub fn screenshot_path(&self) -> PathBuf {
        dirs::cache_dir()
            .map(|p| p.join("roadway-surfers").join("screenshot.png"))
            .unwrap_or_else(|| PathBuf::from("./screenshot.png"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_screen_layout() {
        let config = GameConfig::default();
        assert_eq!(config.window_width, 500);
        assert_eq!(config.window_height, 800);
        assert_eq!(config.spawn_interval_ms, 1000);
        assert_eq!(config.spawn_y, -150);
        assert_eq!(config.blur_radius, 7);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GameConfig::from_json(r#"{ "spawn_interval_ms": 500, "car_speed_max": 7 }"#).unwrap();
        assert_eq!(config.spawn_interval_ms, 500);
        assert_eq!(config.car_speed_max, 7);
        assert_eq!(config.car_speed_min, 4);
        assert_eq!(config.window_width, 500);
    }

    #[test]
    fn test_rejects_inverted_speed_range() {
        let result = GameConfig::from_json(r#"{ "car_speed_min": 6, "car_speed_max": 2 }"#);
        assert!(matches!(result, Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_zero_spawn_interval() {
        let result = GameConfig::from_json(r#"{ "spawn_interval_ms": 0 }"#);
        assert!(matches!(result, Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let result = GameConfig::from_json("{ window_width: ");
        assert!(matches!(result, Err(GameError::Json(_))));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("roadway-surfers-no-such-config.json");
        let config = GameConfig::load_or_default(&path).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("roadway-surfers-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "player_speed": 9, "show_hitboxes": true }"#).unwrap();

        let config = GameConfig::load_or_default(&path).unwrap();
        assert_eq!(config.player_speed, 9);
        assert!(config.show_hitboxes);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_asset_path_joins_dir() {
        let config = GameConfig::default();
        assert_eq!(config.asset_path("road.png"), PathBuf::from("assets").join("road.png"));
    }
}
