//! Error types for Roadway Surfers
//!
//! SDL2 reports failures as plain `String`s, so most of the render path just
//! propagates `Result<_, String>`. Everything that touches the filesystem or
//! configuration goes through [`GameError`] instead, which converts back to a
//! `String` at the SDL boundary.

use std::fmt;

#[derive(Debug)]
pub enum GameError {
    /// Reading or writing a file failed
    Io(std::io::Error),

    /// Config file is not valid JSON for `GameConfig`
    Json(serde_json::Error),

    /// Config parsed but holds values the game can't run with
    InvalidConfig(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Io(e) => write!(f, "IO error: {}", e),
            GameError::Json(e) => write!(f, "Config parse error: {}", e),
            GameError::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Io(e) => Some(e),
            GameError::Json(e) => Some(e),
            GameError::InvalidConfig(_) => None,
        }
    }
}

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        GameError::Io(err)
    }
}

impl From<serde_json::Error> for GameError {
    fn from(err: serde_json::Error) -> Self {
        GameError::Json(err)
    }
}

impl From<GameError> for String {
    fn from(error: GameError) -> Self {
        error.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = GameError::InvalidConfig("spawn_interval_ms must be > 0".to_string());
        assert_eq!(err.to_string(), "Invalid config: spawn_interval_ms must be > 0");
    }

    #[test]
    fn test_converts_into_string() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let message: String = GameError::from(io).into();
        assert!(message.starts_with("IO error"));
        assert!(message.contains("missing"));
    }

    #[test]
    fn test_json_error_has_source() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err = GameError::from(json_err);
        assert!(std::error::Error::source(&err).is_some());
    }
}
