// Game module - the frame loop core, independent of SDL rendering
//
// This module contains:
// - types.rs: GameStatus, GameEvent and SpriteMetrics
// - world.rs: the Game struct, fixed-step simulation and status transitions

pub mod types;
pub mod world;

// Re-export types for convenience
pub use types::*;
pub use world::Game;
