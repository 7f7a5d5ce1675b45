//! HUD Components
//!
//! Stateless rendering components drawn on top of the road while playing.
//! They are created once and handed the values to show each frame.
//!
//! # Available Components
//!
//! - [`ScoreDisplay`] - Current score in the top-left corner

pub mod score_display;

pub use score_display::ScoreDisplay;
