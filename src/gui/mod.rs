//! Screen-Space GUI System
//!
//! Overlays drawn on top of the blurred snapshot when play stops.
//!
//! # Available Components
//!
//! - [`Button`] - Labelled, hoverable rectangle
//! - [`PauseMenu`] - Resume / Exit menu shown while paused
//! - [`GameOverScreen`] - Final score and restart prompt
//!
//! # Example Usage
//!
//! ```rust
//! use crate::gui::{PauseMenu, PauseOption};
//!
//! let mut pause_menu = PauseMenu::new(500, 800);
//!
//! // Mouse input
//! pause_menu.hover(mouse_x, mouse_y);
//! match pause_menu.click(mouse_x, mouse_y) {
//!     Some(PauseOption::Resume) => { /* ... */ }
//!     Some(PauseOption::Exit) => { /* ... */ }
//!     None => {}
//! }
//!
//! // Render over the backdrop
//! pause_menu.render(&mut canvas)?;
//! ```

pub mod button;
pub mod game_over_screen;
pub mod pause_menu;

pub use button::Button;
pub use game_over_screen::GameOverScreen;
pub use pause_menu::{PauseMenu, PauseOption};
