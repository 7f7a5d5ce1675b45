//! Score counter in the top-left corner while playing

use crate::text::draw_text;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

#[derive(Debug, Clone)]
pub struct ScoreDisplayStyle {
    pub x: i32,
    pub y: i32,
    pub color: Color,
    pub scale: u32,
}

impl Default for ScoreDisplayStyle {
    fn default() -> Self {
        ScoreDisplayStyle {
            x: 10,
            y: 10,
            color: Color::RGB(0, 0, 0),
            scale: 5,
        }
    }
}

/// Stateless: create once, call `render` every frame with the current score
pub struct ScoreDisplay {
    style: ScoreDisplayStyle,
}

impl ScoreDisplay {
    pub fn new() -> Self {
        ScoreDisplay {
            style: ScoreDisplayStyle::default(),
        }
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, score: u32) -> Result<(), String> {
        draw_text(
            canvas,
            &score.to_string(),
            self.style.x,
            self.style.y,
            self.style.color,
            self.style.scale,
        )
    }
}

impl Default for ScoreDisplay {
    fn default() -> Self {
        Self::new()
    }
}
