//! Game Over Screen Component
//!
//! Drawn over the blurred snapshot of the crash: a big "GAME OVER", the final
//! score under it and a restart prompt at the bottom of the screen.

use crate::text::{draw_text_centered, text_height};
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Configuration for game over screen appearance
#[derive(Debug, Clone)]
pub struct GameOverStyle {
    pub title_color: Color,
    pub title_scale: u32,

    pub score_color: Color,
    pub score_scale: u32,

    pub prompt_color: Color,
    pub prompt_scale: u32,

    /// Gap between the prompt and the bottom edge
    pub prompt_margin: i32,
}

impl Default for GameOverStyle {
    fn default() -> Self {
        GameOverStyle {
            title_color: Color::RGB(0, 0, 0),
            title_scale: 8,
            score_color: Color::RGB(0, 0, 0),
            score_scale: 4,
            prompt_color: Color::RGB(0, 0, 0),
            prompt_scale: 3,
            prompt_margin: 20,
        }
    }
}

pub struct GameOverScreen {
    style: GameOverStyle,
}

impl GameOverScreen {
    pub fn new() -> Self {
        GameOverScreen {
            style: GameOverStyle::default(),
        }
    }

    pub fn score_text(score: u32) -> String {
        format!("SCORE IS {}", score)
    }

    pub const PROMPT: &'static str = "ENTER TO RESTART";

    /// Y positions of the title, score and prompt lines
    pub fn layout(&self, screen_height: u32) -> (i32, i32, i32) {
        let center_y = screen_height as i32 / 2;
        let title_y = center_y - text_height(self.style.title_scale) as i32;
        let score_y = center_y - text_height(self.style.score_scale) as i32 / 2 + 20;
        let prompt_y =
            screen_height as i32 - text_height(self.style.prompt_scale) as i32 - self.style.prompt_margin;
        (title_y, score_y, prompt_y)
    }

    /// Render the text; the caller draws the backdrop first
    pub fn render(&self, canvas: &mut Canvas<Window>, score: u32) -> Result<(), String> {
        let (screen_width, screen_height) = canvas.output_size()?;
        let center_x = screen_width as i32 / 2;
        let (title_y, score_y, prompt_y) = self.layout(screen_height);

        draw_text_centered(
            canvas,
            "GAME OVER",
            center_x,
            title_y,
            self.style.title_color,
            self.style.title_scale,
        )?;
        draw_text_centered(
            canvas,
            &Self::score_text(score),
            center_x,
            score_y,
            self.style.score_color,
            self.style.score_scale,
        )?;
        draw_text_centered(
            canvas,
            Self::PROMPT,
            center_x,
            prompt_y,
            self.style.prompt_color,
            self.style.prompt_scale,
        )?;

        Ok(())
    }
}

impl Default for GameOverScreen {
    fn default() -> Self {
        Self::new()
    }
}
