//! Clickable Button Component
//!
//! A labelled rectangle. The label is always drawn; the translucent box behind
//! it only appears while the button is highlighted.

use crate::text::{draw_text_centered, text_height};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas};
use sdl2::video::Window;

/// Configuration for button appearance
#[derive(Debug, Clone)]
pub struct ButtonStyle {
    /// Highlight box color
    pub box_color: Color,

    /// Highlight box opacity (0-255)
    pub box_alpha: u8,

    /// Label color
    pub text_color: Color,

    /// Label scale (5x7 font pixels)
    pub text_scale: u32,

    /// Label offset from the top of the button
    pub text_offset_y: i32,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        ButtonStyle {
            box_color: Color::RGB(255, 255, 255),
            box_alpha: 25,
            text_color: Color::RGB(0, 0, 0),
            text_scale: 6,
            text_offset_y: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Button {
    pub label: String,
    pub rect: Rect,
    pub style: ButtonStyle,
}

impl Button {
    pub fn new(label: &str, x: i32, y: i32, width: u32, height: u32) -> Self {
        Button {
            label: label.to_string(),
            rect: Rect::new(x, y, width, height),
            style: ButtonStyle::default(),
        }
    }

    /// Button horizontally centred on a screen of `screen_width`
    pub fn centered(label: &str, screen_width: u32, y: i32, width: u32, height: u32) -> Self {
        let x = screen_width as i32 / 2 - width as i32 / 2;
        Self::new(label, x, y, width, height)
    }

    /// Hit test, inclusive on every edge
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let right = self.rect.x() + self.rect.width() as i32;
        let bottom = self.rect.y() + self.rect.height() as i32;
        (self.rect.x()..=right).contains(&x) && (self.rect.y()..=bottom).contains(&y)
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, highlighted: bool) -> Result<(), String> {
        if highlighted {
            let c = self.style.box_color;
            canvas.set_blend_mode(BlendMode::Blend);
            canvas.set_draw_color(Color::RGBA(c.r, c.g, c.b, self.style.box_alpha));
            canvas.fill_rect(self.rect)?;
            canvas.set_blend_mode(BlendMode::None);
        }

        // Keep the label inside the box even with a large scale
        let max_offset = (self.rect.height() as i32 - text_height(self.style.text_scale) as i32).max(0);
        let text_y = self.rect.y() + self.style.text_offset_y.min(max_offset);

        draw_text_centered(
            canvas,
            &self.label,
            self.rect.center().x(),
            text_y,
            self.style.text_color,
            self.style.text_scale,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_position() {
        let button = Button::centered("RESUME", 500, 295, 250, 100);
        assert_eq!(button.rect, Rect::new(125, 295, 250, 100));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let button = Button::new("EXIT", 125, 405, 250, 100);

        assert!(button.contains(125, 405)); // top-left corner
        assert!(button.contains(375, 505)); // bottom-right corner
        assert!(button.contains(250, 450));

        assert!(!button.contains(124, 450));
        assert!(!button.contains(376, 450));
        assert!(!button.contains(250, 404));
        assert!(!button.contains(250, 506));
    }

    #[test]
    fn test_default_style() {
        let style = ButtonStyle::default();
        assert_eq!(style.box_alpha, 25);
        assert_eq!(style.box_color, Color::RGB(255, 255, 255));
    }
}
