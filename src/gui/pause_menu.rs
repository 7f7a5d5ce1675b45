//! Pause Menu Component
//!
//! Two buttons over the blurred snapshot:
//! - Resume: back to the road
//! - Exit: quit the game
//!
//! The mouse highlights whichever button it is over and a click activates it.
//! The cursor is polled every frame, so a button already under the cursor is
//! highlighted as soon as the menu opens. Arrow keys move the same highlight
//! and Return activates it.

use super::Button;
use sdl2::render::Canvas;
use sdl2::video::Window;

const BUTTON_WIDTH: u32 = 250;
const BUTTON_HEIGHT: u32 = 100;
/// Vertical distance of each button from the centred position
const BUTTON_SPREAD: i32 = 55;

/// Options in the pause menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseOption {
    Resume,
    Exit,
}

impl PauseOption {
    const ALL: [PauseOption; 2] = [PauseOption::Resume, PauseOption::Exit];

    fn label(&self) -> &'static str {
        match self {
            PauseOption::Resume => "RESUME",
            PauseOption::Exit => "EXIT",
        }
    }
}

pub struct PauseMenu {
    buttons: Vec<(PauseOption, Button)>,
    highlighted: Option<usize>,
    /// Last cursor position seen by `open` / `track_cursor`
    cursor: Option<(i32, i32)>,
}

impl PauseMenu {
    /// Creates the menu laid out for a screen of the given size
    pub fn new(screen_width: u32, screen_height: u32) -> Self {
        let centered_y = screen_height as i32 / 2 - BUTTON_HEIGHT as i32 / 2;
        let buttons = PauseOption::ALL
            .iter()
            .enumerate()
            .map(|(i, option)| {
                let offset = if i == 0 { -BUTTON_SPREAD } else { BUTTON_SPREAD };
                let button = Button::centered(
                    option.label(),
                    screen_width,
                    centered_y + offset,
                    BUTTON_WIDTH,
                    BUTTON_HEIGHT,
                );
                (*option, button)
            })
            .collect();

        PauseMenu {
            buttons,
            highlighted: None,
            cursor: None,
        }
    }

    /// Called whenever the menu opens, with the current cursor position
    pub fn open(&mut self, x: i32, y: i32) {
        self.cursor = Some((x, y));
        self.hover(x, y);
    }

    /// Per-frame cursor poll. Only a moved cursor changes the highlight, so
    /// keyboard navigation sticks while the mouse rests.
    pub fn track_cursor(&mut self, x: i32, y: i32) {
        if self.cursor != Some((x, y)) {
            self.open(x, y);
        }
    }

    fn option_at(&self, x: i32, y: i32) -> Option<usize> {
        self.buttons.iter().position(|(_, button)| button.contains(x, y))
    }

    /// Mouse moved: highlight the button under the cursor, if any
    pub fn hover(&mut self, x: i32, y: i32) {
        self.highlighted = self.option_at(x, y);
    }

    /// Mouse clicked: the option under the cursor, if any
    pub fn click(&mut self, x: i32, y: i32) -> Option<PauseOption> {
        self.hover(x, y);
        self.selected_option()
    }

    /// Move highlight up (wraps to bottom)
    pub fn navigate_up(&mut self) {
        let count = self.buttons.len();
        self.highlighted = Some(match self.highlighted {
            Some(0) | None => count - 1,
            Some(i) => i - 1,
        });
    }

    /// Move highlight down (wraps to top)
    pub fn navigate_down(&mut self) {
        let count = self.buttons.len();
        self.highlighted = Some(match self.highlighted {
            Some(i) => (i + 1) % count,
            None => 0,
        });
    }

    /// The highlighted option, if any
    pub fn selected_option(&self) -> Option<PauseOption> {
        self.highlighted.map(|i| self.buttons[i].0)
    }

    /// Render the buttons; the caller draws the backdrop first
    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        for (i, (_, button)) in self.buttons.iter().enumerate() {
            button.render(canvas, self.highlighted == Some(i))?;
        }
        Ok(())
    }
}
