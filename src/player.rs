use crate::collision::Collidable;
use sdl2::rect::Rect;

pub struct Player {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub speed: i32,
    /// Horizontal direction, -1 left, 0 still, 1 right
    pub dx: i32,
    /// Vertical direction, -1 up, 0 still, 1 down
    pub dy: i32,
}

impl Player {
    pub fn new(x: i32, y: i32, width: u32, height: u32, speed: i32) -> Self {
        Player {
            x,
            y,
            width,
            height,
            speed,
            dx: 0,
            dy: 0,
        }
    }

    /// Player at the starting spot: centred, `bottom_margin` above the bottom edge
    pub fn spawn(screen_width: u32, screen_height: u32, size: (u32, u32), speed: i32, bottom_margin: i32) -> Self {
        let (width, height) = size;
        let x = screen_width as i32 / 2 - width as i32 / 2;
        let y = screen_height as i32 - height as i32 - bottom_margin;
        Player::new(x, y, width, height, speed)
    }

    /// Set the held direction. Each axis is clamped to -1..=1.
    pub fn set_direction(&mut self, dx: i32, dy: i32) {
        self.dx = dx.signum();
        self.dy = dy.signum();
    }

    pub fn stop(&mut self) {
        self.dx = 0;
        self.dy = 0;
    }

    /// One movement step.
    ///
    /// Leaving the screen sideways wraps around to the other side once the
    /// sprite is fully out of view. Vertically the player is clamped to the
    /// screen.
    pub fn update(&mut self, screen_width: u32, screen_height: u32) {
        let width = self.width as i32;
        let height = self.height as i32;
        let screen_width = screen_width as i32;
        let screen_height = screen_height as i32;

        if self.x < -width && self.dx < 0 {
            self.x = screen_width;
        }
        if self.x > screen_width + width && self.dx > 0 {
            self.x = -width;
        }
        self.y = self.y.clamp(0, (screen_height - height).max(0));

        self.x += self.dx * self.speed;
        self.y += self.dy * self.speed;
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }
}

impl Collidable for Player {
    fn get_bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_position() {
        let player = Player::spawn(500, 800, (48, 48), 4, 50);
        assert_eq!(player.position(), (226, 702));
        assert_eq!((player.dx, player.dy), (0, 0));
    }

    #[test]
    fn test_moves_by_speed() {
        let mut player = Player::new(200, 400, 48, 48, 4);
        player.set_direction(1, -1);
        player.update(500, 800);
        assert_eq!(player.position(), (204, 396));
    }

    #[test]
    fn test_direction_is_clamped() {
        let mut player = Player::new(0, 0, 48, 48, 4);
        player.set_direction(-7, 3);
        assert_eq!((player.dx, player.dy), (-1, 1));
    }

    #[test]
    fn test_wraps_left_to_right() {
        let mut player = Player::new(-49, 400, 48, 48, 4);
        player.set_direction(-1, 0);
        player.update(500, 800);
        // Teleported to the right edge, then moved one step left
        assert_eq!(player.x, 496);
    }

    #[test]
    fn test_wraps_right_to_left() {
        let mut player = Player::new(549, 400, 48, 48, 4);
        player.set_direction(1, 0);
        player.update(500, 800);
        assert_eq!(player.x, -44);
    }

    #[test]
    fn test_no_wrap_when_moving_back() {
        // Out of view on the left but heading right: no teleport
        let mut player = Player::new(-60, 400, 48, 48, 4);
        player.set_direction(1, 0);
        player.update(500, 800);
        assert_eq!(player.x, -56);
    }

    #[test]
    fn test_no_wrap_while_partially_visible() {
        let mut player = Player::new(-48, 400, 48, 48, 4);
        player.set_direction(-1, 0);
        player.update(500, 800);
        assert_eq!(player.x, -52);
    }

    #[test]
    fn test_clamps_top_and_bottom() {
        let mut player = Player::new(200, -10, 48, 48, 4);
        player.update(500, 800);
        assert_eq!(player.y, 0);

        let mut player = Player::new(200, 790, 48, 48, 4);
        player.update(500, 800);
        assert_eq!(player.y, 752);
    }

    #[test]
    fn test_stop_clears_direction() {
        let mut player = Player::new(0, 0, 48, 48, 4);
        player.set_direction(1, 1);
        player.stop();
        player.update(500, 800);
        assert_eq!(player.position(), (0, 0));
    }
}
