use crate::collision::Collidable;
use crate::config::GameConfig;
use rand::Rng;
use sdl2::rect::Rect;

/// Horizontal offset of lane 1 from a quarter of the screen width
const LANE_OFFSET: i32 = 100;
/// Distance between neighbouring lanes
const LANE_SPACING: i32 = 150;

/// The five car sprites, one per paint job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarColor {
    Blue,
    Brown,
    Green,
    Red,
    Yellow,
}

impl CarColor {
    pub const ALL: [CarColor; 5] = [
        CarColor::Blue,
        CarColor::Brown,
        CarColor::Green,
        CarColor::Red,
        CarColor::Yellow,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CarColor::Blue => "blue",
            CarColor::Brown => "brown",
            CarColor::Green => "green",
            CarColor::Red => "red",
            CarColor::Yellow => "yellow",
        }
    }

    /// Position in `CarColor::ALL`
    pub fn index(&self) -> usize {
        match self {
            CarColor::Blue => 0,
            CarColor::Brown => 1,
            CarColor::Green => 2,
            CarColor::Red => 3,
            CarColor::Yellow => 4,
        }
    }

    /// Image file for this color inside the asset directory
    pub fn asset_name(&self) -> String {
        format!("car_{}.png", self.name())
    }

    /// Solid color drawn when the sprite is missing
    pub fn fallback_rgb(&self) -> (u8, u8, u8) {
        match self {
            CarColor::Blue => (40, 90, 220),
            CarColor::Brown => (120, 72, 30),
            CarColor::Green => (40, 170, 70),
            CarColor::Red => (210, 40, 40),
            CarColor::Yellow => (235, 200, 40),
        }
    }
}

/// One of the three lane columns, numbered 1 to 3 from the left
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lane(u8);

impl Lane {
    pub const COUNT: u8 = 3;

    #[cfg(test)]
    pub fn new(column: u8) -> Option<Self> {
        (1..=Self::COUNT).contains(&column).then_some(Lane(column))
    }

    pub fn column(&self) -> u8 {
        self.0
    }

    /// Left edge of a car driving in this lane
    pub fn x(&self, screen_width: u32) -> i32 {
        screen_width as i32 / 4 - LANE_OFFSET + LANE_SPACING * (self.0 as i32 - 1)
    }
}

/// Sprite size of each car color
///
/// Every color has its own image, so each gets its own hitbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarSizes([(u32, u32); CarColor::ALL.len()]);

impl CarSizes {
    /// Same size for every color
    pub fn uniform(size: (u32, u32)) -> Self {
        CarSizes([size; CarColor::ALL.len()])
    }

    pub fn get(&self, color: CarColor) -> (u32, u32) {
        self.0[color.index()]
    }

    pub fn set(&mut self, color: CarColor, size: (u32, u32)) {
        self.0[color.index()] = size;
    }
}

pub struct Car {
    pub color: CarColor,
    pub lane: Lane,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub speed: i32,
}

impl Car {
    pub fn new(color: CarColor, lane: Lane, y: i32, screen_width: u32, size: (u32, u32), speed: i32) -> Self {
        Car {
            color,
            lane,
            x: lane.x(screen_width),
            y,
            width: size.0,
            height: size.1,
            speed,
        }
    }

    /// Random color, random lane, random speed from the configured range.
    /// The hitbox is the size of the chosen color's sprite.
    pub fn spawn(rng: &mut impl Rng, config: &GameConfig, sizes: &CarSizes) -> Self {
        let color = CarColor::ALL[rng.gen_range(0..CarColor::ALL.len())];
        let size = sizes.get(color);
        let lane = Lane(rng.gen_range(1..=Lane::COUNT));
        let speed = rng.gen_range(config.car_speed_min..=config.car_speed_max);

        Car::new(color, lane, config.spawn_y, config.window_width, size, speed)
    }

    /// Scroll one step down the road
    pub fn advance(&mut self) {
        self.y += self.speed;
    }

    /// True once the car's top edge is below the screen
    pub fn is_off_screen(&self, screen_height: u32) -> bool {
        self.y > screen_height as i32
    }
}

impl Collidable for Car {
    fn get_bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_lane_positions() {
        let xs: Vec<i32> = (1..=3).map(|c| Lane::new(c).unwrap().x(500)).collect();
        assert_eq!(xs, vec![25, 175, 325]);
    }

    #[test]
    fn test_lane_rejects_out_of_range() {
        assert!(Lane::new(0).is_none());
        assert!(Lane::new(4).is_none());
        assert_eq!(Lane::new(2).map(|l| l.column()), Some(2));
    }

    #[test]
    fn test_asset_names() {
        assert_eq!(CarColor::Blue.asset_name(), "car_blue.png");
        assert_eq!(CarColor::Yellow.asset_name(), "car_yellow.png");
    }

    #[test]
    fn test_spawn_within_config() {
        let config = GameConfig {
            car_speed_min: 2,
            car_speed_max: 6,
            ..GameConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..200 {
            let car = Car::spawn(&mut rng, &config, &CarSizes::uniform((60, 110)));
            assert!((1..=3).contains(&car.lane.column()));
            assert_eq!(car.x, car.lane.x(config.window_width));
            assert_eq!(car.y, -150);
            assert!((2..=6).contains(&car.speed));
            assert_eq!((car.width, car.height), (60, 110));
        }
    }

    #[test]
    fn test_spawn_uses_every_lane_and_color() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(7);
        let mut lanes = [false; 3];
        let mut colors = std::collections::HashSet::new();

        for _ in 0..500 {
            let car = Car::spawn(&mut rng, &config, &CarSizes::uniform((60, 110)));
            lanes[car.lane.column() as usize - 1] = true;
            colors.insert(car.color);
        }

        assert!(lanes.iter().all(|seen| *seen));
        assert_eq!(colors.len(), CarColor::ALL.len());
    }

    #[test]
    fn test_color_index_matches_all() {
        for (i, color) in CarColor::ALL.iter().enumerate() {
            assert_eq!(color.index(), i);
        }
    }

    #[test]
    fn test_spawn_uses_size_of_picked_color() {
        let mut sizes = CarSizes::uniform((60, 110));
        sizes.set(CarColor::Red, (50, 100));
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(3);

        let mut seen_red = false;
        let mut seen_other = false;
        for _ in 0..200 {
            let car = Car::spawn(&mut rng, &config, &sizes);
            let bounds = car.get_bounds();
            if car.color == CarColor::Red {
                seen_red = true;
                assert_eq!((bounds.width(), bounds.height()), (50, 100));
            } else {
                seen_other = true;
                assert_eq!((bounds.width(), bounds.height()), (60, 110));
            }
        }
        assert!(seen_red && seen_other);
    }

    #[test]
    fn test_different_sizes_give_different_bounds() {
        let blue = Car::new(CarColor::Blue, Lane::new(1).unwrap(), 0, 500, (60, 110), 4);
        let red = Car::new(CarColor::Red, Lane::new(1).unwrap(), 0, 500, (50, 100), 4);
        assert_eq!(blue.get_bounds(), Rect::new(25, 0, 60, 110));
        assert_eq!(red.get_bounds(), Rect::new(25, 0, 50, 100));

        // Just right of the red sprite: clear of red, inside blue's box
        let player = Rect::new(76, 50, 48, 48);
        assert!(!crate::collision::aabb_intersect(&red.get_bounds(), &player));
        assert!(crate::collision::aabb_intersect(&blue.get_bounds(), &player));
    }

    #[test]
    fn test_fixed_speed_when_range_is_single_value() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            assert_eq!(Car::spawn(&mut rng, &config, &CarSizes::uniform((60, 110))).speed, config.car_speed_min);
        }
    }

    #[test]
    fn test_advance_and_off_screen() {
        let mut car = Car::new(CarColor::Red, Lane::new(1).unwrap(), 795, 500, (60, 110), 4);
        assert!(!car.is_off_screen(800));

        car.advance();
        assert_eq!(car.y, 799);
        assert!(!car.is_off_screen(800));

        car.advance();
        assert!(car.is_off_screen(800));
    }

    #[test]
    fn test_bounds_follow_position() {
        let car = Car::new(CarColor::Green, Lane::new(3).unwrap(), -150, 500, (60, 110), 4);
        assert_eq!(car.get_bounds(), Rect::new(325, -150, 60, 110));
    }
}
