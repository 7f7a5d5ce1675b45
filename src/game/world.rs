// Game world and the fixed-step simulation
//
// The Game struct owns the player, the cars, the score and the status flag.
// It knows nothing about SDL rendering, so the whole loop can be driven from
// tests with a seeded RNG.

use crate::car::Car;
use crate::collision::check_collisions_with_collection;
use crate::config::GameConfig;
use crate::player::Player;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::{GameEvent, GameStatus, SpriteMetrics};

/// Physics tick interval in milliseconds (~60 FPS)
pub const PHYSICS_TICK_MS: u64 = 16;

/// Longest frame we simulate in one go, so a stall doesn't teleport cars
const MAX_FRAME_MS: u64 = 100;

pub struct Game {
    config: GameConfig,
    metrics: SpriteMetrics,
    rng: StdRng,
    status: GameStatus,
    player: Player,
    cars: Vec<Car>,
    score: u32,
    accumulated_ms: u64,
    spawn_elapsed_ms: u64,
}

impl Game {
    pub fn new(config: GameConfig, metrics: SpriteMetrics) -> Self {
        Self::with_rng(config, metrics, StdRng::from_entropy())
    }

    pub fn with_rng(config: GameConfig, metrics: SpriteMetrics, rng: StdRng) -> Self {
        let player = Self::spawn_player(&config, &metrics);
        Game {
            config,
            metrics,
            rng,
            status: GameStatus::Playing,
            player,
            cars: Vec::new(),
            score: 0,
            accumulated_ms: 0,
            spawn_elapsed_ms: 0,
        }
    }

    fn spawn_player(config: &GameConfig, metrics: &SpriteMetrics) -> Player {
        Player::spawn(
            config.window_width,
            config.window_height,
            metrics.player,
            config.player_speed,
            config.player_bottom_margin,
        )
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Held arrow keys, ignored outside of play
    pub fn set_movement(&mut self, dx: i32, dy: i32) {
        if self.status == GameStatus::Playing {
            self.player.set_direction(dx, dy);
        }
    }

    /// Playing -> Paused. Returns false if not currently playing.
    pub fn pause(&mut self) -> bool {
        if self.status != GameStatus::Playing {
            return false;
        }
        self.player.stop();
        self.status = GameStatus::Paused;
        true
    }

    /// Paused -> Playing
    pub fn resume(&mut self) -> bool {
        if self.status != GameStatus::Paused {
            return false;
        }
        self.accumulated_ms = 0;
        self.status = GameStatus::Playing;
        true
    }

    /// GameOver -> Playing with an empty road and a zero score
    pub fn restart(&mut self) -> bool {
        if self.status != GameStatus::GameOver {
            return false;
        }
        self.cars.clear();
        self.player = Self::spawn_player(&self.config, &self.metrics);
        self.score = 0;
        self.accumulated_ms = 0;
        self.spawn_elapsed_ms = 0;
        self.status = GameStatus::Playing;
        true
    }

    /// Advance the simulation by `dt_ms` of wall time.
    ///
    /// Steps in fixed `PHYSICS_TICK_MS` increments and keeps the remainder
    /// for the next call. Does nothing unless playing, and stops stepping on
    /// the step that crashes.
    pub fn tick(&mut self, dt_ms: u64) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.status != GameStatus::Playing {
            return events;
        }

        self.accumulated_ms += dt_ms.min(MAX_FRAME_MS);

        while self.accumulated_ms >= PHYSICS_TICK_MS {
            self.accumulated_ms -= PHYSICS_TICK_MS;
            self.step(&mut events);

            if self.status != GameStatus::Playing {
                self.accumulated_ms = 0;
                break;
            }
        }

        events
    }

    /// Single physics step
    fn step(&mut self, events: &mut Vec<GameEvent>) {
        let (width, height) = (self.config.window_width, self.config.window_height);

        // 1. Spawn timer: one car and one point per interval
        self.spawn_elapsed_ms += PHYSICS_TICK_MS;
        if self.spawn_elapsed_ms >= self.config.spawn_interval_ms {
            self.spawn_elapsed_ms -= self.config.spawn_interval_ms;
            let car = Car::spawn(&mut self.rng, &self.config, &self.metrics.cars);
            events.push(GameEvent::CarSpawned { color: car.color, lane: car.lane });
            self.cars.push(car);
            self.score += 1;
        }

        // 2. Player
        self.player.update(width, height);

        // 3. Cars scroll down, the ones below the screen are gone
        for car in &mut self.cars {
            car.advance();
        }
        let before = self.cars.len();
        self.cars.retain(|car| !car.is_off_screen(height));
        events.extend((self.cars.len()..before).map(|_| GameEvent::CarPassed));

        // 4. Crash check
        if !check_collisions_with_collection(&self.player, &self.cars).is_empty() {
            self.status = GameStatus::GameOver;
            self.player.stop();
            events.push(GameEvent::Crashed { score: self.score });
        }
    }
}
