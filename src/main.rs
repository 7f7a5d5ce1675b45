use sdl2::event::Event;
use sdl2::image::LoadSurface;
use sdl2::render::Texture;
use sdl2::surface::Surface;
use sdl2::video::Window;
use std::path::Path;
use std::time::{Duration, Instant};

mod car;
mod collision;
mod config;
mod error;
mod game;
mod gui;
mod input_system;
mod player;
mod render;
mod screenshot;
mod text;
mod ui;

use car::CarColor;
use config::{GameConfig, DEFAULT_CONFIG_PATH};
use game::{Game, GameEvent, GameStatus};
use gui::{GameOverScreen, PauseMenu, PauseOption};
use input_system::{GameAction, InputSystem};
use render::{render_scene, GameTextures};
use screenshot::capture_backdrop;
use ui::ScoreDisplay;

const WINDOW_TITLE: &str = "Roadway Surfers";

/// Sets the window icon, keeping the default one if the image can't be read
fn set_window_icon(window: &mut Window, path: &Path) {
    match Surface::from_file(path) {
        Ok(icon) => window.set_icon(icon),
        Err(e) => eprintln!("Warning: could not load window icon {}: {}", path.display(), e),
    }
}

fn print_controls() {
    println!("Controls:");
    println!("Arrow keys - Move");
    println!("ESC - Pause menu (ESC again to resume)");
    println!("Up/Down + Enter or mouse - Choose Resume / Exit");
    println!("Enter - Restart after a crash");
    println!("B Key - Toggle collision debug boxes");
}

fn main() -> Result<(), String> {
    let config = GameConfig::load_or_default(DEFAULT_CONFIG_PATH)?;

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    let mut window = video_subsystem
        .window(WINDOW_TITLE, config.window_width, config.window_height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;
    set_window_icon(&mut window, &config.asset_path("icon.png"));

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    let texture_creator = canvas.texture_creator();
    let mut event_pump = sdl_context.event_pump()?;

    let textures = GameTextures::load(&texture_creator, &config);
    let metrics = textures.metrics(&config);
    for color in CarColor::ALL {
        let (w, h) = metrics.cars.get(color);
        println!("  - {} car: {}x{}", color.name(), w, h);
    }
    println!("  - player: {}x{}", metrics.player.0, metrics.player.1);

    let screenshot_path = config.screenshot_path();
    let frame_duration = Duration::from_secs(1) / config.target_fps;
    let mut show_hitboxes = config.show_hitboxes;

    let mut pause_menu = PauseMenu::new(config.window_width, config.window_height);
    let game_over_screen = GameOverScreen::new();
    let score_display = ScoreDisplay::new();
    let mut input = InputSystem::new();
    let mut game = Game::new(config, metrics);

    // Blurred snapshot behind the pause menu / game over screen
    let mut backdrop: Option<Texture> = None;

    print_controls();

    let mut last_frame = Instant::now();

    'running: loop {
        let frame_start = Instant::now();

        let events: Vec<Event> = event_pump.poll_iter().collect();
        for event in events {
            let Some(action) = input.translate(&event, game.status()) else {
                continue;
            };
            match action {
                GameAction::Quit => break 'running,
                GameAction::Pause => {
                    if game.pause() {
                        let mouse = event_pump.mouse_state();
                        pause_menu.open(mouse.x(), mouse.y());
                        println!("Paused");
                    }
                }
                GameAction::ToggleHitboxes => {
                    show_hitboxes = !show_hitboxes;
                    println!("Collision boxes: {}", if show_hitboxes { "ON" } else { "OFF" });
                }
                GameAction::Resume => {
                    if game.resume() {
                        backdrop = None;
                        println!("Resumed");
                    }
                }
                GameAction::MenuUp => pause_menu.navigate_up(),
                GameAction::MenuDown => pause_menu.navigate_down(),
                GameAction::MouseMove(x, y) => pause_menu.track_cursor(x, y),
                GameAction::MenuConfirm | GameAction::Click(..) => {
                    let chosen = match action {
                        GameAction::Click(x, y) => pause_menu.click(x, y),
                        _ => pause_menu.selected_option(),
                    };
                    match chosen {
                        Some(PauseOption::Resume) => {
                            if game.resume() {
                                backdrop = None;
                                println!("Resumed");
                            }
                        }
                        Some(PauseOption::Exit) => break 'running,
                        None => {}
                    }
                }
                GameAction::Restart => {
                    if game.restart() {
                        backdrop = None;
                        println!("Restarted");
                    }
                }
            }
        }

        if game.status() == GameStatus::Paused {
            let mouse = event_pump.mouse_state();
            pause_menu.track_cursor(mouse.x(), mouse.y());
        }

        if game.status() == GameStatus::Playing {
            let (dx, dy) = InputSystem::movement(&event_pump.keyboard_state());
            game.set_movement(dx, dy);
        }

        let now = Instant::now();
        let dt_ms = now.duration_since(last_frame).as_millis() as u64;
        last_frame = now;

        for event in game.tick(dt_ms) {
            match event {
                GameEvent::Crashed { score } => {
                    let (x, y) = game.player().position();
                    println!("Crashed at ({}, {})! Final score: {}", x, y, score);
                }
                GameEvent::CarSpawned { color, lane } if show_hitboxes => {
                    println!("Spawned {} car in lane {}", color.name(), lane.column());
                }
                _ => {}
            }
        }

        // The scene is only redrawn while it is visible; once an overlay is up
        // the frozen frame lives on in the backdrop.
        if game.status() == GameStatus::Playing || backdrop.is_none() {
            render_scene(&mut canvas, &textures, &game, show_hitboxes)?;
            score_display.render(&mut canvas, game.score())?;
        }

        if game.status().shows_overlay() {
            if backdrop.is_none() {
                backdrop = Some(capture_backdrop(
                    &canvas,
                    &texture_creator,
                    game.config().blur_radius,
                    &screenshot_path,
                )?);
            }
            if let Some(texture) = &backdrop {
                canvas.copy(texture, None, None)?;
            }

            match game.status() {
                GameStatus::Paused => pause_menu.render(&mut canvas)?,
                GameStatus::GameOver => game_over_screen.render(&mut canvas, game.score())?,
                GameStatus::Playing => {}
            }
        }

        canvas.present();

        // Cap framerate
        if let Some(remaining) = frame_duration.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(remaining);
        }
    }

    Ok(())
}
