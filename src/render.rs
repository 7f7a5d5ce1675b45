/// Playing-scene rendering
///
/// Draws the road, every car and the player. Each sprite is optional: if an
/// image failed to load, a solid rectangle of the sprite's size is drawn in
/// its place so the game stays playable without the asset directory.
use crate::car::{Car, CarColor};
use crate::collision::Collidable;
use crate::config::GameConfig;
use crate::game::{Game, SpriteMetrics};
use crate::player::Player;
use sdl2::image::LoadTexture;
use sdl2::pixels::Color;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use std::collections::HashMap;
use std::path::Path;

const ROAD_FALLBACK: Color = Color::RGB(90, 90, 96);
const PLAYER_FALLBACK: Color = Color::RGB(220, 30, 30);
const HITBOX_COLOR: Color = Color::RGBA(255, 0, 0, 160);

/// Texture loading helper
///
/// Loads a texture from the given path with consistent error handling
pub fn load_texture<'a>(
    texture_creator: &'a TextureCreator<WindowContext>,
    path: &Path,
) -> Result<Texture<'a>, String> {
    texture_creator
        .load_texture(path)
        .map_err(|e| format!("Failed to load {}: {}", path.display(), e))
}

/// Like `load_texture` but logs and returns `None` on failure
fn load_optional<'a>(texture_creator: &'a TextureCreator<WindowContext>, path: &Path) -> Option<Texture<'a>> {
    match load_texture(texture_creator, path) {
        Ok(texture) => Some(texture),
        Err(e) => {
            eprintln!("Warning: {}, drawing a placeholder instead", e);
            None
        }
    }
}

/// Every image the road scene uses
pub struct GameTextures<'a> {
    pub road: Option<Texture<'a>>,
    pub player: Option<Texture<'a>>,
    pub cars: HashMap<CarColor, Texture<'a>>,
}

impl<'a> GameTextures<'a> {
    pub fn load(texture_creator: &'a TextureCreator<WindowContext>, config: &GameConfig) -> Self {
        let road = load_optional(texture_creator, &config.asset_path("road.png"));
        let player = load_optional(texture_creator, &config.asset_path("slime_red.png"));

        let cars = CarColor::ALL
            .iter()
            .filter_map(|color| {
                load_optional(texture_creator, &config.asset_path(&color.asset_name()))
                    .map(|texture| (*color, texture))
            })
            .collect::<HashMap<_, _>>();

        println!(
            "✓ Loaded textures: road {}, player {}, {}/{} cars",
            if road.is_some() { "yes" } else { "no" },
            if player.is_some() { "yes" } else { "no" },
            cars.len(),
            CarColor::ALL.len()
        );

        GameTextures { road, player, cars }
    }

    /// Sprite sizes from the loaded images, config sizes for anything missing
    pub fn metrics(&self, config: &GameConfig) -> SpriteMetrics {
        let mut metrics = SpriteMetrics::from_config(config);

        if let Some(texture) = &self.player {
            let q = texture.query();
            metrics.player = (q.width, q.height);
        }

        for (color, texture) in &self.cars {
            let q = texture.query();
            metrics.cars.set(*color, (q.width, q.height));
        }

        metrics
    }
}

/// Draws the road, cars, player and optional hitbox outlines
pub fn render_scene(
    canvas: &mut Canvas<Window>,
    textures: &GameTextures,
    game: &Game,
    show_hitboxes: bool,
) -> Result<(), String> {
    match &textures.road {
        Some(road) => canvas.copy(road, None, None)?,
        None => {
            canvas.set_draw_color(ROAD_FALLBACK);
            canvas.clear();
        }
    }

    for car in game.cars() {
        render_car(canvas, textures, car)?;
    }
    render_player(canvas, textures, game.player())?;

    if show_hitboxes {
        canvas.set_blend_mode(sdl2::render::BlendMode::Blend);
        canvas.set_draw_color(HITBOX_COLOR);
        canvas.draw_rect(game.player().get_bounds())?;
        for car in game.cars() {
            canvas.draw_rect(car.get_bounds())?;
        }
        canvas.set_blend_mode(sdl2::render::BlendMode::None);
    }

    Ok(())
}

fn render_car(canvas: &mut Canvas<Window>, textures: &GameTextures, car: &Car) -> Result<(), String> {
    let dest = car.get_bounds();
    match textures.cars.get(&car.color) {
        Some(texture) => canvas.copy(texture, None, dest),
        None => {
            let (r, g, b) = car.color.fallback_rgb();
            canvas.set_draw_color(Color::RGB(r, g, b));
            canvas.fill_rect(dest)
        }
    }
}

fn render_player(canvas: &mut Canvas<Window>, textures: &GameTextures, player: &Player) -> Result<(), String> {
    let dest = player.get_bounds();
    match &textures.player {
        Some(texture) => canvas.copy(texture, None, dest),
        None => {
            canvas.set_draw_color(PLAYER_FALLBACK);
            canvas.fill_rect(dest)
        }
    }
}
