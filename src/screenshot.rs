//! Screenshot backdrop for the pause and game-over overlays
//!
//! When play stops, the current frame is read back from the renderer, written
//! to the screenshot file and blurred. The blurred copy becomes a texture that
//! the overlays draw behind their text.

use sdl2::image::SaveSurface;
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::surface::Surface;
use sdl2::video::{Window, WindowContext};
use std::path::Path;

/// Bytes per pixel of the captured frame (RGB24)
const CHANNELS: usize = 3;

/// Number of box blur passes used to approximate a Gaussian
const BOX_PASSES: usize = 3;

/// Read the current frame, save it and return a blurred texture of it.
///
/// Call after the scene has been drawn and before `present()`. Failing to
/// write the screenshot file is logged; the backdrop is still built from the
/// pixels in memory.
pub fn capture_backdrop<'a>(
    canvas: &Canvas<Window>,
    texture_creator: &'a TextureCreator<WindowContext>,
    blur_radius: u32,
    screenshot_path: &Path,
) -> Result<Texture<'a>, String> {
    let (width, height) = canvas.output_size()?;
    let pitch = width * CHANNELS as u32;
    let mut pixels = canvas.read_pixels(None, PixelFormatEnum::RGB24)?;

    {
        let surface = Surface::from_data(&mut pixels, width, height, pitch, PixelFormatEnum::RGB24)?;
        if let Err(e) = save_screenshot(&surface, screenshot_path) {
            eprintln!("Failed to write screenshot to {}: {}", screenshot_path.display(), e);
        }
    }

    gaussian_blur(&mut pixels, width as usize, height as usize, CHANNELS, blur_radius as f32);

    let surface = Surface::from_data(&mut pixels, width, height, pitch, PixelFormatEnum::RGB24)?;
    texture_creator
        .create_texture_from_surface(&surface)
        .map_err(|e| e.to_string())
}

fn save_screenshot(surface: &Surface, path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| e.to_string())?;
    }
    surface.save(path)
}

/// Box radii whose three passes approximate a Gaussian with std dev `sigma`
pub fn box_radii(sigma: f32, passes: usize) -> Vec<usize> {
    let sigma = sigma as f64;
    let n = passes as f64;

    let ideal_width = (12.0 * sigma * sigma / n + 1.0).sqrt();
    let mut lower = ideal_width.floor() as i64;
    if lower % 2 == 0 {
        lower -= 1;
    }
    let upper = lower + 2;

    let lower_f = lower as f64;
    let ideal_count = (12.0 * sigma * sigma - n * lower_f * lower_f - 4.0 * n * lower_f - 3.0 * n)
        / (-4.0 * lower_f - 4.0);
    let lower_count = ideal_count.round() as usize;

    (0..passes)
        .map(|i| if i < lower_count { lower } else { upper })
        .map(|size| (size.max(1) as usize - 1) / 2)
        .collect()
}

/// In-place Gaussian blur of a packed 8-bit image.
///
/// Approximated by three horizontal+vertical box blur passes; pixels past the
/// edge repeat the edge pixel. A radius of zero leaves the image unchanged.
pub fn gaussian_blur(pixels: &mut [u8], width: usize, height: usize, channels: usize, radius: f32) {
    if radius <= 0.0 || width == 0 || height == 0 {
        return;
    }
    debug_assert_eq!(pixels.len(), width * height * channels);

    let mut scratch = vec![0u8; pixels.len()];
    for box_radius in box_radii(radius, BOX_PASSES) {
        if box_radius == 0 {
            continue;
        }
        box_blur_horizontal(pixels, &mut scratch, width, height, channels, box_radius);
        box_blur_vertical(&scratch, pixels, width, height, channels, box_radius);
    }
}

fn box_blur_horizontal(src: &[u8], dst: &mut [u8], width: usize, height: usize, channels: usize, radius: usize) {
    for y in 0..height {
        let row = y * width * channels;
        for c in 0..channels {
            let at = |x: isize| src[row + x.clamp(0, width as isize - 1) as usize * channels + c] as u32;
            blur_line(width, radius, at, |x, value| dst[row + x * channels + c] = value);
        }
    }
}

fn box_blur_vertical(src: &[u8], dst: &mut [u8], width: usize, height: usize, channels: usize, radius: usize) {
    let stride = width * channels;
    for x in 0..width {
        for c in 0..channels {
            let column = x * channels + c;
            let at = |y: isize| src[y.clamp(0, height as isize - 1) as usize * stride + column] as u32;
            blur_line(height, radius, at, |y, value| dst[y * stride + column] = value);
        }
    }
}

/// Running-sum box filter along one line of `len` samples
fn blur_line(len: usize, radius: usize, at: impl Fn(isize) -> u32, mut write: impl FnMut(usize, u8)) {
    let r = radius as isize;
    let diameter = 2 * radius as u32 + 1;

    let mut sum: u32 = (-r..=r).map(&at).sum();
    for i in 0..len {
        write(i, ((sum + diameter / 2) / diameter) as u8);

        let i = i as isize;
        sum += at(i + r + 1);
        sum -= at(i - r);
    }
}
