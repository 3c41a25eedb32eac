//! Pixel-art placeholder images
//!
//! Draws tiny SVG sprites and backdrops locally so every character, enemy and
//! scene still has art when the image generator cannot be reached. Sprites are
//! 16x16, backgrounds 64x36; pixels are emitted as horizontal runs.

use std::fmt::Write as _;

use crate::application::ports::outbound::PlaceholderImagePort;
use crate::domain::value_objects::{CharacterClass, EnemyKind, GeneratedImage, ImageSubject};

pub const SVG_MIME_TYPE: &str = "image/svg+xml";

const SPRITE_SIZE: u32 = 16;
const BACKGROUND_WIDTH: u32 = 64;
const BACKGROUND_HEIGHT: u32 = 36;
/// Rendered size of one art pixel
const PIXEL_SCALE: u32 = 8;

// Lovecraftian palette
const VOID: &str = "#0d0a12";
const SMOKE: &str = "#2a2533";
const DEEP_PURPLE: &str = "#3b1f4f";
const VIOLET: &str = "#6a3d8a";
const SICKLY_GREEN: &str = "#7a9a3a";
const BILE: &str = "#b4c85a";
const PALE_SKIN: &str = "#d9c7a7";
const BONE: &str = "#e8e2d0";
const BLOOD: &str = "#8a1c2b";
const BRASS: &str = "#b08d3c";

/// A fixed-size grid of optional colors
#[derive(Debug, Clone)]
pub struct PixelCanvas {
    width: u32,
    height: u32,
    pixels: Vec<Option<&'static str>>,
}

impl PixelCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![None; (width * height) as usize],
        }
    }

    pub fn get(&self, x: u32, y: u32) -> Option<&'static str> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels[(y * self.width + x) as usize]
    }

    /// Out-of-bounds writes are ignored
    pub fn set(&mut self, x: u32, y: u32, color: &'static str) {
        if x < self.width && y < self.height {
            self.pixels[(y * self.width + x) as usize] = Some(color);
        }
    }

    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: &'static str) {
        for py in y..y.saturating_add(h) {
            for px in x..x.saturating_add(w) {
                self.set(px, py, color);
            }
        }
    }

    pub fn to_svg(&self, background: &str) -> String {
        let mut svg = String::new();
        let _ = write!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{pw}" height="{ph}" shape-rendering="crispEdges">"#,
            w = self.width,
            h = self.height,
            pw = self.width * PIXEL_SCALE,
            ph = self.height * PIXEL_SCALE,
        );
        let _ = write!(
            svg,
            r#"<rect width="{}" height="{}" fill="{}"/>"#,
            self.width, self.height, background
        );

        for y in 0..self.height {
            let mut x = 0;
            while x < self.width {
                let Some(color) = self.get(x, y) else {
                    x += 1;
                    continue;
                };
                let start = x;
                while x < self.width && self.get(x, y) == Some(color) {
                    x += 1;
                }
                let _ = write!(
                    svg,
                    r#"<rect x="{start}" y="{y}" width="{}" height="1" fill="{color}"/>"#,
                    x - start
                );
            }
        }

        svg.push_str("</svg>");
        svg
    }
}

/// Draws placeholder art for every image subject
#[derive(Debug, Clone, Copy, Default)]
pub struct PixelArtPlaceholder;

impl PixelArtPlaceholder {
    /// Draw the subject and return the canvas with its backdrop color
    pub fn draw(&self, subject: ImageSubject) -> (PixelCanvas, &'static str) {
        match subject {
            ImageSubject::Character(class) => (draw_character(class), SMOKE),
            ImageSubject::Enemy(kind) => (draw_enemy(kind), VOID),
            ImageSubject::Background => (draw_background(), VOID),
            ImageSubject::UiElement => (draw_ui_element(), VOID),
        }
    }
}

impl PlaceholderImagePort for PixelArtPlaceholder {
    fn render(&self, subject: ImageSubject) -> GeneratedImage {
        let (canvas, background) = self.draw(subject);
        GeneratedImage::from_bytes(SVG_MIME_TYPE, canvas.to_svg(background).as_bytes())
    }
}

fn draw_humanoid(canvas: &mut PixelCanvas, skin: &'static str, body: &'static str, legs: &'static str) {
    canvas.fill_rect(6, 3, 4, 4, skin);
    canvas.set(7, 5, VOID);
    canvas.set(8, 5, VOID);
    canvas.fill_rect(5, 7, 6, 5, body);
    canvas.fill_rect(4, 8, 1, 3, body);
    canvas.fill_rect(11, 8, 1, 3, body);
    canvas.fill_rect(6, 12, 1, 3, legs);
    canvas.fill_rect(9, 12, 1, 3, legs);
}

fn draw_character(class: CharacterClass) -> PixelCanvas {
    let mut canvas = PixelCanvas::new(SPRITE_SIZE, SPRITE_SIZE);
    match class {
        CharacterClass::Detective => {
            draw_humanoid(&mut canvas, PALE_SKIN, BRASS, VOID);
            // fedora
            canvas.fill_rect(5, 0, 6, 2, VOID);
            canvas.fill_rect(4, 2, 8, 1, VOID);
            // glowing eye
            canvas.set(8, 5, SICKLY_GREEN);
            canvas.fill_rect(7, 7, 2, 3, BONE);
        }
        CharacterClass::Witch => {
            draw_humanoid(&mut canvas, PALE_SKIN, DEEP_PURPLE, DEEP_PURPLE);
            // pointed hat
            canvas.fill_rect(7, 0, 2, 1, VIOLET);
            canvas.fill_rect(6, 1, 4, 1, VIOLET);
            canvas.fill_rect(4, 2, 8, 1, VIOLET);
            // crystal ball
            canvas.fill_rect(12, 9, 2, 2, BILE);
            canvas.set(7, 9, BLOOD);
            canvas.set(8, 10, BLOOD);
        }
        CharacterClass::Scientist => {
            draw_humanoid(&mut canvas, PALE_SKIN, BONE, SMOKE);
            canvas.fill_rect(6, 2, 4, 1, VOID);
            // goggles
            canvas.fill_rect(6, 4, 4, 1, BRASS);
            // mutated arm and flask
            canvas.fill_rect(11, 8, 1, 3, SICKLY_GREEN);
            canvas.fill_rect(12, 10, 1, 2, BILE);
        }
        CharacterClass::Healer => {
            draw_humanoid(&mut canvas, BONE, SMOKE, SMOKE);
            // hood and plague mask beak
            canvas.fill_rect(5, 2, 6, 1, SMOKE);
            canvas.fill_rect(10, 5, 2, 1, BONE);
            canvas.fill_rect(7, 8, 2, 1, SICKLY_GREEN);
            canvas.fill_rect(7, 7, 1, 3, SICKLY_GREEN);
        }
    }
    canvas
}

fn draw_enemy(kind: EnemyKind) -> PixelCanvas {
    let mut canvas = PixelCanvas::new(SPRITE_SIZE, SPRITE_SIZE);
    match kind {
        EnemyKind::Cultist => {
            draw_humanoid(&mut canvas, SICKLY_GREEN, DEEP_PURPLE, VOID);
            // hood and fish mask
            canvas.fill_rect(5, 2, 6, 2, DEEP_PURPLE);
            canvas.fill_rect(6, 4, 4, 3, SICKLY_GREEN);
            canvas.set(6, 5, BILE);
            canvas.set(9, 5, BILE);
            // ritual dagger
            canvas.fill_rect(12, 7, 1, 4, BONE);
            canvas.set(12, 11, BLOOD);
        }
        EnemyKind::CosmicHorror => {
            canvas.fill_rect(5, 4, 6, 2, VIOLET);
            canvas.fill_rect(3, 6, 10, 7, VIOLET);
            for (x, y) in [(5, 7), (9, 6), (7, 9), (11, 9), (4, 10), (8, 11)] {
                canvas.set(x, y, BILE);
            }
            for (x, len) in [(3, 3), (6, 2), (9, 3), (12, 2)] {
                canvas.fill_rect(x, 13, 1, len, SICKLY_GREEN);
            }
        }
        EnemyKind::Boss => {
            canvas.fill_rect(4, 5, 8, 11, DEEP_PURPLE);
            canvas.fill_rect(6, 1, 4, 4, BONE);
            for x in [5, 7, 8, 10] {
                canvas.set(x, 0, BILE);
            }
            canvas.set(7, 3, BLOOD);
            canvas.set(8, 3, BLOOD);
            // forbidden tome
            canvas.fill_rect(2, 9, 2, 3, BRASS);
            // reality tear
            canvas.fill_rect(13, 3, 1, 9, SICKLY_GREEN);
        }
    }
    canvas
}

fn draw_background() -> PixelCanvas {
    let mut canvas = PixelCanvas::new(BACKGROUND_WIDTH, BACKGROUND_HEIGHT);
    canvas.fill_rect(0, 0, BACKGROUND_WIDTH, 12, DEEP_PURPLE);
    canvas.fill_rect(0, 12, BACKGROUND_WIDTH, 12, VIOLET);
    canvas.fill_rect(0, 24, BACKGROUND_WIDTH, 12, SMOKE);
    // gibbous moon
    canvas.fill_rect(50, 4, 5, 5, BONE);
    canvas.fill_rect(53, 4, 2, 2, DEEP_PURPLE);
    // gothic skyline
    for (x, w, top) in [(2, 8, 14), (12, 6, 10), (20, 10, 16), (34, 7, 8), (44, 9, 13), (56, 6, 18)] {
        canvas.fill_rect(x, top, w, 24 - top, VOID);
        canvas.fill_rect(x + w / 2, top.saturating_sub(3), 1, 3, VOID);
        canvas.set(x + 2, top + 3, BILE);
    }
    // ground mist
    for x in (0..BACKGROUND_WIDTH).step_by(3) {
        canvas.set(x, 26, SICKLY_GREEN);
    }
    canvas
}

fn draw_ui_element() -> PixelCanvas {
    let mut canvas = PixelCanvas::new(SPRITE_SIZE, SPRITE_SIZE);
    canvas.fill_rect(1, 1, 14, 14, BRASS);
    canvas.fill_rect(2, 2, 12, 12, DEEP_PURPLE);
    // elder sign
    canvas.fill_rect(7, 4, 2, 8, BILE);
    canvas.fill_rect(4, 7, 8, 2, BILE);
    canvas
}
