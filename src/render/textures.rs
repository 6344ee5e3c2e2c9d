use raylib::prelude::*;
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

/// Anything the renderers can sample with normalized coordinates.
pub trait Texture {
    /// `u`, `v` in `[0, 1]`; values outside are clamped to the edge texel.
    fn sample(&self, u: f32, v: f32) -> Color;
    fn size(&self) -> (u32, u32);
}

/// Immutable CPU pixmap, sampled nearest-neighbour.
#[derive(Clone, Debug)]
pub struct Pixmap {
    w: u32,
    h: u32,
    px: Vec<Color>,
}

impl Pixmap {
    /// `px` holds `w * h` colors, row-major. Zero sizes become 1 and a
    /// short buffer is padded with transparent texels.
    pub fn new(w: u32, h: u32, mut px: Vec<Color>) -> Self {
        let (w, h) = (w.max(1), h.max(1));
        px.resize((w * h) as usize, Color::new(0, 0, 0, 0));
        Self { w, h, px }
    }

    pub fn solid(w: u32, h: u32, color: Color) -> Self {
        Self::new(w, h, vec![color; (w * h) as usize])
    }

    #[inline]
    pub fn texel(&self, x: u32, y: u32) -> Color {
        let xi = x.min(self.w - 1) as usize;
        let yi = y.min(self.h - 1) as usize;
        self.px[yi * self.w as usize + xi]
    }
}

impl Texture for Pixmap {
    #[inline]
    fn sample(&self, u: f32, v: f32) -> Color {
        // negative and NaN both saturate to 0 in the cast
        let x = (u * self.w as f32) as u32;
        let y = (v * self.h as f32) as u32;
        self.texel(x, y)
    }

    #[inline]
    fn size(&self) -> (u32, u32) {
        (self.w, self.h)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TextureKey {
    Wall,
    Lamp,
    Fireball,
}

impl TextureKey {
    pub const ALL: [TextureKey; 3] = [TextureKey::Wall, TextureKey::Lamp, TextureKey::Fireball];

    fn file_name(self) -> &'static str {
        match self {
            TextureKey::Wall => "wall.png",
            TextureKey::Lamp => "lamp.png",
            TextureKey::Fireball => "fireball.png",
        }
    }
}

pub struct TextureManager {
    maps: HashMap<TextureKey, Pixmap>,
}

impl TextureManager {
    /// Procedural textures only; never touches the filesystem.
    pub fn procedural() -> Self {
        let maps = TextureKey::ALL.iter().map(|&k| (k, Self::fallback(k))).collect();
        Self { maps }
    }

    /// Loads `<dir>/<key>.png` for every key, falling back to the
    /// procedural texture for files that are missing or unreadable.
    pub fn load(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        let mut maps = HashMap::new();
        for key in TextureKey::ALL {
            let path = dir.join(key.file_name());
            let loaded = path.to_str().and_then(|p| Image::load_image(p).ok());
            let pm = match loaded {
                Some(img) => {
                    let w = img.width().max(1) as u32;
                    let h = img.height().max(1) as u32;
                    let data = img.get_image_data().to_vec();
                    info!(?key, path = %path.display(), w, h, "loaded texture");
                    Pixmap::new(w, h, data)
                }
                None => {
                    warn!(?key, path = %path.display(), "texture not loaded, using procedural fallback");
                    Self::fallback(key)
                }
            };
            maps.insert(key, pm);
        }
        Self { maps }
    }

    pub fn insert(&mut self, key: TextureKey, pixmap: Pixmap) {
        self.maps.insert(key, pixmap);
    }

    pub fn get(&self, key: TextureKey) -> &Pixmap {
        // every key is filled at construction and never removed
        &self.maps[&key]
    }

    fn fallback(key: TextureKey) -> Pixmap {
        match key {
            TextureKey::Wall => Self::make_brick_pixmap(64, 64),
            TextureKey::Lamp => Self::make_lamp(32, 64),
            TextureKey::Fireball => Self::make_glowing_orb(64, 64, Color::new(255, 140, 30, 255)),
        }
    }

    /// Brick pattern with dark mortar lines.
    fn make_brick_pixmap(w: u32, h: u32) -> Pixmap {
        let brick = Color::new(150, 70, 50, 255);
        let mortar = Color::new(60, 55, 50, 255);
        let mut px = vec![brick; (w * h) as usize];
        let row_h = (h / 4).max(2);
        let brick_w = (w / 2).max(2);
        for y in 0..h {
            let row = y / row_h;
            let offset = if row % 2 == 0 { 0 } else { brick_w / 2 };
            for x in 0..w {
                if y % row_h == 0 || (x + offset) % brick_w == 0 {
                    px[(y * w + x) as usize] = mortar;
                } else if ((x ^ y) & 7) == 0 {
                    px[(y * w + x) as usize] = Self::mix(brick, Color::BLACK, 40);
                }
            }
        }
        Pixmap::new(w, h, px)
    }

    /// Standing lamp: thin pole with a bright shade, transparent elsewhere.
    fn make_lamp(w: u32, h: u32) -> Pixmap {
        let mut px = vec![Color::new(0, 0, 0, 0); (w * h) as usize];
        let pole = Color::new(90, 90, 100, 255);
        let shade = Color::new(255, 230, 140, 255);
        let cx = w / 2;
        let shade_h = h / 4;
        for y in 0..h {
            for x in 0..w {
                let i = (y * w + x) as usize;
                if y < shade_h {
                    // trapezoid, wider at the bottom
                    let half = w / 4 + (y * w / 4) / shade_h.max(1);
                    if x + half >= cx && x < cx + half {
                        px[i] = shade;
                    }
                } else if x + 1 >= cx && x <= cx + 1 {
                    px[i] = pole;
                } else if y >= h - 3 && x + w / 4 >= cx && x < cx + w / 4 {
                    px[i] = pole;
                }
            }
        }
        Pixmap::new(w, h, px)
    }

    fn make_glowing_orb(w: u32, h: u32, color: Color) -> Pixmap {
        let mut px = vec![Color::new(0, 0, 0, 0); (w * h) as usize];
        let cx = (w as f32) * 0.5;
        let cy = (h as f32) * 0.5;
        let r = (w.min(h) as f32) * 0.3;
        for y in 0..h {
            for x in 0..w {
                let dx = x as f32 - cx;
                let dy = y as f32 - cy;
                let d = (dx * dx + dy * dy).sqrt();
                let i = (y * w + x) as usize;
                if d <= r {
                    let t = (1.0 - (d / r)).clamp(0.0, 1.0);
                    let mut core = Self::mix(color, Color::WHITE, (t * 220.0) as u8);
                    core.a = 255;
                    px[i] = core;
                } else {
                    let t = (1.0 - ((d - r) / (r * 0.9))).clamp(0.0, 1.0);
                    if t > 0.0 {
                        let mut halo = color;
                        halo.a = (t * 180.0) as u8;
                        px[i] = halo;
                    }
                }
            }
        }
        Pixmap::new(w, h, px)
    }

    #[inline]
    fn mix(a: Color, b: Color, t: u8) -> Color {
        let ta = t as u16;
        let na = 255u16 - ta;
        let mixc = |x: u8, y: u8| -> u8 { (((x as u16) * na + (y as u16) * ta) / 255) as u8 };
        Color::new(mixc(a.r, b.r), mixc(a.g, b.g), mixc(a.b, b.b), mixc(a.a, b.a))
    }
}
