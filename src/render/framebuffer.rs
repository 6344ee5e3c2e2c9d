use raylib::core::texture::RaylibTexture2D;
use raylib::prelude::*;
use tracing::warn;

pub struct Framebuffer {
    pub color_buffer: Vec<Color>,
    pub width: u32,
    pub height: u32,
    pub background_color: Color,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        let bg = Color::BLACK;
        Self {
            color_buffer: vec![bg; size],
            width,
            height,
            background_color: bg,
        }
    }

    #[inline]
    pub fn clear(&mut self) {
        self.color_buffer.fill(self.background_color);
    }

    #[inline]
    pub fn set_pixel_color(&mut self, x: u32, y: u32, color: Color) {
        if x < self.width && y < self.height {
            self.color_buffer[(y * self.width + x) as usize] = color;
        }
    }

    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Color {
        if x < self.width && y < self.height {
            return self.color_buffer[(y * self.width + x) as usize];
        }
        self.background_color
    }

    #[inline]
    pub fn set_background_color(&mut self, c: Color) {
        self.background_color = c;
    }

    /// The pixels as tightly packed RGBA8 bytes.
    pub fn as_rgba_bytes(&self) -> &[u8] {
        let byte_len = self.color_buffer.len() * std::mem::size_of::<Color>();
        // Color is four u8 channels laid out as RGBA
        unsafe { std::slice::from_raw_parts(self.color_buffer.as_ptr() as *const u8, byte_len) }
    }

    /// Copies the pixels into a persistent RGBA8 GPU texture of the same size.
    pub fn upload_to_texture(&self, tex: &mut Texture2D) {
        if let Err(e) = tex.update_texture(self.as_rgba_bytes()) {
            warn!(error = ?e, width = self.width, height = self.height, "framebuffer upload failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_writes_are_ignored() {
        let mut fb = Framebuffer::new(4, 3);
        fb.set_pixel_color(4, 0, Color::RED);
        fb.set_pixel_color(0, 3, Color::RED);
        assert!(fb.color_buffer.iter().all(|&c| c == Color::BLACK));
        assert_eq!(fb.get_pixel(10, 10), Color::BLACK);
    }

    #[test]
    fn upload_bytes_are_rgba_rows() {
        let mut fb = Framebuffer::new(2, 1);
        fb.set_pixel_color(1, 0, Color::new(10, 20, 30, 40));
        assert_eq!(fb.as_rgba_bytes(), &[0, 0, 0, 255, 10, 20, 30, 40]);
    }

    #[test]
    fn clear_restores_background() {
        let mut fb = Framebuffer::new(2, 2);
        fb.set_background_color(Color::BLUE);
        fb.set_pixel_color(1, 1, Color::RED);
        assert_eq!(fb.get_pixel(1, 1), Color::RED);
        fb.clear();
        assert_eq!(fb.get_pixel(1, 1), Color::BLUE);
    }
}
