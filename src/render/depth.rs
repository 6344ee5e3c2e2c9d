use raylib::prelude::*;

use crate::render::framebuffer::Framebuffer;

/// Closest distance drawn so far at every screen pixel.
///
/// Every pixel write from walls, ceiling/floor fills and sprites goes through
/// [`DepthBuffer::test_and_write`], so draw order between them never matters.
#[derive(Clone, Debug)]
pub struct DepthBuffer {
    width: u32,
    height: u32,
    depth: Vec<f32>,
}

impl DepthBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            depth: vec![f32::INFINITY; (width * height) as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Starts a frame: every pixel accepts any finite distance.
    pub fn reset(&mut self) {
        self.depth.fill(f32::INFINITY);
    }

    /// Records `distance` at (x, y) if it is strictly closer than what is there.
    /// Off-screen coordinates are rejected.
    #[inline]
    pub fn test_and_write(&mut self, x: i32, y: i32, distance: f32) -> bool {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return false;
        }
        let slot = &mut self.depth[(y as u32 * self.width + x as u32) as usize];
        if distance < *slot {
            *slot = distance;
            true
        } else {
            false
        }
    }

    pub fn get(&self, x: i32, y: i32) -> Option<f32> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(self.depth[(y as u32 * self.width + x as u32) as usize])
    }
}

/// Depth-gated pixel write shared by the column and sprite renderers.
#[inline]
pub fn plot(fb: &mut Framebuffer, depth: &mut DepthBuffer, x: i32, y: i32, color: Color, distance: f32) -> bool {
    if depth.test_and_write(x, y, distance) {
        fb.set_pixel_color(x as u32, y as u32, color);
        true
    } else {
        false
    }
}
