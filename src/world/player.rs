//! Player pose, held-key snapshot and the input-to-movement step.
use raylib::prelude::*;

use crate::config::Settings;
use crate::world::grid::Grid;

/// Held keys for one frame. `fire` is the pressed edge, not the held state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    pub forward: bool,
    pub backward: bool,
    pub turn_left: bool,
    pub turn_right: bool,
    pub strafe_left: bool,
    pub strafe_right: bool,
    pub fire: bool,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pose {
    pub pos: Vector2,
    pub a: f32, // heading, radians
}

impl Pose {
    pub fn new(x: f32, y: f32, angle: f32) -> Self {
        Self { pos: Vector2::new(x, y), a: angle }
    }

    #[inline]
    pub fn direction(&self) -> Vector2 {
        Vector2::new(self.a.cos(), self.a.sin())
    }

    /// Applies one frame of held-key movement.
    pub fn step(&mut self, input: &InputState, dt: f32, settings: &Settings, grid: &Grid) {
        if input.turn_left {
            self.a -= settings.turn_speed * dt;
        }
        if input.turn_right {
            self.a += settings.turn_speed * dt;
        }

        let (sin, cos) = self.a.sin_cos();
        let step = settings.move_speed * dt;
        let (mut dx, mut dy) = (0.0, 0.0);
        if input.forward {
            dx += cos * step;
            dy += sin * step;
        }
        if input.backward {
            dx -= cos * step;
            dy -= sin * step;
        }
        if input.strafe_left {
            dx += sin * step;
            dy -= cos * step;
        }
        if input.strafe_right {
            dx -= sin * step;
            dy += cos * step;
        }
        if dx == 0.0 && dy == 0.0 {
            return;
        }

        let r = settings.player_radius;
        if r <= 0.0 {
            self.pos.x += dx;
            self.pos.y += dy;
            return;
        }
        // slide: each axis is accepted on its own
        let nx = self.pos.x + dx;
        if is_free_with_radius(grid, nx, self.pos.y, r) {
            self.pos.x = nx;
        }
        let ny = self.pos.y + dy;
        if is_free_with_radius(grid, self.pos.x, ny, r) {
            self.pos.y = ny;
        }
    }
}

/// Outside the grid counts as blocked for movement, unlike for rays.
fn cell_blocked(grid: &Grid, wx: f32, wy: f32) -> bool {
    let i = wx.floor() as i32;
    let j = wy.floor() as i32;
    !grid.in_bounds(i, j) || grid.is_solid(i, j)
}

/// Samples the circle centre and eight points on its rim.
fn is_free_with_radius(grid: &Grid, wx: f32, wy: f32, r: f32) -> bool {
    let d = r * std::f32::consts::FRAC_1_SQRT_2;
    let samples = [
        (wx, wy),
        (wx + r, wy),
        (wx - r, wy),
        (wx, wy + r),
        (wx, wy - r),
        (wx + d, wy + d),
        (wx - d, wy + d),
        (wx + d, wy - d),
        (wx - d, wy - d),
    ];
    samples.iter().all(|&(sx, sy)| !cell_blocked(grid, sx, sy))
}
