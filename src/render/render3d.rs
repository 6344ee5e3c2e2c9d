//! Column renderer: one ray per screen column, flat ceiling/floor, textured walls.
use raylib::prelude::*;
use std::f32::consts::FRAC_PI_4;

use crate::config::Settings;
use crate::render::casters::cast_angle;
use crate::render::depth::{DepthBuffer, plot};
use crate::render::framebuffer::Framebuffer;
use crate::render::textures::Texture;
use crate::world::grid::Grid;
use crate::world::player::Pose;

/// Projection blows up at zero range; hits closer than this are drawn as if here.
const MIN_WALL_DISTANCE: f32 = 1e-3;

/// Horizontal texture coordinate of a wall hit.
///
/// The hit point's angle around the centre of the cell containing it picks
/// the face: the north and south quarters (angles in [-135°, -45°) and
/// [45°, 135°)) run along x, the east and west quarters run along y.
pub fn wall_u(hit_x: f32, hit_y: f32) -> f32 {
    let cell_x = hit_x.floor();
    let cell_y = hit_y.floor();
    let angle = (hit_y - cell_y - 0.5).atan2(hit_x - cell_x - 0.5);
    let fract_x = hit_x - cell_x;
    let fract_y = hit_y - cell_y;
    if (-3.0 * FRAC_PI_4..-FRAC_PI_4).contains(&angle) || (FRAC_PI_4..3.0 * FRAC_PI_4).contains(&angle) {
        fract_x
    } else {
        fract_y
    }
}

/// Ray angle for screen column `x` of `width`.
#[inline]
pub fn column_angle(pose: &Pose, settings: &Settings, x: u32, width: u32) -> f32 {
    pose.a - settings.half_fov() + (x as f32 / width as f32) * settings.fov
}

/// Casts and draws one screen column. Every pixel of the column, ceiling,
/// wall and floor alike, is depth-tested at the ray's distance.
pub fn render_column(
    fb: &mut Framebuffer,
    depth: &mut DepthBuffer,
    grid: &Grid,
    pose: &Pose,
    settings: &Settings,
    wall: &impl Texture,
    x: u32,
) {
    let h = fb.height as i32;
    let hh = fb.height as f32 * 0.5;
    let col = x as i32;
    let angle = column_angle(pose, settings, x, fb.width);
    let ray = cast_angle(pose.pos, angle, grid, settings.max_distance);

    if !ray.hit {
        // nothing in range: split the column at the horizon
        let horizon = hh as i32;
        for y in 0..horizon {
            plot(fb, depth, col, y, settings.ceiling(), ray.distance);
        }
        for y in horizon..h {
            plot(fb, depth, col, y, settings.floor(), ray.distance);
        }
        return;
    }

    let distance = ray.distance.max(MIN_WALL_DISTANCE);
    let half_height = fb.height as f32 / (2.0 * distance);
    let ceiling = (hh - half_height) as i32;
    let floor = (hh + half_height) as i32;

    for y in 0..ceiling.clamp(0, h) {
        plot(fb, depth, col, y, settings.ceiling(), distance);
    }

    let hit_x = pose.pos.x + angle.cos() * distance;
    let hit_y = pose.pos.y + angle.sin() * distance;
    let u = wall_u(hit_x, hit_y);
    let span = floor as f32 - ceiling as f32;
    for y in ceiling.max(0)..floor.min(h) {
        let v = (y as f32 - ceiling as f32) / span;
        plot(fb, depth, col, y, wall.sample(u, v), distance);
    }

    for y in floor.max(0)..h {
        plot(fb, depth, col, y, settings.floor(), distance);
    }
}

/// Draws every column of the framebuffer.
pub fn render_3d(
    fb: &mut Framebuffer,
    depth: &mut DepthBuffer,
    grid: &Grid,
    pose: &Pose,
    settings: &Settings,
    wall: &impl Texture,
) {
    for x in 0..fb.width {
        render_column(fb, depth, grid, pose, settings, wall, x);
    }
}
