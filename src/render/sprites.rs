//! Billboard sprites, depth-tested against whatever is already drawn.
use raylib::prelude::*;
use std::f32::consts::{PI, TAU};

use crate::config::Settings;
use crate::render::depth::{DepthBuffer, plot};
use crate::render::framebuffer::Framebuffer;
use crate::render::textures::{Texture, TextureManager};
use crate::world::objects::DynamicObject;
use crate::world::player::Pose;

/// Wraps an angle into `(-PI, PI]`.
#[inline]
pub fn normalize_angle(mut a: f32) -> f32 {
    while a > PI {
        a -= TAU;
    }
    while a <= -PI {
        a += TAU;
    }
    a
}

/// Projected half height is capped at this many screen heights.
const MAX_HALF_SPAN: f32 = 64.0;

/// Screen rectangle of a visible sprite. `top`/`left` may be off screen.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpriteRect {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
    pub distance: f32,
}

/// Projects a billboard at `pos` with `scale` and native `tex_size`.
///
/// Returns `None` when the bearing is outside the field of view or the
/// sprite is at or below `min_sprite_distance`.
///
/// The bottom edge mirrors the top edge about the screen centre, so the
/// sprite stays centred on the horizon at any scale.
pub fn project_sprite(
    pose: &Pose,
    settings: &Settings,
    pos: Vector2,
    scale: f32,
    tex_size: (u32, u32),
    screen_w: u32,
    screen_h: u32,
) -> Option<SpriteRect> {
    let dx = pos.x - pose.pos.x;
    let dy = pos.y - pose.pos.y;
    let heading = pose.a.sin().atan2(pose.a.cos());
    let bearing = normalize_angle(dy.atan2(dx) - heading);
    let distance = (dx * dx + dy * dy).sqrt();

    let hfov = settings.half_fov();
    if bearing < -hfov || bearing > hfov || distance <= settings.min_sprite_distance {
        return None;
    }

    let sh = screen_h as f32;
    let half_height = (sh / (2.0 * distance) * scale).min(sh * MAX_HALF_SPAN);
    let top = (sh * 0.5 - half_height) as i32;
    let bottom = screen_h as i32 - top;
    let height = bottom - top;
    let (tw, th) = tex_size;
    let aspect = tw as f32 / th.max(1) as f32;
    let width = (aspect * height as f32) as i32;
    let mid_x = ((bearing + hfov) / settings.fov * screen_w as f32) as i32;

    Some(SpriteRect { left: mid_x - width / 2, top, width, height, distance })
}

/// Draws one object. Fully transparent texels are skipped; the rest are
/// depth-tested at the object's distance.
pub fn draw_sprite(
    fb: &mut Framebuffer,
    depth: &mut DepthBuffer,
    pose: &Pose,
    settings: &Settings,
    texture: &impl Texture,
    pos: Vector2,
    scale: f32,
) -> bool {
    let Some(rect) = project_sprite(pose, settings, pos, scale, texture.size(), fb.width, fb.height)
    else {
        return false;
    };
    // only the on-screen part of the rectangle is visited
    let x0 = rect.left.saturating_neg().max(0);
    let x1 = rect.width.min((fb.width as i32).saturating_sub(rect.left));
    let y0 = rect.top.saturating_neg().max(0);
    let y1 = rect.height.min((fb.height as i32).saturating_sub(rect.top));
    for x in x0..x1 {
        let u = x as f32 / rect.width as f32;
        for y in y0..y1 {
            let v = y as f32 / rect.height as f32;
            let color = texture.sample(u, v);
            if color.a > 0 {
                plot(fb, depth, rect.left + x, rect.top + y, color, rect.distance);
            }
        }
    }
    true
}

/// Draws every live object. Order is irrelevant thanks to the depth test.
pub fn render_sprites<'a>(
    fb: &mut Framebuffer,
    depth: &mut DepthBuffer,
    pose: &Pose,
    settings: &Settings,
    textures: &TextureManager,
    objects: impl IntoIterator<Item = &'a DynamicObject>,
) -> usize {
    let mut drawn = 0;
    for obj in objects {
        if obj.is_removed() {
            continue;
        }
        let tex = textures.get(obj.texture);
        if draw_sprite(fb, depth, pose, settings, tex, obj.pos, obj.scale) {
            drawn += 1;
        }
    }
    drawn
}
