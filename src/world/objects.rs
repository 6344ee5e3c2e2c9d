//! Dynamic objects: static props, moving objects and grid-colliding projectiles.
use raylib::prelude::*;
use tracing::debug;

use crate::config::Settings;
use crate::render::textures::TextureKey;
use crate::world::grid::Grid;
use crate::world::player::Pose;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ObjectState {
    Active,
    /// Terminal. Purged by the owning list after the update pass.
    Removed,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Motion {
    Static,
    Moving { velocity: Vector2 },
    /// Moves like `Moving`, removed on leaving the grid or entering a solid cell.
    Projectile { velocity: Vector2 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct DynamicObject {
    pub texture: TextureKey,
    pub pos: Vector2,
    pub scale: f32,
    pub motion: Motion,
    state: ObjectState,
}

impl DynamicObject {
    pub fn new(texture: TextureKey, x: f32, y: f32) -> Self {
        Self {
            texture,
            pos: Vector2::new(x, y),
            scale: 1.0,
            motion: Motion::Static,
            state: ObjectState::Active,
        }
    }

    pub fn moving(texture: TextureKey, x: f32, y: f32, vx: f32, vy: f32) -> Self {
        Self { motion: Motion::Moving { velocity: Vector2::new(vx, vy) }, ..Self::new(texture, x, y) }
    }

    pub fn projectile(texture: TextureKey, x: f32, y: f32, vx: f32, vy: f32) -> Self {
        Self {
            motion: Motion::Projectile { velocity: Vector2::new(vx, vy) },
            ..Self::new(texture, x, y)
        }
    }

    /// A fireball leaving the player along their heading, already
    /// `projectile_lead` seconds into its flight.
    pub fn fireball(pose: &Pose, settings: &Settings) -> Self {
        let dir = pose.direction();
        let vx = dir.x * settings.projectile_speed;
        let vy = dir.y * settings.projectile_speed;
        let mut obj = Self::projectile(
            TextureKey::Fireball,
            pose.pos.x + vx * settings.projectile_lead,
            pose.pos.y + vy * settings.projectile_lead,
            vx,
            vy,
        );
        obj.scale = settings.projectile_scale;
        obj
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    #[inline]
    pub fn state(&self) -> ObjectState {
        self.state
    }

    #[inline]
    pub fn is_removed(&self) -> bool {
        self.state == ObjectState::Removed
    }

    pub fn update(&mut self, dt: f32, grid: &Grid) {
        if self.is_removed() {
            return;
        }
        match self.motion {
            Motion::Static => {}
            Motion::Moving { velocity } => self.integrate(velocity, dt),
            Motion::Projectile { velocity } => {
                self.integrate(velocity, dt);
                if projectile_blocked(grid, self.pos) {
                    debug!(x = self.pos.x, y = self.pos.y, "projectile removed");
                    self.state = ObjectState::Removed;
                }
            }
        }
    }

    #[inline]
    fn integrate(&mut self, velocity: Vector2, dt: f32) {
        self.pos.x += velocity.x * dt;
        self.pos.y += velocity.y * dt;
    }
}

fn projectile_blocked(grid: &Grid, pos: Vector2) -> bool {
    if pos.x < 0.0 || pos.y < 0.0 || pos.x >= grid.width() as f32 || pos.y >= grid.height() as f32 {
        return true;
    }
    grid.is_solid(pos.x as i32, pos.y as i32)
}

/// Ordered owner of every live object. Order does not affect rendering.
#[derive(Clone, Debug, Default)]
pub struct ObjectList {
    objects: Vec<DynamicObject>,
}

impl ObjectList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, obj: DynamicObject) {
        self.objects.push(obj);
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DynamicObject> {
        self.objects.iter()
    }

    pub fn update(&mut self, dt: f32, grid: &Grid) {
        for obj in &mut self.objects {
            obj.update(dt, grid);
        }
    }

    /// Drops removed objects, keeping the rest in order. Returns how many went.
    pub fn purge_removed(&mut self) -> usize {
        let before = self.objects.len();
        self.objects.retain(|o| !o.is_removed());
        let purged = before - self.objects.len();
        if purged > 0 {
            debug!(purged, remaining = self.objects.len(), "purged removed objects");
        }
        purged
    }
}
