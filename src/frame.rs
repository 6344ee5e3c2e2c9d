//! Per-frame ordering: update everything, then render from the settled state.
use tracing::debug;

use crate::config::Settings;
use crate::render::depth::DepthBuffer;
use crate::render::framebuffer::Framebuffer;
use crate::render::render3d::render_3d;
use crate::render::sprites::render_sprites;
use crate::render::textures::{TextureKey, TextureManager};
use crate::world::grid::Grid;
use crate::world::objects::{DynamicObject, ObjectList};
use crate::world::player::{InputState, Pose};

/// Everything that changes between frames, plus the grid.
pub struct Scene {
    pub grid: Grid,
    pub pose: Pose,
    pub objects: ObjectList,
    pub settings: Settings,
}

impl Scene {
    pub fn new(grid: Grid, pose: Pose, settings: Settings) -> Self {
        Self { grid, pose, objects: ObjectList::new(), settings }
    }

    /// Input step, projectile spawn, object update and purge, in that order.
    pub fn update(&mut self, input: &InputState, dt: f32) {
        self.pose.step(input, dt, &self.settings, &self.grid);
        if input.fire {
            let fireball = DynamicObject::fireball(&self.pose, &self.settings);
            debug!(x = fireball.pos.x, y = fireball.pos.y, "fireball spawned");
            self.objects.spawn(fireball);
        }
        self.objects.update(dt, &self.grid);
        self.objects.purge_removed();
    }
}

/// Screen-sized color and depth targets.
pub struct Frame {
    pub framebuffer: Framebuffer,
    pub depth: DepthBuffer,
}

impl Frame {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            framebuffer: Framebuffer::new(width, height),
            depth: DepthBuffer::new(width, height),
        }
    }

    /// One full frame: reset depth, update the scene, then walls and sprites.
    pub fn advance(&mut self, scene: &mut Scene, input: &InputState, dt: f32, textures: &TextureManager) {
        self.depth.reset();
        scene.update(input, dt);
        self.draw(scene, textures);
    }

    /// Renders `scene` as it is now. The shared borrow keeps it unchanged
    /// for the whole pass.
    pub fn render(&mut self, scene: &Scene, textures: &TextureManager) {
        self.depth.reset();
        self.draw(scene, textures);
    }

    fn draw(&mut self, scene: &Scene, textures: &TextureManager) {
        self.framebuffer.clear();
        render_3d(
            &mut self.framebuffer,
            &mut self.depth,
            &scene.grid,
            &scene.pose,
            &scene.settings,
            textures.get(TextureKey::Wall),
        );
        render_sprites(
            &mut self.framebuffer,
            &mut self.depth,
            &scene.pose,
            &scene.settings,
            textures,
            scene.objects.iter(),
        );
    }
}
