use grid_raycaster::render::casters::cast_ray;
use grid_raycaster::render::textures::{Pixmap, Texture, TextureKey, TextureManager};
use grid_raycaster::world::grid::Grid;
use grid_raycaster::world::objects::{DynamicObject, ObjectState};
use grid_raycaster::world::player::{InputState, Pose};
use grid_raycaster::{Frame, Scene, Settings};
use raylib::prelude::*;

const W: u32 = 60;
const H: u32 = 40;

#[test]
fn sample_map_border_is_four_units_ahead() {
    let grid = Grid::sample();
    let pose = Pose::new(2.0, 2.0, 0.0);
    let hit = cast_ray(pose.pos, pose.direction(), &grid, 16.0);
    assert!(hit.hit);
    assert!((hit.distance - 4.0).abs() < 1e-4);
}

#[test]
fn projectile_into_empty_and_solid_cells() {
    let grid = Grid::sample();
    let mut o = DynamicObject::projectile(TextureKey::Fireball, 3.0, 3.0, 2.0, 0.0);
    o.update(0.5, &grid);
    assert_eq!(o.pos, Vector2::new(4.0, 3.0));
    assert_eq!(o.state(), ObjectState::Active);

    let blocked = Grid::parse("1111111\n1000001\n1000001\n1000101\n1111111\n").unwrap();
    let mut o = DynamicObject::projectile(TextureKey::Fireball, 3.0, 3.0, 2.0, 0.0);
    o.update(0.5, &blocked);
    assert_eq!(o.state(), ObjectState::Removed);
}

#[test]
fn removed_projectile_never_renders() {
    let mut textures = TextureManager::procedural();
    // a bright, fully opaque fireball so any drawn pixel is easy to spot
    let marker = Color::new(1, 254, 3, 255);
    textures.insert(TextureKey::Fireball, Pixmap::solid(4, 4, marker));
    let mut scene = Scene::new(Grid::sample(), Pose::new(2.5, 2.5, 0.0), Settings::default());
    scene.objects.spawn(DynamicObject::projectile(TextureKey::Fireball, 4.5, 2.5, 2.0, 0.0));
    let mut frame = Frame::new(W, H);

    let idle = InputState::default();
    frame.advance(&mut scene, &idle, 0.25, &textures);
    assert_eq!(scene.objects.len(), 1);
    assert!(frame.framebuffer.color_buffer.contains(&marker));

    // 5.0 -> 5.5 -> 6.0: the third step lands in the border column
    frame.advance(&mut scene, &idle, 0.25, &textures);
    assert!(frame.framebuffer.color_buffer.contains(&marker));
    frame.advance(&mut scene, &idle, 0.25, &textures);
    assert!(scene.objects.is_empty());
    assert!(!frame.framebuffer.color_buffer.contains(&marker));
}

#[test]
fn sprite_behind_wall_is_hidden() {
    let mut textures = TextureManager::procedural();
    let marker = Color::new(1, 254, 3, 255);
    textures.insert(TextureKey::Lamp, Pixmap::solid(4, 4, marker));
    // the inner wall at row 5 sits between the player and the lamp
    let mut scene = Scene::new(Grid::sample(), Pose::new(4.5, 4.5, std::f32::consts::FRAC_PI_2), Settings::default());
    scene.objects.spawn(DynamicObject::new(TextureKey::Lamp, 4.5, 6.5));
    let mut frame = Frame::new(W, H);
    frame.render(&scene, &textures);
    assert!(!frame.framebuffer.color_buffer.contains(&marker));

    // with the wall gone the lamp shows up
    scene.grid.set(4, 5, grid_raycaster::world::grid::Cell::Empty);
    frame.render(&scene, &textures);
    assert!(frame.framebuffer.color_buffer.contains(&marker));
}

#[test]
fn every_pixel_is_covered_and_depth_is_finite() {
    let scene = Scene::new(Grid::sample(), Pose::new(2.5, 3.5, 0.7), Settings::default());
    let textures = TextureManager::procedural();
    let mut frame = Frame::new(W, H);
    frame.render(&scene, &textures);
    for y in 0..H as i32 {
        for x in 0..W as i32 {
            let d = frame.depth.get(x, y).unwrap();
            assert!(d.is_finite() && d >= 0.0, "({x}, {y}) = {d}");
        }
    }
}

#[test]
fn walking_then_rendering_uses_updated_pose() {
    let textures = TextureManager::procedural();
    let mut scene = Scene::new(Grid::sample(), Pose::new(2.0, 2.5, 0.0), Settings::default());
    let mut frame = Frame::new(W, H);
    let mid = (W / 2) as i32;

    frame.advance(&mut scene, &InputState::default(), 0.0, &textures);
    let far = frame.depth.get(mid, (H / 2) as i32).unwrap();

    let forward = InputState { forward: true, ..Default::default() };
    frame.advance(&mut scene, &forward, 1.0, &textures);
    let near = frame.depth.get(mid, (H / 2) as i32).unwrap();
    assert!((far - near - 1.0).abs() < 1e-3, "far={far} near={near}");
}

#[test]
fn wall_texture_is_sampled_across_the_face() {
    let grid = Grid::sample();
    let tex = TextureManager::procedural();
    let wall = tex.get(TextureKey::Wall);
    assert_eq!(wall.size(), (64, 64));
    // hits along one face produce a spread of u values, not a single texel column
    let settings = Settings::default();
    let pose = Pose::new(2.5, 2.5, 0.0);
    let mut us = Vec::new();
    for x in 0..W {
        let a = grid_raycaster::render::render3d::column_angle(&pose, &settings, x, W);
        let hit = cast_ray(pose.pos, Vector2::new(a.cos(), a.sin()), &grid, 16.0);
        let hx = pose.pos.x + a.cos() * hit.distance;
        let hy = pose.pos.y + a.sin() * hit.distance;
        us.push(grid_raycaster::render::render3d::wall_u(hx, hy));
    }
    let min = us.iter().cloned().fold(f32::INFINITY, f32::min);
    let max = us.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
    assert!(max - min > 0.5);
}
