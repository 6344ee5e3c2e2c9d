use std::path::PathBuf;

use clap::Parser;
use grid_raycaster::render::textures::{TextureKey, TextureManager};
use grid_raycaster::world::grid::Grid;
use grid_raycaster::world::objects::DynamicObject;
use grid_raycaster::world::player::{InputState, Pose};
use grid_raycaster::{Frame, Scene, Settings};
use rand::seq::SliceRandom;
use raylib::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "grid_raycaster", about = "First-person ray casting renderer for tile grids")]
struct Cli {
    /// Text map (`1`/`#` solid, `0`/`.` empty); the built-in level if omitted
    #[arg(long)]
    map: Option<PathBuf>,
    /// JSON settings file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Directory with wall.png, lamp.png and fireball.png
    #[arg(long)]
    assets: Option<PathBuf>,
    #[arg(long, default_value = "600")]
    width: u32,
    #[arg(long, default_value = "600")]
    height: u32,
    /// Extra lamps scattered over random empty cells
    #[arg(long, default_value = "0")]
    lamps: usize,
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn poll_input(rl: &RaylibHandle) -> InputState {
    InputState {
        forward: rl.is_key_down(KeyboardKey::KEY_W),
        backward: rl.is_key_down(KeyboardKey::KEY_S),
        turn_left: rl.is_key_down(KeyboardKey::KEY_A),
        turn_right: rl.is_key_down(KeyboardKey::KEY_D),
        strafe_left: rl.is_key_down(KeyboardKey::KEY_Q),
        strafe_right: rl.is_key_down(KeyboardKey::KEY_E),
        fire: rl.is_key_pressed(KeyboardKey::KEY_SPACE),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let grid = match &cli.map {
        Some(path) => Grid::load(path)?,
        None => Grid::sample(),
    };
    info!(cols = grid.width(), rows = grid.height(), fov = settings.fov, "scene ready");

    let textures = match &cli.assets {
        Some(dir) => TextureManager::load(dir),
        None => TextureManager::procedural(),
    };

    let mut scene = Scene::new(grid, Pose::new(2.0, 2.0, 0.0), settings);
    scene.objects.spawn(DynamicObject::new(TextureKey::Lamp, 3.0, 3.0));
    let cells = scene.grid.empty_cells();
    let mut rng = rand::thread_rng();
    for &(col, row) in cells.choose_multiple(&mut rng, cli.lamps) {
        scene
            .objects
            .spawn(DynamicObject::new(TextureKey::Lamp, col as f32 + 0.5, row as f32 + 0.5));
    }

    let (mut rl, thread) = raylib::init()
        .size(cli.width as i32, cli.height as i32)
        .title("Grid Raycaster")
        .build();
    rl.set_target_fps(60);

    let mut frame = Frame::new(cli.width, cli.height);
    let blank = Image::gen_image_color(cli.width as i32, cli.height as i32, Color::BLACK);
    let mut screen = rl
        .load_texture_from_image(&thread, &blank)
        .map_err(|e| anyhow::anyhow!("screen texture: {e:?}"))?;

    while !rl.window_should_close() {
        let input = poll_input(&rl);
        let dt = rl.get_frame_time();
        frame.advance(&mut scene, &input, dt, &textures);
        frame.framebuffer.upload_to_texture(&mut screen);

        let fps = rl.get_fps();
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        d.draw_texture(&screen, 0, 0, Color::WHITE);
        d.draw_text(&format!("FPS: {}", fps), 10, 10, 20, Color::WHITE);
    }

    Ok(())
}
