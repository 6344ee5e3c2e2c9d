//! Rendering: ray caster, depth buffer and the two depth-tested renderers.
//!
//! - `casters`: grid traversal ray caster
//! - `depth`: per-pixel depth buffer and the gated `plot`
//! - `framebuffer`: CPU color buffer and GPU upload
//! - `textures`: pixmaps, texture keys, loader with fallbacks
//! - `render3d`: column renderer for walls, ceiling and floor
//! - `sprites`: billboard sprite renderer

pub mod casters;
pub mod depth;
pub mod framebuffer;
pub mod render3d;
pub mod sprites;
pub mod textures;
