//! World state the renderer reads: grid, player and dynamic objects.

pub mod grid;
pub mod objects;
pub mod player;
