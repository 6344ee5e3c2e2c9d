//! Ray casting renderer for 2D tile grids.
//!
//! Modules:
//! - `world`: grid, player pose and input, dynamic objects
//! - `render`: ray caster, depth buffer, column and sprite renderers
//! - `frame`: per-frame update/render ordering
//! - `config`: tunable settings
//! - `error`: startup error types

pub mod config;
pub mod error;
pub mod frame;
pub mod render;
pub mod world;

pub use config::Settings;
pub use error::{ConfigError, GridError};
pub use frame::{Frame, Scene};
