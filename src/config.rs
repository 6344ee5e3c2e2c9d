//! Tunable settings for camera, movement, projectiles and flat colors.
use raylib::prelude::*;
use serde::Deserialize;
use std::path::Path;

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Horizontal field of view in radians.
    pub fov: f32,
    /// Rays give up after this many grid units.
    pub max_distance: f32,
    /// Sprites closer than this are skipped.
    pub min_sprite_distance: f32,
    pub move_speed: f32,
    pub turn_speed: f32,
    pub projectile_speed: f32,
    pub projectile_scale: f32,
    /// Seconds of flight applied at spawn so the fireball starts ahead of the player.
    pub projectile_lead: f32,
    /// Collision radius of the player; 0 disables wall collision.
    pub player_radius: f32,
    pub ceiling_color: [u8; 4],
    pub floor_color: [u8; 4],
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fov: std::f32::consts::FRAC_PI_4,
            max_distance: 16.0,
            min_sprite_distance: 0.5,
            move_speed: 1.0,
            turn_speed: 0.5,
            projectile_speed: 2.0,
            projectile_scale: 0.3,
            projectile_lead: 0.1,
            player_radius: 0.2,
            ceiling_color: [0, 0, 255, 255],
            floor_color: [128, 0, 0, 255],
        }
    }
}

impl Settings {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(s)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.fov > 0.0 && self.fov < std::f32::consts::PI) {
            return Err(ConfigError::Invalid { field: "fov", reason: "must be in (0, pi)" });
        }
        if !(self.max_distance > 0.0) {
            return Err(ConfigError::Invalid { field: "max_distance", reason: "must be positive" });
        }
        if !(self.min_sprite_distance > 0.0) {
            return Err(ConfigError::Invalid {
                field: "min_sprite_distance",
                reason: "must be positive",
            });
        }
        if !(self.player_radius >= 0.0) {
            return Err(ConfigError::Invalid { field: "player_radius", reason: "must not be negative" });
        }
        Ok(())
    }

    #[inline]
    pub fn half_fov(&self) -> f32 {
        self.fov * 0.5
    }

    pub fn ceiling(&self) -> Color {
        let [r, g, b, a] = self.ceiling_color;
        Color::new(r, g, b, a)
    }

    pub fn floor(&self) -> Color {
        let [r, g, b, a] = self.floor_color;
        Color::new(r, g, b, a)
    }
}
