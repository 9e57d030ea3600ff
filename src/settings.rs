//! Game configuration.
//!
//! `Settings` is the immutable baseline, loaded once from TOML (or defaults).
//! `DynamicSettings` is the subset that changes while playing: it is reset
//! when a game starts and scaled up whenever a wave is cleared.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::fleet::FleetLayout;

/// An RGB colour, written as `[r, g, b]` in the settings file.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8);

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    // Screen
    pub screen_width: f32,
    pub screen_height: f32,
    pub bg_color: Color,

    // Ship
    pub ship_width: f32,
    pub ship_height: f32,
    pub ship_limit: u32,

    // Bullets
    pub bullet_width: f32,
    pub bullet_height: f32,
    pub bullet_color: Color,
    pub bullets_allowed: usize,

    // Aliens
    pub alien_width: f32,
    pub alien_height: f32,
    pub fleet_drop_speed: f32,

    // Difficulty scaling
    pub speedup_scale: f32,
    pub score_scale: f32,

    // Starting values for the dynamic subset
    pub initial_ship_speed: f32,
    pub initial_bullet_speed: f32,
    pub initial_alien_speed: f32,
    pub initial_alien_points: u32,

    /// Grace period after losing a ship, in milliseconds.
    pub ship_hit_pause_ms: u64,

    // Play button
    pub button_label: String,
    pub button_width: f32,
    pub button_height: f32,
    pub button_color: Color,
    pub button_text_color: Color,

    pub text_color: Color,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: 1200.0,
            screen_height: 800.0,
            bg_color: Color(230, 230, 230),
            ship_width: 60.0,
            ship_height: 48.0,
            ship_limit: 3,
            bullet_width: 3.0,
            bullet_height: 15.0,
            bullet_color: Color(60, 60, 60),
            bullets_allowed: 3,
            alien_width: 60.0,
            alien_height: 58.0,
            fleet_drop_speed: 10.0,
            speedup_scale: 1.1,
            score_scale: 1.5,
            initial_ship_speed: 3.0,
            initial_bullet_speed: 6.0,
            initial_alien_speed: 2.0,
            initial_alien_points: 50,
            ship_hit_pause_ms: 500,
            button_label: "START".into(),
            button_width: 200.0,
            button_height: 50.0,
            button_color: Color(0, 255, 0),
            button_text_color: Color(255, 255, 255),
            text_color: Color(30, 30, 30),
        }
    }
}

impl Settings {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&data).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Reject configurations the game loop cannot run with, including a
    /// screen too small to hold a single alien row or column.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("ship_width", self.ship_width),
            ("ship_height", self.ship_height),
            ("bullet_width", self.bullet_width),
            ("bullet_height", self.bullet_height),
            ("alien_width", self.alien_width),
            ("alien_height", self.alien_height),
            ("fleet_drop_speed", self.fleet_drop_speed),
            ("initial_ship_speed", self.initial_ship_speed),
            ("initial_bullet_speed", self.initial_bullet_speed),
            ("initial_alien_speed", self.initial_alien_speed),
            ("button_width", self.button_width),
            ("button_height", self.button_height),
        ];
        // `!(v > 0.0)` also catches NaN.
        if let Some(&(field, value)) = positive.iter().find(|(_, v)| !(*v > 0.0)) {
            return Err(ConfigError::NonPositive { field, value });
        }

        if self.ship_limit == 0 {
            return Err(ConfigError::ZeroLimit { field: "ship_limit" });
        }
        if self.bullets_allowed == 0 {
            return Err(ConfigError::ZeroLimit {
                field: "bullets_allowed",
            });
        }

        for (field, value) in [
            ("speedup_scale", self.speedup_scale),
            ("score_scale", self.score_scale),
        ] {
            if !(value >= 1.0) {
                return Err(ConfigError::ScaleBelowOne { field, value });
            }
        }

        let layout = FleetLayout::compute(self);
        if layout.is_empty() {
            return Err(ConfigError::FleetDoesNotFit {
                columns: layout.columns,
                rows: layout.rows,
            });
        }
        Ok(())
    }
}

// ── Dynamic subset ───────────────────────────────────────────────────────────

/// Horizontal travel of the whole fleet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FleetDirection {
    Left,
    Right,
}

impl FleetDirection {
    /// `+1.0` for right, `-1.0` for left.
    pub fn sign(self) -> f32 {
        match self {
            FleetDirection::Right => 1.0,
            FleetDirection::Left => -1.0,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            FleetDirection::Right => FleetDirection::Left,
            FleetDirection::Left => FleetDirection::Right,
        }
    }
}

/// Values that change during play. Fields are private so the only ways to
/// touch them are a full reset, a wave-clear scale-up, or a fleet reversal.
#[derive(Clone, Debug, PartialEq)]
pub struct DynamicSettings {
    ship_speed: f32,
    bullet_speed: f32,
    alien_speed: f32,
    fleet_direction: FleetDirection,
    alien_points: u32,
}

impl DynamicSettings {
    pub fn new(settings: &Settings) -> Self {
        Self {
            ship_speed: settings.initial_ship_speed,
            bullet_speed: settings.initial_bullet_speed,
            alien_speed: settings.initial_alien_speed,
            fleet_direction: FleetDirection::Right,
            alien_points: settings.initial_alien_points,
        }
    }

    pub fn reset(&mut self, settings: &Settings) {
        *self = Self::new(settings);
    }

    pub fn increase_speed(&mut self, settings: &Settings) {
        self.ship_speed *= settings.speedup_scale;
        self.bullet_speed *= settings.speedup_scale;
        self.alien_speed *= settings.speedup_scale;
        // Float-to-int `as` saturates at u32::MAX.
        self.alien_points = (self.alien_points as f32 * settings.score_scale) as u32;
    }

    pub fn reverse_fleet_direction(&mut self) {
        self.fleet_direction = self.fleet_direction.reversed();
    }

    pub fn ship_speed(&self) -> f32 {
        self.ship_speed
    }

    pub fn bullet_speed(&self) -> f32 {
        self.bullet_speed
    }

    pub fn alien_speed(&self) -> f32 {
        self.alien_speed
    }

    pub fn fleet_direction(&self) -> FleetDirection {
        self.fleet_direction
    }

    pub fn alien_points(&self) -> u32 {
        self.alien_points
    }
}
