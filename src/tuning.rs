//! Data-driven game balance
//!
//! Every balance number lives here so a page can override the defaults with
//! an inline JSON document. Missing fields fall back to [`crate::consts`].
//! Purely visual constants (particle bursts, effect timers) stay in `consts`.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Balance parameters for a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_bottom_offset: f32,
    pub paddle_easing: f32,

    pub item_size: f32,
    pub item_spawn_y: f32,
    pub item_speed_min: f32,
    pub item_speed_max: f32,
    pub good_item_threshold: f32,
    pub max_spin: f32,

    pub spawn_interval_start: f32,
    pub spawn_interval_step: f32,
    pub spawn_interval_floor: f32,
    pub speed_multiplier_step: f32,

    pub collision_padding: f32,

    pub good_item_points: u64,
    pub milestone_every: u64,
    pub starting_lives: u8,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_bottom_offset: PADDLE_BOTTOM_OFFSET,
            paddle_easing: PADDLE_EASING,

            item_size: ITEM_SIZE,
            item_spawn_y: ITEM_SPAWN_Y,
            item_speed_min: ITEM_SPEED_MIN,
            item_speed_max: ITEM_SPEED_MAX,
            good_item_threshold: GOOD_ITEM_THRESHOLD,
            max_spin: MAX_SPIN,

            spawn_interval_start: SPAWN_INTERVAL_START,
            spawn_interval_step: SPAWN_INTERVAL_STEP,
            spawn_interval_floor: SPAWN_INTERVAL_FLOOR,
            speed_multiplier_step: SPEED_MULTIPLIER_STEP,

            collision_padding: COLLISION_PADDING,

            good_item_points: GOOD_ITEM_POINTS,
            milestone_every: MILESTONE_EVERY,
            starting_lives: STARTING_LIVES,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) tuning document
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json).map(Self::sanitized)
    }

    /// Clamp values the simulation cannot run with
    pub fn sanitized(mut self) -> Self {
        if self.milestone_every == 0 {
            log::warn!("milestone_every must be at least 1, using 1");
            self.milestone_every = 1;
        }
        if self.spawn_interval_step.is_nan() || self.spawn_interval_step < 0.0 {
            log::warn!("spawn_interval_step {} is negative, using 0", self.spawn_interval_step);
            self.spawn_interval_step = 0.0;
        }
        if self.speed_multiplier_step.is_nan() || self.speed_multiplier_step < 0.0 {
            log::warn!("speed_multiplier_step {} is negative, using 0", self.speed_multiplier_step);
            self.speed_multiplier_step = 0.0;
        }
        if self.paddle_easing.is_nan() || self.paddle_easing <= 0.0 || self.paddle_easing > 1.0 {
            let easing = if self.paddle_easing > 1.0 { 1.0 } else { PADDLE_EASING };
            log::warn!("paddle_easing {} outside (0, 1], using {}", self.paddle_easing, easing);
            self.paddle_easing = easing;
        }
        self
    }

    /// Parse a tuning document, logging and falling back to defaults on error
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(tuning) => {
                log::info!("Loaded tuning overrides");
                tuning
            }
            Err(e) => {
                log::warn!("Ignoring malformed tuning document: {}", e);
                Self::default()
            }
        }
    }

    /// Lives are stored in a u8 and the HUD draws at most three hearts
    pub fn lives(&self) -> u8 {
        self.starting_lives.clamp(1, STARTING_LIVES)
    }
}
