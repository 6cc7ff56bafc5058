//! Sticker Catcher - a falling-item catcher arcade game
//!
//! Core modules:
//! - `sim`: Simulation (spawning, collisions, scoring, particles)
//! - `driver`: Session state machine and the frame loop
//! - `renderer`: Render pass over an abstract drawing surface
//! - `platform`: Host side effects (HUD, overlays, sound, floating text)
//! - `highscores`: High score persistence
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod driver;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use driver::{FrameClock, Game, run_loop};
pub use highscores::{HighScoreStore, MemoryStore};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Paddle dimensions
    pub const PADDLE_WIDTH: f32 = 80.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    /// Distance from the bottom edge of the canvas to the paddle's top edge
    pub const PADDLE_BOTTOM_OFFSET: f32 = 120.0;
    /// Fraction of the remaining gap to target covered per frame
    pub const PADDLE_EASING: f32 = 0.2;

    /// Items are square
    pub const ITEM_SIZE: f32 = 60.0;
    /// Spawn height, above the visible area
    pub const ITEM_SPAWN_Y: f32 = -100.0;
    /// Fall speed range (units per frame) before the speed multiplier
    pub const ITEM_SPEED_MIN: f32 = 3.0;
    pub const ITEM_SPEED_MAX: f32 = 5.0;
    /// A uniform draw above this yields a good item
    pub const GOOD_ITEM_THRESHOLD: f32 = 0.3;
    /// Spin range is [-MAX_SPIN, MAX_SPIN) radians per frame
    pub const MAX_SPIN: f32 = 0.05;

    /// Spawn pacing (milliseconds)
    pub const SPAWN_INTERVAL_START: f32 = 1000.0;
    pub const SPAWN_INTERVAL_STEP: f32 = 10.0;
    pub const SPAWN_INTERVAL_FLOOR: f32 = 400.0;
    /// Added to the speed multiplier on every spawn, no upper bound
    pub const SPEED_MULTIPLIER_STEP: f32 = 0.001;

    /// Inward margin on both boxes so transparent sprite edges don't collide
    pub const COLLISION_PADDING: f32 = 10.0;

    /// Scoring
    pub const GOOD_ITEM_POINTS: u64 = 10;
    pub const MILESTONE_EVERY: u64 = 500;
    pub const STARTING_LIVES: u8 = 3;

    /// Particles
    pub const PARTICLE_DECAY: f32 = 0.02;
    pub const PARTICLE_RADIUS: f32 = 5.0;
    pub const SPARK_COUNT: usize = 8;
    pub const SPARK_SPEED: f32 = 10.0;
    pub const SPARK_LIFE: f32 = 1.0;
    pub const CONFETTI_COUNT: usize = 50;
    pub const CONFETTI_SPEED: f32 = 20.0;
    pub const CONFETTI_LIFE: f32 = 2.0;

    /// Host effect durations (milliseconds)
    pub const FLOATING_TEXT_MS: i32 = 1500;
    pub const SHAKE_MS: i32 = 500;
}
