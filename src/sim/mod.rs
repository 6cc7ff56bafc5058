//! Simulation module
//!
//! All gameplay logic lives here. No rendering or platform dependencies:
//! side effects are reported as [`GameEvent`]s for the driver to dispatch.

pub mod collision;
pub mod particles;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{crossed_milestone, game_over, item_hits_paddle, update_items};
pub use particles::{SPARK_BAD, SPARK_GOOD, confetti_burst, spark_burst, update_particles};
pub use spawner::{advance_spawner, spawn_item};
pub use state::{Color, GameEvent, GameState, Item, ItemKind, Paddle, Particle, Phase};
pub use tick::tick;
