//! Rendering module
//!
//! A single render pass over the [`Surface`] trait, with a 2D canvas backend
//! in the browser and a recording backend everywhere else.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod draw;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub use canvas::{CanvasSurface, Sprites};
pub use draw::{colors, draw};
pub use surface::{DrawOp, Recorder, Rect, Sprite, Surface};
