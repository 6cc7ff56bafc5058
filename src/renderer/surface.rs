//! Drawing surface abstraction
//!
//! The render pass only talks to [`Surface`]. The browser implementation wraps
//! a 2D canvas context; [`Recorder`] keeps the calls for headless runs and tests.

use glam::Vec2;

use crate::sim::Color;

/// Sprite slots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    Paddle,
    Good,
    Bad,
}

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Square of side `size` centered on the origin
    pub fn centered(size: f32) -> Self {
        Self::new(-size / 2.0, -size / 2.0, size, size)
    }
}

/// 2D drawing target in canvas coordinates
pub trait Surface {
    /// Canvas size in CSS pixels
    fn size(&self) -> Vec2;
    /// Whether a sprite finished loading and can be drawn
    fn sprite_ready(&self, sprite: Sprite) -> bool;

    fn clear(&mut self);
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, offset: Vec2);
    fn rotate(&mut self, angle: f32);
    fn set_alpha(&mut self, alpha: f32);

    fn draw_sprite(&mut self, sprite: Sprite, rect: Rect);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
}

/// A recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear,
    Save,
    Restore,
    Translate(Vec2),
    Rotate(f32),
    Alpha(f32),
    Sprite(Sprite, Rect),
    Rect(Rect, Color),
    Circle { center: Vec2, radius: f32, color: Color },
}

/// Headless surface that records every call
#[derive(Debug, Clone)]
pub struct Recorder {
    pub size: Vec2,
    /// Sprites reported as loaded
    pub ready: Vec<Sprite>,
    pub ops: Vec<DrawOp>,
}

impl Recorder {
    /// A surface with no sprites loaded
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            ready: Vec::new(),
            ops: Vec::new(),
        }
    }

    pub fn with_sprites(size: Vec2, ready: &[Sprite]) -> Self {
        Self {
            ready: ready.to_vec(),
            ..Self::new(size)
        }
    }

    /// Calls since the most recent clear, i.e. the last frame
    pub fn last_frame(&self) -> &[DrawOp] {
        let start = self
            .ops
            .iter()
            .rposition(|op| *op == DrawOp::Clear)
            .unwrap_or(0);
        &self.ops[start..]
    }
}

impl Surface for Recorder {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn sprite_ready(&self, sprite: Sprite) -> bool {
        self.ready.contains(&sprite)
    }

    fn clear(&mut self) {
        // Only the latest frame is interesting
        self.ops.clear();
        self.ops.push(DrawOp::Clear);
    }

    fn save(&mut self) {
        self.ops.push(DrawOp::Save);
    }

    fn restore(&mut self) {
        self.ops.push(DrawOp::Restore);
    }

    fn translate(&mut self, offset: Vec2) {
        self.ops.push(DrawOp::Translate(offset));
    }

    fn rotate(&mut self, angle: f32) {
        self.ops.push(DrawOp::Rotate(angle));
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.ops.push(DrawOp::Alpha(alpha));
    }

    fn draw_sprite(&mut self, sprite: Sprite, rect: Rect) {
        self.ops.push(DrawOp::Sprite(sprite, rect));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(DrawOp::Rect(rect, color));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            color,
        });
    }
}
