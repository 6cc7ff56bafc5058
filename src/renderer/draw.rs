//! The per-frame render pass

use super::surface::{Rect, Sprite, Surface};
use crate::consts::PARTICLE_RADIUS;
use crate::sim::{Color, GameState, ItemKind};

/// Placeholder colors used while sprites are unavailable
pub mod colors {
    use crate::sim::Color;

    pub const PADDLE: Color = Color::rgb(0xFF, 0x6B, 0x6B);
    /// CSS `gold`
    pub const GOOD_ITEM: Color = Color::rgb(0xFF, 0xD7, 0x00);
    /// CSS `green`
    pub const BAD_ITEM: Color = Color::rgb(0x00, 0x80, 0x00);
}

fn sprite_for(kind: ItemKind) -> (Sprite, Color) {
    match kind {
        ItemKind::Good => (Sprite::Good, colors::GOOD_ITEM),
        ItemKind::Bad => (Sprite::Bad, colors::BAD_ITEM),
    }
}

fn sprite_or_rect(surface: &mut impl Surface, sprite: Sprite, rect: Rect, fallback: Color) {
    if surface.sprite_ready(sprite) {
        surface.draw_sprite(sprite, rect);
    } else {
        surface.fill_rect(rect, fallback);
    }
}

/// Paint one frame: paddle, then items, then particles (later on top)
pub fn draw(state: &GameState, surface: &mut impl Surface) {
    surface.clear();

    let paddle = &state.paddle;
    let rect = Rect::new(paddle.pos.x, paddle.pos.y, paddle.width, paddle.height);
    sprite_or_rect(surface, Sprite::Paddle, rect, colors::PADDLE);

    for item in &state.items {
        let (sprite, fallback) = sprite_for(item.kind);
        surface.save();
        surface.translate(item.center());
        surface.rotate(item.angle);
        sprite_or_rect(surface, sprite, Rect::centered(item.size), fallback);
        surface.restore();
    }

    for p in &state.particles {
        // Confetti starts above 1.0; canvas alpha is only meaningful in [0, 1]
        surface.set_alpha(p.life.clamp(0.0, 1.0));
        surface.fill_circle(p.pos, PARTICLE_RADIUS, p.color);
        surface.set_alpha(1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::surface::{DrawOp, Recorder};
    use crate::sim::{Item, Particle};
    use crate::tuning::Tuning;
    use glam::Vec2;

    fn scene() -> GameState {
        let mut state = GameState::new(Tuning::default(), Vec2::new(800.0, 600.0), 0, 9);
        state.reset();
        state.items.push(Item {
            pos: Vec2::new(100.0, 50.0),
            size: 60.0,
            speed: 3.0,
            kind: ItemKind::Good,
            angle: 0.5,
            spin: 0.01,
        });
        state.items.push(Item {
            pos: Vec2::new(300.0, 80.0),
            size: 60.0,
            speed: 3.0,
            kind: ItemKind::Bad,
            angle: 0.0,
            spin: 0.0,
        });
        state.particles.push(Particle {
            pos: Vec2::new(5.0, 6.0),
            vel: Vec2::ZERO,
            life: 1.6,
            color: Color::rgb(1, 2, 3),
        });
        state
    }

    #[test]
    fn test_fallback_shapes_without_sprites() {
        let state = scene();
        let mut surface = Recorder::new(state.arena);
        draw(&state, &mut surface);

        let ops = surface.last_frame();
        assert_eq!(ops[0], DrawOp::Clear);
        assert_eq!(ops[1], DrawOp::Rect(Rect::new(360.0, 480.0, 80.0, 80.0), colors::PADDLE));
        assert_eq!(
            &ops[2..7],
            &[
                DrawOp::Save,
                DrawOp::Translate(Vec2::new(130.0, 80.0)),
                DrawOp::Rotate(0.5),
                DrawOp::Rect(Rect::centered(60.0), colors::GOOD_ITEM),
                DrawOp::Restore,
            ]
        );
        assert_eq!(ops[10], DrawOp::Rect(Rect::centered(60.0), colors::BAD_ITEM));
        assert_eq!(
            &ops[12..],
            &[
                DrawOp::Alpha(1.0),
                DrawOp::Circle {
                    center: Vec2::new(5.0, 6.0),
                    radius: 5.0,
                    color: Color::rgb(1, 2, 3)
                },
                DrawOp::Alpha(1.0),
            ]
        );
    }

    #[test]
    fn test_loaded_sprites_replace_placeholders() {
        let state = scene();
        let mut surface = Recorder::with_sprites(state.arena, &[Sprite::Paddle, Sprite::Bad]);
        draw(&state, &mut surface);

        let ops = surface.last_frame();
        assert_eq!(ops[1], DrawOp::Sprite(Sprite::Paddle, Rect::new(360.0, 480.0, 80.0, 80.0)));
        // Good sprite still missing
        assert!(ops.contains(&DrawOp::Rect(Rect::centered(60.0), colors::GOOD_ITEM)));
        assert!(ops.contains(&DrawOp::Sprite(Sprite::Bad, Rect::centered(60.0))));
    }

    #[test]
    fn test_particle_alpha_follows_life() {
        let mut state = scene();
        state.particles[0].life = 0.25;
        let mut surface = Recorder::new(state.arena);
        draw(&state, &mut surface);
        assert!(surface.last_frame().contains(&DrawOp::Alpha(0.25)));
    }
}
