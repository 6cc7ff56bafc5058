//! Spark and confetti bursts

use glam::Vec2;
use rand::Rng;

use super::state::{Color, GameState, Particle};
use crate::consts::*;

/// Accent for good catches
pub const SPARK_GOOD: Color = Color::rgb(0xFF, 0xD7, 0x00);
/// Warning for bad catches
pub const SPARK_BAD: Color = Color::rgb(0xFF, 0x00, 0x00);

/// Random velocity with each component in [-speed/2, speed/2)
fn scatter(rng: &mut impl Rng, speed: f32) -> Vec2 {
    Vec2::new(
        (rng.random::<f32>() - 0.5) * speed,
        (rng.random::<f32>() - 0.5) * speed,
    )
}

/// Small feedback burst for a catch or a hit
pub fn spark_burst(state: &mut GameState, at: Vec2, color: Color) {
    for _ in 0..SPARK_COUNT {
        let vel = scatter(&mut state.rng, SPARK_SPEED);
        state.particles.push(Particle {
            pos: at,
            vel,
            life: SPARK_LIFE,
            color,
        });
    }
}

/// Large celebratory burst across the whole hue wheel
pub fn confetti_burst(state: &mut GameState, at: Vec2) {
    for _ in 0..CONFETTI_COUNT {
        let vel = scatter(&mut state.rng, CONFETTI_SPEED);
        let hue = state.rng.random::<f32>() * 360.0;
        state.particles.push(Particle {
            pos: at,
            vel,
            life: CONFETTI_LIFE,
            color: Color::from_hue(hue),
        });
    }
}

/// Move every particle ballistically and drop the ones that faded out
pub fn update_particles(particles: &mut Vec<Particle>) {
    for p in particles.iter_mut() {
        p.pos += p.vel;
        p.life -= PARTICLE_DECAY;
    }
    particles.retain(|p| p.life > 0.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    fn state() -> GameState {
        GameState::new(Tuning::default(), Vec2::new(800.0, 600.0), 0, 7)
    }

    #[test]
    fn test_spark_burst_shape() {
        let mut state = state();
        let at = Vec2::new(100.0, 200.0);
        spark_burst(&mut state, at, SPARK_GOOD);

        assert_eq!(state.particles.len(), 8);
        for p in &state.particles {
            assert_eq!(p.pos, at);
            assert_eq!(p.life, 1.0);
            assert_eq!(p.color, SPARK_GOOD);
            assert!(p.vel.x.abs() <= 5.0 && p.vel.y.abs() <= 5.0);
        }
    }

    #[test]
    fn test_confetti_burst_shape() {
        let mut state = state();
        confetti_burst(&mut state, Vec2::ZERO);

        assert_eq!(state.particles.len(), 50);
        assert!(state.particles.iter().all(|p| p.life == 2.0));
        assert!(state.particles.iter().all(|p| p.vel.x.abs() <= 10.0 && p.vel.y.abs() <= 10.0));
        // Hues are spread, so the burst is not a single color
        let first = state.particles[0].color;
        assert!(state.particles.iter().any(|p| p.color != first));
    }

    #[test]
    fn test_particles_move_and_fade() {
        let mut particles = vec![Particle {
            pos: Vec2::ZERO,
            vel: Vec2::new(2.0, -1.0),
            life: 1.0,
            color: SPARK_BAD,
        }];
        update_particles(&mut particles);
        assert_eq!(particles[0].pos, Vec2::new(2.0, -1.0));
        assert!((particles[0].life - 0.98).abs() < 1e-6);
    }

    #[test]
    fn test_spark_expires_after_fifty_frames() {
        let mut state = state();
        spark_burst(&mut state, Vec2::ZERO, SPARK_GOOD);

        let mut frames = 0;
        while !state.particles.is_empty() {
            update_particles(&mut state.particles);
            frames += 1;
            assert!(frames <= 51, "sparks should fade out");
        }
        assert!(frames >= 49);
    }
}
