//! One frame of simulation
//!
//! Order matters: paddle easing, spawner, items (with collisions), particles.
//! Particles spawned by a catch therefore move in the same frame.

use super::collision::update_items;
use super::particles::update_particles;
use super::spawner::advance_spawner;
use super::state::{GameEvent, GameState};

/// Advance a running session by one frame of `dt_ms` milliseconds.
///
/// Returns what happened so the caller can play sounds and update the UI.
/// Does nothing unless the session is running.
pub fn tick(state: &mut GameState, dt_ms: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if !state.is_running() {
        return events;
    }

    state.paddle.ease(state.tuning.paddle_easing);
    advance_spawner(state, dt_ms);
    update_items(state, &mut events);
    update_particles(&mut state.particles);

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Item, ItemKind, Phase};
    use crate::tuning::Tuning;
    use glam::Vec2;
    use proptest::prelude::*;

    fn running_state(seed: u64) -> GameState {
        let mut state = GameState::new(Tuning::default(), Vec2::new(800.0, 600.0), 0, seed);
        state.reset();
        state
    }

    /// Drop an item straight onto the paddle's current position
    fn drop_on_paddle(state: &mut GameState, kind: ItemKind) {
        let paddle = &state.paddle;
        state.items.push(Item {
            pos: Vec2::new(paddle.pos.x + 10.0, paddle.pos.y),
            size: 60.0,
            speed: 0.0,
            kind,
            angle: 0.0,
            spin: 0.0,
        });
    }

    #[test]
    fn test_idle_state_does_not_advance() {
        let mut state = GameState::new(Tuning::default(), Vec2::new(800.0, 600.0), 0, 1);
        let events = tick(&mut state, 5000.0);
        assert!(events.is_empty());
        assert!(state.items.is_empty());
        assert_eq!(state.spawn_timer, 0.0);
    }

    #[test]
    fn test_fifty_good_catches_fire_one_milestone() {
        let mut state = running_state(3);
        let mut milestones = 0;
        for _ in 0..50 {
            drop_on_paddle(&mut state, ItemKind::Good);
            for event in tick(&mut state, 16.0) {
                if let GameEvent::Milestone { score, .. } = event {
                    assert_eq!(score, 500);
                    milestones += 1;
                }
            }
        }
        assert_eq!(state.score, 500);
        assert_eq!(milestones, 1);
    }

    #[test]
    fn test_three_hits_end_the_game() {
        let mut state = running_state(4);
        state.score = 70;
        let mut final_scores = Vec::new();
        for expected_lives in [2, 1, 0] {
            drop_on_paddle(&mut state, ItemKind::Bad);
            for event in tick(&mut state, 16.0) {
                if let GameEvent::GameOver { final_score, .. } = event {
                    final_scores.push(final_score);
                }
            }
            assert_eq!(state.lives, expected_lives);
        }
        assert_eq!(state.phase, Phase::Over);
        assert_eq!(final_scores, vec![70]);

        // A finished game no longer simulates
        drop_on_paddle(&mut state, ItemKind::Bad);
        assert!(tick(&mut state, 16.0).is_empty());
        assert_eq!(state.lives, 0);
    }

    #[test]
    fn test_sparks_move_in_the_frame_they_spawn() {
        let mut state = running_state(5);
        drop_on_paddle(&mut state, ItemKind::Good);
        tick(&mut state, 16.0);
        assert!(state.particles.iter().all(|p| (p.life - 0.98).abs() < 1e-6));
    }

    proptest! {
        #[test]
        fn prop_paddle_closes_gap_each_frame(start in 0.0f32..720.0, pointer in -200.0f32..1000.0) {
            let mut state = running_state(6);
            state.paddle.pos.x = start;
            state.aim_paddle(pointer);
            let target = state.paddle.target_x;
            prop_assert!((0.0..=720.0).contains(&target));

            let gap = (target - state.paddle.pos.x).abs();
            tick(&mut state, 0.0);
            let next_gap = (target - state.paddle.pos.x).abs();
            if gap > 1e-3 {
                prop_assert!(next_gap < gap);
                prop_assert!((next_gap - gap * 0.8).abs() < 1e-3);
            } else {
                prop_assert!(next_gap <= gap + 1e-6);
            }
        }

        #[test]
        fn prop_score_and_lives_stay_in_range(seed in any::<u64>(), kinds in prop::collection::vec(any::<bool>(), 1..40)) {
            let mut state = running_state(seed);
            let mut game_overs = 0;
            for good in kinds {
                let lives_before = state.lives;
                drop_on_paddle(&mut state, if good { ItemKind::Good } else { ItemKind::Bad });
                for event in tick(&mut state, 16.0) {
                    if matches!(event, GameEvent::GameOver { .. }) {
                        prop_assert_eq!(lives_before, 1);
                        game_overs += 1;
                    }
                }
                prop_assert!(state.lives <= 3);
                prop_assert_eq!(state.phase == Phase::Over, state.lives == 0);
            }
            prop_assert!(game_overs <= 1);
        }
    }
}
