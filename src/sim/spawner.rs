//! Falling-item generator and the difficulty ramp

use glam::Vec2;
use rand::Rng;

use super::state::{GameState, Item, ItemKind};

/// Accumulate frame time and spawn at most one item.
///
/// Every spawn shortens the interval (down to the floor) and raises the speed
/// multiplier. Neither is capped otherwise, so the game eventually becomes
/// unbeatable.
pub fn advance_spawner(state: &mut GameState, dt_ms: f32) -> bool {
    state.spawn_timer += dt_ms;
    if state.spawn_timer <= state.spawn_interval {
        return false;
    }

    let item = spawn_item(state);
    state.items.push(item);
    state.spawn_timer = 0.0;

    let t = &state.tuning;
    if state.spawn_interval > t.spawn_interval_floor {
        state.spawn_interval = (state.spawn_interval - t.spawn_interval_step).max(t.spawn_interval_floor);
    }
    state.speed_multiplier += t.speed_multiplier_step;
    true
}

/// Roll a new item above the visible area
pub fn spawn_item(state: &mut GameState) -> Item {
    let t = &state.tuning;
    let rng = &mut state.rng;

    let kind = if rng.random::<f32>() > t.good_item_threshold {
        ItemKind::Good
    } else {
        ItemKind::Bad
    };
    let max_x = (state.arena.x - t.item_size).max(0.0);
    let x = rng.random::<f32>() * max_x;
    // An empty range from overridden tuning would panic
    let base_speed = if t.item_speed_min < t.item_speed_max {
        rng.random_range(t.item_speed_min..t.item_speed_max)
    } else {
        t.item_speed_min
    };
    let speed = base_speed * state.speed_multiplier;
    let spin = (rng.random::<f32>() - 0.5) * 2.0 * t.max_spin;

    Item {
        pos: Vec2::new(x, t.item_spawn_y),
        size: t.item_size,
        speed,
        kind,
        angle: 0.0,
        spin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;
    use proptest::prelude::*;

    fn state(seed: u64) -> GameState {
        let mut state = GameState::new(Tuning::default(), Vec2::new(800.0, 600.0), 0, seed);
        state.reset();
        state
    }

    #[test]
    fn test_spawns_only_after_interval_exceeded() {
        let mut state = state(1);
        assert!(!advance_spawner(&mut state, 600.0));
        assert!(!advance_spawner(&mut state, 400.0)); // exactly 1000, not yet
        assert!(state.items.is_empty());

        assert!(advance_spawner(&mut state, 1.0));
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.spawn_timer, 0.0);
        assert_eq!(state.spawn_interval, 990.0);
        assert!((state.speed_multiplier - 1.001).abs() < 1e-6);
    }

    #[test]
    fn test_one_spawn_per_call_even_after_a_long_stall() {
        let mut state = state(2);
        assert!(advance_spawner(&mut state, 60_000.0));
        assert_eq!(state.items.len(), 1);
    }

    #[test]
    fn test_interval_floors_at_400() {
        let mut state = state(3);
        for _ in 0..200 {
            advance_spawner(&mut state, 2000.0);
        }
        assert_eq!(state.spawn_interval, 400.0);
        assert!((state.speed_multiplier - 1.2).abs() < 1e-3);
    }

    #[test]
    fn test_negative_step_from_page_cannot_slow_spawns() {
        let tuning = Tuning::from_json_or_default(r#"{ "spawn_interval_step": -10.0 }"#);
        let mut state = GameState::new(tuning, Vec2::new(800.0, 600.0), 0, 6);
        state.reset();
        for _ in 0..5 {
            assert!(advance_spawner(&mut state, 2000.0));
        }
        assert_eq!(state.spawn_interval, 1000.0);
    }

    #[test]
    fn test_spawned_item_fields() {
        let mut state = state(4);
        state.speed_multiplier = 2.0;
        let item = spawn_item(&mut state);
        assert_eq!(item.pos.y, -100.0);
        assert_eq!(item.size, 60.0);
        assert_eq!(item.angle, 0.0);
        assert!(item.speed >= 6.0 && item.speed < 10.0);
        assert!(item.spin.abs() <= 0.05);
    }

    #[test]
    fn test_kind_bias_roughly_seventy_percent_good() {
        let mut state = state(5);
        let good = (0..2000)
            .filter(|_| spawn_item(&mut state).kind == ItemKind::Good)
            .count();
        assert!((1250..1550).contains(&good), "good = {good}");
    }

    proptest! {
        #[test]
        fn prop_spawned_item_stays_inside_canvas(seed in any::<u64>(), width in 60.0f32..4000.0) {
            let mut state = state(seed);
            state.resize(Vec2::new(width, 600.0));
            let item = spawn_item(&mut state);
            prop_assert!(item.pos.x >= 0.0);
            prop_assert!(item.pos.x + item.size <= width + 1e-3);
        }

        #[test]
        fn prop_difficulty_ramp_is_monotonic(seed in any::<u64>(), dts in prop::collection::vec(0.0f32..3000.0, 1..300)) {
            let mut state = state(seed);
            for dt in dts {
                let interval = state.spawn_interval;
                let multiplier = state.speed_multiplier;
                advance_spawner(&mut state, dt);
                prop_assert!(state.spawn_interval <= interval);
                prop_assert!(state.spawn_interval >= 400.0);
                prop_assert!(state.speed_multiplier >= multiplier);
            }
        }
    }
}
