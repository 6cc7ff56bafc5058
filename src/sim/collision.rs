//! Paddle-vs-item collision and the scoring rules that follow a catch

use glam::Vec2;

use super::particles::{SPARK_BAD, SPARK_GOOD, confetti_burst, spark_burst};
use super::state::{GameEvent, GameState, Item, ItemKind, Paddle, Phase};

/// Axis-aligned box overlap with both boxes shrunk by `padding` on every side
pub fn item_hits_paddle(item: &Item, paddle: &Paddle, padding: f32) -> bool {
    item.pos.x < paddle.pos.x + paddle.width - padding
        && item.pos.x + item.size > paddle.pos.x + padding
        && item.pos.y < paddle.pos.y + paddle.height - padding
        && item.pos.y + item.size > paddle.pos.y + padding
}

/// Whether a score crossed a new multiple of `every` since `last`
pub fn crossed_milestone(score: u64, last: u64, every: u64) -> bool {
    score / every > last / every
}

/// Advance every item one frame and resolve catches.
///
/// Collision is checked before the off-screen test, so an item that is both
/// overlapping and past the bottom counts as caught. Processing stops as soon
/// as the game ends.
pub fn update_items(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let padding = state.tuning.collision_padding;

    let mut i = state.items.len();
    while i > 0 {
        i -= 1;

        let item = &mut state.items[i];
        item.pos.y += item.speed;
        item.angle += item.spin;

        if item_hits_paddle(item, &state.paddle, padding) {
            let item = state.items.swap_remove(i);
            match item.kind {
                ItemKind::Good => catch_good(state, &item, events),
                ItemKind::Bad => catch_bad(state, &item, events),
            }
            if state.phase == Phase::Over {
                return;
            }
            continue;
        }

        if item.pos.y > state.arena.y {
            state.items.swap_remove(i);
        }
    }
}

fn catch_good(state: &mut GameState, item: &Item, events: &mut Vec<GameEvent>) {
    state.score += state.tuning.good_item_points;
    let at = item.center();
    events.push(GameEvent::Caught { at });
    spark_burst(state, at, SPARK_GOOD);

    if crossed_milestone(state.score, state.last_milestone, state.tuning.milestone_every) {
        let at = Vec2::new(state.arena.x / 2.0, state.arena.y / 3.0);
        events.push(GameEvent::Milestone {
            score: state.score,
            at,
        });
        confetti_burst(state, at);
    }
    state.last_milestone = state.score;
}

fn catch_bad(state: &mut GameState, item: &Item, events: &mut Vec<GameEvent>) {
    state.lives = state.lives.saturating_sub(1);
    let at = item.center();
    events.push(GameEvent::Hurt { at });
    spark_burst(state, at, SPARK_BAD);

    if state.lives == 0 {
        game_over(state, events);
    }
}

/// End the run, claiming the high score if it was beaten
pub fn game_over(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.phase = Phase::Over;

    let new_high_score = if state.score > state.high_score {
        state.high_score = state.score;
        let center = state.arena / 2.0;
        confetti_burst(state, center);
        Some(center - Vec2::new(0.0, 100.0))
    } else {
        None
    };

    events.push(GameEvent::GameOver {
        final_score: state.score,
        new_high_score,
    });
}
