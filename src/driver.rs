//! Session state machine and the frame loop
//!
//! [`Game`] owns the session and its collaborators. It turns the
//! [`GameEvent`]s reported by the simulation into host side effects, and
//! [`run_loop`] paces it with the host's frame clock.

use std::cell::RefCell;

use glam::Vec2;

use crate::audio::Sound;
use crate::highscores::HighScoreStore;
use crate::platform::{Host, Hud, Overlay};
use crate::renderer::{Surface, draw};
use crate::sim::{GameEvent, GameState, ItemKind, tick};
use crate::tuning::Tuning;

/// Cooperative frame pacing
#[allow(async_fn_in_trait)]
pub trait FrameClock {
    /// Yield until the host's next frame and return its timestamp in milliseconds
    async fn next_frame(&mut self) -> f64;
}

/// A game session plus everything it talks to
pub struct Game<H: Host, S: Surface, P: HighScoreStore> {
    pub state: GameState,
    host: H,
    surface: S,
    store: P,
    muted: bool,
    /// Demo mode: steer toward good items automatically
    autopilot: bool,
    /// Timestamp of the previous frame of this run
    last_frame: Option<f64>,
}

impl<H: Host, S: Surface, P: HighScoreStore> Game<H, S, P> {
    /// Load the high score and show the start screen
    pub fn new(tuning: Tuning, host: H, surface: S, store: P, seed: u64) -> Self {
        let high_score = store.load();
        let state = GameState::new(tuning, surface.size(), high_score, seed);
        let mut game = Self {
            state,
            host,
            surface,
            store,
            muted: false,
            autopilot: false,
            last_frame: None,
        };
        game.refresh_hud();
        game.host.show_overlay(Overlay::Start);
        game.host.set_mute_indicator(game.muted);
        game
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn store(&self) -> &P {
        &self.store
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn hud(&self) -> Hud {
        Hud {
            score: self.state.score,
            high_score: self.state.high_score,
            lives: self.state.lives,
        }
    }

    /// Start or restart a run.
    ///
    /// Returns true when the caller must start a frame loop, i.e. none was
    /// running. Restarting mid-run resets the session in place.
    pub fn start(&mut self) -> bool {
        let needs_loop = !self.state.is_running();
        self.state.reset();
        self.last_frame = None;
        self.refresh_hud();
        self.host.show_overlay(Overlay::None);
        log::info!("Run started (high score {})", self.state.high_score);
        needs_loop
    }

    /// Pointer or touch moved to client x
    pub fn pointer_moved(&mut self, x: f32) {
        self.state.aim_paddle(x);
    }

    /// The canvas changed size
    pub fn resize(&mut self, size: Vec2) {
        self.state.resize(size);
    }

    /// Flip audio on/off. Returns the new muted state.
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.host.set_mute_indicator(self.muted);
        self.muted
    }

    /// Flip demo mode. Returns whether it is now on.
    pub fn toggle_autopilot(&mut self) -> bool {
        self.autopilot = !self.autopilot;
        log::info!("Autopilot: {}", self.autopilot);
        self.autopilot
    }

    /// Run one frame: update, then render.
    ///
    /// Returns whether the run is still going; a false return ends the loop.
    pub fn frame(&mut self, timestamp: f64) -> bool {
        if !self.state.is_running() {
            return false;
        }

        // The first frame of a run has nothing to measure against
        let dt = self
            .last_frame
            .map_or(0.0, |last| (timestamp - last).max(0.0)) as f32;
        self.last_frame = Some(timestamp);

        if self.autopilot {
            let x = autopilot_x(&self.state);
            self.state.aim_paddle(x);
        }

        let events = tick(&mut self.state, dt);
        let refresh = !events.is_empty();
        for event in events {
            self.dispatch(event);
        }
        if refresh {
            self.refresh_hud();
        }

        draw(&self.state, &mut self.surface);
        self.state.is_running()
    }

    fn play(&mut self, sound: Sound) {
        if !self.muted {
            self.host.play(sound);
        }
    }

    fn refresh_hud(&mut self) {
        let hud = self.hud();
        self.host.update_hud(&hud);
    }

    fn dispatch(&mut self, event: GameEvent) {
        match event {
            GameEvent::Caught { .. } => self.play(Sound::Catch),
            GameEvent::Hurt { .. } => {
                self.play(Sound::Hurt);
                self.host.shake();
            }
            GameEvent::Milestone { score, at } => {
                log::debug!("Milestone reached: {}", score);
                self.play(Sound::Milestone);
                self.host.floating_text(&format!("{}!", score), at);
            }
            GameEvent::GameOver {
                final_score,
                new_high_score,
            } => {
                self.play(Sound::GameOver);
                if let Some(at) = new_high_score {
                    log::info!("New high score: {}", self.state.high_score);
                    self.store.save(self.state.high_score);
                    self.host.floating_text("NEW HIGH SCORE!", at);
                }
                log::info!("Game over with score {}", final_score);
                self.host.show_overlay(Overlay::GameOver { final_score });
            }
        }
    }
}

/// Drive `game` until its run ends.
///
/// The borrow is released while waiting for a frame so input handlers and
/// session controls can reach the game between frames.
pub async fn run_loop<H, S, P>(game: &RefCell<Game<H, S, P>>, clock: &mut impl FrameClock)
where
    H: Host,
    S: Surface,
    P: HighScoreStore,
{
    loop {
        let timestamp = clock.next_frame().await;
        if !game.borrow_mut().frame(timestamp) {
            break;
        }
    }
    log::debug!("Frame loop stopped");
}

/// Pointer x for demo mode: the lowest good item still above the paddle
pub fn autopilot_x(state: &GameState) -> f32 {
    let paddle = &state.paddle;
    state
        .items
        .iter()
        .filter(|i| i.kind == ItemKind::Good && i.pos.y < paddle.pos.y + paddle.height)
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
        .map(|i| i.center().x)
        .unwrap_or(paddle.pos.x + paddle.width / 2.0)
}
