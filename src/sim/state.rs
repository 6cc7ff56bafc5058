//! Game state and core simulation types

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::tuning::Tuning;

/// Session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Start screen, nothing simulated yet
    #[default]
    Idle,
    /// Active gameplay
    Running,
    /// Lives ran out
    Over,
}

/// An sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Fully saturated color at 50% lightness for a hue in degrees
    pub fn from_hue(hue: f32) -> Self {
        let h = hue.rem_euclid(360.0) / 60.0;
        let x = 1.0 - (h % 2.0 - 1.0).abs();
        let (r, g, b) = match h as u32 {
            0 => (1.0, x, 0.0),
            1 => (x, 1.0, 0.0),
            2 => (0.0, 1.0, x),
            3 => (0.0, x, 1.0),
            4 => (x, 0.0, 1.0),
            _ => (1.0, 0.0, x),
        };
        let channel = |v: f32| (v * 255.0).round() as u8;
        Self::rgb(channel(r), channel(g), channel(b))
    }

    /// CSS hex notation, e.g. `#ffd700`
    pub fn to_css(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Item kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// Worth points when caught
    Good,
    /// Costs a life when caught
    Bad,
}

/// A falling item
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: f32,
    /// Units per frame, frozen at spawn
    pub speed: f32,
    pub kind: ItemKind,
    /// Rotation in radians
    pub angle: f32,
    /// Radians per frame
    pub spin: f32,
}

impl Item {
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Desired x, written by input and already clamped to the canvas
    pub target_x: f32,
}

impl Paddle {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            width,
            height,
            target_x: 0.0,
        }
    }

    /// Clamp a desired left edge so the paddle stays on the canvas
    pub fn clamp_target(x: f32, width: f32, canvas_width: f32) -> f32 {
        x.max(0.0).min((canvas_width - width).max(0.0))
    }

    /// Center the paddle under pointer x (clamped)
    pub fn aim_at(&mut self, pointer_x: f32, canvas_width: f32) {
        self.target_x = Self::clamp_target(pointer_x - self.width / 2.0, self.width, canvas_width);
    }

    /// Move a fraction of the remaining gap toward the target
    pub fn ease(&mut self, factor: f32) {
        self.pos.x += (self.target_x - self.pos.x) * factor;
    }

    /// Place the paddle horizontally centered and stop any pending motion
    pub fn center_in(&mut self, canvas_width: f32) {
        self.pos.x = canvas_width / 2.0 - self.width / 2.0;
        self.target_x = self.pos.x;
    }
}

/// A particle for visual effects
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    /// Units per frame
    pub vel: Vec2,
    /// Decays every frame; doubles as opacity
    pub life: f32,
    pub color: Color,
}

/// Something that happened during an update that the host should react to
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A good item was caught at this point
    Caught { at: Vec2 },
    /// A bad item was caught at this point
    Hurt { at: Vec2 },
    /// The score crossed a milestone; `at` is where the celebration plays
    Milestone { score: u64, at: Vec2 },
    /// Lives ran out
    GameOver {
        final_score: u64,
        /// Celebration position when the previous high score was beaten
        new_high_score: Option<Vec2>,
    },
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub tuning: Tuning,
    pub phase: Phase,
    pub score: u64,
    pub high_score: u64,
    pub lives: u8,
    /// Milliseconds since the last spawn
    pub spawn_timer: f32,
    /// Milliseconds between spawns
    pub spawn_interval: f32,
    pub speed_multiplier: f32,
    /// Score at the last good catch, used to detect milestone crossings
    pub last_milestone: u64,
    /// Canvas size
    pub arena: Vec2,
    pub paddle: Paddle,
    pub items: Vec<Item>,
    pub particles: Vec<Particle>,
    pub rng: Pcg32,
}

impl GameState {
    /// Create an idle session on a canvas of the given size
    pub fn new(tuning: Tuning, arena: Vec2, high_score: u64, seed: u64) -> Self {
        let paddle = Paddle::new(tuning.paddle_width, tuning.paddle_height);
        let mut state = Self {
            phase: Phase::Idle,
            score: 0,
            high_score,
            lives: tuning.lives(),
            spawn_timer: 0.0,
            spawn_interval: tuning.spawn_interval_start,
            speed_multiplier: 1.0,
            last_milestone: 0,
            arena,
            paddle,
            items: Vec::new(),
            particles: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            tuning,
        };
        state.resize(arena);
        state
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Begin a fresh run. Valid from any phase.
    pub fn reset(&mut self) {
        self.phase = Phase::Running;
        self.score = 0;
        self.lives = self.tuning.lives();
        self.spawn_timer = 0.0;
        self.spawn_interval = self.tuning.spawn_interval_start;
        self.speed_multiplier = 1.0;
        self.last_milestone = 0;
        self.items.clear();
        self.particles.clear();
    }

    /// Adapt to a new canvas size
    pub fn resize(&mut self, arena: Vec2) {
        self.arena = arena;
        self.paddle.pos.y = arena.y - self.tuning.paddle_bottom_offset;
        if !self.is_running() {
            self.paddle.center_in(arena.x);
        }
    }

    /// Pointer/touch input; ignored unless running
    pub fn aim_paddle(&mut self, pointer_x: f32) {
        if self.is_running() {
            self.paddle.aim_at(pointer_x, self.arena.x);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena() -> Vec2 {
        Vec2::new(800.0, 600.0)
    }

    #[test]
    fn test_new_state_is_idle_and_centered() {
        let state = GameState::new(Tuning::default(), arena(), 42, 1);
        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.high_score, 42);
        assert_eq!(state.lives, 3);
        assert_eq!(state.paddle.pos, Vec2::new(360.0, 480.0));
        assert_eq!(state.paddle.target_x, 360.0);
    }

    #[test]
    fn test_reset_restores_run_defaults() {
        let mut state = GameState::new(Tuning::default(), arena(), 0, 1);
        state.score = 730;
        state.lives = 1;
        state.spawn_interval = 420.0;
        state.speed_multiplier = 1.3;
        state.last_milestone = 730;
        state.phase = Phase::Over;

        state.reset();

        assert_eq!(state.phase, Phase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 3);
        assert_eq!(state.spawn_interval, 1000.0);
        assert_eq!(state.speed_multiplier, 1.0);
        assert_eq!(state.last_milestone, 0);
        assert!(state.items.is_empty());
        assert!(state.particles.is_empty());
    }

    #[test]
    fn test_input_ignored_unless_running() {
        let mut state = GameState::new(Tuning::default(), arena(), 0, 1);
        state.aim_paddle(10.0);
        assert_eq!(state.paddle.target_x, 360.0);

        state.reset();
        state.aim_paddle(10.0);
        assert_eq!(state.paddle.target_x, 0.0);
        state.aim_paddle(790.0);
        assert_eq!(state.paddle.target_x, 720.0);
        state.aim_paddle(400.0);
        assert_eq!(state.paddle.target_x, 360.0);
    }

    #[test]
    fn test_resize_keeps_position_while_running() {
        let mut state = GameState::new(Tuning::default(), arena(), 0, 1);
        state.reset();
        state.paddle.pos.x = 12.0;
        state.resize(Vec2::new(1024.0, 768.0));
        assert_eq!(state.paddle.pos.x, 12.0);
        assert_eq!(state.paddle.pos.y, 648.0);
    }

    #[test]
    fn test_narrow_canvas_clamps_to_zero() {
        assert_eq!(Paddle::clamp_target(30.0, 80.0, 50.0), 0.0);
    }

    #[test]
    fn test_hue_colors() {
        assert_eq!(Color::from_hue(0.0), Color::rgb(255, 0, 0));
        assert_eq!(Color::from_hue(120.0), Color::rgb(0, 255, 0));
        assert_eq!(Color::from_hue(240.0), Color::rgb(0, 0, 255));
        assert_eq!(Color::from_hue(60.0), Color::rgb(255, 255, 0));
        assert_eq!(Color::rgb(255, 215, 0).to_css(), "#ffd700");
    }
}
