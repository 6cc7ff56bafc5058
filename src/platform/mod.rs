//! Platform abstraction layer
//!
//! Everything the game does to the outside world besides drawing goes through
//! [`Host`]: HUD text, overlays, floating text, screen shake and sound.
//! The browser implementation drives the DOM; [`HeadlessHost`] records calls.

pub mod headless;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use headless::{HeadlessHost, HostCall};

use glam::Vec2;

use crate::audio::Sound;

/// Values shown in the heads-up display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hud {
    pub score: u64,
    pub high_score: u64,
    pub lives: u8,
}

impl Hud {
    /// Lives as a row of hearts
    pub fn hearts(&self) -> String {
        "❤️ ".repeat(self.lives as usize)
    }
}

/// Full-screen overlay currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    /// Playing, nothing covers the canvas
    None,
    /// Start screen with the start button
    Start,
    /// Game-over screen with the restart button
    GameOver { final_score: u64 },
}

/// UI and audio side effects. Every method is fire-and-forget.
pub trait Host {
    fn play(&mut self, sound: Sound);
    /// Transient text at a canvas position, removed after a fixed time
    fn floating_text(&mut self, text: &str, at: Vec2);
    /// Shake the play area briefly
    fn shake(&mut self);
    fn update_hud(&mut self, hud: &Hud);
    fn show_overlay(&mut self, overlay: Overlay);
    fn set_mute_indicator(&mut self, muted: bool);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hearts_match_lives() {
        let hud = Hud {
            score: 0,
            high_score: 0,
            lives: 3,
        };
        assert_eq!(hud.hearts().matches("❤️").count(), 3);
        assert_eq!(Hud { lives: 0, ..hud }.hearts(), "");
    }
}
