//! Recording host for native runs and tests

use glam::Vec2;

use super::{Host, Hud, Overlay};
use crate::audio::Sound;

/// A recorded host call
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    Play(Sound),
    FloatingText(String, Vec2),
    Shake,
    Hud(Hud),
    Overlay(Overlay),
    MuteIndicator(bool),
}

#[derive(Debug, Clone, Default)]
pub struct HeadlessHost {
    pub calls: Vec<HostCall>,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sounds(&self) -> Vec<Sound> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HostCall::Play(s) => Some(*s),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HostCall::FloatingText(t, _) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn last_hud(&self) -> Option<Hud> {
        self.calls.iter().rev().find_map(|c| match c {
            HostCall::Hud(h) => Some(*h),
            _ => None,
        })
    }

    pub fn last_overlay(&self) -> Option<Overlay> {
        self.calls.iter().rev().find_map(|c| match c {
            HostCall::Overlay(o) => Some(*o),
            _ => None,
        })
    }
}

impl Host for HeadlessHost {
    fn play(&mut self, sound: Sound) {
        log::trace!("play {}", sound.name());
        self.calls.push(HostCall::Play(sound));
    }

    fn floating_text(&mut self, text: &str, at: Vec2) {
        self.calls.push(HostCall::FloatingText(text.to_string(), at));
    }

    fn shake(&mut self) {
        self.calls.push(HostCall::Shake);
    }

    fn update_hud(&mut self, hud: &Hud) {
        self.calls.push(HostCall::Hud(*hud));
    }

    fn show_overlay(&mut self, overlay: Overlay) {
        self.calls.push(HostCall::Overlay(overlay));
    }

    fn set_mute_indicator(&mut self, muted: bool) {
        self.calls.push(HostCall::MuteIndicator(muted));
    }
}
