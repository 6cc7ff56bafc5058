//! DOM-backed host

use glam::Vec2;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use super::{Host, Hud, Overlay};
use crate::audio::{AudioManager, Sound};
use crate::consts::{FLOATING_TEXT_MS, SHAKE_MS};

/// Run `f` once after `ms` milliseconds
fn after(ms: i32, f: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else { return };
    let closure = Closure::once(f);
    let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        ms,
    );
    closure.forget();
}

/// Show one overlay screen or hide it
fn set_screen(el: &Option<Element>, visible: bool) {
    let Some(el) = el else { return };
    let classes = el.class_list();
    if visible {
        let _ = classes.remove_1("hidden");
        let _ = classes.add_1("active");
    } else {
        let _ = classes.add_1("hidden");
        let _ = classes.remove_1("active");
    }
}

fn set_text(el: &Option<Element>, text: &str) {
    if let Some(el) = el {
        el.set_text_content(Some(text));
    }
}

/// Host that writes to the page's HUD elements and plays synthesized audio
pub struct DomHost {
    document: Document,
    game_container: Option<Element>,
    effects_layer: Option<Element>,
    start_screen: Option<Element>,
    game_over_screen: Option<Element>,
    score: Option<Element>,
    high_score: Option<Element>,
    final_score: Option<Element>,
    lives: Option<Element>,
    mute_btn: Option<Element>,
    audio: AudioManager,
}

impl DomHost {
    /// Look up the page elements. Missing elements are skipped at update time.
    pub fn new(document: Document) -> Self {
        let by_id = |id: &str| {
            let el = document.get_element_by_id(id);
            if el.is_none() {
                log::warn!("Missing element #{}", id);
            }
            el
        };
        Self {
            game_container: by_id("game-container"),
            effects_layer: by_id("effects-layer"),
            start_screen: by_id("start-screen"),
            game_over_screen: by_id("game-over-screen"),
            score: by_id("score-display"),
            high_score: by_id("high-score-display"),
            final_score: by_id("final-score-display"),
            lives: by_id("lives-display"),
            mute_btn: by_id("mute-btn"),
            audio: AudioManager::new(),
            document,
        }
    }
}

impl Host for DomHost {
    fn play(&mut self, sound: Sound) {
        self.audio.play(sound);
    }

    fn floating_text(&mut self, text: &str, at: Vec2) {
        let Some(layer) = &self.effects_layer else { return };
        let Ok(el) = self.document.create_element("div") else { return };
        el.set_class_name("floating-text");
        el.set_text_content(Some(text));
        let _ = el.set_attribute("style", &format!("left: {}px; top: {}px;", at.x, at.y));
        if layer.append_child(&el).is_err() {
            return;
        }
        after(FLOATING_TEXT_MS, move || el.remove());
    }

    fn shake(&mut self) {
        let Some(container) = self.game_container.clone() else { return };
        let _ = container.class_list().add_1("shake-effect");
        after(SHAKE_MS, move || {
            let _ = container.class_list().remove_1("shake-effect");
        });
    }

    fn update_hud(&mut self, hud: &Hud) {
        set_text(&self.score, &hud.score.to_string());
        set_text(&self.high_score, &hud.high_score.to_string());
        set_text(&self.lives, &hud.hearts());
    }

    fn show_overlay(&mut self, overlay: Overlay) {
        set_screen(&self.start_screen, overlay == Overlay::Start);
        match overlay {
            Overlay::GameOver { final_score } => {
                set_text(&self.final_score, &final_score.to_string());
                set_screen(&self.game_over_screen, true);
            }
            _ => set_screen(&self.game_over_screen, false),
        }
    }

    fn set_mute_indicator(&mut self, muted: bool) {
        set_text(&self.mute_btn, if muted { "🔇" } else { "🔊" });
    }
}
