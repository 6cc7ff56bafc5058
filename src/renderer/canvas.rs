//! Browser surface backed by a 2D canvas context

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::surface::{Rect, Sprite, Surface};
use crate::sim::Color;

/// Sprite images, loaded asynchronously by the browser
pub struct Sprites {
    paddle: HtmlImageElement,
    good: HtmlImageElement,
    bad: HtmlImageElement,
}

impl Sprites {
    /// Start loading the three sprites from `<base>/player.png`, `good.png`, `bad.png`
    pub fn load(base: &str) -> Result<Self, wasm_bindgen::JsValue> {
        let image = |name: &str| -> Result<HtmlImageElement, wasm_bindgen::JsValue> {
            let img = HtmlImageElement::new()?;
            img.set_src(&format!("{}/{}", base, name));
            Ok(img)
        };
        Ok(Self {
            paddle: image("player.png")?,
            good: image("good.png")?,
            bad: image("bad.png")?,
        })
    }

    fn get(&self, sprite: Sprite) -> &HtmlImageElement {
        match sprite {
            Sprite::Paddle => &self.paddle,
            Sprite::Good => &self.good,
            Sprite::Bad => &self.bad,
        }
    }
}

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    sprites: Sprites,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement, sprites: Sprites) -> Result<Self, wasm_bindgen::JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or("2d context unavailable")?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self {
            canvas,
            ctx,
            sprites,
        })
    }

    /// Match the backing store to the window size
    pub fn resize(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> Vec2 {
        Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn sprite_ready(&self, sprite: Sprite) -> bool {
        // A broken image is "complete" too, so also require real dimensions
        let img = self.sprites.get(sprite);
        img.complete() && img.natural_width() > 0
    }

    fn clear(&mut self) {
        let size = self.size();
        self.ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, offset: Vec2) {
        self.ctx.translate(offset.x as f64, offset.y as f64).ok();
    }

    fn rotate(&mut self, angle: f32) {
        self.ctx.rotate(angle as f64).ok();
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.ctx.set_global_alpha(alpha as f64);
    }

    fn draw_sprite(&mut self, sprite: Sprite, rect: Rect) {
        let img = self.sprites.get(sprite);
        if let Err(e) = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
            img,
            rect.pos.x as f64,
            rect.pos.y as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        ) {
            log::debug!("drawImage failed: {:?}", e);
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(
            rect.pos.x as f64,
            rect.pos.y as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        );
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.begin_path();
        self.ctx
            .arc(
                center.x as f64,
                center.y as f64,
                radius as f64,
                0.0,
                std::f64::consts::TAU,
            )
            .ok();
        self.ctx.fill();
    }
}
