//! Canvas 2D drawing surface

use game_core::Surface;
use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// `Surface` backed by a canvas element's 2D context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx })
    }

    pub fn context(&self) -> &CanvasRenderingContext2d {
        &self.ctx
    }
}

impl Surface for CanvasSurface {
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.ctx
            .clear_rect(x as f64, y as f64, width as f64, height as f64);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx
            .fill_rect(x as f64, y as f64, width as f64, height as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        if let Err(err) = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        ) {
            tracing::warn!(?err, radius, "arc rejected");
            return;
        }
        self.ctx.fill();
    }

    fn stroke_dashed_line(&mut self, from: Vec2, to: Vec2, dash: &[f32], color: &str) {
        let pattern = js_sys::Array::new();
        for segment in dash {
            pattern.push(&JsValue::from(*segment as f64));
        }
        if let Err(err) = self.ctx.set_line_dash(&JsValue::from(pattern)) {
            tracing::warn!(?err, "line dash rejected");
        }

        self.ctx.set_stroke_style_str(color);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();

        // Solid lines again for whoever strokes next
        if let Err(err) = self.ctx.set_line_dash(&JsValue::from(js_sys::Array::new())) {
            tracing::warn!(?err, "line dash reset rejected");
        }
    }
}
