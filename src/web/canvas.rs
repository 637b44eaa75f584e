use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::geometry::Point;
use crate::render::{CircleStyle, Surface};

const LABEL_FONT: &str = "bold 16px Arial";

/// `Surface` backed by a 2D canvas context.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        ctx.set_font(LABEL_FONT);
        ctx.set_text_align("center");
        Self { ctx }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str) {
        self.ctx.set_fill_style(&JsValue::from_str(color));
        self.ctx.fill_rect(x, y, w, h);
    }

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str) {
        self.ctx.set_stroke_style(&JsValue::from_str(color));
        self.ctx.stroke_rect(x, y, w, h);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, color: &str) {
        self.ctx.set_fill_style(&JsValue::from_str(color));
        self.ctx.fill_text(text, x, y).ok();
    }

    fn circle(&mut self, center: Point, radius: f64, style: CircleStyle<'_>) {
        let ctx = &self.ctx;
        ctx.save();
        ctx.set_global_alpha(style.alpha);
        ctx.begin_path();
        ctx.arc(center.x, center.y, radius, 0.0, std::f64::consts::TAU).ok();
        ctx.set_fill_style(&JsValue::from_str(style.fill));
        ctx.fill();
        if let Some(stroke) = style.stroke {
            ctx.set_stroke_style(&JsValue::from_str(stroke));
            ctx.stroke();
        }
        ctx.restore();
    }
}
