//! Browser canvas backend (wasm32 only)

use std::f64::consts::TAU;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use crate::core::Vec2;

use super::surface::Surface;

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Look up `<canvas id=...>` and grab its 2D context
    pub fn from_element_id(document: &Document, canvas_id: &str) -> Result<Self, JsValue> {
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str(&format!("no element with id '{}'", canvas_id)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str(&format!("element '{}' is not a <canvas>", canvas_id)))?;

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(Self { canvas, ctx })
    }
}

fn js_err(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

impl Surface for CanvasSurface {
    fn width(&self) -> f64 { self.canvas.width() as f64 }

    fn height(&self) -> f64 { self.canvas.height() as f64 }

    fn clear(&mut self) -> Result<(), String> {
        self.ctx.clear_rect(0.0, 0.0, self.width(), self.height());
        Ok(())
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str) -> Result<(), String> {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(x, y, w, h);
        Ok(())
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: &str) -> Result<(), String> {
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.set_stroke_style_str(color);
        self.ctx.stroke();
        Ok(())
    }

    fn circle(&mut self, center: Vec2, radius: f64, color: &str) -> Result<(), String> {
        self.ctx.begin_path();
        self.ctx.arc(center.x, center.y, radius, 0.0, TAU).map_err(js_err)?;
        self.ctx.set_fill_style_str(color);
        self.ctx.fill();
        self.ctx.set_stroke_style_str(color);
        self.ctx.stroke();
        Ok(())
    }
}
