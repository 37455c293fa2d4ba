//! Draw-call recorder
//!
//! Keeps every call a frame makes, in order, so the layering and the
//! starfield can be checked without a browser.

use crate::core::Vec2;

use super::surface::Surface;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Clear,
    Rect { x: f64, y: f64, w: f64, h: f64, color: String },
    Line { from: Vec2, to: Vec2, color: String },
    Circle { center: Vec2, radius: f64, color: String },
}

#[derive(Clone, Debug)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, calls: Vec::new() }
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Drop recorded calls, keeping the dimensions
    pub fn reset(&mut self) {
        self.calls.clear();
    }

    pub fn rects(&self) -> impl Iterator<Item = &DrawCall> {
        self.calls.iter().filter(|c| matches!(c, DrawCall::Rect { .. }))
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCall> {
        self.calls.iter().filter(|c| matches!(c, DrawCall::Line { .. }))
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCall> {
        self.calls.iter().filter(|c| matches!(c, DrawCall::Circle { .. }))
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f64 { self.width }

    fn height(&self) -> f64 { self.height }

    fn clear(&mut self) -> Result<(), String> {
        self.calls.push(DrawCall::Clear);
        Ok(())
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str) -> Result<(), String> {
        self.calls.push(DrawCall::Rect { x, y, w, h, color: color.to_string() });
        Ok(())
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: &str) -> Result<(), String> {
        self.calls.push(DrawCall::Line { from, to, color: color.to_string() });
        Ok(())
    }

    fn circle(&mut self, center: Vec2, radius: f64, color: &str) -> Result<(), String> {
        if radius < 0.0 {
            // Same rejection CanvasRenderingContext2d.arc gives.
            return Err(format!("negative radius {}", radius));
        }
        self.calls.push(DrawCall::Circle { center, radius, color: color.to_string() });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_call_order() {
        let mut s = RecordingSurface::new(800.0, 600.0);
        s.clear().unwrap();
        s.fill_rect(1.0, 2.0, 2.0, 2.0, "white").unwrap();
        s.line(Vec2::zero(), Vec2::new(1.0, 1.0), "white").unwrap();
        s.circle(Vec2::new(5.0, 5.0), 5.0, "white").unwrap();

        assert_eq!(s.calls().len(), 4);
        assert_eq!(s.calls()[0], DrawCall::Clear);
        assert_eq!(s.rects().count(), 1);
        assert_eq!(s.lines().count(), 1);
        assert_eq!(s.circles().count(), 1);

        s.reset();
        assert!(s.calls().is_empty());
        assert_eq!(s.width(), 800.0);
    }

    #[test]
    fn negative_radius_is_rejected() {
        let mut s = RecordingSurface::new(10.0, 10.0);
        let err = s.circle(Vec2::zero(), -1.0, "white").unwrap_err();
        assert!(err.contains("negative radius"));
        assert!(s.calls().is_empty());
    }
}
