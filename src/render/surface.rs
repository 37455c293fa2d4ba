use crate::core::Vec2;

/// Color for everything the scene draws (stars, joints, particles)
pub const WHITE: &str = "white";

/// A 2D raster target the frame tick draws onto
///
/// The browser canvas is one implementation; tests record calls, and
/// headless stepping draws nothing. Draw calls return `Err` with a
/// readable message when the backend rejects them.
pub trait Surface {
    /// Drawable width in pixels
    fn width(&self) -> f64;

    /// Drawable height in pixels
    fn height(&self) -> f64;

    /// Clear the whole surface
    fn clear(&mut self) -> Result<(), String>;

    /// Filled axis-aligned rectangle
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str) -> Result<(), String>;

    /// Straight line segment
    fn line(&mut self, from: Vec2, to: Vec2, color: &str) -> Result<(), String>;

    /// Filled and outlined circle
    fn circle(&mut self, center: Vec2, radius: f64, color: &str) -> Result<(), String>;
}

/// First draw failure of a frame, plus how many followed it
///
/// The passes draw as they go, so they record failures here and keep
/// going; the frame reports the first one at the end.
#[derive(Debug, Default)]
pub struct DrawErrors {
    first: Option<String>,
    more: u32,
}

impl DrawErrors {
    pub fn record(&mut self, result: Result<(), String>) {
        if let Err(e) = result {
            if self.first.is_none() {
                self.first = Some(e);
            } else {
                self.more += 1;
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    pub fn into_result(self) -> Result<(), String> {
        match self.first {
            None => Ok(()),
            Some(e) if self.more == 0 => Err(e),
            Some(e) => Err(format!("{} (+{} more draw errors)", e, self.more)),
        }
    }
}

/// Surface that discards everything, used by headless stepping
#[derive(Clone, Copy, Debug)]
pub struct NullSurface {
    width: f64,
    height: f64,
}

impl NullSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Surface for NullSurface {
    fn width(&self) -> f64 { self.width }

    fn height(&self) -> f64 { self.height }

    fn clear(&mut self) -> Result<(), String> { Ok(()) }

    fn fill_rect(
        &mut self,
        _x: f64,
        _y: f64,
        _w: f64,
        _h: f64,
        _color: &str,
    ) -> Result<(), String> {
        Ok(())
    }

    fn line(&mut self, _from: Vec2, _to: Vec2, _color: &str) -> Result<(), String> { Ok(()) }

    fn circle(&mut self, _center: Vec2, _radius: f64, _color: &str) -> Result<(), String> { Ok(()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_errors_is_ok() {
        let mut errors = DrawErrors::default();
        errors.record(Ok(()));
        assert!(errors.is_empty());
        assert_eq!(errors.into_result(), Ok(()));
    }

    #[test]
    fn first_error_wins_and_the_rest_are_counted() {
        let mut errors = DrawErrors::default();
        errors.record(Err("arc failed".to_string()));
        errors.record(Ok(()));
        errors.record(Err("stroke failed".to_string()));
        errors.record(Err("fill failed".to_string()));
        assert_eq!(errors.into_result(), Err("arc failed (+2 more draw errors)".to_string()));
    }
}
