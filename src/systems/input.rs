//! Arrow-key impulses
//!
//! Screen coordinates: +y points down, so "up" is negative y.

use crate::core::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Map a `KeyboardEvent.key` value; anything but the four arrows is `None`
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Direction::Up),
            "ArrowDown" => Some(Direction::Down),
            "ArrowLeft" => Some(Direction::Left),
            "ArrowRight" => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn unit(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
        }
    }

    pub fn impulse(self, magnitude: f64) -> Vec2 {
        self.unit() * magnitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_map_to_directions() {
        assert_eq!(Direction::from_key("ArrowUp"), Some(Direction::Up));
        assert_eq!(Direction::from_key("ArrowDown"), Some(Direction::Down));
        assert_eq!(Direction::from_key("ArrowLeft"), Some(Direction::Left));
        assert_eq!(Direction::from_key("ArrowRight"), Some(Direction::Right));
    }

    #[test]
    fn other_keys_are_ignored() {
        for key in ["a", "w", " ", "Enter", "arrowleft", "Left", ""] {
            assert_eq!(Direction::from_key(key), None, "{:?}", key);
        }
    }

    #[test]
    fn left_impulse_is_exactly_minus_x() {
        assert_eq!(Direction::Left.impulse(0.1), Vec2::new(-0.1, 0.0));
        assert_eq!(Direction::Up.impulse(0.1), Vec2::new(0.0, -0.1));
    }
}
