//! Core building blocks shared by every layer: math, logging, randomness.

#[macro_use]
pub mod utils;
pub mod vec2;

pub use vec2::Vec2;
