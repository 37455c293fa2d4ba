pub mod input;
pub mod physics;
pub mod starfield;
