#[macro_use]
pub mod console;
pub mod random;
