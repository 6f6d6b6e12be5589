pub mod camera;
pub mod greenery;

pub use greenery::{analyze, count_green_pixels, Report};
