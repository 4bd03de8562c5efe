//! 基本型（Color / Square）

mod color;
mod square;

pub use color::Color;
pub use square::Square;
