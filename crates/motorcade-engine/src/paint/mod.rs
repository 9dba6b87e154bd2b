mod color;

pub use color::Color;
pub use color::palette;
