pub mod colour;
pub mod random;

// Re-export commonly used types
pub use colour::Colour;
pub use random::{random_colour, random_opaque, ColourGenerator, RandomError};
