pub mod boundary;
pub mod offsets;

pub use boundary::{neighbors, wrap};
pub use offsets::SQUARE;
