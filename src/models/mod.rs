pub mod decode_result;
pub mod grid;
pub mod matrix;

pub use decode_result::{DecodeResult, MAX_CODEWORD_VALUE};
pub use grid::PixelGrid;
pub use matrix::BitMatrix;
