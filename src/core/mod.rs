pub mod bits;
pub mod pcm;
pub mod types;

pub use bits::{BitReader, BitWriter};
pub use pcm::{f32_to_i16, f32_to_s16le, i16_to_f32, s16le_to_f32};
pub use types::*;
