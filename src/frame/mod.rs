//! Frame encoding and decoding
//!
//! Combines the FFT engine, profile table, quantizer, and bit codec into the
//! wire format: a 12-byte header followed by bit-packed spectral
//! coefficients.

pub mod decoder;
pub mod encoder;

pub use decoder::{DecodedFrame, FrameDecoder};
pub use encoder::FrameEncoder;

// shared quantizer

/// Quantize a spectral value into `bits` bits against a per-frame scale
///
/// The value is clipped to [-scale, +scale], mapped to [0, 1], spread over
/// the lattice, and rounded half away from zero. `scale` must be positive;
/// the encoder guarantees it via the silence floor.
pub fn quantize(value: f64, scale: f64, bits: u8) -> u32 {
    let max_quant = ((1u32 << bits) - 1) as f64;
    let clipped = value.clamp(-scale, scale);
    let q = ((clipped / scale + 1.0) * 0.5 * max_quant).round();
    q.clamp(0.0, max_quant) as u32
}

/// Inverse of [`quantize`]
pub fn dequantize(q: u32, scale: f64, bits: u8) -> f64 {
    let max_quant = ((1u32 << bits) - 1) as f64;
    (q as f64 / max_quant * 2.0 - 1.0) * scale
}
