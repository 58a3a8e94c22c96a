//! libfonic - perceptually weighted FFT voice codec
//!
//! Encodes 1024-sample mono PCM frames at 48 kHz into compact,
//! self-describing binary packets for realtime transport. Each frame is
//! analyzed by a forward FFT; the low half of the spectrum is quantized
//! bin-by-bin under an equal-loudness bit allocation and packed MSB-first
//! behind a 12-byte header. The decoder rebuilds a Hermitian-symmetric
//! spectrum and inverts the transform.
//!
//! The codec does no I/O, no logging, and no scheduling. The only mutable
//! state is each [`FrameEncoder`]'s sequence counter; everything else is
//! built once and shared freely.

#![allow(clippy::needless_range_loop)]

pub mod core;
pub mod fft;
pub mod frame;
pub mod profile;

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
pub mod wasm;

pub use crate::core::{
    f32_to_s16le, s16le_to_f32, BitReader, BitWriter, CodecError, CodecResult, FFT_SIZE,
    FRAME_SAMPLES, HEADER_SIZE, SAMPLE_RATE, VERSION,
};
pub use fft::Fft;
pub use frame::{dequantize, quantize, DecodedFrame, FrameDecoder, FrameEncoder};
pub use profile::{frame_size_bytes, profiles, Profile, NUM_PROFILES, PROFILE_NAMES};

/// Decode a single frame without holding a decoder
///
/// Convenience for one-off decodes; per-stream callers should keep a
/// [`FrameDecoder`] around to reuse its FFT tables.
pub fn decode_frame(data: &[u8]) -> CodecResult<DecodedFrame> {
    FrameDecoder::new().decode(data)
}

// tests
