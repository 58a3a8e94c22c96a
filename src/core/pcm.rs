//! PCM sample conversion helpers
//!
//! Transports that carry raw s16le audio convert at the codec boundary with
//! these; the codec itself only sees f32 samples in [-1, 1].

/// Maximum positive value for 16-bit signed integer (2^15 - 1)
pub const I16_MAX_F32: f32 = 32767.0;

/// Minimum value for 16-bit signed integer (-2^15)
pub const I16_MIN_F32: f32 = -32768.0;

/// Scale for int→float conversion (1/32768)
pub const I16_TO_F32_SCALE: f32 = 1.0 / 32768.0;

/// Convert i16 sample to f32 in [-1, 1]
#[inline]
pub fn i16_to_f32(sample: i16) -> f32 {
    sample as f32 * I16_TO_F32_SCALE
}

/// Convert f32 sample to i16, rounding and clamping
#[inline]
pub fn f32_to_i16(sample: f32) -> i16 {
    (sample * I16_MAX_F32).round().clamp(I16_MIN_F32, I16_MAX_F32) as i16
}

/// Convert raw s16le PCM bytes to f32 samples
///
/// A trailing odd byte is ignored.
pub fn s16le_to_f32(pcm: &[u8]) -> Vec<f32> {
    pcm.chunks_exact(2)
        .map(|pair| i16_to_f32(i16::from_le_bytes([pair[0], pair[1]])))
        .collect()
}

/// Convert f32 samples to raw s16le PCM bytes
pub fn f32_to_s16le(samples: &[f32]) -> Vec<u8> {
    let mut out = Vec::with_capacity(samples.len() * 2);
    for &s in samples {
        out.extend_from_slice(&f32_to_i16(s).to_le_bytes());
    }
    out
}
