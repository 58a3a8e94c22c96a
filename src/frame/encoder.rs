use super::quantize;
use crate::core::bits::BitWriter;
use crate::core::{CodecError, CodecResult, FFT_SIZE, FRAME_SAMPLES, HEADER_SIZE, VERSION};
use crate::fft::Fft;
use crate::profile;

/// Floor for the per-frame scale
///
/// Keeps the quantizer's division defined on silent frames. Well below f32
/// mantissa spacing near 1.0, so it is indistinguishable from true zero
/// after the round trip.
const SILENCE_FLOOR: f64 = 1e-9;

/// Frame encoder
///
/// Holds the FFT tables and the running sequence counter. One instance per
/// audio stream; the counter is per-instance so concurrent streams never
/// couple through shared state.
pub struct FrameEncoder {
    fft: Fft,
    sequence: u32,
}

impl FrameEncoder {
    /// New encoder starting at sequence 0
    pub fn new() -> Self {
        Self::with_sequence(0)
    }

    /// New encoder resuming a stream at the given sequence number
    pub fn with_sequence(sequence: u32) -> Self {
        FrameEncoder {
            fft: Fft::new(FFT_SIZE),
            sequence,
        }
    }

    /// Sequence number the next encoded frame will carry
    pub fn sequence(&self) -> u32 {
        self.sequence
    }

    /// Encode one frame of PCM into a self-describing binary packet
    ///
    /// `samples` must be exactly [`FRAME_SAMPLES`] mono samples in [-1, 1].
    /// Returns header plus bit-packed coefficients, sized
    /// `HEADER_SIZE + payload_bytes` for the named profile.
    pub fn encode(&mut self, samples: &[f32], profile: &str) -> CodecResult<Vec<u8>> {
        let prof = profile::by_name(profile)?;
        if samples.len() != FRAME_SAMPLES {
            return Err(CodecError::BadFrameLength {
                expected: FRAME_SAMPLES,
                got: samples.len(),
            });
        }

        let mut re = vec![0.0f64; FFT_SIZE];
        let mut im = vec![0.0f64; FFT_SIZE];
        for (dst, &s) in re.iter_mut().zip(samples.iter()) {
            *dst = s as f64;
        }
        self.fft.forward(&mut re, &mut im);

        // peak magnitude across the encoded bins sets the quantizer scale
        let mut max_abs = 0.0f64;
        for i in 0..prof.bin_count {
            max_abs = max_abs.max(re[i].abs()).max(im[i].abs());
        }
        if max_abs < SILENCE_FLOOR {
            max_abs = SILENCE_FLOOR;
        }

        let mut buf = Vec::with_capacity(prof.frame_size_bytes());
        buf.push(VERSION);
        // low byte only; wraps at 256, the profile id is authoritative
        buf.push((prof.bin_count & 0xFF) as u8);
        buf.push(prof.id);
        buf.push(0); // reserved
        buf.extend_from_slice(&(max_abs as f32).to_le_bytes());
        buf.extend_from_slice(&self.sequence.to_le_bytes());
        self.sequence = self.sequence.wrapping_add(1);

        let mut bits = BitWriter::with_capacity(prof.payload_bytes);
        for i in 0..prof.bin_count {
            let w = prof.weights[i];
            bits.write_bits(quantize(re[i], max_abs, w), w);
            bits.write_bits(quantize(im[i], max_abs, w), w);
        }
        let payload = bits.into_bytes();
        debug_assert_eq!(payload.len(), prof.payload_bytes);
        buf.extend_from_slice(&payload);

        debug_assert_eq!(buf.len(), HEADER_SIZE + prof.payload_bytes);
        Ok(buf)
    }
}

impl Default for FrameEncoder {
    fn default() -> Self {
        Self::new()
    }
}
