use super::dequantize;
use crate::core::bits::BitReader;
use crate::core::{CodecError, CodecResult, FFT_SIZE, FRAME_SAMPLES, HEADER_SIZE, VERSION};
use crate::fft::Fft;
use crate::profile::{self, Profile};

/// A decoded frame plus the header fields useful to the transport layer
#[derive(Debug, Clone)]
pub struct DecodedFrame {
    /// PCM samples, always [`FRAME_SAMPLES`] long
    pub samples: Vec<f32>,
    /// profile the frame resolved to
    pub profile: &'static Profile,
    /// per-frame quantizer scale from the header
    pub scale: f32,
    /// sender's sequence counter, for reorder/loss detection upstream
    pub sequence: u32,
}

/// Frame decoder
///
/// Stateless apart from the FFT tables; safe to share behind a reference
/// across threads.
pub struct FrameDecoder {
    fft: Fft,
}

impl FrameDecoder {
    pub fn new() -> Self {
        FrameDecoder {
            fft: Fft::new(FFT_SIZE),
        }
    }

    /// Decode an encoded frame back to PCM
    ///
    /// Frames are self-describing: the profile comes from header byte 2.
    /// An id outside the registry falls back to profile 0 so a stream from
    /// a newer encoder degrades instead of erroring out mid-call. Missing
    /// payload bits read as zero coefficients.
    pub fn decode(&self, data: &[u8]) -> CodecResult<DecodedFrame> {
        if data.len() < HEADER_SIZE {
            return Err(CodecError::TooSmall {
                needed: HEADER_SIZE,
                got: data.len(),
            });
        }

        let version = data[0];
        if version != VERSION {
            return Err(CodecError::UnsupportedVersion(version));
        }

        // byte 1 holds bin_count & 0xFF, which wraps at 256; byte 2 is the
        // authoritative selector
        let profile_id = data[2];
        let scale = f32::from_le_bytes([data[4], data[5], data[6], data[7]]);
        let sequence = u32::from_le_bytes([data[8], data[9], data[10], data[11]]);

        let prof = profile::by_id(profile_id).unwrap_or(&profile::profiles()[0]);

        let mut re = vec![0.0f64; FFT_SIZE];
        let mut im = vec![0.0f64; FFT_SIZE];
        let mut bits = BitReader::new(&data[HEADER_SIZE..]);
        let scale_f64 = scale as f64;

        for i in 0..prof.bin_count {
            let w = prof.weights[i];
            let r = dequantize(bits.read_bits(w), scale_f64, w);
            let x = dequantize(bits.read_bits(w), scale_f64, w);

            re[i] = r;
            im[i] = x;
            // Hermitian mirror; bins between bin_count and its mirror stay
            // zero, a brick-wall low-pass at the profile cutoff
            if i != 0 {
                let mirror = FFT_SIZE - i;
                re[mirror] = r;
                im[mirror] = -x;
            }
        }

        self.fft.inverse(&mut re, &mut im);

        let samples = re[..FRAME_SAMPLES].iter().map(|&v| v as f32).collect();
        Ok(DecodedFrame {
            samples,
            profile: prof,
            scale,
            sequence,
        })
    }
}

impl Default for FrameDecoder {
    fn default() -> Self {
        Self::new()
    }
}
