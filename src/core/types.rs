//! common types and constants for the fonic codec

use thiserror::Error;

// constants

/// PCM samples per encoded frame
pub const FRAME_SAMPLES: usize = 1024;

/// sample rate in Hz (mono)
pub const SAMPLE_RATE: u32 = 48_000;

/// FFT size, equal to [`FRAME_SAMPLES`]; the transform covers the whole frame
pub const FFT_SIZE: usize = 1024;

/// fixed header bytes at the front of every encoded frame
pub const HEADER_SIZE: usize = 12;

/// wire format version, written to byte 0 of every frame
pub const VERSION: u8 = 2;

// errors

/// Error type for codec operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Encode or size query with a profile name outside the registry
    #[error("unknown profile: {0}")]
    UnknownProfile(String),

    /// Encode input that is not exactly one frame of samples
    #[error("bad frame length: expected {expected} samples, got {got}")]
    BadFrameLength { expected: usize, got: usize },

    /// Decode input shorter than the fixed header
    #[error("frame too small: need {needed} bytes, got {got}")]
    TooSmall { needed: usize, got: usize },

    /// Decode input written by an incompatible format version
    #[error("unsupported codec version {0}")]
    UnsupportedVersion(u8),
}

/// result type for codec operations
pub type CodecResult<T> = Result<T, CodecError>;
