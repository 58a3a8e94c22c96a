//! Bit allocation profiles
//!
//! A profile decides how many low-frequency FFT bins a frame encodes and how
//! many bits each bin receives. The per-bin budget follows an equal-loudness
//! weighting curve: the bands the ear resolves best get the most bits, the
//! extremes get the fewest. Profiles are built once and shared process-wide.

use std::sync::OnceLock;

use crate::core::{CodecError, CodecResult, FFT_SIZE, HEADER_SIZE, SAMPLE_RATE};

/// number of registered profiles
pub const NUM_PROFILES: usize = 4;

/// profile names in wire-id order
pub const PROFILE_NAMES: [&str; NUM_PROFILES] = ["low", "medium", "high", "full"];

/// Weighting band edges in Hz
///
/// Band `i` covers frequencies below `WEIGHT_BAND_EDGES_HZ[i]`; the last
/// band in each bit table covers everything from the final edge up.
pub const WEIGHT_BAND_EDGES_HZ: [f32; 9] = [
    50.0, 125.0, 250.0, 500.0, 1000.0, 3000.0, 7000.0, 9000.0, 13000.0,
];

// per-band bit budgets

/// 4-12 bits, telephone quality
const LOW_BITS: [u8; 10] = [5, 12, 11, 10, 9, 8, 7, 6, 5, 4];

/// 6-14 bits, good speech quality
const MEDIUM_BITS: [u8; 10] = [7, 14, 13, 12, 11, 10, 9, 8, 7, 6];

/// 8-16 bits, near-CD quality
const HIGH_BITS: [u8; 10] = [9, 16, 15, 14, 13, 12, 11, 10, 9, 8];

/// 16 bits uniform, uncompressed
const FULL_BITS: [u8; 10] = [16; 10];

/// Bit budget for a frequency under a per-band table
fn band_bits(freq: f32, bits: &[u8; 10]) -> u8 {
    for (i, &edge) in WEIGHT_BAND_EDGES_HZ.iter().enumerate() {
        if freq < edge {
            return bits[i];
        }
    }
    bits[WEIGHT_BAND_EDGES_HZ.len()]
}

/// An immutable bit allocation profile
#[derive(Debug, Clone)]
pub struct Profile {
    /// profile name ("low", "medium", "high", "full")
    pub name: &'static str,
    /// wire id, byte 2 of the frame header
    pub id: u8,
    /// number of low-frequency bins encoded
    pub bin_count: usize,
    /// bit budget per bin
    pub weights: Vec<u8>,
    /// total payload bits: real + imaginary for every bin
    pub total_bits: usize,
    /// payload bytes, `total_bits` rounded up to whole bytes
    pub payload_bytes: usize,
}

impl Profile {
    fn build(name: &'static str, id: u8, bin_count: usize, bits: &[u8; 10]) -> Self {
        let weights: Vec<u8> = (0..bin_count)
            .map(|i| {
                let freq = (i as f32 * SAMPLE_RATE as f32) / FFT_SIZE as f32;
                band_bits(freq, bits)
            })
            .collect();

        let total_bits = weights.iter().map(|&w| w as usize).sum::<usize>() * 2;
        let payload_bytes = total_bits.div_ceil(8);

        Profile {
            name,
            id,
            bin_count,
            weights,
            total_bits,
            payload_bytes,
        }
    }

    /// Total encoded frame size in bytes, header included
    pub fn frame_size_bytes(&self) -> usize {
        HEADER_SIZE + self.payload_bytes
    }

    /// Frequency in Hz above which this profile encodes nothing
    ///
    /// Bins past `bin_count` stay zero through decode, so the profile acts
    /// as a brick-wall low-pass at this frequency.
    pub fn cutoff_hz(&self) -> f32 {
        (self.bin_count as f32 * SAMPLE_RATE as f32) / FFT_SIZE as f32
    }
}

static PROFILES: OnceLock<[Profile; NUM_PROFILES]> = OnceLock::new();

/// All profiles in wire-id order, built on first use
pub fn profiles() -> &'static [Profile; NUM_PROFILES] {
    PROFILES.get_or_init(|| {
        [
            Profile::build("low", 0, 160, &LOW_BITS),
            Profile::build("medium", 1, 256, &MEDIUM_BITS),
            Profile::build("high", 2, 384, &HIGH_BITS),
            Profile::build("full", 3, 512, &FULL_BITS),
        ]
    })
}

/// Look up a profile by name
pub fn by_name(name: &str) -> CodecResult<&'static Profile> {
    profiles()
        .iter()
        .find(|p| p.name == name)
        .ok_or_else(|| CodecError::UnknownProfile(name.to_string()))
}

/// Look up a profile by wire id
///
/// Returns `None` for ids outside the registry; the decoder maps that to
/// profile 0 so streams from newer encoders keep playing.
pub fn by_id(id: u8) -> Option<&'static Profile> {
    profiles().get(id as usize)
}

/// Total encoded frame size in bytes for a named profile
pub fn frame_size_bytes(name: &str) -> CodecResult<usize> {
    Ok(by_name(name)?.frame_size_bytes())
}
