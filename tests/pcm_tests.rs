#[cfg(test)]
mod pcm_tests {
    use libfonic::core::pcm::{f32_to_i16, f32_to_s16le, i16_to_f32, s16le_to_f32};

    #[test]
    fn test_i16_extremes() {
        assert_eq!(i16_to_f32(-32768), -1.0);
        assert_eq!(i16_to_f32(0), 0.0);
        assert!((i16_to_f32(32767) - 0.99997).abs() < 1e-4);

        assert_eq!(f32_to_i16(1.0), 32767);
        assert_eq!(f32_to_i16(-1.0), -32767);
        assert_eq!(f32_to_i16(0.0), 0);
    }

    #[test]
    fn test_f32_to_i16_clamps() {
        assert_eq!(f32_to_i16(5.0), 32767);
        assert_eq!(f32_to_i16(-5.0), -32768);
    }

    #[test]
    fn test_s16le_decoding() {
        // 0x0001 = 1, 0x8000 = -32768, 0x7FFF = 32767
        let pcm = [0x01, 0x00, 0x00, 0x80, 0xFF, 0x7F];
        let samples = s16le_to_f32(&pcm);
        assert_eq!(samples.len(), 3);
        assert!((samples[0] - 1.0 / 32768.0).abs() < 1e-9);
        assert_eq!(samples[1], -1.0);
        assert!((samples[2] - 0.99997).abs() < 1e-4);
    }

    #[test]
    fn test_trailing_odd_byte_ignored() {
        assert_eq!(s16le_to_f32(&[0x00, 0x01, 0x02]).len(), 1);
    }

    #[test]
    fn test_bytes_roundtrip() {
        let samples: Vec<f32> = (-100..=100).map(|i| i as f32 / 128.0).collect();
        let bytes = f32_to_s16le(&samples);
        assert_eq!(bytes.len(), samples.len() * 2);

        let back = s16le_to_f32(&bytes);
        for (a, b) in samples.iter().zip(back.iter()) {
            assert!((a - b).abs() < 1.0 / 16384.0, "{} vs {}", a, b);
        }
    }
}
