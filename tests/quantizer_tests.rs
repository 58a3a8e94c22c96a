#[cfg(test)]
mod quantizer_tests {
    use libfonic::{dequantize, quantize};

    #[test]
    fn test_endpoints_hit_lattice_ends() {
        for bits in 1..=16u8 {
            let max_quant = (1u32 << bits) - 1;
            assert_eq!(quantize(1.0, 1.0, bits), max_quant, "{} bits", bits);
            assert_eq!(quantize(-1.0, 1.0, bits), 0, "{} bits", bits);
            assert_eq!(dequantize(max_quant, 1.0, bits), 1.0);
            assert_eq!(dequantize(0, 1.0, bits), -1.0);
        }
    }

    #[test]
    fn test_out_of_range_values_clip() {
        assert_eq!(quantize(7.5, 0.5, 8), 255);
        assert_eq!(quantize(-7.5, 0.5, 8), 0);
    }

    #[test]
    fn test_zero_rounds_half_away() {
        // M = 15 is odd, so zero maps to 7.5 and rounds away from zero to 8
        assert_eq!(quantize(0.0, 1.0, 4), 8);
        // the lattice straddles zero: 8 decodes just above it
        let back = dequantize(8, 1.0, 4);
        assert!((back - 1.0 / 15.0).abs() < 1e-12);
    }

    #[test]
    fn test_one_bit_degenerates_to_sign() {
        assert_eq!(quantize(0.3, 1.0, 1), 1);
        assert_eq!(quantize(-0.3, 1.0, 1), 0);
        assert_eq!(dequantize(1, 1.0, 1), 1.0);
        assert_eq!(dequantize(0, 1.0, 1), -1.0);
    }

    #[test]
    fn test_monotonic() {
        let scale = 2.5;
        let mut prev = 0;
        for i in 0..=100 {
            let x = -scale + (2.0 * scale) * i as f64 / 100.0;
            let q = quantize(x, scale, 10);
            assert!(q >= prev, "quantizer must be monotone");
            prev = q;
        }
    }

    #[test]
    fn test_roundtrip_error_bound() {
        // worst case error is half a lattice step: scale / M
        for bits in [4u8, 8, 12, 16] {
            let max_quant = ((1u32 << bits) - 1) as f64;
            let scale = 3.0;
            for i in 0..=1000 {
                let x = -scale + (2.0 * scale) * i as f64 / 1000.0;
                let back = dequantize(quantize(x, scale, bits), scale, bits);
                let bound = scale / max_quant + 1e-12;
                assert!(
                    (back - x).abs() <= bound,
                    "{} bits: |{} - {}| > {}",
                    bits,
                    back,
                    x,
                    bound
                );
            }
        }
    }
}
