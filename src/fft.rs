//! Radix-2 Cooley–Tukey FFT over parallel real/imaginary buffers
//!
//! The forward transform uses the e^(+jω) kernel and the inverse uses
//! e^(-jω) with 1/n normalization. That orientation is the codec's wire
//! convention: a real input frame produces the spectrum the decoder's
//! Hermitian mirror expects, with no sign fixups on either side.

use std::f64::consts::PI;

/// In-place radix-2 decimation-in-time FFT
///
/// The bit-reversal permutation is computed once per instance; forward and
/// inverse share it. Butterfly twiddles advance by complex multiplication,
/// so the inner loops do no trigonometry.
pub struct Fft {
    n: usize,
    rev: Vec<usize>,
}

impl Fft {
    /// New transform of size `n`, which must be a power of two, at least 2
    pub fn new(n: usize) -> Self {
        assert!(
            n >= 2 && n.is_power_of_two(),
            "FFT size must be a power of two, at least 2"
        );
        let bits = n.trailing_zeros();
        let rev = (0..n)
            .map(|i| i.reverse_bits() >> (usize::BITS - bits))
            .collect();
        Fft { n, rev }
    }

    /// transform size
    pub fn size(&self) -> usize {
        self.n
    }

    /// Forward transform, in place
    pub fn forward(&self, re: &mut [f64], im: &mut [f64]) {
        self.process(re, im, false);
    }

    /// Inverse transform, in place, normalized by 1/n
    pub fn inverse(&self, re: &mut [f64], im: &mut [f64]) {
        self.process(re, im, true);
    }

    fn process(&self, re: &mut [f64], im: &mut [f64], invert: bool) {
        let n = self.n;
        assert_eq!(re.len(), n, "real buffer length must equal FFT size");
        assert_eq!(im.len(), n, "imaginary buffer length must equal FFT size");

        for i in 0..n {
            let j = self.rev[i];
            if i < j {
                re.swap(i, j);
                im.swap(i, j);
            }
        }

        let mut len = 2;
        while len <= n {
            let ang = if invert {
                -2.0 * PI / len as f64
            } else {
                2.0 * PI / len as f64
            };
            let (step_re, step_im) = (ang.cos(), ang.sin());

            let mut start = 0;
            while start < n {
                let mut cur_re = 1.0f64;
                let mut cur_im = 0.0f64;

                for k in start..start + len / 2 {
                    let m = k + len / 2;
                    let t_re = re[m] * cur_re - im[m] * cur_im;
                    let t_im = re[m] * cur_im + im[m] * cur_re;

                    re[m] = re[k] - t_re;
                    im[m] = im[k] - t_im;
                    re[k] += t_re;
                    im[k] += t_im;

                    let next_re = cur_re * step_re - cur_im * step_im;
                    cur_im = cur_re * step_im + cur_im * step_re;
                    cur_re = next_re;
                }

                start += len;
            }

            len <<= 1;
        }

        if invert {
            let inv_n = 1.0 / n as f64;
            for v in re.iter_mut() {
                *v *= inv_n;
            }
            for v in im.iter_mut() {
                *v *= inv_n;
            }
        }
    }
}
