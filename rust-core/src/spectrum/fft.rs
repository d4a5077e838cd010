//! FFT engine using realfft for real-valued signals
//!
//! Plans are cached per thread, so engines can be created per call without
//! re-planning and without sharing mutable state between threads.

use realfft::{RealFftPlanner, RealToComplex};
use std::cell::RefCell;
use std::sync::Arc;

use crate::error::Result;

thread_local! {
    static FFT_PLANNER: RefCell<RealFftPlanner<f64>> = RefCell::new(RealFftPlanner::new());
}

/// Smallest power of two not less than `n`
pub fn fft_size_for(n: usize) -> usize {
    n.next_power_of_two()
}

/// FFT engine for real-valued signals
pub struct FftEngine {
    /// FFT size (number of samples)
    fft_size: usize,

    /// Real FFT processor
    r2c: Arc<dyn RealToComplex<f64>>,

    /// Reusable input buffer
    input_buffer: Vec<f64>,

    /// Reusable output buffer (complex spectrum)
    output_buffer: Vec<num_complex::Complex<f64>>,
}

impl FftEngine {
    /// Create new FFT engine
    ///
    /// # Arguments
    /// * `fft_size` - FFT size (number of samples, non-zero)
    pub fn new(fft_size: usize) -> Self {
        let r2c = FFT_PLANNER.with(|planner| planner.borrow_mut().plan_fft_forward(fft_size));
        let input_buffer = r2c.make_input_vec();
        let output_buffer = r2c.make_output_vec();

        Self {
            fft_size,
            r2c,
            input_buffer,
            output_buffer,
        }
    }

    /// Engine sized for `n` samples (next power of two)
    pub fn for_samples(n: usize) -> Self {
        Self::new(fft_size_for(n))
    }

    /// Compute FFT and return the one-sided magnitude spectrum
    ///
    /// # Arguments
    /// * `signal` - Input signal (zero-padded if shorter than fft_size)
    ///
    /// # Returns
    /// |X[k]| for k = 0..=fft_size/2, unnormalized
    pub fn compute_magnitude(&mut self, signal: &[f64]) -> Result<Vec<f64>> {
        self.transform(signal)?;
        Ok(self.output_buffer.iter().map(|c| c.norm()).collect())
    }

    /// Magnitudes of the first `bins` bins of the full two-sided spectrum
    ///
    /// Bins past fft_size/2 are read from the conjugate-symmetric half,
    /// |X[k]| = |X[N-k]| for real input. `bins` is capped at fft_size.
    pub fn two_sided_magnitude(&mut self, signal: &[f64], bins: usize) -> Result<Vec<f64>> {
        self.transform(signal)?;
        let half = self.num_bins();
        let magnitudes = (0..bins.min(self.fft_size))
            .map(|k| {
                if k < half {
                    self.output_buffer[k].norm()
                } else {
                    self.output_buffer[self.fft_size - k].norm()
                }
            })
            .collect();
        Ok(magnitudes)
    }

    fn transform(&mut self, signal: &[f64]) -> Result<()> {
        // Copy signal to input buffer with zero-padding
        let copy_len = signal.len().min(self.fft_size);
        self.input_buffer[..copy_len].copy_from_slice(&signal[..copy_len]);
        self.input_buffer[copy_len..].fill(0.0);

        self.r2c
            .process(&mut self.input_buffer, &mut self.output_buffer)?;
        Ok(())
    }

    /// Get FFT size
    pub fn fft_size(&self) -> usize {
        self.fft_size
    }

    /// Get number of one-sided frequency bins (fft_size/2 + 1)
    pub fn num_bins(&self) -> usize {
        self.fft_size / 2 + 1
    }

    /// Frequency of `bin` in Hz
    pub fn bin_frequency(&self, bin: usize, sample_rate: f64) -> f64 {
        bin as f64 * sample_rate / self.fft_size as f64
    }
}
