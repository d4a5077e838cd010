//! Spectral analysis of waveform windows

pub mod aggregated;
pub mod fft;
pub mod point;
pub mod raw;
pub mod series;
pub mod time_window;
pub mod windowing;

pub use aggregated::AggregatedSpectrumGenerator;
pub use fft::{fft_size_for, FftEngine};
pub use point::{HasAmplitude, SpectrumPoint, WaveSpectrum};
pub use raw::RawSpectrumGenerator;
pub use series::{SlidingWindow, SpectrumFrame, SpectrumSeries};
pub use time_window::TimeWindow;
pub use windowing::WindowFunction;

use crate::error::Result;

/// Computes the spectrum of a time window
///
/// Implementations are stateless between calls: the same window over the
/// same waveform always yields the same spectrum.
pub trait SpectrumGenerator {
    fn generate(&self, window: &TimeWindow) -> Result<WaveSpectrum>;
}

impl<T: SpectrumGenerator + ?Sized> SpectrumGenerator for Box<T> {
    fn generate(&self, window: &TimeWindow) -> Result<WaveSpectrum> {
        (**self).generate(window)
    }
}
