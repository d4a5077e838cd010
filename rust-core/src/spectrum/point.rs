//! Spectrum points and spectra

use std::cmp::Ordering;

use crate::error::{AnalysisError, Result};
use crate::pitch::HasFrequency;

/// Anything carrying an amplitude
pub trait HasAmplitude {
    fn amplitude(&self) -> f64;
}

/// One (frequency, amplitude) sample of a spectrum
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpectrumPoint {
    frequency: f64,
    amplitude: f64,
}

impl SpectrumPoint {
    pub fn new(frequency: f64, amplitude: f64) -> Self {
        Self {
            frequency,
            amplitude,
        }
    }

    pub fn cmp_by_amplitude(&self, other: &Self) -> Ordering {
        self.amplitude.total_cmp(&other.amplitude)
    }

    pub fn cmp_by_frequency(&self, other: &Self) -> Ordering {
        self.frequency.total_cmp(&other.frequency)
    }

    /// Amplitude first, frequency breaks ties
    pub fn cmp_by_amplitude_and_frequency(&self, other: &Self) -> Ordering {
        self.cmp_by_amplitude(other)
            .then_with(|| self.cmp_by_frequency(other))
    }
}

impl HasFrequency for SpectrumPoint {
    fn frequency(&self) -> f64 {
        self.frequency
    }
}

impl HasAmplitude for SpectrumPoint {
    fn amplitude(&self) -> f64 {
        self.amplitude
    }
}

/// Spectrum points ordered by frequency
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WaveSpectrum {
    points: Vec<SpectrumPoint>,
}

impl WaveSpectrum {
    pub fn new(points: Vec<SpectrumPoint>) -> Self {
        Self { points }
    }

    /// Pair up frequencies and amplitudes
    ///
    /// # Arguments
    /// * `frequencies` - Point frequencies in Hz
    /// * `amplitudes` - Point amplitudes, same length as `frequencies`
    ///
    /// # Returns
    /// The spectrum, or [`AnalysisError::LengthMismatch`]
    pub fn from_arrays(frequencies: &[f64], amplitudes: &[f64]) -> Result<Self> {
        if frequencies.len() != amplitudes.len() {
            return Err(AnalysisError::LengthMismatch {
                frequencies: frequencies.len(),
                amplitudes: amplitudes.len(),
            });
        }
        Ok(Self::new(
            frequencies
                .iter()
                .zip(amplitudes)
                .map(|(&f, &a)| SpectrumPoint::new(f, a))
                .collect(),
        ))
    }

    pub fn points(&self) -> &[SpectrumPoint] {
        &self.points
    }

    pub fn into_points(self) -> Vec<SpectrumPoint> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn frequencies(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(HasFrequency::frequency)
    }

    pub fn amplitudes(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(HasAmplitude::amplitude)
    }

    /// The `n` loudest points, ascending by frequency
    ///
    /// Amplitude ties keep the higher frequency. Asking for more points than
    /// the spectrum holds returns all of them.
    ///
    /// # Arguments
    /// * `n` - Number of points to keep
    ///
    /// # Returns
    /// A spectrum of at most `n` points
    pub fn top_amplitudes(&self, n: usize) -> WaveSpectrum {
        let mut points = self.points.clone();
        if n < points.len() {
            points.select_nth_unstable_by(n, |a, b| b.cmp_by_amplitude_and_frequency(a));
            points.truncate(n);
        }
        points.sort_by(SpectrumPoint::cmp_by_frequency);
        Self::new(points)
    }

    /// Loudest point; the higher frequency wins a tie
    pub fn peak(&self) -> Option<&SpectrumPoint> {
        self.points
            .iter()
            .max_by(|a, b| a.cmp_by_amplitude_and_frequency(b))
    }
}

impl From<Vec<SpectrumPoint>> for WaveSpectrum {
    fn from(points: Vec<SpectrumPoint>) -> Self {
        Self::new(points)
    }
}
