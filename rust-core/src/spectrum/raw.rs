//! Full-resolution spectrum of one channel

use tracing::debug;

use super::fft::FftEngine;
use super::point::WaveSpectrum;
use super::time_window::TimeWindow;
use super::windowing::WindowFunction;
use super::SpectrumGenerator;
use crate::error::Result;
use crate::wave::{Channel, SingleWave, WaveData, WaveInfo};

/// FFT spectrum of a time window of one channel
///
/// For a window of n samples the spectrum holds n points: bin i sits at
/// i × frame_rate / fft_size and carries (2 / frame_rate) × |X[i]|, where
/// fft_size is n rounded up to a power of two. Bins past fft_size / 2 mirror
/// the lower half.
#[derive(Debug, Clone)]
pub struct RawSpectrumGenerator {
    info: WaveInfo,
    wave: SingleWave,
    window_function: WindowFunction,
}

impl RawSpectrumGenerator {
    pub fn new(info: WaveInfo, wave: SingleWave) -> Self {
        Self {
            info,
            wave,
            window_function: WindowFunction::default(),
        }
    }

    /// Generator over one channel of `data`
    ///
    /// # Arguments
    /// * `data` - Decoded waveform
    /// * `channel` - Channel to analyse
    ///
    /// # Returns
    /// The generator, or [`AnalysisError::ChannelOutOfRange`](crate::AnalysisError::ChannelOutOfRange)
    pub fn for_channel(data: &WaveData, channel: Channel) -> Result<Self> {
        Ok(Self::new(*data.info(), data.wave(channel)?.clone()))
    }

    /// Taper the analysed samples before the transform
    pub fn with_window_function(mut self, window_function: WindowFunction) -> Self {
        self.window_function = window_function;
        self
    }

    pub fn info(&self) -> &WaveInfo {
        &self.info
    }

    pub fn window_function(&self) -> WindowFunction {
        self.window_function
    }

    fn amplitudes(&self, samples: &[f64], engine: &mut FftEngine) -> Result<Vec<f64>> {
        let n = samples.len();
        let mut segment = samples.to_vec();
        self.window_function.apply(&mut segment);

        let scale = 2.0 / self.info.frame_rate() as f64
            * self.window_function.amplitude_correction(n);
        let magnitudes = engine.two_sided_magnitude(&segment, n)?;
        Ok(magnitudes.into_iter().map(|m| scale * m).collect())
    }

    fn frequencies(&self, n: usize, engine: &FftEngine) -> Vec<f64> {
        let rate = self.info.frame_rate() as f64;
        (0..n).map(|i| engine.bin_frequency(i, rate)).collect()
    }
}

impl SpectrumGenerator for RawSpectrumGenerator {
    fn generate(&self, window: &TimeWindow) -> Result<WaveSpectrum> {
        let range = window.range(&self.info);
        let end = range.end.min(self.wave.len());
        let start = range.start.min(end);
        let n = end - start;
        if n == 0 {
            debug!(start, end, "empty analysis window");
            return Ok(WaveSpectrum::default());
        }

        let mut engine = FftEngine::for_samples(n);
        debug!(start, end, fft_size = engine.fft_size(), "computing raw spectrum");

        let samples = &self.wave.samples()[start..end];
        let amplitudes = self.amplitudes(samples, &mut engine)?;
        let frequencies = self.frequencies(n, &engine);
        WaveSpectrum::from_arrays(&frequencies, &amplitudes)
    }
}
