//! Spectra of a window sliding across a time range

use tracing::debug;

use super::point::{HasAmplitude, WaveSpectrum};
use super::time_window::TimeWindow;
use super::SpectrumGenerator;
use crate::error::Result;
use crate::wave::WaveInfo;

/// Frames on each side of a window centre used by [`SlidingWindow::standard`]
pub const DEFAULT_HALF_WIDTH_FRAMES: usize = 4096;

/// Window positions used by [`SlidingWindow::standard`]
pub const DEFAULT_STEPS: usize = 100;

/// Spectrum of the window centred at `time`
#[derive(Debug, Clone, PartialEq)]
pub struct SpectrumFrame {
    pub time: f64,
    pub spectrum: WaveSpectrum,
}

/// Spectra over time, in ascending time order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpectrumSeries {
    frames: Vec<SpectrumFrame>,
}

impl SpectrumSeries {
    pub fn frames(&self) -> &[SpectrumFrame] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Amplitude of the `index`-th point of every frame over time
    ///
    /// Meant for aggregated spectra, where a point index always denotes the
    /// same pitch. Frames without that point are skipped.
    ///
    /// # Arguments
    /// * `index` - Point position within each spectrum
    ///
    /// # Returns
    /// `(time, amplitude)` pairs in time order
    pub fn track(&self, index: usize) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.frames.iter().filter_map(move |frame| {
            frame
                .spectrum
                .points()
                .get(index)
                .map(|point| (frame.time, point.amplitude()))
        })
    }
}

/// A fixed-width analysis window stepped across a time range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlidingWindow {
    half_width: f64,
    steps: usize,
}

impl SlidingWindow {
    /// # Arguments
    /// * `half_width` - Seconds analysed on each side of a window centre
    /// * `steps` - Number of window positions
    pub fn new(half_width: f64, steps: usize) -> Self {
        Self { half_width, steps }
    }

    /// Window reaching `frames` samples to each side of its centre
    pub fn from_frames(frames: usize, steps: usize, info: &WaveInfo) -> Self {
        Self::new(frames as f64 / info.frame_rate() as f64, steps)
    }

    /// 4096 frames to each side, 100 positions
    pub fn standard(info: &WaveInfo) -> Self {
        Self::from_frames(DEFAULT_HALF_WIDTH_FRAMES, DEFAULT_STEPS, info)
    }

    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Window centres `start + i * (end - start) / steps` for `i` in `0..steps`
    ///
    /// An inverted range has no centres.
    pub fn centres(&self, range: &TimeWindow) -> Vec<f64> {
        if range.length() < 0.0 || self.steps == 0 {
            return Vec::new();
        }
        let dt = range.length() / self.steps as f64;
        (0..self.steps)
            .map(|i| range.start() + i as f64 * dt)
            .collect()
    }

    /// Analysis window centred at `time`
    pub fn window_at(&self, time: f64) -> TimeWindow {
        TimeWindow::new(time - self.half_width, time + self.half_width)
    }

    /// Spectra of every window position across `range`
    ///
    /// Windows reaching past either end of the waveform are clamped to it.
    ///
    /// # Arguments
    /// * `generator` - Raw or aggregated spectrum generator
    /// * `range` - Time range the window centres are spread across
    ///
    /// # Returns
    /// One frame per centre, or the first generator error
    pub fn generate<G>(&self, generator: &G, range: &TimeWindow) -> Result<SpectrumSeries>
    where
        G: SpectrumGenerator + ?Sized,
    {
        let centres = self.centres(range);
        debug!(
            frames = centres.len(),
            half_width = self.half_width,
            "sliding spectrum series"
        );

        let frames = centres
            .into_iter()
            .map(|time| {
                generator
                    .generate(&self.window_at(time))
                    .map(|spectrum| SpectrumFrame { time, spectrum })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(SpectrumSeries { frames })
    }
}
