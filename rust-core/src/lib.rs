//! Wave Scanner - spectral analysis and pitch aggregation core
//!
//! Computes FFT spectra of time windows of decoded waveforms and reduces
//! them onto equal-tempered pitch buckets.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod logging;
pub mod pitch;
pub mod spectrum;
pub mod wave;

pub use aggregate::{Aggregator, MaxPitchAggregator, MissingBuckets, QuarterToneIntervals};
pub use config::AnalysisConfig;
pub use error::{AnalysisError, Result};
pub use pitch::{HasFrequency, NoteValue, Octave, Pitch, PitchFactory};
pub use spectrum::{
    AggregatedSpectrumGenerator, HasAmplitude, RawSpectrumGenerator, SlidingWindow,
    SpectrumGenerator, SpectrumPoint, SpectrumSeries, TimeWindow, WaveSpectrum, WindowFunction,
};
pub use wave::{Channel, SingleWave, WaveData, WaveInfo};
