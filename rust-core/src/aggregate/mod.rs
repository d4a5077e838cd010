//! Reduction of raw spectra onto pitch buckets
//!
//! An [`IntervalGenerator`] maps the points of a spectrum onto one index
//! range per target pitch; an [`Aggregator`] collapses each range to a
//! single amplitude.

pub mod interval;
pub mod max;
pub mod quarter_tone;

use serde::Deserialize;

use crate::error::Result;
use crate::spectrum::WaveSpectrum;

pub use interval::{FrequencyBand, Interval, IntervalGenerator};
pub use max::MaxPitchAggregator;
pub use quarter_tone::QuarterToneIntervals;

/// Turns a raw spectrum into a reduced one
pub trait Aggregator {
    fn aggregate(&self, raw: &WaveSpectrum) -> Result<WaveSpectrum>;
}

/// What to do with buckets the spectrum does not reach
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingBuckets {
    /// Close the bucket the spectrum ends in and emit amplitude 0 for every
    /// bucket it never reaches
    #[default]
    Pad,
    /// Fail unless every bucket received an interval
    Reject,
}
