//! Max-amplitude pitch aggregation

use tracing::debug;

use super::interval::IntervalGenerator;
use super::quarter_tone::QuarterToneIntervals;
use super::{Aggregator, MissingBuckets};
use crate::error::{AnalysisError, Result};
use crate::pitch::{HasFrequency, Pitch};
use crate::spectrum::{HasAmplitude, SpectrumPoint, WaveSpectrum};

/// Keeps the loudest point of every pitch bucket
#[derive(Debug, Clone)]
pub struct MaxPitchAggregator<G = QuarterToneIntervals> {
    intervals: G,
    missing: MissingBuckets,
}

impl MaxPitchAggregator<QuarterToneIntervals> {
    /// Quarter-tone buckets around `pitches`
    ///
    /// # Arguments
    /// * `pitches` - Bucket pitches in any order; buckets are sorted by frequency
    pub fn new(pitches: Vec<Pitch>) -> Self {
        Self::with_intervals(QuarterToneIntervals::new(pitches))
    }
}

impl<G: IntervalGenerator> MaxPitchAggregator<G> {
    pub fn with_intervals(intervals: G) -> Self {
        Self {
            intervals,
            missing: MissingBuckets::default(),
        }
    }

    /// Set how buckets beyond the end of the spectrum are handled
    pub fn with_missing_buckets(mut self, missing: MissingBuckets) -> Self {
        self.missing = missing;
        self
    }

    pub fn pitches(&self) -> &[Pitch] {
        self.intervals.pitches()
    }

}

fn max_amplitude(points: &[SpectrumPoint]) -> f64 {
    points
        .iter()
        .map(HasAmplitude::amplitude)
        .reduce(f64::max)
        .unwrap_or(0.0)
}

impl<G: IntervalGenerator> Aggregator for MaxPitchAggregator<G> {
    fn aggregate(&self, raw: &WaveSpectrum) -> Result<WaveSpectrum> {
        let buckets = self.intervals.pitches();
        let intervals = match self.missing {
            MissingBuckets::Reject => self.intervals.generate(raw.points()),
            MissingBuckets::Pad => self.intervals.generate_with_partial(raw.points()),
        };

        let mismatch = AnalysisError::BucketCountMismatch {
            intervals: intervals.len(),
            buckets: buckets.len(),
        };
        if intervals.len() > buckets.len() {
            return Err(mismatch);
        }
        if intervals.len() < buckets.len() {
            match self.missing {
                MissingBuckets::Reject => return Err(mismatch),
                MissingBuckets::Pad => debug!(
                    intervals = intervals.len(),
                    buckets = buckets.len(),
                    "padding buckets outside the spectrum"
                ),
            }
        }

        let points = buckets
            .iter()
            .enumerate()
            .map(|(i, pitch)| {
                let amplitude = intervals
                    .get(i)
                    .map(|interval| max_amplitude(interval.points(raw.points())))
                    .unwrap_or(0.0);
                SpectrumPoint::new(pitch.frequency(), amplitude)
            })
            .collect();
        Ok(WaveSpectrum::new(points))
    }
}
