//! Raw spectrum reduced onto pitch buckets

use tracing::debug;

use super::point::WaveSpectrum;
use super::raw::RawSpectrumGenerator;
use super::time_window::TimeWindow;
use super::SpectrumGenerator;
use crate::aggregate::{Aggregator, MaxPitchAggregator};
use crate::error::Result;
use crate::pitch::Pitch;

/// One amplitude per target pitch for a time window
#[derive(Debug, Clone)]
pub struct AggregatedSpectrumGenerator<A = MaxPitchAggregator> {
    raw: RawSpectrumGenerator,
    aggregator: A,
}

impl<A: Aggregator> AggregatedSpectrumGenerator<A> {
    /// Create aggregated generator
    ///
    /// # Arguments
    /// * `raw` - Full-resolution generator of the analysed channel
    /// * `aggregator` - Reduction applied to every raw spectrum
    pub fn new(raw: RawSpectrumGenerator, aggregator: A) -> Self {
        Self { raw, aggregator }
    }

    pub fn raw(&self) -> &RawSpectrumGenerator {
        &self.raw
    }

    pub fn aggregator(&self) -> &A {
        &self.aggregator
    }
}

impl AggregatedSpectrumGenerator<MaxPitchAggregator> {
    /// Loudest raw bin within a quarter tone of each pitch
    pub fn max_of(raw: RawSpectrumGenerator, pitches: Vec<Pitch>) -> Self {
        Self::new(raw, MaxPitchAggregator::new(pitches))
    }
}

impl<A: Aggregator> SpectrumGenerator for AggregatedSpectrumGenerator<A> {
    fn generate(&self, window: &TimeWindow) -> Result<WaveSpectrum> {
        let raw = self.raw.generate(window)?;
        let reduced = self.aggregator.aggregate(&raw)?;
        debug!(raw_points = raw.len(), pitches = reduced.len(), "aggregated spectrum");
        Ok(reduced)
    }
}
