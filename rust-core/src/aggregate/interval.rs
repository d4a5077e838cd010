//! Index ranges of a spectrum assigned to pitches

use crate::pitch::Pitch;
use crate::spectrum::SpectrumPoint;

/// Half-open range `start..end` of spectrum points belonging to `pitch`
#[derive(Debug, Clone, PartialEq)]
pub struct Interval {
    pitch: Pitch,
    start: usize,
    end: usize,
}

impl Interval {
    /// Create interval
    ///
    /// # Arguments
    /// * `pitch` - Bucket pitch the points are assigned to
    /// * `start` - Index of the first point
    /// * `end` - Index one past the last point
    pub fn new(pitch: Pitch, start: usize, end: usize) -> Self {
        Self { pitch, start, end }
    }

    pub fn pitch(&self) -> &Pitch {
        &self.pitch
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// The points of `points` inside this interval
    ///
    /// # Arguments
    /// * `points` - The spectrum points this interval was generated from
    ///
    /// # Returns
    /// `points[start..end]`
    pub fn points<'a>(&self, points: &'a [SpectrumPoint]) -> &'a [SpectrumPoint] {
        &points[self.start..self.end]
    }
}

/// Frequency range `lower..=upper` accepted for one pitch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyBand {
    pub lower: f64,
    pub upper: f64,
}

impl FrequencyBand {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Whether `frequency` lies within the band, bounds included
    pub fn contains(&self, frequency: f64) -> bool {
        frequency >= self.lower && frequency <= self.upper
    }
}

/// Maps spectrum points onto pitch buckets
pub trait IntervalGenerator {
    /// Bucket pitches, ascending by frequency
    fn pitches(&self) -> &[Pitch];

    /// Intervals for `points` (ascending by frequency), in bucket order
    ///
    /// A bucket is closed only once a point lies above it, so this may
    /// return fewer intervals than there are buckets when the points do not
    /// reach past the whole bucket range.
    fn generate(&self, points: &[SpectrumPoint]) -> Vec<Interval>;

    /// Like [`generate`](Self::generate), but also closes the bucket still
    /// open when the points run out
    ///
    /// Buckets the points never reach stay absent.
    fn generate_with_partial(&self, points: &[SpectrumPoint]) -> Vec<Interval> {
        self.generate(points)
    }
}
