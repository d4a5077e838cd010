//! Quarter-tone bucket partition

use tracing::trace;

use super::interval::{FrequencyBand, Interval, IntervalGenerator};
use crate::pitch::{HasFrequency, Pitch, HALFTONE_FACTOR};
use crate::spectrum::SpectrumPoint;

/// Buckets of ± a quarter tone around each pitch
///
/// Neighbouring bands that overlap are split at the midpoint of the overlap.
/// The band table is computed once on construction.
#[derive(Debug, Clone)]
pub struct QuarterToneIntervals {
    pitches: Vec<Pitch>,
    bands: Vec<FrequencyBand>,
}

impl QuarterToneIntervals {
    /// Buckets for `pitches`, sorted by frequency
    ///
    /// # Arguments
    /// * `pitches` - Bucket pitches in any order
    ///
    /// # Returns
    /// Generator with one band per pitch: ± a quarter tone, with overlaps
    /// between neighbours split at their midpoint
    pub fn new(mut pitches: Vec<Pitch>) -> Self {
        pitches.sort_by(|a, b| a.frequency().total_cmp(&b.frequency()));
        let bands = bands_for(&pitches);
        trace!(?bands, "quarter tone bands");
        Self { pitches, bands }
    }

    pub fn bands(&self) -> &[FrequencyBand] {
        &self.bands
    }
}

fn bands_for(pitches: &[Pitch]) -> Vec<FrequencyBand> {
    let quarter_tone = HALFTONE_FACTOR.sqrt();
    let mut bands: Vec<FrequencyBand> = pitches
        .iter()
        .map(|pitch| {
            let frequency = pitch.frequency();
            FrequencyBand::new(frequency / quarter_tone, frequency * quarter_tone)
        })
        .collect();

    // One pass over immediate neighbours
    for i in 1..bands.len() {
        if bands[i - 1].upper > bands[i].lower {
            let mid = 0.5 * (bands[i - 1].upper + bands[i].lower);
            bands[i - 1].upper = mid;
            bands[i].lower = mid;
        }
    }
    bands
}

impl QuarterToneIntervals {
    /// Single sweep over `points`
    ///
    /// # Arguments
    /// * `points` - Spectrum points, ascending by frequency
    /// * `close_partial` - Also emit the bucket still open at the last point
    ///
    /// # Returns
    /// One interval per bucket reached, in bucket order
    fn sweep(&self, points: &[SpectrumPoint], close_partial: bool) -> Vec<Interval> {
        let mut intervals = Vec::with_capacity(self.bands.len());
        let Some(first) = self.bands.first() else {
            return intervals;
        };

        let mut start = points
            .iter()
            .position(|p| p.frequency() >= first.lower)
            .unwrap_or(points.len());
        let mut cursor = start;
        let mut band = 0;

        while cursor < points.len() {
            if points[cursor].frequency() > self.bands[band].upper {
                intervals.push(Interval::new(self.pitches[band].clone(), start, cursor));
                start = cursor;
                band += 1;
                if band == self.bands.len() {
                    return intervals;
                }
            } else {
                cursor += 1;
            }
        }

        if close_partial && start < points.len() {
            intervals.push(Interval::new(self.pitches[band].clone(), start, points.len()));
        }
        intervals
    }
}

impl IntervalGenerator for QuarterToneIntervals {
    fn pitches(&self) -> &[Pitch] {
        &self.pitches
    }

    fn generate(&self, points: &[SpectrumPoint]) -> Vec<Interval> {
        self.sweep(points, false)
    }

    fn generate_with_partial(&self, points: &[SpectrumPoint]) -> Vec<Interval> {
        self.sweep(points, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pitch::Octave;

    fn octave(octave: Octave) -> Vec<Pitch> {
        octave.pitches().into_iter().map(Pitch::from).collect()
    }

    fn grid(from: f64, to: f64, count: usize) -> Vec<SpectrumPoint> {
        (0..count)
            .map(|i| SpectrumPoint::new(from + (to - from) * i as f64 / count as f64, 0.0))
            .collect()
    }

    #[test]
    fn test_bands_are_contiguous_and_contain_pitch() {
        let generator = QuarterToneIntervals::new(octave(Octave::SecondOctave));
        let bands = generator.bands();

        assert_eq!(bands.len(), 12);
        for pair in bands.windows(2) {
            assert_eq!(pair[0].upper, pair[1].lower);
        }
        for (band, pitch) in bands.iter().zip(generator.pitches()) {
            assert!(band.contains(pitch.frequency()));
        }
    }

    #[test]
    fn test_outer_bounds_use_quarter_tone() {
        let generator = QuarterToneIntervals::new(vec![Pitch::fixed(100.0), Pitch::fixed(1000.0)]);
        let quarter_tone = 2f64.powf(0.25);
        let bands = generator.bands();

        // Far apart, nothing to resolve
        assert!((bands[0].lower - 100.0 / quarter_tone).abs() < 1e-9);
        assert!((bands[0].upper - 100.0 * quarter_tone).abs() < 1e-9);
        assert!((bands[1].lower - 1000.0 / quarter_tone).abs() < 1e-9);
    }

    #[test]
    fn test_pitches_sorted_on_construction() {
        let generator = QuarterToneIntervals::new(vec![Pitch::step(3), Pitch::step(-5), Pitch::step(0)]);
        let steps: Vec<i32> = generator
            .pitches()
            .iter()
            .filter_map(|p| p.as_tempered().map(|t| t.step()))
            .collect();
        assert_eq!(steps, vec![-5, 0, 3]);
    }

    #[test]
    fn test_intervals_cover_octave() {
        let pitches = octave(Octave::SecondOctave);
        let low = pitches[0].frequency() * 0.9;
        let high = pitches[11].frequency() * 1.3;
        let generator = QuarterToneIntervals::new(pitches);

        let points = grid(low, high, 100);
        let intervals = generator.generate(&points);

        assert_eq!(intervals.len(), 12);
        for pair in intervals.windows(2) {
            assert!(pair[0].end() <= pair[1].start());
        }
        for interval in &intervals {
            let band = generator.bands()[generator
                .pitches()
                .iter()
                .position(|p| p == interval.pitch())
                .unwrap()];
            assert!(interval
                .points(&points)
                .iter()
                .all(|p| band.contains(p.frequency())));
        }
    }

    #[test]
    fn test_trailing_buckets_dropped() {
        let pitches = octave(Octave::SecondOctave);
        let generator = QuarterToneIntervals::new(pitches.clone());

        // Points stop a few Hz above the fourth band
        let stop = generator.bands()[3].upper + 5.0;
        let points = grid(200.0, stop, 100);
        let intervals = generator.generate(&points);

        assert_eq!(intervals.len(), 4);
        assert_eq!(intervals[0].pitch(), &pitches[0]);
    }

    #[test]
    fn test_partial_bucket_closed_at_last_point() {
        let generator = QuarterToneIntervals::new(octave(Octave::SecondOctave));
        let stop = generator.bands()[3].upper + 5.0;
        let points = grid(200.0, stop, 100);

        let intervals = generator.generate_with_partial(&points);
        assert_eq!(intervals.len(), 5);
        let last = &intervals[4];
        assert_eq!(last.end(), points.len());
        assert!(!last.is_empty());
        assert!(last
            .points(&points)
            .iter()
            .all(|p| generator.bands()[4].contains(p.frequency())));

        // A single band the points never leave
        let lone = QuarterToneIntervals::new(vec![Pitch::fixed(100.0)]);
        let inside = grid(95.0, 110.0, 3);
        assert!(lone.generate(&inside).is_empty());
        let intervals = lone.generate_with_partial(&inside);
        assert_eq!(intervals.len(), 1);
        assert_eq!((intervals[0].start(), intervals[0].end()), (0, 3));
    }

    #[test]
    fn test_no_points_in_range() {
        let generator = QuarterToneIntervals::new(octave(Octave::SecondOctave));
        assert!(generator.generate(&grid(10.0, 100.0, 50)).is_empty());
        assert!(generator.generate(&[]).is_empty());
        assert!(QuarterToneIntervals::new(Vec::new()).generate(&grid(10.0, 100.0, 5)).is_empty());
        assert!(generator.generate_with_partial(&grid(10.0, 100.0, 50)).is_empty());
    }

    #[test]
    fn test_boundary_point_goes_to_lower_bucket() {
        let generator = QuarterToneIntervals::new(vec![Pitch::fixed(100.0), Pitch::fixed(110.0)]);
        let boundary = generator.bands()[0].upper;
        let points = vec![
            SpectrumPoint::new(95.0, 0.0),
            SpectrumPoint::new(boundary, 0.0),
            SpectrumPoint::new(boundary + 0.5, 0.0),
            SpectrumPoint::new(500.0, 0.0),
        ];

        let intervals = generator.generate(&points);
        assert_eq!(intervals.len(), 2);
        assert_eq!((intervals[0].start(), intervals[0].end()), (0, 2));
        assert_eq!((intervals[1].start(), intervals[1].end()), (2, 3));
    }
}
