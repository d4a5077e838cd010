//! Equal-tempered pitches relative to a shared anchor

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use once_cell::sync::Lazy;

use super::{catalog, FixedPitch, HasFrequency, CONCERT_A, OCTAVE_FACTOR, OCTAVE_SIZE};

static STANDARD: Lazy<PitchFactory> =
    Lazy::new(|| PitchFactory::new(FixedPitch::new(CONCERT_A)));

/// A pitch `step` half tones away from its anchor
///
/// Two pitches are equal when they share the same anchor instance and the
/// same step. Equal frequencies alone do not make pitches equal.
#[derive(Debug, Clone)]
pub struct EqualTemperedPitch {
    anchor: Arc<FixedPitch>,
    step: i32,
}

impl EqualTemperedPitch {
    pub fn anchor(&self) -> &FixedPitch {
        &self.anchor
    }

    pub fn step(&self) -> i32 {
        self.step
    }

    /// Catalog name, or the offset from the anchor ("440Hz - 3 half tones")
    pub fn scientific_notation(&self) -> String {
        match catalog::name_of(self) {
            Some(name) => name.to_string(),
            None => {
                let sign = if self.step >= 0 { '+' } else { '-' };
                format!(
                    "{} {} {} half tones",
                    self.anchor,
                    sign,
                    self.step.unsigned_abs()
                )
            }
        }
    }

    fn same_anchor(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.anchor, &other.anchor)
    }
}

impl HasFrequency for EqualTemperedPitch {
    fn frequency(&self) -> f64 {
        self.anchor.frequency() * OCTAVE_FACTOR.powf(self.step as f64 / OCTAVE_SIZE as f64)
    }
}

impl PartialEq for EqualTemperedPitch {
    fn eq(&self, other: &Self) -> bool {
        self.same_anchor(other) && self.step == other.step
    }
}

impl Eq for EqualTemperedPitch {}

impl Hash for EqualTemperedPitch {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.anchor).hash(state);
        self.step.hash(state);
    }
}

impl fmt::Display for EqualTemperedPitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.scientific_notation())
    }
}

/// Creates pitches sharing one anchor
#[derive(Debug, Clone)]
pub struct PitchFactory {
    anchor: Arc<FixedPitch>,
}

impl PitchFactory {
    /// Factory with its own anchor
    ///
    /// Pitches of distinct factories never compare equal, even when the
    /// anchors have the same frequency.
    pub fn new(anchor: FixedPitch) -> Self {
        Self {
            anchor: Arc::new(anchor),
        }
    }

    /// Process-wide factory anchored at concert A
    pub fn standard() -> &'static PitchFactory {
        &STANDARD
    }

    pub fn anchor(&self) -> &FixedPitch {
        &self.anchor
    }

    /// Pitch `step` half tones away from the anchor
    ///
    /// # Arguments
    /// * `step` - Signed distance in half tones; negative steps lie below the anchor
    ///
    /// # Returns
    /// A pitch sharing this factory's anchor, so it compares equal to every
    /// other pitch this factory creates for the same step
    pub fn for_step(&self, step: i32) -> EqualTemperedPitch {
        EqualTemperedPitch {
            anchor: Arc::clone(&self.anchor),
            step,
        }
    }

    /// Distance of `frequency` from the anchor in half tones
    ///
    /// Inverse of the step to frequency mapping: integral for tempered
    /// pitches, fractional in between. Non-positive frequencies give
    /// `-inf` or `NaN`.
    ///
    /// # Arguments
    /// * `frequency` - Frequency in Hz
    ///
    /// # Returns
    /// `12 * log2(frequency / anchor)`
    pub fn half_tones(&self, frequency: f64) -> f64 {
        OCTAVE_SIZE as f64 * (frequency / self.anchor.frequency()).log2()
    }

    /// Tempered pitch closest to `frequency`, `None` unless it is positive and finite
    pub fn nearest(&self, frequency: f64) -> Option<EqualTemperedPitch> {
        if !(frequency.is_finite() && frequency > 0.0) {
            return None;
        }
        Some(self.for_step(self.half_tones(frequency).round() as i32))
    }
}
