//! Musical pitch model
//!
//! Pitches are either plain frequencies or equal-tempered steps relative to
//! a shared anchor. The standard anchor is concert A (440 Hz); the named
//! catalog and the octave groups are built from it once per process.

pub mod catalog;
pub mod note_value;
pub mod octave;
pub mod tempered;

use std::fmt;
use std::str::FromStr;

use crate::error::AnalysisError;

pub use catalog::NamedPitch;
pub use note_value::NoteValue;
pub use octave::Octave;
pub use tempered::{EqualTemperedPitch, PitchFactory};

/// Frequency of the standard anchor in Hz
pub const CONCERT_A: f64 = 440.0;

/// Semitone steps per octave
pub const OCTAVE_SIZE: i32 = 12;

/// Frequency ratio of one octave
pub const OCTAVE_FACTOR: f64 = 2.0;

/// Square root of the octave ratio
///
/// Historically named after the half tone, but this is 2^(1/2), not the
/// semitone ratio 2^(1/12). Bucket widths are derived from it.
pub const HALFTONE_FACTOR: f64 = std::f64::consts::SQRT_2;

/// Anything located at a frequency in Hz
pub trait HasFrequency {
    fn frequency(&self) -> f64;

    /// Position on the tempered scale: half tones above concert A, fractional
    /// between pitches
    fn half_tones(&self) -> f64 {
        PitchFactory::standard().half_tones(self.frequency())
    }
}

/// A pitch at an explicit frequency
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedPitch {
    frequency: f64,
}

impl FixedPitch {
    pub fn new(frequency: f64) -> Self {
        Self { frequency }
    }
}

impl HasFrequency for FixedPitch {
    fn frequency(&self) -> f64 {
        self.frequency
    }
}

impl fmt::Display for FixedPitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Hz", self.frequency)
    }
}

/// Target pitch of an analysis bucket
#[derive(Debug, Clone, PartialEq)]
pub enum Pitch {
    Fixed(FixedPitch),
    EqualTempered(EqualTemperedPitch),
}

impl Pitch {
    /// Pitch at an explicit frequency
    pub fn fixed(frequency: f64) -> Self {
        Pitch::Fixed(FixedPitch::new(frequency))
    }

    /// Pitch `step` half tones away from concert A
    pub fn step(step: i32) -> Self {
        Pitch::EqualTempered(PitchFactory::standard().for_step(step))
    }

    pub fn as_tempered(&self) -> Option<&EqualTemperedPitch> {
        match self {
            Pitch::EqualTempered(pitch) => Some(pitch),
            Pitch::Fixed(_) => None,
        }
    }
}

impl HasFrequency for Pitch {
    fn frequency(&self) -> f64 {
        match self {
            Pitch::Fixed(pitch) => pitch.frequency(),
            Pitch::EqualTempered(pitch) => pitch.frequency(),
        }
    }
}

impl From<FixedPitch> for Pitch {
    fn from(pitch: FixedPitch) -> Self {
        Pitch::Fixed(pitch)
    }
}

impl From<EqualTemperedPitch> for Pitch {
    fn from(pitch: EqualTemperedPitch) -> Self {
        Pitch::EqualTempered(pitch)
    }
}

impl From<&NamedPitch> for Pitch {
    fn from(pitch: &NamedPitch) -> Self {
        Pitch::EqualTempered(pitch.pitch().clone())
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pitch::Fixed(pitch) => fmt::Display::fmt(pitch, f),
            Pitch::EqualTempered(pitch) => f.write_str(&pitch.scientific_notation()),
        }
    }
}

/// Parses catalog names ("A4", "hb3") and plain frequencies ("432Hz")
impl FromStr for Pitch {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(named) = catalog::by_name(s) {
            return Ok(named.into());
        }

        let number = s
            .strip_suffix("Hz")
            .or_else(|| s.strip_suffix("hz"))
            .unwrap_or(s)
            .trim();
        match number.parse::<f64>() {
            Ok(frequency) if frequency.is_finite() && frequency > 0.0 => {
                Ok(Pitch::fixed(frequency))
            }
            _ => Err(AnalysisError::UnknownPitch(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_halftone_factor_is_octave_root() {
        assert!((HALFTONE_FACTOR * HALFTONE_FACTOR - OCTAVE_FACTOR).abs() < 1e-12);
    }

    #[test]
    fn test_pitch_display() {
        assert_eq!(Pitch::fixed(432.0).to_string(), "432Hz");
        assert_eq!(Pitch::step(0).to_string(), "A4");
        assert_eq!(Pitch::step(-21).to_string(), "C3");
        assert_eq!(Pitch::step(27).to_string(), "440Hz + 27 half tones");
        assert_eq!(Pitch::step(-30).to_string(), "440Hz - 30 half tones");
    }

    #[test]
    fn test_pitch_from_str() {
        assert_eq!("A4".parse::<Pitch>().unwrap(), Pitch::step(0));
        assert_eq!("hb3".parse::<Pitch>().unwrap(), Pitch::step(-11));
        assert_eq!("DB5".parse::<Pitch>().unwrap(), Pitch::step(4));
        assert_eq!("432Hz".parse::<Pitch>().unwrap(), Pitch::fixed(432.0));
        assert_eq!(" 97.5 ".parse::<Pitch>().unwrap(), Pitch::fixed(97.5));

        assert!(matches!(
            "X9".parse::<Pitch>(),
            Err(AnalysisError::UnknownPitch(_))
        ));
        assert!("-3Hz".parse::<Pitch>().is_err());
    }

    #[test]
    fn test_fixed_and_tempered_differ() {
        // Same frequency, different kind of pitch
        assert_ne!(Pitch::fixed(440.0), Pitch::step(0));
        assert_eq!(Pitch::fixed(440.0).frequency(), Pitch::step(0).frequency());
    }

    #[test]
    fn test_half_tones_of_any_frequency() {
        assert!((Pitch::step(-12).half_tones() + 12.0).abs() < 1e-9);
        assert!((Pitch::fixed(880.0).half_tones() - 12.0).abs() < 1e-12);
        assert!((FixedPitch::new(466.0).half_tones() - 1.0).abs() < 0.01);
    }
}
