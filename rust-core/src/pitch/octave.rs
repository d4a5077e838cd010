//! Octave groups of twelve consecutive half tones

use std::fmt;

use serde::Deserialize;

use super::{EqualTemperedPitch, PitchFactory, OCTAVE_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Octave {
    SubContraOctave,
    ContraOctave,
    GreatOctave,
    SmallOctave,
    FirstOctave,
    SecondOctave,
    ThirdOctave,
    FourthOctave,
    FifthOctave,
}

impl Octave {
    pub const ALL: [Octave; 9] = [
        Octave::SubContraOctave,
        Octave::ContraOctave,
        Octave::GreatOctave,
        Octave::SmallOctave,
        Octave::FirstOctave,
        Octave::SecondOctave,
        Octave::ThirdOctave,
        Octave::FourthOctave,
        Octave::FifthOctave,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Octave::SubContraOctave => "SubContraOctave",
            Octave::ContraOctave => "ContraOctave",
            Octave::GreatOctave => "GreatOctave",
            Octave::SmallOctave => "SmallOctave",
            Octave::FirstOctave => "FirstOctave",
            Octave::SecondOctave => "SecondOctave",
            Octave::ThirdOctave => "ThirdOctave",
            Octave::FourthOctave => "FourthOctave",
            Octave::FifthOctave => "FifthOctave",
        }
    }

    /// Step of the first pitch in this octave
    pub fn first_step(&self) -> i32 {
        (self.index() as i32 - 5) * OCTAVE_SIZE - 9
    }

    /// The twelve pitches of this octave on the standard anchor, ascending
    pub fn pitches(&self) -> Vec<EqualTemperedPitch> {
        self.pitches_with(PitchFactory::standard())
    }

    pub fn pitches_with(&self, factory: &PitchFactory) -> Vec<EqualTemperedPitch> {
        let first = self.first_step();
        (0..OCTAVE_SIZE)
            .map(|offset| factory.for_step(first + offset))
            .collect()
    }
}

impl fmt::Display for Octave {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pitch::HasFrequency;

    #[test]
    fn test_octave_steps() {
        let steps: Vec<i32> = Octave::SecondOctave.pitches().iter().map(|p| p.step()).collect();
        assert_eq!(steps, (-9..=2).collect::<Vec<_>>());

        assert_eq!(Octave::SubContraOctave.first_step(), -69);
        assert_eq!(Octave::FifthOctave.first_step(), 27);
    }

    #[test]
    fn test_octaves_are_contiguous() {
        for pair in Octave::ALL.windows(2) {
            let last = pair[0].pitches().last().map(|p| p.step());
            let next = pair[1].pitches().first().map(|p| p.step());
            assert_eq!(last.map(|s| s + 1), next);
        }
    }

    #[test]
    fn test_octave_spans_factor_two() {
        let first = Octave::ThirdOctave.pitches()[0].frequency();
        let next = Octave::FourthOctave.pitches()[0].frequency();
        assert!((next / first - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_index_round_trip() {
        for octave in Octave::ALL {
            assert_eq!(Octave::from_index(octave.index()), Some(octave));
        }
        assert_eq!(Octave::from_index(9), None);
    }
}
