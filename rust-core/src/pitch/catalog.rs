//! Named pitches C3..H6
//!
//! Names follow the twelve-letter convention in which H is the seventh
//! degree and Hb the flattened one. A4 is the anchor (step 0).

use once_cell::sync::Lazy;

use super::{EqualTemperedPitch, HasFrequency, PitchFactory, OCTAVE_SIZE};

const NOTE_NAMES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Hb", "H",
];

/// Lowest and highest named steps (C3 and H6)
pub const FIRST_STEP: i32 = -21;
pub const LAST_STEP: i32 = 26;

/// Steps from C to A within an octave
const C_TO_A: i32 = 9;

static CATALOG: Lazy<Vec<NamedPitch>> = Lazy::new(|| {
    let factory = PitchFactory::standard();
    (FIRST_STEP..=LAST_STEP)
        .map(|step| NamedPitch {
            name: name_for_step(step),
            pitch: factory.for_step(step),
        })
        .collect()
});

/// A catalog entry
#[derive(Debug, Clone, PartialEq)]
pub struct NamedPitch {
    name: String,
    pitch: EqualTemperedPitch,
}

impl NamedPitch {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pitch(&self) -> &EqualTemperedPitch {
        &self.pitch
    }
}

impl HasFrequency for NamedPitch {
    fn frequency(&self) -> f64 {
        self.pitch.frequency()
    }
}

fn name_for_step(step: i32) -> String {
    let from_c4 = step + C_TO_A;
    let octave = 4 + from_c4.div_euclid(OCTAVE_SIZE);
    let degree = from_c4.rem_euclid(OCTAVE_SIZE) as usize;
    format!("{}{}", NOTE_NAMES[degree], octave)
}

/// All named pitches, ascending
pub fn all() -> &'static [NamedPitch] {
    &CATALOG
}

/// Catalog entry of `pitch`, if it has one
pub fn lookup(pitch: &EqualTemperedPitch) -> Option<&'static NamedPitch> {
    CATALOG.iter().find(|named| named.pitch == *pitch)
}

/// Name of `pitch`, if it has one
pub fn name_of(pitch: &EqualTemperedPitch) -> Option<&'static str> {
    lookup(pitch).map(NamedPitch::name)
}

/// Entry named `name`, ignoring ASCII case
pub fn by_name(name: &str) -> Option<&'static NamedPitch> {
    CATALOG
        .iter()
        .find(|named| named.name.eq_ignore_ascii_case(name))
}
