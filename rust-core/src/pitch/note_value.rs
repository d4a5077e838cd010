//! Note lengths

/// Length of a note as a fraction of a whole note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteValue {
    Whole,
    Half,
    Quarter,
    Eighth,
    Sixteenth,
    ThirtySecond,
    SixtyFourth,
    HundredTwentyEighth,
}

impl NoteValue {
    /// All note values, longest first
    pub const ALL: [NoteValue; 8] = [
        NoteValue::Whole,
        NoteValue::Half,
        NoteValue::Quarter,
        NoteValue::Eighth,
        NoteValue::Sixteenth,
        NoteValue::ThirtySecond,
        NoteValue::SixtyFourth,
        NoteValue::HundredTwentyEighth,
    ];

    /// Notes of this value per whole note
    pub fn divisor(&self) -> u32 {
        match self {
            NoteValue::Whole => 1,
            NoteValue::Half => 2,
            NoteValue::Quarter => 4,
            NoteValue::Eighth => 8,
            NoteValue::Sixteenth => 16,
            NoteValue::ThirtySecond => 32,
            NoteValue::SixtyFourth => 64,
            NoteValue::HundredTwentyEighth => 128,
        }
    }

    /// Duration in seconds when a whole note lasts one second
    pub fn seconds(&self) -> f64 {
        1.0 / self.divisor() as f64
    }

    /// Duration in seconds at `bpm` quarter notes per minute
    pub fn seconds_at(&self, bpm: f64) -> f64 {
        240.0 / (bpm * self.divisor() as f64)
    }
}
