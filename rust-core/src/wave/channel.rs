//! Channel selection

use std::fmt;

/// One channel of a waveform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Mono,
    Left,
    Right,
    /// Channel of a layout with more than two channels
    Numbered(usize),
}

impl Channel {
    /// Channel at `index` for a waveform with `channels` channels
    ///
    /// # Arguments
    /// * `index` - Zero-based channel position
    /// * `channels` - Channel count of the layout
    ///
    /// # Returns
    /// `Mono` for one channel, `Left`/`Right` for two, `Numbered` otherwise
    pub fn of(index: usize, channels: usize) -> Self {
        match channels {
            1 => Channel::Mono,
            2 if index == 0 => Channel::Left,
            2 => Channel::Right,
            _ => Channel::Numbered(index),
        }
    }

    /// All channels of a layout, in index order
    pub fn all(channels: usize) -> Vec<Self> {
        (0..channels).map(|i| Self::of(i, channels)).collect()
    }

    /// Position of this channel in the sample buffers
    pub fn index(&self) -> usize {
        match self {
            Channel::Mono | Channel::Left => 0,
            Channel::Right => 1,
            Channel::Numbered(index) => *index,
        }
    }

    pub fn name(&self) -> String {
        match self {
            Channel::Mono => "Mono".to_string(),
            Channel::Left => "Left".to_string(),
            Channel::Right => "Right".to_string(),
            Channel::Numbered(index) => index.to_string(),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}
