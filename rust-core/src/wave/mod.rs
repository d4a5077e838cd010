//! In-memory waveform data handed over by a decoder
//!
//! Decoding itself happens elsewhere; this module only holds the samples
//! and their format description.

pub mod channel;
pub mod data;

pub use channel::Channel;
pub use data::{SingleWave, WaveData};

/// Format description of a decoded waveform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveInfo {
    channels: usize,
    frames: usize,
    frame_rate: u32,
}

impl WaveInfo {
    /// Create format description
    ///
    /// # Arguments
    /// * `channels` - Number of channels
    /// * `frames` - Samples per channel
    /// * `frame_rate` - Frames per second
    pub fn new(channels: usize, frames: usize, frame_rate: u32) -> Self {
        Self {
            channels,
            frames,
            frame_rate,
        }
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Number of frames (samples per channel)
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Frames per second
    pub fn frame_rate(&self) -> u32 {
        self.frame_rate
    }

    /// Duration in seconds
    pub fn duration(&self) -> f64 {
        self.frames as f64 / self.frame_rate as f64
    }
}
