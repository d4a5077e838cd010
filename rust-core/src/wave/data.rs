//! Per-channel sample storage

use std::sync::Arc;

use super::{Channel, WaveInfo};
use crate::error::{AnalysisError, Result};

/// Samples of one channel
///
/// Cloning shares the underlying buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct SingleWave {
    samples: Arc<[f64]>,
}

impl SingleWave {
    pub fn new(samples: impl Into<Arc<[f64]>>) -> Self {
        Self {
            samples: samples.into(),
        }
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl From<Vec<f64>> for SingleWave {
    fn from(samples: Vec<f64>) -> Self {
        Self::new(samples)
    }
}

/// A decoded waveform: format info plus one sample buffer per channel
#[derive(Debug, Clone)]
pub struct WaveData {
    info: WaveInfo,
    channels: Vec<SingleWave>,
}

impl WaveData {
    /// Wrap decoded channels
    ///
    /// # Arguments
    /// * `info` - Format of the decoded waveform, with at least one channel
    /// * `channels` - One buffer per channel of `info`, each `info.frames()` long
    ///
    /// # Returns
    /// The waveform, or the first layout mismatch found
    pub fn new(info: WaveInfo, channels: Vec<SingleWave>) -> Result<Self> {
        if info.channels() == 0 {
            return Err(AnalysisError::NoChannels);
        }
        if channels.len() != info.channels() {
            return Err(AnalysisError::ChannelCount {
                expected: info.channels(),
                found: channels.len(),
            });
        }
        for (channel, wave) in channels.iter().enumerate() {
            if wave.len() != info.frames() {
                return Err(AnalysisError::ChannelLength {
                    channel,
                    expected: info.frames(),
                    found: wave.len(),
                });
            }
        }
        Ok(Self { info, channels })
    }

    /// Single-channel waveform
    pub fn mono(samples: Vec<f64>, frame_rate: u32) -> Self {
        let info = WaveInfo::new(1, samples.len(), frame_rate);
        Self {
            info,
            channels: vec![SingleWave::from(samples)],
        }
    }

    /// Split an interleaved frame buffer (`[l0, r0, l1, r1, ...]`)
    ///
    /// # Arguments
    /// * `samples` - Interleaved samples; a trailing partial frame is dropped
    /// * `channels` - Samples per frame, at least one
    /// * `frame_rate` - Frames per second
    ///
    /// # Returns
    /// The de-interleaved waveform, or [`AnalysisError::NoChannels`]
    pub fn from_interleaved(samples: &[f64], channels: usize, frame_rate: u32) -> Result<Self> {
        if channels == 0 {
            return Err(AnalysisError::NoChannels);
        }
        let frames = samples.len() / channels;
        let waves = (0..channels)
            .map(|c| {
                samples
                    .chunks_exact(channels)
                    .map(|frame| frame[c])
                    .collect::<Vec<f64>>()
                    .into()
            })
            .collect();

        Ok(Self {
            info: WaveInfo::new(channels, frames, frame_rate),
            channels: waves,
        })
    }

    pub fn info(&self) -> &WaveInfo {
        &self.info
    }

    /// Samples of `channel`
    pub fn wave(&self, channel: Channel) -> Result<&SingleWave> {
        self.channels
            .get(channel.index())
            .ok_or(AnalysisError::ChannelOutOfRange {
                channel: channel.index(),
                channels: self.channels.len(),
            })
    }

    /// Channel selectors matching this waveform's layout
    pub fn channels(&self) -> Vec<Channel> {
        Channel::all(self.info.channels())
    }
}
