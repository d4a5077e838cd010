//! Error type shared by the analysis pipeline

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("nb of frequencies {frequencies} does not match nb of amplitudes {amplitudes}")]
    LengthMismatch { frequencies: usize, amplitudes: usize },

    #[error("intervals size {intervals} does not match buckets size {buckets}")]
    BucketCountMismatch { intervals: usize, buckets: usize },

    #[error("channel {channel} out of range (wave has {channels} channels)")]
    ChannelOutOfRange { channel: usize, channels: usize },

    #[error("a waveform needs at least one channel")]
    NoChannels,

    #[error("wave info declares {expected} channels, found {found}")]
    ChannelCount { expected: usize, found: usize },

    #[error("channel {channel} holds {found} samples, expected {expected}")]
    ChannelLength {
        channel: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown pitch: {0}")]
    UnknownPitch(String),

    #[error("invalid analysis config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("FFT processing failed: {0}")]
    Fft(#[from] realfft::FftError),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
