//! Analysis description loaded from TOML
//!
//! ```toml
//! channel = 0
//! mode = "aggregated"
//! window_function = "hann"
//! missing_buckets = "pad"
//!
//! [pitches]
//! octaves = ["SecondOctave"]
//! names = ["C5", "E5", "432Hz"]
//! steps = [12]
//! ```

use serde::Deserialize;
use tracing::debug;

use crate::aggregate::{MaxPitchAggregator, MissingBuckets};
use crate::error::{AnalysisError, Result};
use crate::pitch::{catalog, HasFrequency, Octave, Pitch};
use crate::spectrum::{
    AggregatedSpectrumGenerator, RawSpectrumGenerator, SpectrumGenerator, WindowFunction,
};
use crate::wave::{Channel, WaveData};

/// Full resolution or one point per pitch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    #[default]
    Raw,
    Aggregated,
}

/// Target pitches of an aggregated analysis
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PitchSelection {
    /// Whole octaves
    pub octaves: Vec<Octave>,
    /// Catalog names ("A4", "Hb3") or frequencies ("432Hz")
    pub names: Vec<String>,
    /// Half tones from concert A
    pub steps: Vec<i32>,
}

impl PitchSelection {
    pub fn is_empty(&self) -> bool {
        self.octaves.is_empty() && self.names.is_empty() && self.steps.is_empty()
    }

    /// Selected pitches, ascending by frequency, without duplicates
    pub fn resolve(&self) -> Result<Vec<Pitch>> {
        let mut pitches: Vec<Pitch> = self
            .octaves
            .iter()
            .flat_map(Octave::pitches)
            .map(Pitch::from)
            .chain(self.steps.iter().map(|&step| Pitch::step(step)))
            .collect();
        for name in &self.names {
            pitches.push(name.parse()?);
        }

        pitches.sort_by(|a, b| a.frequency().total_cmp(&b.frequency()));
        let mut unique: Vec<Pitch> = Vec::with_capacity(pitches.len());
        for pitch in pitches {
            // Equal pitches share a frequency but need not be adjacent after sorting
            if !unique.contains(&pitch) {
                unique.push(pitch);
            }
        }
        Ok(unique)
    }
}

/// How to analyse a waveform
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub channel: usize,
    pub mode: AnalysisMode,
    pub window_function: WindowFunction,
    pub missing_buckets: MissingBuckets,
    pub pitches: PitchSelection,
}

impl AnalysisConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Bucket pitches; the whole named catalog when nothing is selected
    pub fn bucket_pitches(&self) -> Result<Vec<Pitch>> {
        if self.pitches.is_empty() {
            return Ok(catalog::all().iter().map(Pitch::from).collect());
        }
        self.pitches.resolve()
    }

    /// Generator for `data` as described by this config
    ///
    /// # Arguments
    /// * `data` - Waveform the generator will analyse
    ///
    /// # Returns
    /// A raw or aggregated generator over the configured channel, or an
    /// error for an out-of-range channel or an unknown pitch name
    pub fn build(&self, data: &WaveData) -> Result<Box<dyn SpectrumGenerator + Send + Sync>> {
        let channels = data.info().channels();
        if self.channel >= channels {
            return Err(AnalysisError::ChannelOutOfRange {
                channel: self.channel,
                channels,
            });
        }

        let channel = Channel::of(self.channel, channels);
        let raw = RawSpectrumGenerator::for_channel(data, channel)?
            .with_window_function(self.window_function);

        match self.mode {
            AnalysisMode::Raw => {
                debug!(%channel, "raw spectrum generator");
                Ok(Box::new(raw))
            }
            AnalysisMode::Aggregated => {
                let pitches = self.bucket_pitches()?;
                debug!(%channel, buckets = pitches.len(), "aggregated spectrum generator");
                let aggregator =
                    MaxPitchAggregator::new(pitches).with_missing_buckets(self.missing_buckets);
                Ok(Box::new(AggregatedSpectrumGenerator::new(raw, aggregator)))
            }
        }
    }
}
