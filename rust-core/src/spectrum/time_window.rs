//! Time range of a waveform selected for analysis

use std::ops::Range;

use crate::pitch::NoteValue;
use crate::wave::WaveInfo;

/// Start and end of an analysis range in seconds
///
/// `start <= end` is not enforced; an inverted window selects no samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeWindow {
    start: f64,
    end: f64,
}

impl TimeWindow {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Window selecting the samples `start_index..end_index`
    ///
    /// The end is placed half a frame before `end_index` so that
    /// [`end_index`](Self::end_index) maps back to the same index.
    ///
    /// # Arguments
    /// * `start_index` - First selected sample
    /// * `end_index` - One past the last selected sample, capped at the frame count
    /// * `info` - Format of the waveform the indices refer to
    pub fn from_indices(start_index: usize, end_index: usize, info: &WaveInfo) -> Self {
        let rate = info.frame_rate() as f64;
        let start = start_index as f64 / rate;
        let end = (end_index.min(info.frames()) as f64 - 0.5) / rate;
        Self::new(start, end)
    }

    /// Window of `seconds` starting at `start`
    pub fn of_length(start: f64, seconds: f64) -> Self {
        Self::new(start, start + seconds)
    }

    /// Window lasting one `note` at `bpm` quarter notes per minute
    pub fn for_note(start: f64, note: NoteValue, bpm: f64) -> Self {
        Self::of_length(start, note.seconds_at(bpm))
    }

    /// Length in seconds; negative for an inverted window
    pub fn length(&self) -> f64 {
        self.end - self.start
    }

    /// Window covering the whole waveform
    pub fn whole(info: &WaveInfo) -> Self {
        Self::from_indices(0, info.frames(), info)
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    /// First sample at or after `start`, clamped to [0, frames]
    pub fn start_index(&self, info: &WaveInfo) -> usize {
        let start = (self.start * info.frame_rate() as f64).ceil();
        start.max(0.0).min(info.frames() as f64) as usize
    }

    /// One past the sample containing `end`, clamped to [0, frames]
    pub fn end_index(&self, info: &WaveInfo) -> usize {
        let end = (self.end * info.frame_rate() as f64).floor() + 1.0;
        end.max(0.0).min(info.frames() as f64) as usize
    }

    /// Sample range of this window; empty when the end does not pass the start
    pub fn range(&self, info: &WaveInfo) -> Range<usize> {
        let start = self.start_index(info);
        let end = self.end_index(info);
        start..end.max(start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        let info = WaveInfo::new(1, 16, 8);
        let window = TimeWindow::from_indices(2, 6, &info);

        assert!((window.start() - 0.25).abs() < 1e-12);
        assert!((window.end() - 0.6875).abs() < 1e-12);
        assert_eq!(window.start_index(&info), 2);
        assert_eq!(window.end_index(&info), 6);
        assert_eq!(window.range(&info), 2..6);
    }

    #[test]
    fn test_clamping() {
        let info = WaveInfo::new(1, 16, 8);
        let window = TimeWindow::new(-1.0, 10.0);
        assert_eq!(window.range(&info), 0..16);

        let window = TimeWindow::new(0.1, 0.1);
        // ceil(0.8) = 1, floor(0.8) + 1 = 1
        assert_eq!(window.range(&info), 1..1);
    }

    #[test]
    fn test_inverted_window_is_empty() {
        let info = WaveInfo::new(1, 16, 8);
        let window = TimeWindow::new(1.5, 0.5);
        assert!(window.range(&info).is_empty());
    }

    #[test]
    fn test_whole() {
        let info = WaveInfo::new(2, 8000, 8000);
        assert_eq!(TimeWindow::whole(&info).range(&info), 0..8000);
        assert_eq!(TimeWindow::new(0.0, 1.0).range(&info), 0..8000);
    }

    #[test]
    fn test_note_windows() {
        let info = WaveInfo::new(1, 8000, 8000);
        let window = TimeWindow::for_note(0.25, NoteValue::Eighth, 120.0);

        assert_eq!(window.start(), 0.25);
        assert_eq!(window.length(), 0.25);
        assert_eq!(window.range(&info), 2000..4001);
        assert_eq!(TimeWindow::of_length(1.0, 0.5), TimeWindow::new(1.0, 1.5));
    }
}
