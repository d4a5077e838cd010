// tests/pipeline_test.rs
//
// Drives the library through its public API only.

use std::f64::consts::PI;

use wave_scanner::{
    AggregatedSpectrumGenerator, AnalysisConfig, Channel, HasAmplitude, HasFrequency, NoteValue,
    Octave, Pitch, PitchFactory, RawSpectrumGenerator, SlidingWindow, SpectrumGenerator,
    TimeWindow, WaveData,
};

const FRAME_RATE: u32 = 8000;

fn tone(frequency: f64, frames: usize) -> Vec<f64> {
    (0..frames)
        .map(|n| (2.0 * PI * frequency * n as f64 / FRAME_RATE as f64).sin())
        .collect()
}

#[test]
fn test_pure_tone_peak() {
    let data = WaveData::mono(tone(440.0, 8000), FRAME_RATE);
    let generator = RawSpectrumGenerator::for_channel(&data, Channel::Mono).unwrap();

    let spectrum = generator.generate(&TimeWindow::new(0.0, 1.0)).unwrap();
    assert_eq!(spectrum.len(), 8000);

    // Bins past Nyquist mirror the lower half
    let nyquist = FRAME_RATE as f64 / 2.0;
    let lower: Vec<_> = spectrum
        .points()
        .iter()
        .filter(|p| p.frequency() <= nyquist)
        .collect();

    let (peak_bin, peak) = lower
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.cmp_by_amplitude(b))
        .unwrap();

    // fft_size 8192: bin 451 sits at 440.43 Hz
    assert_eq!(peak_bin, 451);
    assert!((peak.frequency() - 440.0).abs() < FRAME_RATE as f64 / 8192.0);

    for point in &lower {
        if (point.frequency() - 440.0).abs() > 50.0 {
            assert!(
                point.amplitude() < 0.02 * peak.amplitude(),
                "leakage at {} Hz: {}",
                point.frequency(),
                point.amplitude()
            );
        }
    }
}

#[test]
fn test_tone_lands_in_its_bucket() {
    let data = WaveData::mono(tone(440.0, 8000), FRAME_RATE);
    let raw = RawSpectrumGenerator::for_channel(&data, Channel::Mono).unwrap();
    let pitches: Vec<Pitch> = Octave::SecondOctave
        .pitches()
        .into_iter()
        .map(Pitch::from)
        .collect();
    let generator = AggregatedSpectrumGenerator::max_of(raw, pitches);

    let reduced = generator.generate(&TimeWindow::new(0.0, 1.0)).unwrap();
    let loudest = reduced.peak().unwrap();
    assert_eq!(loudest.frequency(), 440.0);
    assert_eq!(
        reduced.amplitudes().filter(|&a| a > 0.1).count(),
        1,
        "only A4 should stand out"
    );
}

#[test]
fn test_stereo_config_pipeline() {
    let left = tone(261.63, 4000);
    let right = tone(392.0, 4000);
    let interleaved: Vec<f64> = left
        .iter()
        .zip(&right)
        .flat_map(|(&l, &r)| [l, r])
        .collect();
    let data = WaveData::from_interleaved(&interleaved, 2, FRAME_RATE).unwrap();
    assert!((data.info().duration() - 0.5).abs() < 1e-12);

    let config = AnalysisConfig::from_toml_str(
        r#"
        channel = 1
        mode = "aggregated"
        window_function = "hann"

        [pitches]
        names = ["C4", "E4", "G4"]
        "#,
    )
    .unwrap();
    let generator = config.build(&data).unwrap();

    let reduced = generator.generate(&TimeWindow::whole(data.info())).unwrap();
    assert_eq!(reduced.len(), 3);
    let peak = reduced.peak().unwrap();
    assert!((peak.frequency() - Pitch::step(-2).frequency()).abs() < 1e-9);
}

#[test]
fn test_shared_generator_across_threads() {
    let data = WaveData::mono(tone(330.0, 8000), FRAME_RATE);
    let generator = RawSpectrumGenerator::for_channel(&data, Channel::Mono).unwrap();
    let window = TimeWindow::new(0.25, 0.75);
    let expected = generator.generate(&window).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| generator.generate(&window).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_degenerate_windows() {
    let data = WaveData::mono(tone(440.0, 800), FRAME_RATE);
    let generator = RawSpectrumGenerator::for_channel(&data, Channel::Mono).unwrap();

    assert!(generator.generate(&TimeWindow::new(0.09, 0.01)).unwrap().is_empty());
    assert!(generator.generate(&TimeWindow::new(3.0, 4.0)).unwrap().is_empty());
    assert_eq!(
        generator.generate(&TimeWindow::new(-1.0, 0.0)).unwrap().len(),
        1
    );
}

#[test]
fn test_loudest_points_name_the_tone() {
    let data = WaveData::mono(tone(440.0, 8000), FRAME_RATE);
    let generator = RawSpectrumGenerator::for_channel(&data, Channel::Mono).unwrap();
    let spectrum = generator.generate(&TimeWindow::new(0.0, 1.0)).unwrap();

    // The peak bin and its mirror above Nyquist
    let top = spectrum.top_amplitudes(2).into_points();
    assert_eq!(top.len(), 2);
    assert!(top[0].frequency() < top[1].frequency());
    assert_eq!(top[0].amplitude(), top[1].amplitude());

    let half_tones = top[0].half_tones();
    assert!(half_tones.abs() < 0.05, "{half_tones} half tones off A4");
    assert_eq!(
        PitchFactory::standard().nearest(top[0].frequency()).map(Pitch::from),
        Some(Pitch::step(0))
    );
}

#[test]
fn test_melody_series_from_config() {
    // A quarter note of C5 then one of E5 at 120 bpm
    let quarter = TimeWindow::for_note(0.0, NoteValue::Quarter, 120.0);
    let frames = (quarter.length() * FRAME_RATE as f64) as usize;
    let mut samples = tone(523.25, frames);
    samples.extend(tone(659.26, frames));
    let data = WaveData::mono(samples, FRAME_RATE);

    let config = AnalysisConfig::from_toml_str(
        r#"
        mode = "aggregated"
        window_function = "hann"

        [pitches]
        names = ["C5", "E5"]
        "#,
    )
    .unwrap();
    let generator = config.build(&data).unwrap();

    let sliding = SlidingWindow::from_frames(512, 4, data.info());
    let series = sliding
        .generate(&generator, &TimeWindow::new(0.125, 1.125))
        .unwrap();
    assert_eq!(series.len(), 4);

    let c5: Vec<(f64, f64)> = series.track(0).collect();
    let e5: Vec<(f64, f64)> = series.track(1).collect();
    // Centres at 0.125, 0.375, 0.625 and 0.875 s
    assert!(c5[0].1 > e5[0].1 && c5[1].1 > e5[1].1);
    assert!(e5[2].1 > c5[2].1 && e5[3].1 > c5[3].1);
}
