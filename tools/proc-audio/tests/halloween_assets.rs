//! End-to-end tests for the generated game audio.
//!
//! Exercises the public API the generator uses:
//! 1. Render each asset through `Synth`
//! 2. Check length, peak level and determinism
//! 3. Quantize and write to WAV, then read it back

use proc_audio::*;

const TOLERANCE: f32 = 1e-6;

fn synth() -> Synth {
    Synth::new(SAMPLE_RATE)
}

#[test]
fn test_powerup_length_and_peak() {
    let powerup = synth().powerup().unwrap();
    assert_eq!(powerup.len(), (44100.0 * 0.4f64).floor() as usize);
    assert!((peak(&powerup) - 0.6).abs() < TOLERANCE);
}

#[test]
fn test_explosion_is_random_but_shaped() {
    let first = synth().explosion().unwrap();
    let second = synth().explosion().unwrap();

    let expected_len = (44100.0 * 0.3f64).floor() as usize;
    assert_eq!(first.len(), expected_len);
    assert_eq!(second.len(), expected_len);

    assert!((peak(&first) - 0.7).abs() < TOLERANCE);
    assert!((peak(&second) - 0.7).abs() < TOLERANCE);

    // Only the noise layer differs between runs
    assert_ne!(first, second);
}

#[test]
fn test_background_loop_is_deterministic() {
    let first = synth().halloween_bgm().unwrap();
    let second = synth().halloween_bgm().unwrap();

    assert_eq!(first.len(), 44100 * 16);
    assert!((peak(&first) - 0.7).abs() < TOLERANCE);
    assert_eq!(first, second);
}

#[test]
fn test_all_assets_fit_16_bit_without_clipping() {
    let synth = synth();
    for asset in Asset::ALL {
        let buffer = asset.generate(&synth).unwrap();
        let pcm = buffer.to_pcm_i16();
        let max = pcm.iter().map(|s| s.unsigned_abs()).max().unwrap();

        let expected = (asset.ceiling() * PCM_SCALE).round() as u16;
        assert_eq!(max, expected, "{}", asset.id());
        assert!(max < i16::MAX as u16);
    }
}

#[test]
fn test_oscillators_bounded_for_many_frequencies() {
    for waveform in [Waveform::Sine, Waveform::Square, Waveform::Saw] {
        for frequency in [1.0, 27.5, 440.0, 4186.0, 22050.0] {
            let samples = oscillator(waveform, frequency, 0.05, SAMPLE_RATE).unwrap();
            assert_eq!(samples.len(), sample_count(0.05, SAMPLE_RATE));
            assert!(samples.iter().all(|s| s.is_finite() && (-1.0..=1.0).contains(s)));
        }
    }
}

#[test]
fn test_envelope_starts_and_ends_silent() {
    let env = Envelope::new(0.02, 0.1, 0.5, 0.1);
    let mut tone = vec![1.0f32; sample_count(0.5, SAMPLE_RATE)];
    env.apply(&mut tone, SAMPLE_RATE);

    assert_eq!(tone[0], 0.0);
    assert_eq!(*tone.last().unwrap(), 0.0);
}

#[test]
fn test_normalize_silence_is_noop() {
    let mut silent = vec![0.0f32; 1024];
    normalize_to(&mut silent, 0.7);
    assert!(silent.iter().all(|&s| s == 0.0));
}

#[cfg(feature = "wav-export")]
#[test]
fn test_asset_written_as_wav() {
    let dir = tempfile::tempdir().unwrap();
    let buffer = Asset::Shoot.generate(&synth()).unwrap();
    let path = dir.path().join(Asset::Shoot.file_name());

    buffer.write_wav(&path).unwrap();

    let mut reader = hound::WavReader::open(&path).unwrap();
    let spec = reader.spec();
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.sample_rate, 44100);
    assert_eq!(spec.bits_per_sample, 16);

    let samples: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
    assert_eq!(samples, buffer.to_pcm_i16());
}
