//! Synthesis errors

/// Errors produced while synthesizing or exporting audio
#[derive(Debug, thiserror::Error)]
pub enum SynthError {
    /// Frequency must be finite and positive
    #[error("invalid frequency {0} Hz (must be finite and > 0)")]
    InvalidFrequency(f32),

    /// Duration must be finite and positive
    #[error("invalid duration {0} s (must be finite and > 0)")]
    InvalidDuration(f32),

    /// Sample rate must be non-zero
    #[error("invalid sample rate {0} Hz (must be > 0)")]
    InvalidSampleRate(u32),

    /// Mixing weight must be finite
    #[error("invalid mix weight {0} (must be finite)")]
    InvalidWeight(f32),

    /// WAV serialization failed
    #[cfg(feature = "wav-export")]
    #[error("failed to write WAV: {0}")]
    Wav(#[from] hound::Error),
}

/// Result alias for synthesis operations
pub type Result<T> = std::result::Result<T, SynthError>;

pub(crate) fn check_frequency(frequency: f32) -> Result<()> {
    if frequency.is_finite() && frequency > 0.0 {
        Ok(())
    } else {
        Err(SynthError::InvalidFrequency(frequency))
    }
}

pub(crate) fn check_duration(duration: f32) -> Result<()> {
    if duration.is_finite() && duration > 0.0 {
        Ok(())
    } else {
        Err(SynthError::InvalidDuration(duration))
    }
}

pub(crate) fn check_sample_rate(sample_rate: u32) -> Result<()> {
    if sample_rate > 0 {
        Ok(())
    } else {
        Err(SynthError::InvalidSampleRate(sample_rate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checks_accept_valid_input() {
        assert!(check_frequency(440.0).is_ok());
        assert!(check_duration(0.01).is_ok());
        assert!(check_sample_rate(44100).is_ok());
    }

    #[test]
    fn test_checks_reject_invalid_input() {
        assert!(matches!(check_frequency(0.0), Err(SynthError::InvalidFrequency(_))));
        assert!(matches!(check_frequency(-5.0), Err(SynthError::InvalidFrequency(_))));
        assert!(matches!(check_frequency(f32::NAN), Err(SynthError::InvalidFrequency(_))));
        assert!(matches!(check_duration(0.0), Err(SynthError::InvalidDuration(_))));
        assert!(matches!(check_duration(f32::INFINITY), Err(SynthError::InvalidDuration(_))));
        assert!(matches!(check_sample_rate(0), Err(SynthError::InvalidSampleRate(0))));
    }

    #[test]
    fn test_error_display() {
        let err = SynthError::InvalidFrequency(-1.0);
        assert_eq!(err.to_string(), "invalid frequency -1 Hz (must be finite and > 0)");
    }
}
