use masterror::Error;

use super::Config;

/// Errors returned when validating a [`Config`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigValidationError {
    /// The initial window size has a non-positive or non-finite dimension.
    #[error("window size must be positive, got {width}x{height}")]
    InvalidWindowSize { width: f32, height: f32 },

    /// The sample volume is outside of `0.0..=1.0`.
    #[error("sound volume must be within 0.0..=1.0, got {volume}")]
    VolumeOutOfRange { volume: f32 },
}

impl Config {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigValidationError`] if the window size is not positive or
    /// the sound volume is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use dialclock_proto::config::Config;
    ///
    /// let config = Config::default();
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let valid_dimension = |value: f32| value.is_finite() && value > 0.0;

        if !valid_dimension(self.window.width) || !valid_dimension(self.window.height) {
            return Err(ConfigValidationError::InvalidWindowSize {
                width: self.window.width,
                height: self.window.height,
            });
        }

        if !(0.0..=1.0).contains(&self.sound.volume) {
            return Err(ConfigValidationError::VolumeOutOfRange {
                volume: self.sound.volume,
            });
        }

        Ok(())
    }
}
