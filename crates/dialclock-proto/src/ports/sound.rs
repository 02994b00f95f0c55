use std::{path::Path, sync::Arc};

use masterror::Error;

/// Error type returned by [`SoundPort`] implementations and sample loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SoundError {
    /// The configured sample file does not exist.
    #[error("tick sample not found at {path}")]
    AssetMissing { path: Arc<str> },

    /// The sample file exists but could not be read.
    #[error("failed to read tick sample: {context}")]
    Read { context: Arc<str> },

    /// The sample bytes are not a supported audio format.
    #[error("failed to decode tick sample: {context}")]
    Decode { context: Arc<str> },

    /// No audio output device could be opened.
    #[error("failed to open audio output: {context}")]
    Output { context: Arc<str> },

    /// The playback worker is gone or saturated.
    #[error("tick sound channel error: {context}")]
    Channel { context: Arc<str> },
}

impl SoundError {
    fn arc_from(value: impl Into<String>) -> Arc<str> {
        Arc::<str>::from(value.into())
    }

    /// Create an error for a sample path that does not exist.
    pub fn asset_missing(path: &Path) -> Self {
        Self::AssetMissing {
            path: Self::arc_from(path.display().to_string()),
        }
    }

    /// Create a read error with contextual information.
    pub fn read(context: impl Into<String>) -> Self {
        Self::Read {
            context: Self::arc_from(context),
        }
    }

    /// Create a decode error with contextual information.
    pub fn decode(context: impl Into<String>) -> Self {
        Self::Decode {
            context: Self::arc_from(context),
        }
    }

    /// Create an output device error with contextual information.
    pub fn output(context: impl Into<String>) -> Self {
        Self::Output {
            context: Self::arc_from(context),
        }
    }

    /// Create a channel error with contextual information.
    pub fn channel(context: impl Into<String>) -> Self {
        Self::Channel {
            context: Self::arc_from(context),
        }
    }
}

impl From<std::io::Error> for SoundError {
    fn from(value: std::io::Error) -> Self {
        SoundError::read(value.to_string())
    }
}

/// Fire-and-forget playback of the tick sample.
///
/// Implementations must not block the caller; a request that cannot be
/// queued is reported and dropped.
pub trait SoundPort: Send + Sync + std::fmt::Debug {
    /// Queue one playback of the sample.
    fn play(&self) -> Result<(), SoundError>;
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::SoundError;

    #[test]
    fn converts_io_errors() {
        let err = SoundError::from(std::io::Error::other("boom"));
        assert!(matches!(
            err,
            SoundError::Read { ref context } if context.as_ref() == "boom"
        ));
    }

    #[test]
    fn asset_missing_mentions_path() {
        let err = SoundError::asset_missing(&PathBuf::from("/nope/tick.wav"));
        assert_eq!(err.to_string(), "tick sample not found at /nope/tick.wav");
    }
}
