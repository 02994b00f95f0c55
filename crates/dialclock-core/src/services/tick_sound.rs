use std::{
    fs,
    io::Cursor,
    path::Path,
    sync::Arc,
    thread,
};

use dialclock_proto::ports::sound::{SoundError, SoundPort};
use log::{debug, error, info, warn};
use rodio::{Decoder, OutputStream, Source};
use tokio::sync::mpsc::{self, Receiver, Sender, error::TrySendError};

const BUNDLED_SAMPLE: &[u8] = include_bytes!("../../assets/tick.wav");

/// Pending plays beyond this are dropped.
const QUEUE_CAPACITY: usize = 4;

/// Encoded audio bytes, checked to be decodable when loaded.
#[derive(Debug, Clone)]
pub struct TickSample {
    bytes: Arc<[u8]>,
}

impl TickSample {
    /// Load the sample from `path`, or the bundled one when no path is set.
    ///
    /// # Errors
    ///
    /// Returns [`SoundError::AssetMissing`] if `path` does not exist and
    /// [`SoundError::Decode`] if the bytes are not a supported format.
    pub fn load(path: Option<&Path>) -> Result<Self, SoundError> {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::bundled(),
        }
    }

    pub fn bundled() -> Result<Self, SoundError> {
        Self::from_bytes(BUNDLED_SAMPLE.to_vec())
    }

    pub fn from_path(path: &Path) -> Result<Self, SoundError> {
        if !path.exists() {
            return Err(SoundError::asset_missing(path));
        }

        info!("Loading tick sample from {path:?}");
        Self::from_bytes(fs::read(path)?)
    }

    fn from_bytes(bytes: Vec<u8>) -> Result<Self, SoundError> {
        let sample = Self {
            bytes: Arc::from(bytes),
        };
        sample.decoder()?;

        Ok(sample)
    }

    fn decoder(&self) -> Result<Decoder<Cursor<Arc<[u8]>>>, SoundError> {
        Decoder::new(Cursor::new(Arc::clone(&self.bytes)))
            .map_err(|err| SoundError::decode(err.to_string()))
    }
}

#[derive(Debug)]
struct PlayRequest;

/// Plays the tick sample on a dedicated audio thread.
///
/// The output stream is owned by the worker thread; the GUI only holds the
/// sending half of a bounded queue.
#[derive(Debug)]
pub struct TickSoundService {
    sender: Sender<PlayRequest>,
}

impl TickSoundService {
    /// Start the audio worker.
    ///
    /// An unavailable output device is not reported here: the worker logs it
    /// and keeps accepting requests without playing them.
    pub fn spawn(sample: TickSample, volume: f32) -> Result<Self, SoundError> {
        let (sender, receiver) = mpsc::channel(QUEUE_CAPACITY);

        thread::Builder::new()
            .name("dialclock-audio".to_owned())
            .spawn(move || run_worker(sample, volume, receiver))
            .map_err(|err| SoundError::output(err.to_string()))?;

        Ok(Self { sender })
    }
}

impl SoundPort for TickSoundService {
    fn play(&self) -> Result<(), SoundError> {
        self.sender.try_send(PlayRequest).map_err(channel_error)
    }
}

fn channel_error<T>(err: TrySendError<T>) -> SoundError {
    match err {
        TrySendError::Full(_) => SoundError::channel("playback queue is full"),
        TrySendError::Closed(_) => SoundError::channel("audio worker stopped"),
    }
}

fn run_worker(sample: TickSample, volume: f32, mut receiver: Receiver<PlayRequest>) {
    let (_stream, handle) = match OutputStream::try_default() {
        Ok(output) => output,
        Err(err) => {
            error!("{}", SoundError::output(err.to_string()));

            while receiver.blocking_recv().is_some() {}
            return;
        }
    };

    debug!("Audio worker started");

    while receiver.blocking_recv().is_some() {
        let source = match sample.decoder() {
            Ok(source) => source,
            Err(err) => {
                warn!("{err}");
                continue;
            }
        };

        if let Err(err) = handle.play_raw(source.amplify(volume).convert_samples()) {
            warn!("Failed to play tick sample: {err}");
        }
    }

    debug!("Audio worker stopped");
}
