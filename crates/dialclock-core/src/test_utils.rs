use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use dialclock_proto::ports::sound::{SoundError, SoundPort};

/// [`SoundPort`] that counts play requests instead of producing audio.
#[derive(Debug, Default)]
pub struct MockSoundPort {
    play_calls: AtomicUsize,
    fail:       AtomicBool,
}

impl MockSoundPort {
    /// A port whose every request fails with a channel error.
    pub fn failing() -> Self {
        let port = Self::default();
        port.fail.store(true, Ordering::SeqCst);
        port
    }

    pub fn play_calls(&self) -> usize {
        self.play_calls.load(Ordering::SeqCst)
    }
}

impl SoundPort for MockSoundPort {
    fn play(&self) -> Result<(), SoundError> {
        self.play_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail.load(Ordering::SeqCst) {
            return Err(SoundError::channel("mock failure"));
        }

        Ok(())
    }
}
