use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

/// Read side of the music voice, as seen by the song clock.
pub trait PlaybackClock {
    fn is_playing(&self) -> bool;

    /// Frames rendered since the start of the song.
    fn frame_position(&self) -> u64;

    fn set_playing(&self, playing: bool);

    fn rewind(&self);
}

/// Lock-free playback position shared between the audio callback and the game loop.
#[derive(Debug, Clone, Default)]
pub struct SharedPlayback {
    frames: Arc<AtomicU64>,
    playing: Arc<AtomicBool>,
}

impl SharedPlayback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called by the audio thread after each rendered block.
    pub fn advance_frames(&self, frames: u64) {
        if self.playing.load(Ordering::Acquire) {
            self.frames.fetch_add(frames, Ordering::Release);
        }
    }
}

impl PlaybackClock for SharedPlayback {
    fn is_playing(&self) -> bool {
        self.playing.load(Ordering::Acquire)
    }

    fn frame_position(&self) -> u64 {
        self.frames.load(Ordering::Acquire)
    }

    fn set_playing(&self, playing: bool) {
        self.playing.store(playing, Ordering::Release);
    }

    fn rewind(&self) {
        self.frames.store(0, Ordering::Release);
    }
}
