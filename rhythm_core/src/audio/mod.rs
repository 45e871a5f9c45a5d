pub mod cues;
pub mod playback;

pub use cues::SoundCue;
pub use playback::{PlaybackClock, SharedPlayback};
