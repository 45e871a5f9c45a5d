use crate::audio::PlaybackClock;

/// Song time produced for one frame, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockTick {
    pub song_time: f64,
    /// Difference to the previous frame's song time.
    pub delta: f64,
}

/// Owns song time. Follows the audio frame counter while music is playing and
/// falls back to accumulating frame deltas otherwise; callers never see which.
pub struct Conductor {
    sample_rate: u32,
    song_time: f64,
    paused: bool,

    last_frame: Option<u64>,
    last_audio_time: f64,
    since_audio_update: f64,
}

impl Conductor {
    pub fn new(sample_rate: u32) -> Self {
        Self {
            sample_rate,
            song_time: 0.0,
            paused: false,
            last_frame: None,
            last_audio_time: 0.0,
            since_audio_update: 0.0,
        }
    }

    pub fn advance(&mut self, delta_ms: f64, playback: Option<&dyn PlaybackClock>) -> ClockTick {
        let previous = self.song_time;
        if self.paused {
            return ClockTick {
                song_time: previous,
                delta: 0.0,
            };
        }

        let wall_delta = delta_ms.max(0.0) / 1000.0;
        let next = match playback.filter(|p| p.is_playing()) {
            Some(playback) => self.audio_time(playback.frame_position(), wall_delta),
            None => {
                self.last_frame = None;
                previous + wall_delta
            }
        };

        self.song_time = next.max(previous);
        ClockTick {
            song_time: self.song_time,
            delta: self.song_time - previous,
        }
    }

    // Audio callbacks deliver frames in blocks; between two blocks the counter
    // stands still, so extrapolate from the last block with wall-clock time.
    fn audio_time(&mut self, frame: u64, wall_delta: f64) -> f64 {
        if self.last_frame != Some(frame) {
            self.last_frame = Some(frame);
            self.last_audio_time = frame as f64 / self.sample_rate as f64;
            self.since_audio_update = 0.0;
        } else {
            self.since_audio_update += wall_delta;
        }
        self.last_audio_time + self.since_audio_update
    }

    pub fn song_time(&self) -> f64 {
        self.song_time
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
        // Resume snaps to whatever the audio reports next.
        self.last_frame = None;
    }

    pub fn reset(&mut self) {
        self.song_time = 0.0;
        self.paused = false;
        self.last_frame = None;
        self.last_audio_time = 0.0;
        self.since_audio_update = 0.0;
    }
}
