use chart_schema::{NoteShape, NoteType};
use glam::Vec2;

use crate::audio::SoundCue;
use crate::gameplay::judge::Judgment;

/// A resolved note, as the HUD and audio collaborators see it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JudgmentEvent {
    pub shape: NoteShape,
    /// Shape of the input that struck the note.
    pub struck: NoteShape,
    pub note_type: NoteType,
    pub judgment: Judgment,
    pub wrong: bool,
    /// Combo after this judgment.
    pub combo: u32,
    pub awarded: u32,
    pub position: Vec2,
    pub song_time: f64,
    /// Remaining time at the moment of the hit.
    pub offset_ms: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    Judged(JudgmentEvent),
    /// An unhit note ran out of time.
    Expired {
        shape: NoteShape,
        note_type: NoteType,
        position: Vec2,
    },
    /// Extra points popup (double bonus, running hold bonus).
    ScoreBonus { value: u32, position: Vec2 },
    HoldBonusStarted { position: Vec2 },
    HoldBonusReleased { value: u32, dropped: bool },
    Cue(SoundCue),
    PauseChanged(bool),
    Finished,
}
