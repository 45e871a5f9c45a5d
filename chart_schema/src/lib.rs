use serde::{Deserialize, Serialize};

pub mod result;

pub use result::{JudgmentCounts, PlayResult};

/// Seconds from song start.
pub type Seconds = f64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteShape {
    Circle,
    Cross,
    Square,
    Triangle,
    Star,
}

impl NoteShape {
    pub const ALL: [NoteShape; 5] = [
        NoteShape::Circle,
        NoteShape::Cross,
        NoteShape::Square,
        NoteShape::Triangle,
        NoteShape::Star,
    ];

    pub fn name(self) -> &'static str {
        match self {
            NoteShape::Circle => "circle",
            NoteShape::Cross => "cross",
            NoteShape::Square => "square",
            NoteShape::Triangle => "triangle",
            NoteShape::Star => "star",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteType {
    Normal,
    Double,
    HoldStart,
    HoldEnd,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartFile {
    pub meta: ChartMeta,
    pub notes: Vec<NoteDef>,
    #[serde(default)]
    pub flight_time_changes: Vec<FlightTimeChange>,
    #[serde(default)]
    pub chance_times: Vec<ChanceTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartMeta {
    pub title: String,
    #[serde(default)]
    pub artist: String,
    /// Total song length; play ends once song time reaches it.
    pub duration: Seconds,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct NoteDef {
    pub time: Seconds,
    pub shape: NoteShape,
    #[serde(rename = "type")]
    pub note_type: NoteType,
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    #[serde(default)]
    pub angle: f32,
    #[serde(default)]
    pub frequency: f32,
    #[serde(default)]
    pub amplitude: f32,
    #[serde(default)]
    pub distance: f32,
}

/// From `time` on, notes travel for `duration` seconds before their hit instant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FlightTimeChange {
    pub time: Seconds,
    pub duration: Seconds,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ChanceTime {
    pub start: Seconds,
    pub end: Seconds,
}

impl ChanceTime {
    pub fn contains(&self, time: f64) -> bool {
        time >= self.start && time <= self.end
    }
}

impl ChartFile {
    pub fn count_of(&self, note_type: NoteType) -> usize {
        self.notes.iter().filter(|n| n.note_type == note_type).count()
    }
}
