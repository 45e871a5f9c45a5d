use chart_schema::NoteShape;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChartError {
    #[error("hold start #{index} ({shape:?}) has no matching hold end")]
    UnpairedHoldStart { index: usize, shape: NoteShape },

    #[error("hold end #{index} ({shape:?}) has no preceding hold start")]
    OrphanHoldEnd { index: usize, shape: NoteShape },

    #[error("note #{index} has a non-finite appear time")]
    NonFiniteTime { index: usize },

    #[error("flight time change at {time}s has invalid duration {duration}s")]
    InvalidFlightTime { time: f64, duration: f64 },

    #[error("chance time ends ({end}s) before it starts ({start}s)")]
    InvalidChanceTime { start: f64, end: f64 },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse gameplay config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid timing windows: {0}")]
    Windows(String),

    #[error("{tier} awards {wrong} for a wrong shape but only {correct} for the right one")]
    ScoreTable {
        tier: &'static str,
        correct: u32,
        wrong: u32,
    },

    #[error("{field} must be positive (got {value})")]
    NotPositive { field: &'static str, value: f64 },
}
