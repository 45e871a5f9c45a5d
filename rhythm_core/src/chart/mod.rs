use glam::Vec2;
use log::{debug, warn};

pub use chart_schema::{ChanceTime, ChartFile, ChartMeta, FlightTimeChange, NoteDef, NoteShape, NoteType};

use crate::error::ChartError;

/// Four beats at 120 BPM.
pub const DEFAULT_FLIGHT_TIME: f64 = 60.0 / 120.0 * 4.0;

/// Parameters of the curved path an icon travels towards its target.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MotionParams {
    pub angle: f32,
    pub frequency: f32,
    pub amplitude: f32,
    pub distance: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartNote {
    pub appear_time: f64,
    pub shape: NoteShape,
    pub note_type: NoteType,
    pub target: Vec2,
    pub motion: MotionParams,
    /// Index of the paired hold end, set for every hold start.
    pub hold_end: Option<usize>,
}

impl ChartNote {
    pub fn from_def(def: &NoteDef) -> Self {
        Self {
            appear_time: def.time,
            shape: def.shape,
            note_type: def.note_type,
            target: Vec2::new(def.x, def.y),
            motion: MotionParams {
                angle: def.angle,
                frequency: def.frequency,
                amplitude: def.amplitude,
                distance: def.distance,
            },
            hold_end: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Chart {
    title: String,
    duration: f64,
    notes: Vec<ChartNote>,
    flight_time_changes: Vec<FlightTimeChange>,
    chance_times: Vec<ChanceTime>,
    default_flight_time: f64,
}

impl Chart {
    pub fn from_file(file: &ChartFile) -> Result<Self, ChartError> {
        if let Some(index) = file.notes.iter().position(|n| !n.time.is_finite()) {
            return Err(ChartError::NonFiniteTime { index });
        }

        let mut defs = file.notes.clone();
        defs.sort_by(|a, b| a.time.total_cmp(&b.time));
        if let Some(first) = defs.first().filter(|n| n.time < 0.0) {
            warn!("chart '{}' has a note before song start ({}s)", file.meta.title, first.time);
        }

        let mut notes: Vec<ChartNote> = defs.iter().map(ChartNote::from_def).collect();
        link_holds(&mut notes)?;

        let mut flight_time_changes = file.flight_time_changes.clone();
        if let Some(bad) = flight_time_changes
            .iter()
            .find(|c| !c.time.is_finite() || !(c.duration > 0.0) || !c.duration.is_finite())
        {
            return Err(ChartError::InvalidFlightTime {
                time: bad.time,
                duration: bad.duration,
            });
        }
        flight_time_changes.sort_by(|a, b| a.time.total_cmp(&b.time));

        let mut chance_times = file.chance_times.clone();
        if let Some(bad) = chance_times.iter().find(|c| !(c.end >= c.start)) {
            return Err(ChartError::InvalidChanceTime {
                start: bad.start,
                end: bad.end,
            });
        }
        chance_times.sort_by(|a, b| a.start.total_cmp(&b.start));

        debug!(
            "chart '{}': {} notes, {} flight time changes, {} chance times",
            file.meta.title,
            notes.len(),
            flight_time_changes.len(),
            chance_times.len()
        );

        Ok(Self {
            title: file.meta.title.clone(),
            duration: file.meta.duration,
            notes,
            flight_time_changes,
            chance_times,
            default_flight_time: DEFAULT_FLIGHT_TIME,
        })
    }

    pub fn with_default_flight_time(mut self, seconds: f64) -> Self {
        self.default_flight_time = seconds;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn notes(&self) -> &[ChartNote] {
        &self.notes
    }

    pub fn note(&self, index: usize) -> Option<&ChartNote> {
        self.notes.get(index)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn flight_time_changes(&self) -> &[FlightTimeChange] {
        &self.flight_time_changes
    }

    /// Flight time in effect for a note appearing at `appear_time`: the latest
    /// change at or before it, or the default when none applies yet.
    pub fn flight_time(&self, appear_time: f64) -> f64 {
        let applicable = self
            .flight_time_changes
            .partition_point(|change| change.time <= appear_time);
        match applicable {
            0 => self.default_flight_time,
            n => self.flight_time_changes[n - 1].duration,
        }
    }

    pub fn chance_time_at(&self, time: f64) -> Option<&ChanceTime> {
        self.chance_times.iter().find(|ct| ct.contains(time))
    }

    pub fn clear(&mut self) {
        self.notes.clear();
        self.flight_time_changes.clear();
        self.chance_times.clear();
    }
}

/// Pairs every hold start with the first later, unclaimed hold end of the same shape.
fn link_holds(notes: &mut [ChartNote]) -> Result<(), ChartError> {
    let mut claimed = vec![false; notes.len()];

    for index in 0..notes.len() {
        if notes[index].note_type != NoteType::HoldStart {
            continue;
        }
        let shape = notes[index].shape;
        let end = (index + 1..notes.len())
            .find(|&j| !claimed[j] && notes[j].note_type == NoteType::HoldEnd && notes[j].shape == shape)
            .ok_or(ChartError::UnpairedHoldStart { index, shape })?;
        claimed[end] = true;
        notes[index].hold_end = Some(end);
    }

    match notes
        .iter()
        .enumerate()
        .find(|(j, n)| n.note_type == NoteType::HoldEnd && !claimed[*j])
    {
        Some((index, orphan)) => Err(ChartError::OrphanHoldEnd {
            index,
            shape: orphan.shape,
        }),
        None => Ok(()),
    }
}
