#![allow(dead_code)]

use rhythm_core::chart::{ChanceTime, ChartFile, ChartMeta, FlightTimeChange, NoteDef, NoteShape, NoteType};
use rhythm_core::input::{InputFrame, ShapeInput};
use rhythm_core::{Chart, GameplayConfig, PlaySession, SessionContext};

/// 1/16 s, exact in binary so song times never drift in tests.
pub const FRAME_MS: f64 = 62.5;

pub fn note(time: f64, shape: NoteShape, note_type: NoteType) -> NoteDef {
    NoteDef {
        time,
        shape,
        note_type,
        x: 960.0,
        y: 540.0,
        angle: 90.0,
        frequency: 2.0,
        amplitude: 500.0,
        distance: 1200.0,
    }
}

pub fn chart_file(notes: Vec<NoteDef>, duration: f64) -> ChartFile {
    ChartFile {
        meta: ChartMeta {
            title: "Test Song".to_string(),
            artist: String::new(),
            duration,
        },
        notes,
        flight_time_changes: vec![],
        chance_times: vec![],
    }
}

pub fn with_timeline(mut file: ChartFile, changes: &[(f64, f64)], chance: &[(f64, f64)]) -> ChartFile {
    file.flight_time_changes = changes
        .iter()
        .map(|&(time, duration)| FlightTimeChange { time, duration })
        .collect();
    file.chance_times = chance.iter().map(|&(start, end)| ChanceTime { start, end }).collect();
    file
}

pub fn session(notes: Vec<NoteDef>, duration: f64) -> PlaySession {
    let chart = Chart::from_file(&chart_file(notes, duration)).expect("valid chart");
    PlaySession::new(chart, GameplayConfig::default(), SessionContext::headless())
}

/// Steps idle frames until song time reaches `time`.
pub fn run_until(session: &mut PlaySession, time: f64) -> Vec<rhythm_core::gameplay::GameEvent> {
    let mut events = Vec::new();
    while session.song_time() < time {
        events.extend(session.update(FRAME_MS, &InputFrame::idle()));
    }
    events
}

pub fn tap(shape: NoteShape) -> InputFrame {
    InputFrame::idle().with(
        shape,
        ShapeInput {
            primary_tapped: true,
            primary_down: true,
            ..ShapeInput::default()
        },
    )
}

pub fn release(shape: NoteShape) -> InputFrame {
    InputFrame::idle().with(
        shape,
        ShapeInput {
            released: true,
            ..ShapeInput::default()
        },
    )
}

pub fn holding(shape: NoteShape) -> InputFrame {
    InputFrame::idle().with(
        shape,
        ShapeInput {
            primary_down: true,
            ..ShapeInput::default()
        },
    )
}
