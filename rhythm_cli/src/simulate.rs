use std::{fs, path::Path};

use anyhow::Context;
use chart_schema::{NoteShape, NoteType, PlayResult};
use rhythm_core::gameplay::{GameEvent, JudgmentEvent};
use rhythm_core::input::{Binding, InputEvent, InputTracker};
use rhythm_core::{Chart, GameplayConfig, PlaySession, SessionContext};
use serde::{Deserialize, Serialize};

/// How long autoplay keeps a tapped key down.
const TAP_LENGTH: f64 = 0.05;

/// One line of an input script.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScriptEvent {
    pub time: f64,
    pub shape: NoteShape,
    pub pressed: bool,
    #[serde(default)]
    pub alternate: bool,
}

impl ScriptEvent {
    fn to_input(self) -> InputEvent {
        let binding = if self.alternate {
            Binding::Alternate
        } else {
            Binding::Primary
        };
        InputEvent {
            timestamp: self.time,
            shape: self.shape,
            binding,
            pressed: self.pressed,
        }
    }
}

pub fn load_script(path: &Path) -> anyhow::Result<Vec<ScriptEvent>> {
    let bytes = fs::read(path).with_context(|| format!("failed to read script: {}", path.display()))?;
    let mut events: Vec<ScriptEvent> = serde_json::from_slice(&bytes)
        .with_context(|| format!("failed to parse script json: {}", path.display()))?;
    events.sort_by(|a, b| a.time.total_cmp(&b.time));
    Ok(events)
}

/// Presses every note at its hit instant.
pub fn autoplay(chart: &Chart) -> Vec<ScriptEvent> {
    let mut events = Vec::new();
    let mut push = |time: f64, shape: NoteShape, pressed: bool, alternate: bool| {
        events.push(ScriptEvent {
            time,
            shape,
            pressed,
            alternate,
        })
    };

    for note in chart.notes() {
        let hit = note.appear_time + chart.flight_time(note.appear_time);
        match note.note_type {
            NoteType::Normal => {
                push(hit, note.shape, true, false);
                push(hit + TAP_LENGTH, note.shape, false, false);
            }
            NoteType::Double => {
                for alternate in [false, true] {
                    push(hit, note.shape, true, alternate);
                    push(hit + TAP_LENGTH, note.shape, false, alternate);
                }
            }
            NoteType::HoldStart => push(hit, note.shape, true, false),
            NoteType::HoldEnd => push(hit, note.shape, false, false),
        }
    }
    events.sort_by(|a, b| a.time.total_cmp(&b.time));
    events
}

/// Runs the chart to the end, feeding `script` in frame-sized batches.
pub fn run(chart: Chart, config: GameplayConfig, script: Vec<ScriptEvent>, frame_ms: f64, quiet: bool) -> PlayResult {
    let mut session = PlaySession::new(chart, config, SessionContext::headless());
    let mut tracker = InputTracker::new();
    let frame_s = frame_ms / 1000.0;
    let mut next = 0;

    while !session.is_finished() {
        // Everything that happens before this frame ends.
        let frame_end = session.song_time() + frame_s;
        let due = script[next..].iter().take_while(|e| e.time <= frame_end).count();
        let batch = script[next..next + due].iter().map(|e| e.to_input());
        next += due;

        let frame = tracker.frame(batch);
        for event in session.update(frame_ms, &frame) {
            if !quiet {
                print_event(&event);
            }
        }
    }

    let result = session.result();
    print_summary(&result);
    result
}

fn print_event(event: &GameEvent) {
    match event {
        GameEvent::Judged(judged) => println!("{}", judgment_line(judged)),
        GameEvent::Expired { shape, note_type, .. } => {
            println!("{:>9}  {:<8} {:<10} MISS (expired)", "-", shape.name(), type_name(*note_type))
        }
        GameEvent::HoldBonusReleased { value, dropped: false } => println!("{:>9}  hold bonus +{value}", "-"),
        GameEvent::ScoreBonus { value, .. } => println!("{:>9}  bonus +{value}", "-"),
        _ => {}
    }
}

fn judgment_line(judged: &JudgmentEvent) -> String {
    format!(
        "{:>9.3}  {:<8} {:<10} {}{} +{} combo {}",
        judged.song_time,
        judged.shape.name(),
        type_name(judged.note_type),
        judged.judgment.name(),
        if judged.wrong { " (wrong)" } else { "" },
        judged.awarded,
        judged.combo
    )
}

fn type_name(note_type: NoteType) -> &'static str {
    match note_type {
        NoteType::Normal => "normal",
        NoteType::Double => "double",
        NoteType::HoldStart => "hold_start",
        NoteType::HoldEnd => "hold_end",
    }
}

fn print_summary(result: &PlayResult) {
    let c = &result.counts;
    println!("score={}", result.score);
    println!("max_combo={}", result.max_combo);
    println!(
        "cool={} good={} safe={} bad={} miss={} wrong={}",
        c.cool, c.good, c.safe, c.bad, c.miss, c.wrong
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use rhythm_core::chart::{ChartFile, ChartMeta, NoteDef};

    fn def(time: f64, shape: NoteShape, note_type: NoteType) -> NoteDef {
        NoteDef {
            time,
            shape,
            note_type,
            x: 0.0,
            y: 0.0,
            angle: 0.0,
            frequency: 0.0,
            amplitude: 0.0,
            distance: 0.0,
        }
    }

    fn chart(notes: Vec<NoteDef>) -> Chart {
        Chart::from_file(&ChartFile {
            meta: ChartMeta {
                title: "t".to_string(),
                artist: String::new(),
                duration: 10.0,
            },
            notes,
            flight_time_changes: vec![],
            chance_times: vec![],
        })
        .unwrap()
    }

    #[test]
    fn autoplay_presses_at_hit_instants() {
        let chart = chart(vec![
            def(1.0, NoteShape::Circle, NoteType::Double),
            def(2.0, NoteShape::Cross, NoteType::HoldStart),
            def(3.0, NoteShape::Cross, NoteType::HoldEnd),
        ]);
        let script = autoplay(&chart);

        let presses: Vec<_> = script.iter().filter(|e| e.pressed).collect();
        assert_eq!(presses.len(), 3);
        assert_eq!(presses[0].time, 3.0);
        assert!(presses.iter().any(|e| e.alternate));

        let last = script.last().unwrap();
        assert_eq!(last.time, 5.0);
        assert!(!last.pressed);
        assert_eq!(last.shape, NoteShape::Cross);
    }

    #[test]
    fn autoplay_run_scores_every_note() {
        let chart = chart(vec![
            def(0.5, NoteShape::Circle, NoteType::Normal),
            def(1.0, NoteShape::Star, NoteType::Double),
            def(2.0, NoteShape::Square, NoteType::HoldStart),
            def(3.0, NoteShape::Square, NoteType::HoldEnd),
        ]);
        let script = autoplay(&chart);

        let result = run(chart, GameplayConfig::default(), script, 15.625, true);
        assert_eq!(result.counts.cool, 4);
        assert_eq!(result.counts.miss, 0);
        assert_eq!(result.max_combo, 4);
        // Hold bonus on top of four Cool notes and the double bonus.
        assert!(result.score > 4 * 500 + 200);
    }
}
