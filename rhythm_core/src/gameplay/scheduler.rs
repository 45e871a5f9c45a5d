use chart_schema::NoteType;
use log::debug;

use crate::chart::Chart;
use crate::gameplay::note::{GameNote, NoteKey};
use crate::gameplay::notes::ActiveNotes;
use crate::time::ClockTick;

/// Walks the chart once, front to back, turning due chart notes into live notes.
#[derive(Debug, Default, Clone)]
pub struct NoteScheduler {
    cursor: usize,
}

impl NoteScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns every chart note whose appear time has been reached by
    /// `tick.song_time`. Hold ends are skipped here; they come to life with
    /// their start.
    ///
    /// New notes are placed at the start of the frame so that this tick's
    /// update pass brings their elapsed time up to the current song time.
    pub fn spawn_due(&mut self, chart: &Chart, tick: ClockTick, notes: &mut ActiveNotes) -> Vec<NoteKey> {
        let frame_start = tick.song_time - tick.delta;
        let mut spawned = Vec::new();

        while let Some(chart_note) = chart.note(self.cursor) {
            if chart_note.appear_time > tick.song_time {
                break;
            }
            let index = self.cursor;
            self.cursor += 1;

            if chart_note.note_type == NoteType::HoldEnd {
                continue;
            }

            let fly_time = chart.flight_time(chart_note.appear_time);
            let mut note = GameNote::spawn(chart_note, index, fly_time, frame_start - chart_note.appear_time);
            note.chance_time = chart.chance_time_at(chart_note.appear_time + fly_time).is_some();

            debug!(
                "spawn #{index} {:?} {:?} at {:.3}s (fly {:.3}s)",
                chart_note.shape, chart_note.note_type, tick.song_time, fly_time
            );
            let key = notes.push(note);
            spawned.push(key);

            let hold_end = chart_note
                .hold_end
                .and_then(|end_index| chart.note(end_index).map(|end| (end_index, end)));
            if let Some((end_index, end)) = hold_end {
                let end_fly_time = chart.flight_time(end.appear_time);
                let end_note = GameNote::spawn(end, end_index, end_fly_time, frame_start - end.appear_time);
                let end_key = notes.push(end_note);
                notes.link(key, end_key);
                spawned.push(end_key);
            }
        }
        spawned
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_exhausted(&self, chart: &Chart) -> bool {
        self.cursor >= chart.len()
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}
