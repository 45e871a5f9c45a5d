use chart_schema::{NoteShape, NoteType};

use crate::config::JudgeWindows;
use crate::gameplay::note::GameNote;

/// Ordered from tightest to widest window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Judgment {
    Cool,
    Good,
    Safe,
    Bad,
    Miss,
}

impl Judgment {
    /// Only the two top tiers continue a combo (and only on the right shape).
    pub fn keeps_combo(self) -> bool {
        matches!(self, Judgment::Cool | Judgment::Good)
    }

    pub fn name(self) -> &'static str {
        match self {
            Judgment::Cool => "COOL",
            Judgment::Good => "GOOD",
            Judgment::Safe => "SAFE",
            Judgment::Bad => "BAD",
            Judgment::Miss => "MISS",
        }
    }
}

/// Classifies a signed offset (remaining time in ms). Window bounds are inclusive.
pub fn classify(offset_ms: f64, windows: &JudgeWindows) -> Judgment {
    let within = |half_width: f64| (-half_width..=half_width).contains(&offset_ms);

    if within(windows.cool_ms) {
        Judgment::Cool
    } else if within(windows.good_ms) {
        Judgment::Good
    } else if within(windows.safe_ms) {
        Judgment::Safe
    } else if within(windows.bad_ms) {
        Judgment::Bad
    } else {
        Judgment::Miss
    }
}

/// Judges `note` against a press of `shape` at the note's current time.
///
/// Returns `None` when the input is not accepted (too early, or a double note
/// still waiting for its second press); the note is left untouched apart from
/// the double-tap bonus flag.
pub fn evaluate(note: &mut GameNote, shape: NoteShape, windows: &JudgeWindows) -> Option<Judgment> {
    let remaining_ms = note.remaining_time() * 1000.0;
    let shape_matches = note.shape == shape;

    if remaining_ms > windows.start_ms {
        // A hold end was committed to by its start; letting go now drops it.
        if note.note_type == NoteType::HoldEnd && shape_matches {
            note.resolve(Judgment::Miss, false, remaining_ms);
            return Some(Judgment::Miss);
        }
        return None;
    }

    if note.note_type == NoteType::Double && !(note.double_tap.primary && note.double_tap.alternate) {
        let hold_transfer = (note.double_tap.primary && note.hold.alternate_held)
            || (note.double_tap.alternate && note.hold.primary_held);
        if !hold_transfer {
            return None;
        }
        note.double_tap.give_bonus = false;
    }

    let judgment = classify(remaining_ms, windows);
    note.resolve(judgment, !shape_matches, remaining_ms);
    Some(judgment)
}
