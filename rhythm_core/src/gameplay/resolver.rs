use chart_schema::{NoteShape, NoteType};

use crate::config::JudgeWindows;
use crate::gameplay::judge::{evaluate, Judgment};
use crate::gameplay::note::NoteKey;
use crate::gameplay::notes::ActiveNotes;
use crate::input::ShapeInput;

/// Outcome of routing one shape's input to the active notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Nothing was tapped or released.
    Idle,
    /// No note could take the input.
    NoEligibleNote { tapped: bool },
    /// The oldest eligible note does not react to this kind of action.
    Ignored,
    /// The note saw the input but did not resolve (too early, half a double).
    Rejected { key: NoteKey, tapped: bool },
    Resolved { key: NoteKey, judgment: Judgment },
}

impl Resolution {
    /// Whether this outcome should play the miss-tap cue.
    pub fn is_miss_tap(&self) -> bool {
        matches!(
            self,
            Resolution::NoEligibleNote { tapped: true } | Resolution::Rejected { tapped: true, .. }
        )
    }
}

/// Hands `input` (for `shape`) to the oldest eligible note and judges it.
pub fn resolve(notes: &mut ActiveNotes, shape: NoteShape, input: ShapeInput, windows: &JudgeWindows) -> Resolution {
    let tapped = input.tapped();
    if !tapped && !input.released {
        return Resolution::Idle;
    }

    let Some(key) = notes.first_eligible() else {
        return Resolution::NoEligibleNote { tapped };
    };
    let Some(note) = notes.get_mut(key) else {
        return Resolution::NoEligibleNote { tapped };
    };

    match note.note_type {
        NoteType::Normal => {
            if !tapped {
                return Resolution::Ignored;
            }
        }
        NoteType::Double => {
            if !tapped {
                return Resolution::Ignored;
            }
            note.double_tap.primary |= input.primary_tapped;
            note.double_tap.alternate |= input.alternate_tapped;
            note.hold.primary_held = input.primary_down;
            note.hold.alternate_held = input.alternate_down;
        }
        NoteType::HoldStart => {
            if !tapped {
                return Resolution::Ignored;
            }
            note.hold.primary_held = input.primary_down;
            note.hold.alternate_held = input.alternate_down;
        }
        NoteType::HoldEnd => {
            if !input.released {
                return Resolution::Ignored;
            }
            note.hold.primary_held = input.primary_down;
            note.hold.alternate_held = input.alternate_down;
        }
    }

    match evaluate(note, shape, windows) {
        Some(judgment) => Resolution::Resolved { key, judgment },
        None => Resolution::Rejected { key, tapped },
    }
}
