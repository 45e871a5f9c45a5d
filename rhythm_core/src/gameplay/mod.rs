pub mod events;
pub mod judge;
pub mod motion;
pub mod note;
pub mod notes;
pub mod resolver;
pub mod scheduler;
pub mod score;
pub mod session;

pub use events::{GameEvent, JudgmentEvent};
pub use judge::Judgment;
pub use note::{GameNote, NoteKey};
pub use notes::{ActiveNotes, NoteView};
pub use scheduler::NoteScheduler;
pub use score::ScoreState;
