use chart_schema::{NoteShape, NoteType};
use glam::Vec2;
use slotmap::new_key_type;

use crate::chart::{ChartNote, MotionParams};
use crate::config::GameplayConfig;
use crate::gameplay::judge::Judgment;
use crate::gameplay::motion::sine_point;

new_key_type! {
    /// Handle of a live note inside [`ActiveNotes`](crate::gameplay::ActiveNotes).
    pub struct NoteKey;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoubleTapState {
    pub primary: bool,
    pub alternate: bool,
    pub give_bonus: bool,
}

impl Default for DoubleTapState {
    fn default() -> Self {
        Self {
            primary: false,
            alternate: false,
            give_bonus: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HoldState {
    pub primary_held: bool,
    pub alternate_held: bool,
    /// Accrued bonus steps since the hold was hit.
    pub bonus_ticks: f64,
    pub current_bonus: u32,
}

impl HoldState {
    pub fn is_held(&self) -> bool {
        self.primary_held || self.alternate_held
    }
}

/// What a note's update needs to know about its hold partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiblingState {
    pub has_been_hit: bool,
    pub expiring: bool,
    pub should_be_removed: bool,
}

/// Changes a hold start pushes onto its partner this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PairEffect {
    pub expire_sibling: bool,
    pub remove_sibling: bool,
}

#[derive(Debug, Clone)]
pub struct GameNote {
    pub chart_index: usize,
    pub shape: NoteShape,
    pub note_type: NoteType,
    pub target: Vec2,
    pub motion: MotionParams,
    pub position: Vec2,
    pub chance_time: bool,

    fly_time: f64,
    elapsed: f64,
    remaining_on_hit: Option<f64>,

    pub expiring: bool,
    pub expired: bool,
    pub should_be_removed: bool,

    pub judgment: Option<Judgment>,
    pub has_been_hit: bool,
    pub hit_wrong: bool,

    pub double_tap: DoubleTapState,
    pub hold: HoldState,

    /// Hold partner, in both directions.
    pub sibling: Option<NoteKey>,
}

impl GameNote {
    /// `elapsed` is negative for notes that exist before they are live.
    pub fn spawn(chart_note: &ChartNote, chart_index: usize, fly_time: f64, elapsed: f64) -> Self {
        Self {
            chart_index,
            shape: chart_note.shape,
            note_type: chart_note.note_type,
            target: chart_note.target,
            motion: chart_note.motion,
            position: Vec2::INFINITY,
            chance_time: false,
            fly_time,
            elapsed,
            remaining_on_hit: None,
            expiring: false,
            expired: false,
            should_be_removed: false,
            judgment: None,
            has_been_hit: false,
            hit_wrong: false,
            double_tap: DoubleTapState::default(),
            hold: HoldState::default(),
            sibling: None,
        }
    }

    pub fn fly_time(&self) -> f64 {
        self.fly_time
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Seconds until the hit instant; negative once it has passed.
    pub fn remaining_time(&self) -> f64 {
        self.fly_time - self.elapsed
    }

    pub fn normalized_elapsed(&self) -> f64 {
        self.elapsed / self.fly_time
    }

    pub fn normalized_remaining(&self) -> f64 {
        1.0 - self.normalized_elapsed()
    }

    /// Remaining time in ms at the moment the note was judged.
    pub fn remaining_on_hit(&self) -> Option<f64> {
        self.remaining_on_hit
    }

    pub fn is_pending(&self) -> bool {
        self.elapsed < 0.0
    }

    /// Can this note still receive input?
    pub fn is_eligible(&self) -> bool {
        !self.has_been_hit && !self.expired && !self.expiring && !self.should_be_removed
    }

    pub fn sibling_state(&self) -> SiblingState {
        SiblingState {
            has_been_hit: self.has_been_hit,
            expiring: self.expiring,
            should_be_removed: self.should_be_removed,
        }
    }

    pub(crate) fn resolve(&mut self, judgment: Judgment, wrong: bool, remaining_ms: f64) {
        self.judgment = Some(judgment);
        self.has_been_hit = true;
        self.hit_wrong = wrong;
        self.remaining_on_hit = Some(remaining_ms);
    }

    /// Expired together with its hold start, never having been live.
    pub(crate) fn expire_silently(&mut self) {
        self.expiring = true;
        self.expired = true;
    }

    /// Advances the note by `delta` seconds. `sibling` is the partner's state
    /// before this frame's update; hold starts report what must happen to it.
    pub fn update(&mut self, delta: f64, sibling: Option<SiblingState>, config: &GameplayConfig) -> PairEffect {
        self.elapsed += delta;

        let mut effect = PairEffect::default();
        if self.should_be_removed {
            return effect;
        }

        let pair = sibling.filter(|_| self.note_type == NoteType::HoldStart);

        if self.remaining_time() * 1000.0 < config.windows.miss_ms && !self.has_been_hit {
            self.expiring = true;
            effect.expire_sibling = pair.is_some();
        }

        if self.remaining_time() <= -config.remove_after_s {
            match pair {
                Some(_) if self.expiring => {
                    self.should_be_removed = true;
                    effect.remove_sibling = true;
                }
                // The hold end decides when the pair goes.
                Some(partner) => self.should_be_removed = partner.should_be_removed,
                None => self.should_be_removed = true,
            }
        }

        self.position = sine_point(self.normalized_remaining() as f32, self.target, &self.motion);

        if self.expired || self.expiring || self.should_be_removed {
            return effect;
        }

        if let Some(partner) = pair {
            if self.has_been_hit && self.hold.is_held() && !partner.has_been_hit && !partner.expiring {
                self.accrue_hold_bonus(delta, config);
            }
        }
        effect
    }

    fn accrue_hold_bonus(&mut self, delta: f64, config: &GameplayConfig) {
        let bonus = &config.hold_bonus;
        let multiplier = bonus.multiplier(self.judgment, self.hit_wrong);

        self.hold.bonus_ticks += delta * 1000.0 / bonus.tick_ms;
        self.hold.current_bonus = multiplier + self.hold.bonus_ticks.floor() as u32 * multiplier + bonus.base;
    }
}
