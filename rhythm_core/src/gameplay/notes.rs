use std::collections::VecDeque;

use chart_schema::{NoteShape, NoteType};
use glam::Vec2;
use slotmap::SlotMap;

use crate::config::GameplayConfig;
use crate::gameplay::judge::Judgment;
use crate::gameplay::note::{GameNote, NoteKey};

/// Live notes in spawn order. Sibling links are [`NoteKey`]s into the same
/// arena, so removing a note never invalidates its partner.
#[derive(Debug, Default)]
pub struct ActiveNotes {
    arena: SlotMap<NoteKey, GameNote>,
    order: VecDeque<NoteKey>,
}

impl ActiveNotes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, note: GameNote) -> NoteKey {
        let key = self.arena.insert(note);
        self.order.push_back(key);
        key
    }

    /// Links a hold start with its end, in both directions.
    pub fn link(&mut self, start: NoteKey, end: NoteKey) {
        if let Some(note) = self.arena.get_mut(start) {
            note.sibling = Some(end);
        }
        if let Some(note) = self.arena.get_mut(end) {
            note.sibling = Some(start);
        }
    }

    pub fn get(&self, key: NoteKey) -> Option<&GameNote> {
        self.arena.get(key)
    }

    pub fn get_mut(&mut self, key: NoteKey) -> Option<&mut GameNote> {
        self.arena.get_mut(key)
    }

    pub fn contains(&self, key: NoteKey) -> bool {
        self.arena.contains_key(key)
    }

    /// Keys in spawn order.
    pub fn keys(&self) -> Vec<NoteKey> {
        self.order.iter().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NoteKey, &GameNote)> + '_ {
        self.order.iter().filter_map(|&key| self.arena.get(key).map(|note| (key, note)))
    }

    /// The oldest note that can still take input.
    pub fn first_eligible(&self) -> Option<NoteKey> {
        self.iter().find(|(_, note)| note.is_eligible()).map(|(key, _)| key)
    }

    /// Runs one note's state machine and applies whatever it asks of its partner.
    pub fn update_note(&mut self, key: NoteKey, delta: f64, config: &GameplayConfig) {
        let sibling_key = self.arena.get(key).and_then(|note| note.sibling);
        let sibling = sibling_key.and_then(|k| self.arena.get(k)).map(GameNote::sibling_state);

        let Some(note) = self.arena.get_mut(key) else {
            return;
        };
        let effect = note.update(delta, sibling, config);

        if let Some(partner) = sibling_key.and_then(|k| self.arena.get_mut(k)) {
            if effect.expire_sibling && !partner.has_been_hit && !partner.expired {
                partner.expire_silently();
            }
            if effect.remove_sibling {
                partner.should_be_removed = true;
            }
        }
    }

    /// Drops `key` if it is marked for removal. Returns the removed note.
    pub fn remove_if_marked(&mut self, key: NoteKey) -> Option<GameNote> {
        if !self.arena.get(key)?.should_be_removed {
            return None;
        }
        self.order.retain(|&k| k != key);
        self.arena.remove(key)
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.order.clear();
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Read-only snapshots of every note the renderer should draw this frame.
    pub fn views(&self) -> Vec<NoteView> {
        self.iter().filter_map(|(key, note)| self.view(key, note)).collect()
    }

    fn view(&self, key: NoteKey, note: &GameNote) -> Option<NoteView> {
        if note.expired || note.should_be_removed || note.is_pending() {
            return None;
        }
        if note.has_been_hit && note.note_type != NoteType::HoldStart {
            return None;
        }

        let sibling = note.sibling.and_then(|k| self.arena.get(k));
        if note.has_been_hit && sibling.is_some_and(|s| s.has_been_hit) {
            return None;
        }

        // A held start keeps its target up until the end comes into view.
        let show_target = !note.has_been_hit || sibling.is_some_and(GameNote::is_pending);

        Some(NoteView {
            key,
            shape: note.shape,
            note_type: note.note_type,
            position: note.position,
            target: note.target,
            progress: note.normalized_elapsed(),
            has_been_hit: note.has_been_hit,
            judgment: note.judgment,
            chance_time: note.chance_time,
            hold_bonus: note.hold.current_bonus,
            show_target,
            show_icon: !note.has_been_hit,
        })
    }
}

/// What the rendering collaborator needs to draw one note.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteView {
    pub key: NoteKey,
    pub shape: NoteShape,
    pub note_type: NoteType,
    pub position: Vec2,
    pub target: Vec2,
    pub progress: f64,
    pub has_been_hit: bool,
    pub judgment: Option<Judgment>,
    pub chance_time: bool,
    pub hold_bonus: u32,
    pub show_target: bool,
    pub show_icon: bool,
}
