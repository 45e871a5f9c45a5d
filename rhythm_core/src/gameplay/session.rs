use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use chart_schema::{NoteShape, NoteType, PlayResult};
use log::{debug, info};

use crate::audio::{PlaybackClock, SoundCue};
use crate::chart::Chart;
use crate::config::GameplayConfig;
use crate::gameplay::events::{GameEvent, JudgmentEvent};
use crate::gameplay::judge::Judgment;
use crate::gameplay::note::NoteKey;
use crate::gameplay::notes::{ActiveNotes, NoteView};
use crate::gameplay::resolver::{resolve, Resolution};
use crate::gameplay::scheduler::NoteScheduler;
use crate::gameplay::score::ScoreState;
use crate::input::InputFrame;
use crate::time::{ClockTick, Conductor};

/// Services a session borrows from the host instead of reaching for globals.
#[derive(Clone, Default)]
pub struct SessionContext {
    pub playback: Option<Arc<dyn PlaybackClock + Send + Sync>>,
}

impl SessionContext {
    /// No music voice; song time follows frame deltas.
    pub fn headless() -> Self {
        Self::default()
    }

    pub fn with_playback(playback: Arc<dyn PlaybackClock + Send + Sync>) -> Self {
        Self {
            playback: Some(playback),
        }
    }
}

/// One play-through of a chart.
pub struct PlaySession {
    chart: Chart,
    config: GameplayConfig,
    context: SessionContext,

    conductor: Conductor,
    scheduler: NoteScheduler,
    notes: ActiveNotes,
    score: ScoreState,
    finished: bool,
}

impl PlaySession {
    pub fn new(chart: Chart, config: GameplayConfig, context: SessionContext) -> Self {
        let chart = chart.with_default_flight_time(config.default_flight_time_s);
        let conductor = Conductor::new(config.sample_rate);
        info!("session start: '{}' ({} notes, {:.1}s)", chart.title(), chart.len(), chart.duration());

        Self {
            chart,
            config,
            context,
            conductor,
            scheduler: NoteScheduler::new(),
            notes: ActiveNotes::new(),
            score: ScoreState::new(),
            finished: false,
        }
    }

    /// Runs one frame: clock, spawns, note state machines, then input in shape order.
    pub fn update(&mut self, delta_ms: f64, input: &InputFrame) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.finished {
            return events;
        }
        if self.conductor.song_time() >= self.chart.duration() {
            self.finished = true;
            info!(
                "session finished: '{}' score {} max combo {}",
                self.chart.title(),
                self.score.score,
                self.score.max_combo
            );
            events.push(GameEvent::Finished);
            return events;
        }
        if self.conductor.is_paused() {
            return events;
        }

        let playback = self.context.playback.as_deref().map(|p| p as &dyn PlaybackClock);
        let tick = self.conductor.advance(delta_ms, playback);

        self.scheduler.spawn_due(&self.chart, tick, &mut self.notes);
        self.update_notes(tick, &mut events);

        for shape in NoteShape::ALL {
            self.handle_input(shape, input, tick, &mut events);
        }
        events
    }

    fn update_notes(&mut self, tick: ClockTick, events: &mut Vec<GameEvent>) {
        for key in self.notes.keys() {
            self.expire_note(key, events);
            if self.notes.remove_if_marked(key).is_some() {
                continue;
            }
            self.notes.update_note(key, tick.delta, &self.config);
        }
    }

    fn expire_note(&mut self, key: NoteKey, events: &mut Vec<GameEvent>) {
        let Some(note) = self.notes.get_mut(key) else {
            return;
        };
        if !note.expiring || note.expired || note.has_been_hit {
            return;
        }
        note.expired = true;

        let (shape, note_type, position, sibling) = (note.shape, note.note_type, note.target, note.sibling);
        debug!("expired {shape:?} {note_type:?}");
        self.score.expire();
        events.push(GameEvent::Expired {
            shape,
            note_type,
            position,
        });

        // The end of a hold ran out while still held: the bonus is lost.
        if note_type == NoteType::HoldEnd {
            if let Some(start) = sibling.and_then(|k| self.notes.get_mut(k)) {
                let value = std::mem::take(&mut start.hold.current_bonus);
                events.push(GameEvent::HoldBonusReleased { value, dropped: true });
            }
        }
    }

    fn handle_input(&mut self, shape: NoteShape, input: &InputFrame, tick: ClockTick, events: &mut Vec<GameEvent>) {
        let resolution = resolve(&mut self.notes, shape, input.get(shape), &self.config.windows);
        if resolution.is_miss_tap() {
            events.push(GameEvent::Cue(SoundCue::miss_tap(shape)));
        }
        if let Resolution::Resolved { key, judgment } = resolution {
            self.apply_judgment(key, shape, judgment, tick, events);
        }
    }

    /// Scores a resolved note. A hold start earns its tier score on the press
    /// and opens bonus accrual; the bonus itself is banked only by a clean end.
    fn apply_judgment(
        &mut self,
        key: NoteKey,
        struck: NoteShape,
        judgment: Judgment,
        tick: ClockTick,
        events: &mut Vec<GameEvent>,
    ) {
        let Some(note) = self.notes.get(key) else {
            return;
        };
        let wrong = note.hit_wrong;
        let clean = judgment.keeps_combo() && !wrong;
        let (shape, note_type, position, sibling) = (note.shape, note.note_type, note.target, note.sibling);
        let give_bonus = note.double_tap.give_bonus;
        let offset_ms = note.remaining_on_hit().unwrap_or_default();

        let awarded = self.score.apply(judgment, wrong, &self.config.scores);
        debug!(
            "{:?} {:?} -> {} ({offset_ms:.1}ms){} combo {}",
            shape,
            note_type,
            judgment.name(),
            if wrong { " wrong" } else { "" },
            self.score.combo
        );
        events.push(GameEvent::Judged(JudgmentEvent {
            shape,
            struck,
            note_type,
            judgment,
            wrong,
            combo: self.score.combo,
            awarded,
            position,
            song_time: tick.song_time,
            offset_ms,
        }));

        let cue = match note_type {
            NoteType::Normal => SoundCue::hit(struck),
            NoteType::Double => {
                if clean && give_bonus {
                    let value = self.config.double_bonus;
                    self.score.add_bonus(value);
                    events.push(GameEvent::ScoreBonus { value, position });
                }
                SoundCue::double(struck)
            }
            NoteType::HoldStart => {
                events.push(GameEvent::HoldBonusStarted { position });
                SoundCue::hold_loop(struck)
            }
            NoteType::HoldEnd => {
                if let Some(start) = sibling.and_then(|k| self.notes.get_mut(k)) {
                    let value = std::mem::take(&mut start.hold.current_bonus);
                    if clean {
                        self.score.add_bonus(value);
                    }
                    events.push(GameEvent::HoldBonusReleased { value, dropped: !clean });
                }
                SoundCue::hold_loop_end(struck)
            }
        };
        events.push(GameEvent::Cue(cue));
    }

    pub fn set_paused(&mut self, paused: bool) -> GameEvent {
        self.conductor.set_paused(paused);
        if let Some(playback) = &self.context.playback {
            playback.set_playing(!paused);
        }
        info!("{}", if paused { "paused" } else { "resumed" });
        GameEvent::PauseChanged(paused)
    }

    pub fn toggle_pause(&mut self) -> GameEvent {
        self.set_paused(!self.conductor.is_paused())
    }

    pub fn is_paused(&self) -> bool {
        self.conductor.is_paused()
    }

    /// Starts the chart over (retry).
    pub fn reset(&mut self) {
        self.conductor.reset();
        self.scheduler.reset();
        self.notes.clear();
        self.score.reset();
        self.finished = false;
        // The conductor comes back unpaused; the music voice follows it.
        if let Some(playback) = &self.context.playback {
            playback.rewind();
            playback.set_playing(true);
        }
        info!("session reset: '{}'", self.chart.title());
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn note_views(&self) -> Vec<NoteView> {
        self.notes.views()
    }

    pub fn notes(&self) -> &ActiveNotes {
        &self.notes
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    pub fn song_time(&self) -> f64 {
        self.conductor.song_time()
    }

    pub fn chart(&self) -> &Chart {
        &self.chart
    }

    pub fn config(&self) -> &GameplayConfig {
        &self.config
    }

    pub fn result(&self) -> PlayResult {
        let finished_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        self.score.to_result(self.chart.title(), finished_at)
    }
}
