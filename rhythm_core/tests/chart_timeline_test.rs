mod common;

use common::{chart_file, note, with_timeline};
use rhythm_core::chart::{NoteShape, NoteType, DEFAULT_FLIGHT_TIME};
use rhythm_core::gameplay::{ActiveNotes, NoteScheduler};
use rhythm_core::time::ClockTick;
use rhythm_core::{Chart, ChartError};

fn tick(song_time: f64, delta: f64) -> ClockTick {
    ClockTick { song_time, delta }
}

#[test]
fn test_flight_time_uses_latest_change() {
    let file = with_timeline(
        chart_file(vec![], 60.0),
        &[(10.0, 1.5), (0.0, 2.5), (20.0, 1.0)],
        &[],
    );
    let chart = Chart::from_file(&file).unwrap();

    assert_eq!(chart.flight_time(0.0), 2.5);
    assert_eq!(chart.flight_time(9.99), 2.5);
    assert_eq!(chart.flight_time(10.0), 1.5);
    assert_eq!(chart.flight_time(19.0), 1.5);
    assert_eq!(chart.flight_time(45.0), 1.0);
}

#[test]
fn test_flight_time_default_before_first_change() {
    let file = with_timeline(chart_file(vec![], 60.0), &[(5.0, 1.0)], &[]);
    let chart = Chart::from_file(&file).unwrap();

    assert_eq!(chart.flight_time(4.0), DEFAULT_FLIGHT_TIME);
    assert_eq!(DEFAULT_FLIGHT_TIME, 2.0);

    let empty = Chart::from_file(&chart_file(vec![], 60.0)).unwrap().with_default_flight_time(3.0);
    assert_eq!(empty.flight_time(30.0), 3.0);
}

#[test]
fn test_notes_are_sorted_and_holds_linked() {
    let file = chart_file(
        vec![
            note(3.0, NoteShape::Cross, NoteType::HoldEnd),
            note(1.0, NoteShape::Cross, NoteType::HoldStart),
            note(2.0, NoteShape::Circle, NoteType::Normal),
        ],
        10.0,
    );
    let chart = Chart::from_file(&file).unwrap();

    let times: Vec<f64> = chart.notes().iter().map(|n| n.appear_time).collect();
    assert_eq!(times, vec![1.0, 2.0, 3.0]);
    assert_eq!(chart.notes()[0].hold_end, Some(2));
}

#[test]
fn test_malformed_holds_are_rejected() {
    let unpaired = chart_file(vec![note(1.0, NoteShape::Square, NoteType::HoldStart)], 10.0);
    assert_eq!(
        Chart::from_file(&unpaired).unwrap_err(),
        ChartError::UnpairedHoldStart {
            index: 0,
            shape: NoteShape::Square
        }
    );

    let orphan = chart_file(
        vec![
            note(1.0, NoteShape::Square, NoteType::HoldStart),
            note(2.0, NoteShape::Circle, NoteType::HoldEnd),
        ],
        10.0,
    );
    assert!(matches!(
        Chart::from_file(&orphan),
        Err(ChartError::UnpairedHoldStart { .. })
    ));

    let stray_end = chart_file(vec![note(2.0, NoteShape::Circle, NoteType::HoldEnd)], 10.0);
    assert!(matches!(
        Chart::from_file(&stray_end),
        Err(ChartError::OrphanHoldEnd { index: 0, .. })
    ));
}

#[test]
fn test_invalid_timeline_entries_are_rejected() {
    let bad_flight = with_timeline(chart_file(vec![], 10.0), &[(1.0, 0.0)], &[]);
    assert!(matches!(
        Chart::from_file(&bad_flight),
        Err(ChartError::InvalidFlightTime { .. })
    ));

    let bad_chance = with_timeline(chart_file(vec![], 10.0), &[], &[(5.0, 4.0)]);
    assert!(matches!(
        Chart::from_file(&bad_chance),
        Err(ChartError::InvalidChanceTime { .. })
    ));

    let nan = chart_file(vec![note(f64::NAN, NoteShape::Circle, NoteType::Normal)], 10.0);
    assert_eq!(Chart::from_file(&nan).unwrap_err(), ChartError::NonFiniteTime { index: 0 });
}

#[test]
fn test_scheduler_spawns_all_due_notes_in_one_tick() {
    let file = chart_file(
        vec![
            note(1.0, NoteShape::Circle, NoteType::Normal),
            note(1.0, NoteShape::Cross, NoteType::Normal),
            note(1.0, NoteShape::Square, NoteType::Normal),
            note(4.0, NoteShape::Star, NoteType::Normal),
        ],
        10.0,
    );
    let chart = Chart::from_file(&file).unwrap();
    let mut scheduler = NoteScheduler::new();
    let mut notes = ActiveNotes::new();

    assert!(scheduler.spawn_due(&chart, tick(0.9375, 0.0625), &mut notes).is_empty());

    let spawned = scheduler.spawn_due(&chart, tick(1.0, 0.0625), &mut notes);
    assert_eq!(spawned.len(), 3);
    assert_eq!(scheduler.cursor(), 3);
    assert!(!scheduler.is_exhausted(&chart));

    // Never re-examines consumed notes.
    assert!(scheduler.spawn_due(&chart, tick(1.0625, 0.0625), &mut notes).is_empty());
    assert_eq!(notes.len(), 3);

    scheduler.spawn_due(&chart, tick(4.0, 0.0625), &mut notes);
    assert!(scheduler.is_exhausted(&chart));
}

#[test]
fn test_spawned_note_starts_at_frame_start() {
    let chart = Chart::from_file(&chart_file(vec![note(1.0, NoteShape::Circle, NoteType::Normal)], 10.0)).unwrap();
    let mut scheduler = NoteScheduler::new();
    let mut notes = ActiveNotes::new();

    // The note became due 0.5 s into a long frame.
    let spawned = scheduler.spawn_due(&chart, tick(1.5, 1.0), &mut notes);
    let note = notes.get(spawned[0]).unwrap();
    assert_eq!(note.elapsed(), -0.5);
    assert_eq!(note.fly_time(), 2.0);
}

#[test]
fn test_hold_start_spawns_pending_end() {
    let file = with_timeline(
        chart_file(
            vec![
                note(1.0, NoteShape::Triangle, NoteType::HoldStart),
                note(2.5, NoteShape::Triangle, NoteType::HoldEnd),
            ],
            10.0,
        ),
        &[(2.0, 1.5)],
        &[],
    );
    let chart = Chart::from_file(&file).unwrap();
    let mut scheduler = NoteScheduler::new();
    let mut notes = ActiveNotes::new();

    let spawned = scheduler.spawn_due(&chart, tick(1.0, 0.0), &mut notes);
    assert_eq!(spawned.len(), 2);

    let start = notes.get(spawned[0]).unwrap();
    let end = notes.get(spawned[1]).unwrap();
    assert_eq!(start.sibling, Some(spawned[1]));
    assert_eq!(end.sibling, Some(spawned[0]));
    assert_eq!(end.elapsed(), -1.5);
    assert!(end.is_pending());
    // Each note resolves its own flight time.
    assert_eq!(start.fly_time(), 2.0);
    assert_eq!(end.fly_time(), 1.5);

    // The end itself is skipped when the cursor reaches it.
    assert!(scheduler.spawn_due(&chart, tick(3.0, 0.0), &mut notes).is_empty());
    assert!(scheduler.is_exhausted(&chart));
}

#[test]
fn test_chance_time_flags_by_hit_instant() {
    let file = with_timeline(
        chart_file(
            vec![
                note(1.0, NoteShape::Circle, NoteType::Normal),
                note(5.0, NoteShape::Circle, NoteType::Normal),
            ],
            10.0,
        ),
        &[],
        &[(3.0, 4.0)],
    );
    let chart = Chart::from_file(&file).unwrap();
    let mut scheduler = NoteScheduler::new();
    let mut notes = ActiveNotes::new();

    let spawned = scheduler.spawn_due(&chart, tick(6.0, 0.0), &mut notes);
    // Hits at 3.0 (inside, inclusive) and 7.0 (outside).
    assert!(notes.get(spawned[0]).unwrap().chance_time);
    assert!(!notes.get(spawned[1]).unwrap().chance_time);
}
