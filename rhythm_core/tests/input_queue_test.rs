use rhythm_core::chart::NoteShape;
use rhythm_core::input::{Binding, InputEvent, InputQueue, InputTracker};
use std::thread;

#[test]
fn test_input_queue_transmission() {
    let queue = InputQueue::new();
    let sender = queue.sender();

    // Spawn a producer thread
    let handle = thread::spawn(move || {
        sender
            .send(InputEvent::press(1.0, NoteShape::Circle, Binding::Primary))
            .unwrap();
        sender
            .send(InputEvent::release(1.5, NoteShape::Circle, Binding::Primary))
            .unwrap();
    });

    handle.join().unwrap();

    let received1 = queue.pop().expect("Should receive first event");
    assert_eq!(received1.timestamp, 1.0);
    assert_eq!(received1.shape, NoteShape::Circle);
    assert!(received1.pressed);

    let received2 = queue.pop().expect("Should receive second event");
    assert_eq!(received2.timestamp, 1.5);
    assert!(!received2.pressed);

    // Queue should be empty now
    assert!(queue.pop().is_none());
}

#[test]
fn test_input_queue_drain_keeps_order() {
    let queue = InputQueue::new();

    queue.push(InputEvent::press(10.0, NoteShape::Star, Binding::Alternate));
    queue.push(InputEvent::release(11.0, NoteShape::Star, Binding::Alternate));

    let events = queue.drain();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].timestamp, 10.0);
    assert_eq!(events[1].timestamp, 11.0);
    assert!(queue.drain().is_empty());
}

#[test]
fn test_tracker_reports_edges_once() {
    let mut tracker = InputTracker::new();

    let frame = tracker.frame([InputEvent::press(0.0, NoteShape::Cross, Binding::Primary)]);
    let cross = frame.get(NoteShape::Cross);
    assert!(cross.primary_tapped);
    assert!(cross.primary_down);
    assert!(!cross.alternate_tapped);
    assert!(frame.get(NoteShape::Circle).is_idle());

    // Still held, no new edge.
    let frame = tracker.frame(Vec::<InputEvent>::new());
    let cross = frame.get(NoteShape::Cross);
    assert!(!cross.tapped());
    assert!(cross.primary_down);
    assert!(tracker.is_down(NoteShape::Cross, Binding::Primary));

    let frame = tracker.frame([InputEvent::release(0.5, NoteShape::Cross, Binding::Primary)]);
    let cross = frame.get(NoteShape::Cross);
    assert!(cross.released);
    assert!(!cross.primary_down);
}

#[test]
fn test_tracker_tap_and_release_in_one_frame() {
    let mut tracker = InputTracker::new();

    let frame = tracker.frame([
        InputEvent::press(0.0, NoteShape::Square, Binding::Alternate),
        InputEvent::release(0.01, NoteShape::Square, Binding::Alternate),
    ]);
    let square = frame.get(NoteShape::Square);
    assert!(square.alternate_tapped);
    assert!(square.released);
    assert!(!square.alternate_down);
}

#[test]
fn test_tracker_ignores_repeat_presses() {
    let mut tracker = InputTracker::new();
    tracker.frame([InputEvent::press(0.0, NoteShape::Triangle, Binding::Primary)]);

    // Key repeat while held is not a new tap.
    let frame = tracker.frame([InputEvent::press(0.1, NoteShape::Triangle, Binding::Primary)]);
    assert!(!frame.get(NoteShape::Triangle).tapped());

    tracker.reset();
    assert!(!tracker.is_down(NoteShape::Triangle, Binding::Primary));
}
