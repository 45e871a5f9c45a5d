use chart_schema::NoteShape;

/// Each shape can be played on two physical bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Binding {
    Primary,
    Alternate,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputEvent {
    /// Song time when the event was polled
    pub timestamp: f64,
    pub shape: NoteShape,
    pub binding: Binding,
    pub pressed: bool,
}

impl InputEvent {
    pub fn press(timestamp: f64, shape: NoteShape, binding: Binding) -> Self {
        Self {
            timestamp,
            shape,
            binding,
            pressed: true,
        }
    }

    pub fn release(timestamp: f64, shape: NoteShape, binding: Binding) -> Self {
        Self {
            timestamp,
            shape,
            binding,
            pressed: false,
        }
    }
}
