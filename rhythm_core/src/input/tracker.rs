use chart_schema::NoteShape;

use super::events::{Binding, InputEvent};

/// Per-frame signals of one shape across both bindings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShapeInput {
    pub primary_tapped: bool,
    pub alternate_tapped: bool,
    pub primary_down: bool,
    pub alternate_down: bool,
    pub released: bool,
}

impl ShapeInput {
    pub fn tapped(&self) -> bool {
        self.primary_tapped || self.alternate_tapped
    }

    pub fn is_idle(&self) -> bool {
        !self.tapped() && !self.released
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputFrame {
    shapes: [ShapeInput; 5],
}

impl InputFrame {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn get(&self, shape: NoteShape) -> ShapeInput {
        self.shapes[slot(shape)]
    }

    pub fn set(&mut self, shape: NoteShape, input: ShapeInput) {
        self.shapes[slot(shape)] = input;
    }

    pub fn with(mut self, shape: NoteShape, input: ShapeInput) -> Self {
        self.set(shape, input);
        self
    }
}

/// Turns press/release edges into per-frame signals and remembers what is held.
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    held: [[bool; 2]; 5],
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame<I>(&mut self, events: I) -> InputFrame
    where
        I: IntoIterator<Item = InputEvent>,
    {
        let mut frame = InputFrame::default();

        for event in events {
            let shape = slot(event.shape);
            let binding = binding_slot(event.binding);
            let held = &mut self.held[shape][binding];
            let input = &mut frame.shapes[shape];

            if event.pressed {
                if !*held {
                    match event.binding {
                        Binding::Primary => input.primary_tapped = true,
                        Binding::Alternate => input.alternate_tapped = true,
                    }
                }
                *held = true;
            } else {
                if *held {
                    input.released = true;
                }
                *held = false;
            }
        }

        for (input, held) in frame.shapes.iter_mut().zip(self.held.iter()) {
            input.primary_down = held[0];
            input.alternate_down = held[1];
        }
        frame
    }

    pub fn is_down(&self, shape: NoteShape, binding: Binding) -> bool {
        self.held[slot(shape)][binding_slot(binding)]
    }

    pub fn reset(&mut self) {
        self.held = [[false; 2]; 5];
    }
}

fn slot(shape: NoteShape) -> usize {
    match shape {
        NoteShape::Circle => 0,
        NoteShape::Cross => 1,
        NoteShape::Square => 2,
        NoteShape::Triangle => 3,
        NoteShape::Star => 4,
    }
}

fn binding_slot(binding: Binding) -> usize {
    match binding {
        Binding::Primary => 0,
        Binding::Alternate => 1,
    }
}
