pub mod events;
pub mod tracker;

pub use self::events::{Binding, InputEvent};
pub use self::tracker::{InputFrame, InputTracker, ShapeInput};

use crossbeam_channel::{unbounded, Receiver, Sender};

/// Key edges handed from the device thread to the game loop.
pub struct InputQueue {
    sender: Sender<InputEvent>,
    receiver: Receiver<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self { sender, receiver }
    }

    /// Safe from any thread holding a reference to the queue.
    pub fn push(&self, event: InputEvent) {
        let _ = self.sender.send(event);
    }

    /// Oldest queued edge, without blocking.
    pub fn pop(&self) -> Option<InputEvent> {
        self.receiver.try_recv().ok()
    }

    /// Everything queued so far, oldest first.
    pub fn drain(&self) -> Vec<InputEvent> {
        self.receiver.try_iter().collect()
    }

    /// A producer handle for a keyboard or gamepad polling thread.
    pub fn sender(&self) -> Sender<InputEvent> {
        self.sender.clone()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
