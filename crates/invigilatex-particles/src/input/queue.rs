/// Host signals the particle system reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The pointer moved to surface coordinates (x, y).
    PointerMove { x: f32, y: f32 },
    /// The pointer left the surface.
    PointerLeave,
    /// The viewport changed size, in px.
    Resize { width: u32, height: u32 },
}

impl InputEvent {
    /// Pointer moves and leaves both overwrite the same pointer state.
    fn same_kind(&self, other: &InputEvent) -> bool {
        matches!(
            (self, other),
            (InputEvent::Resize { .. }, InputEvent::Resize { .. })
                | (
                    InputEvent::PointerMove { .. } | InputEvent::PointerLeave,
                    InputEvent::PointerMove { .. } | InputEvent::PointerLeave
                )
        )
    }
}

/// A queue of input events.
/// DOM listeners push into the queue; the frame callback drains it before updating.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Queue `event`, dropping any pending event it supersedes. Only the latest
    /// pointer state and the latest size matter to the next frame, so the
    /// queue holds at most one of each however long it goes undrained.
    pub fn push(&mut self, event: InputEvent) {
        self.events.retain(|pending| !pending.same_kind(&event));
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
