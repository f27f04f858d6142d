/// Pointer button identity, mapped from the host's numeric button codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Auxiliary,
    Secondary,
    Other(u32),
}

impl PointerButton {
    /// Map a DOM-style button code (0/1/2) to a button identity.
    pub fn from_code(code: u32) -> Self {
        match code {
            0 => Self::Primary,
            1 => Self::Auxiliary,
            2 => Self::Secondary,
            n => Self::Other(n),
        }
    }
}

/// Input event types the engine understands.
/// Generic — no visualization-specific semantics.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// A pointer button was pressed at viewport coordinates (x, y).
    PointerDown { button: PointerButton, x: f32, y: f32 },
    /// A pointer button was released at viewport coordinates (x, y).
    PointerUp { button: PointerButton, x: f32, y: f32 },
    /// The pointer moved to viewport coordinates (x, y).
    PointerMove { x: f32, y: f32 },
    /// A key was pressed.
    KeyDown { key_code: u32 },
    /// A key was released.
    KeyUp { key_code: u32 },
}

/// A queue of input events.
/// The host shell writes events in; the game reads them each frame and the
/// runner drains them after the update.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called by the host between ticks).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    /// Check if there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
