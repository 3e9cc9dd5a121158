//! Input events and per-frame gamepad state.
//!
//! The host pushes raw key events into the queue; once per frame the
//! driver folds them into a `GamePad` exposing held state plus
//! edge-triggered presses.

/// Input event types the core understands.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// A key was pressed.
    KeyDown { key_code: u32 },
    /// A key was released.
    KeyUp { key_code: u32 },
}

/// A queue of input events; the host writes, the driver drains each frame.
#[derive(Default)]
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events, clearing the queue.
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

/// Button bitmasks.
pub mod buttons {
    pub const UP: u32 = 1 << 0;
    pub const DOWN: u32 = 1 << 1;
    pub const LEFT: u32 = 1 << 2;
    pub const RIGHT: u32 = 1 << 3;
    pub const FIRE: u32 = 1 << 4;
    pub const CONFIRM: u32 = 1 << 5;
}

/// Held and freshly-pressed button state for one frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct GamePad {
    held: u32,
    pressed: u32,
}

impl GamePad {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a frame's worth of events into the pad. `pressed` holds the
    /// buttons that went down this frame; `held` persists across frames.
    pub fn apply(&mut self, events: &[InputEvent]) {
        self.pressed = 0;
        for event in events {
            match *event {
                InputEvent::KeyDown { key_code } => {
                    if let Some(bit) = Self::button_for(key_code) {
                        if self.held & bit == 0 {
                            self.pressed |= bit;
                        }
                        self.held |= bit;
                    }
                }
                InputEvent::KeyUp { key_code } => {
                    if let Some(bit) = Self::button_for(key_code) {
                        self.held &= !bit;
                    }
                }
            }
        }
    }

    /// Arrow keys / WASD for movement, Space to fire, Enter to confirm.
    fn button_for(key_code: u32) -> Option<u32> {
        match key_code {
            38 | 87 => Some(buttons::UP),    // ArrowUp, W
            40 | 83 => Some(buttons::DOWN),  // ArrowDown, S
            37 | 65 => Some(buttons::LEFT),  // ArrowLeft, A
            39 | 68 => Some(buttons::RIGHT), // ArrowRight, D
            32 => Some(buttons::FIRE),       // Space
            13 => Some(buttons::CONFIRM),    // Enter
            _ => None,
        }
    }

    pub fn held(&self, button: u32) -> bool {
        self.held & button != 0
    }

    /// True only on the frame the button went down.
    pub fn pressed(&self, button: u32) -> bool {
        self.pressed & button != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_push_and_drain() {
        let mut q = InputQueue::new();
        q.push(InputEvent::KeyDown { key_code: 32 });
        q.push(InputEvent::KeyUp { key_code: 32 });
        assert_eq!(q.len(), 2);
        assert_eq!(q.drain().len(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn press_is_edge_triggered() {
        let mut pad = GamePad::new();
        pad.apply(&[InputEvent::KeyDown { key_code: 32 }]);
        assert!(pad.held(buttons::FIRE));
        assert!(pad.pressed(buttons::FIRE));

        // Next frame with no events: still held, no longer "pressed".
        pad.apply(&[]);
        assert!(pad.held(buttons::FIRE));
        assert!(!pad.pressed(buttons::FIRE));
    }

    #[test]
    fn release_clears_held() {
        let mut pad = GamePad::new();
        pad.apply(&[InputEvent::KeyDown { key_code: 38 }]);
        pad.apply(&[InputEvent::KeyUp { key_code: 38 }]);
        assert!(!pad.held(buttons::UP));
    }

    #[test]
    fn repeat_key_down_is_not_a_new_press() {
        let mut pad = GamePad::new();
        pad.apply(&[InputEvent::KeyDown { key_code: 13 }]);
        pad.apply(&[InputEvent::KeyDown { key_code: 13 }]);
        assert!(pad.held(buttons::CONFIRM));
        assert!(!pad.pressed(buttons::CONFIRM));
    }

    #[test]
    fn wasd_maps_to_directions() {
        let mut pad = GamePad::new();
        pad.apply(&[
            InputEvent::KeyDown { key_code: 87 },
            InputEvent::KeyDown { key_code: 68 },
        ]);
        assert!(pad.held(buttons::UP));
        assert!(pad.held(buttons::RIGHT));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut pad = GamePad::new();
        pad.apply(&[InputEvent::KeyDown { key_code: 999 }]);
        assert!(!pad.held(buttons::UP | buttons::DOWN | buttons::FIRE));
    }
}
