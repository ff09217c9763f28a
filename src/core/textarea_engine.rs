use crossterm::event::KeyEvent;

use crate::domain::input::InputBuffer;

/// Engine interface that applies a sequence of key events to an input
/// snapshot and returns the resulting snapshot. Implementations must be
/// deterministic and free of side effects so they can run inside `update`.
pub trait TextAreaEngine {
    fn apply_keys(&self, snapshot: &InputBuffer, keys: &[KeyEvent]) -> InputBuffer;
}

/// Engine that leaves every snapshot untouched
pub struct NoopTextAreaEngine;

impl TextAreaEngine for NoopTextAreaEngine {
    fn apply_keys(&self, snapshot: &InputBuffer, _keys: &[KeyEvent]) -> InputBuffer {
        snapshot.clone()
    }
}
