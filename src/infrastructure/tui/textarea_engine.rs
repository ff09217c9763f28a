use crossterm::event::{Event, KeyEvent};
use tui_textarea::{CursorMove, TextArea};

use crate::core::textarea_engine::TextAreaEngine;
use crate::domain::input::InputBuffer;

/// Production engine based on tui-textarea. A throwaway single-line TextArea
/// is hydrated from the snapshot, fed the keys, and read back.
pub struct TuiTextAreaEngine;

impl TuiTextAreaEngine {
    fn hydrate(snapshot: &InputBuffer) -> TextArea<'static> {
        let mut textarea = TextArea::new(vec![snapshot.value().to_string()]);
        let cursor = snapshot.cursor();
        match u16::try_from(cursor) {
            Ok(col) => textarea.move_cursor(CursorMove::Jump(0, col)),
            Err(_) if cursor == snapshot.char_len() => textarea.move_cursor(CursorMove::End),
            // Jump only addresses u16 columns; walk the rest one char at a time.
            Err(_) => {
                textarea.move_cursor(CursorMove::Jump(0, u16::MAX));
                for _ in usize::from(u16::MAX)..cursor {
                    textarea.move_cursor(CursorMove::Forward);
                }
            }
        }
        textarea
    }

    fn extract(textarea: &TextArea<'_>) -> InputBuffer {
        let lines = textarea.lines();
        let (row, col) = textarea.cursor();
        // A stray newline splits the line; fold it back into one value.
        let cursor = lines
            .iter()
            .take(row)
            .map(|line| line.chars().count())
            .sum::<usize>()
            + col;
        InputBuffer::with_cursor(lines.concat(), cursor)
    }
}

impl TextAreaEngine for TuiTextAreaEngine {
    fn apply_keys(&self, snapshot: &InputBuffer, keys: &[KeyEvent]) -> InputBuffer {
        let mut textarea = Self::hydrate(snapshot);
        for key in keys {
            textarea.input(Event::Key(*key));
        }
        Self::extract(&textarea)
    }
}
