use serde::{Deserialize, Serialize};

/// Single-line editable text with a cursor counted in chars
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InputBuffer {
    value: String,
    cursor: usize,
}

impl InputBuffer {
    /// Create a buffer with the cursor placed after the last char
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    /// Create a buffer from raw parts, clamping the cursor into range
    pub fn with_cursor(value: impl Into<String>, cursor: usize) -> Self {
        let value = value.into();
        let cursor = cursor.min(value.chars().count());
        Self { value, cursor }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Text before the cursor, used to place the terminal cursor
    pub fn before_cursor(&self) -> &str {
        let end = self
            .value
            .char_indices()
            .nth(self.cursor)
            .map_or(self.value.len(), |(i, _)| i);
        &self.value[..end]
    }

    /// Insert text at the cursor and move the cursor past it
    pub fn insert_str(&mut self, text: &str) {
        let at = self.before_cursor().len();
        self.value.insert_str(at, text);
        self.cursor += text.chars().count();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_places_cursor_at_end() {
        let buf = InputBuffer::new("héllo");
        assert_eq!(buf.cursor(), 5);
        assert_eq!(buf.char_len(), 5);
        assert_eq!(buf.before_cursor(), "héllo");
    }

    #[test]
    fn test_with_cursor_clamps() {
        let buf = InputBuffer::with_cursor("abc", 10);
        assert_eq!(buf.cursor(), 3);
    }

    #[test]
    fn test_insert_str_in_the_middle() {
        let mut buf = InputBuffer::with_cursor("aé", 1);
        buf.insert_str("XY");
        assert_eq!(buf.value(), "aXYé");
        assert_eq!(buf.cursor(), 3);
        assert_eq!(buf.before_cursor(), "aXY");
    }
}
