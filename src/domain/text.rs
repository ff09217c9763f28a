use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

/// Cut `s` so that it occupies at most `width` terminal columns, marking the
/// cut with an ellipsis.
pub fn fit_width(s: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    if s.width() <= width {
        return s.to_string();
    }

    let mut result = String::with_capacity(s.len());
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        result.push(c);
        used += w;
    }
    result.push(ELLIPSIS);
    result
}

/// Horizontal scroll for a single-line input `width` columns wide, given
/// the text before the cursor. Returns how many leading chars to hide and
/// the cursor column within the visible window. The cursor always gets a
/// cell of its own.
pub fn scroll_to_cursor(before_cursor: &str, width: usize) -> (usize, usize) {
    let mut column = before_cursor.width();
    let mut hidden = 0;
    let mut chars = before_cursor.chars();
    while column >= width {
        let Some(c) = chars.next() else {
            break;
        };
        column -= c.width().unwrap_or(0);
        hidden += 1;
    }
    (hidden, column)
}

/// Terminal columns taken by `s`
pub fn display_width(s: &str) -> usize {
    s.width()
}
