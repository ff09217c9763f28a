use chrono::NaiveDate;

/// Length of an ISO calendar date, `YYYY-MM-DD`
pub const ISO_DATE_LEN: usize = 10;

const ISO_FORMAT: &str = "%Y-%m-%d";

// Tried in order when reading a displayed date.
const DISPLAY_FORMATS: &[&str] = &[
    ISO_FORMAT,
    "%b. %d, %Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%m/%d/%Y",
    "%d %B %Y",
];

/// Normalize a displayed date into `YYYY-MM-DD`.
///
/// Returns `None` when the text is blank or not a recognizable date.
pub fn to_iso_date(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    DISPLAY_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .map(|date| date.format(ISO_FORMAT).to_string())
}

/// Chars a date input will take from the keyboard
pub fn is_date_char(c: char) -> bool {
    c.is_ascii_digit() || c == '-'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_iso_date_accepts_display_formats() {
        assert_eq!(to_iso_date("1815-12-10").as_deref(), Some("1815-12-10"));
        assert_eq!(to_iso_date("Dec. 10, 1815").as_deref(), Some("1815-12-10"));
        assert_eq!(to_iso_date("December 10, 1815").as_deref(), Some("1815-12-10"));
        assert_eq!(to_iso_date("12/10/1815").as_deref(), Some("1815-12-10"));
        assert_eq!(to_iso_date("  1990-03-04 ").as_deref(), Some("1990-03-04"));
    }

    #[test]
    fn test_to_iso_date_rejects_garbage() {
        assert_eq!(to_iso_date(""), None);
        assert_eq!(to_iso_date("   "), None);
        assert_eq!(to_iso_date("someday"), None);
        assert_eq!(to_iso_date("1815-13-40"), None);
    }

    #[test]
    fn test_is_date_char() {
        assert!(is_date_char('0'));
        assert!(is_date_char('-'));
        assert!(!is_date_char('a'));
        assert!(!is_date_char('/'));
    }
}
