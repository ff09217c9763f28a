use strum::Display;
use thiserror::Error;

/// Which representation a transition expected to find on a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Expected {
    #[strum(serialize = "read-only value")]
    ReadOnly,
    #[strum(serialize = "input")]
    Input,
}

/// Per-field failures during a mode transition. The transition skips the
/// field and carries on with the rest.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("field `{label}` has no {expected} element")]
    MissingElement { label: String, expected: Expected },

    #[error("input for field `{label}` has neither a tag nor an id")]
    Untagged { label: String },
}

/// Errors raised while building kind rules from configuration
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("kind rule needs either `contains` or `matches`")]
    MissingPredicate,

    #[error("kind rule sets both `contains` and `matches`")]
    AmbiguousPredicate,

    #[error("invalid label pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
