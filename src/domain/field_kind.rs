use derive_deref::Deref;
use regex::Regex;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::domain::{
    date::{is_date_char, ISO_DATE_LEN},
    error::RuleError,
};

/// Kind of input a field gets in edit mode
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum InputKind {
    #[default]
    Text,
    Date,
}

impl InputKind {
    /// Hint shown in an empty input
    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            InputKind::Text => None,
            InputKind::Date => Some("YYYY-MM-DD"),
        }
    }

    /// Whether a typed char may enter an input of this kind
    pub fn accepts(self, c: char) -> bool {
        match self {
            InputKind::Text => !c.is_control(),
            InputKind::Date => is_date_char(c),
        }
    }

    pub fn max_len(self) -> Option<usize> {
        match self {
            InputKind::Text => None,
            InputKind::Date => Some(ISO_DATE_LEN),
        }
    }
}

/// Predicate over a field label
#[derive(Debug, Clone)]
pub enum LabelMatcher {
    /// Case-insensitive substring; the needle is stored lowercased
    Contains(String),
    Pattern(Regex),
}

impl LabelMatcher {
    pub fn contains(needle: &str) -> Self {
        LabelMatcher::Contains(needle.to_lowercase())
    }

    pub fn pattern(pattern: &str) -> Result<Self, RuleError> {
        Regex::new(pattern)
            .map(LabelMatcher::Pattern)
            .map_err(|source| RuleError::InvalidPattern {
                pattern: pattern.to_owned(),
                source,
            })
    }

    pub fn is_match(&self, label: &str) -> bool {
        match self {
            LabelMatcher::Contains(needle) => label.to_lowercase().contains(needle.as_str()),
            LabelMatcher::Pattern(re) => re.is_match(label),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawKindRule {
    #[serde(default)]
    contains: Option<String>,
    #[serde(default)]
    matches: Option<String>,
    kind: InputKind,
}

/// One `{predicate, kind}` entry of the classification table
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "RawKindRule")]
pub struct KindRule {
    matcher: LabelMatcher,
    kind: InputKind,
}

impl KindRule {
    pub fn new(matcher: LabelMatcher, kind: InputKind) -> Self {
        Self { matcher, kind }
    }

    pub fn matcher(&self) -> &LabelMatcher {
        &self.matcher
    }

    pub fn kind(&self) -> InputKind {
        self.kind
    }
}

impl TryFrom<RawKindRule> for KindRule {
    type Error = RuleError;

    fn try_from(raw: RawKindRule) -> Result<Self, Self::Error> {
        let matcher = match (raw.contains, raw.matches) {
            (Some(needle), None) => LabelMatcher::contains(&needle),
            (None, Some(pattern)) => LabelMatcher::pattern(&pattern)?,
            (None, None) => return Err(RuleError::MissingPredicate),
            (Some(_), Some(_)) => return Err(RuleError::AmbiguousPredicate),
        };
        Ok(Self::new(matcher, raw.kind))
    }
}

/// Ordered classification table. The first rule whose predicate matches a
/// label decides the kind; labels matching nothing get [`InputKind::Text`].
#[derive(Debug, Clone, Deserialize, Deref)]
#[serde(transparent)]
pub struct FieldKindRules(Vec<KindRule>);

impl Default for FieldKindRules {
    fn default() -> Self {
        Self(vec![KindRule::new(
            LabelMatcher::contains("birthday"),
            InputKind::Date,
        )])
    }
}

impl FieldKindRules {
    pub fn new(rules: Vec<KindRule>) -> Self {
        Self(rules)
    }

    pub fn classify(&self, label: &str) -> InputKind {
        self.0
            .iter()
            .find(|rule| rule.matcher.is_match(label))
            .map(KindRule::kind)
            .unwrap_or_default()
    }
}
