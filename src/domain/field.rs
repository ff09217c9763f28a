//! Profile fields and their two representations
//!
//! A field always holds exactly one representation: a read-only value or an
//! editable input. [`Representation::Missing`] stands for a container whose
//! value element is absent; transitions skip such fields.

use crate::domain::{
    date::to_iso_date,
    error::{Expected, FieldError},
    field_kind::{FieldKindRules, InputKind},
    input::InputBuffer,
};

/// Editable form of a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInput {
    kind: InputKind,
    /// Lowercased label captured when edit mode began
    tag: Option<String>,
    id: Option<String>,
    buffer: InputBuffer,
}

impl FieldInput {
    pub fn new(kind: InputKind, tag: Option<String>, id: Option<String>, value: &str) -> Self {
        Self {
            kind,
            tag,
            id,
            buffer: InputBuffer::new(value),
        }
    }

    pub fn kind(&self) -> InputKind {
        self.kind
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn value(&self) -> &str {
        self.buffer.value()
    }

    pub fn buffer(&self) -> &InputBuffer {
        &self.buffer
    }

    pub fn set_buffer(&mut self, buffer: InputBuffer) {
        self.buffer = buffer;
    }

    /// Retrieval key: the tag, or the input id when untagged
    pub fn key(&self) -> Option<&str> {
        self.tag().or_else(|| self.id())
    }
}

/// The single visible representation of a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Representation {
    Display(String),
    Input(FieldInput),
    Missing,
}

/// Result of turning an input back into a read-only value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Committed {
    pub field: Field,
    pub key: Option<String>,
    pub value: String,
}

impl Committed {
    /// The `(key, value)` pair to record, if the input could be keyed
    pub fn entry(&self) -> Result<(&str, &str), FieldError> {
        match &self.key {
            Some(key) => Ok((key.as_str(), self.value.as_str())),
            None => Err(FieldError::Untagged {
                label: self.field.label.clone(),
            }),
        }
    }
}

/// One labeled datum of the profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    id: Option<String>,
    label: String,
    repr: Representation,
}

impl Field {
    /// A read-only field
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: None,
            label: label.into(),
            repr: Representation::Display(value.into()),
        }
    }

    /// A field whose value element is absent
    pub fn malformed(label: impl Into<String>) -> Self {
        Self {
            id: None,
            label: label.into(),
            repr: Representation::Missing,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn representation(&self) -> &Representation {
        &self.repr
    }

    /// Lowercased label, `None` for a blank label
    pub fn key(&self) -> Option<String> {
        let key = self.label.trim().to_lowercase();
        (!key.is_empty()).then_some(key)
    }

    pub fn is_editable(&self) -> bool {
        matches!(self.repr, Representation::Input(_))
    }

    pub fn is_missing(&self) -> bool {
        matches!(self.repr, Representation::Missing)
    }

    pub fn display_value(&self) -> Option<&str> {
        match &self.repr {
            Representation::Display(value) => Some(value),
            _ => None,
        }
    }

    pub fn input(&self) -> Option<&FieldInput> {
        match &self.repr {
            Representation::Input(input) => Some(input),
            _ => None,
        }
    }

    pub fn input_mut(&mut self) -> Option<&mut FieldInput> {
        match &mut self.repr {
            Representation::Input(input) => Some(input),
            _ => None,
        }
    }

    /// The field as shown in edit mode: an input seeded with the current
    /// value, typed by `rules` and tagged with the lowercased label. Date
    /// inputs get the value in ISO form when it parses as a date.
    pub fn editing(&self, rules: &FieldKindRules) -> Result<Field, FieldError> {
        let Representation::Display(value) = &self.repr else {
            return Err(self.missing(Expected::ReadOnly));
        };

        let kind = rules.classify(&self.label);
        let seed = match kind {
            InputKind::Date => to_iso_date(value).unwrap_or_else(|| value.clone()),
            InputKind::Text => value.clone(),
        };

        Ok(Field {
            id: self.id.clone(),
            label: self.label.clone(),
            repr: Representation::Input(FieldInput::new(
                kind,
                self.key(),
                self.id.clone(),
                &seed,
            )),
        })
    }

    /// The field as shown in view mode, along with the key and value to
    /// record for it.
    pub fn viewing(&self) -> Result<Committed, FieldError> {
        let Representation::Input(input) = &self.repr else {
            return Err(self.missing(Expected::Input));
        };

        let value = input.value().to_string();
        Ok(Committed {
            field: Field {
                id: self.id.clone(),
                label: self.label.clone(),
                repr: Representation::Display(value.clone()),
            },
            key: input.key().map(str::to_string),
            value,
        })
    }

    fn missing(&self, expected: Expected) -> FieldError {
        FieldError::MissingElement {
            label: self.label.clone(),
            expected,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_editing_seeds_input_with_value_and_tag() -> color_eyre::Result<()> {
        let field = Field::new("Name", "Ada").with_id("first_name");
        let editing = field.editing(&FieldKindRules::default())?;

        let input = editing.input().expect("editing field holds an input");
        assert_eq!(input.kind(), InputKind::Text);
        assert_eq!(input.value(), "Ada");
        assert_eq!(input.tag(), Some("name"));
        assert_eq!(input.id(), Some("first_name"));
        assert_eq!(editing.display_value(), None);

        Ok(())
    }

    #[test]
    fn test_editing_birthday_normalizes_date() -> color_eyre::Result<()> {
        let rules = FieldKindRules::default();

        let field = Field::new("Birthday", "Dec. 10, 1815").editing(&rules)?;
        let input = field.input().expect("input");
        assert_eq!(input.kind(), InputKind::Date);
        assert_eq!(input.value(), "1815-12-10");

        // Unparseable dates are carried over as they are.
        let field = Field::new("Birthday", "unknown").editing(&rules)?;
        assert_eq!(field.input().map(FieldInput::value), Some("unknown"));

        Ok(())
    }

    #[test]
    fn test_viewing_returns_display_and_entry() -> color_eyre::Result<()> {
        let rules = FieldKindRules::default();
        let committed = Field::new("Email", "a@x.com").editing(&rules)?.viewing()?;

        assert_eq!(committed.field.display_value(), Some("a@x.com"));
        assert_eq!(committed.entry()?, ("email", "a@x.com"));

        Ok(())
    }

    #[test]
    fn test_blank_label_falls_back_to_id() -> color_eyre::Result<()> {
        let rules = FieldKindRules::default();

        let committed = Field::new("  ", "x").with_id("nick").editing(&rules)?.viewing()?;
        assert_eq!(committed.entry()?, ("nick", "x"));

        let committed = Field::new("", "x").editing(&rules)?.viewing()?;
        assert_eq!(
            committed.entry(),
            Err(FieldError::Untagged { label: "".into() })
        );
        assert_eq!(committed.field.display_value(), Some("x"));

        Ok(())
    }

    #[test]
    fn test_missing_representation_is_reported() {
        let rules = FieldKindRules::default();
        let field = Field::malformed("Phone");

        assert_eq!(
            field.editing(&rules),
            Err(FieldError::MissingElement {
                label: "Phone".into(),
                expected: Expected::ReadOnly,
            })
        );
        assert_eq!(
            field.viewing(),
            Err(FieldError::MissingElement {
                label: "Phone".into(),
                expected: Expected::Input,
            })
        );

        // A read-only field has no input to commit.
        assert!(matches!(
            Field::new("City", "London").viewing(),
            Err(FieldError::MissingElement {
                expected: Expected::Input,
                ..
            })
        ));
    }
}
