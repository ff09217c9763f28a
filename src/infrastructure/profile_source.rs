//! Profile document loading
//!
//! The profile shown on screen comes from a JSON5 document:
//!
//! ```json5
//! {
//!   title: "Ada Lovelace",
//!   fields: [
//!     { id: "first_name", label: "First Name", value: "Ada" },
//!     { label: "Phone" }, // no value: a malformed row, skipped by transitions
//!   ],
//! }
//! ```

use std::path::{Path, PathBuf};

use color_eyre::eyre::{eyre, Result, WrapErr};
use serde::Deserialize;

use crate::{domain::field::Field, utils};

const SAMPLE: &str = include_str!("../../.config/profile.json5");
const PROFILE_FILE: &str = "profile.json5";
const DEFAULT_TITLE: &str = "Profile";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldEntry {
    pub label: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

impl From<FieldEntry> for Field {
    fn from(entry: FieldEntry) -> Self {
        let field = match entry.value {
            Some(value) => Field::new(entry.label, value),
            None => Field::malformed(entry.label),
        };
        match entry.id {
            Some(id) => field.with_id(id),
            None => field,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProfileDocument {
    #[serde(default)]
    pub title: Option<String>,
    pub fields: Vec<FieldEntry>,
}

impl ProfileDocument {
    pub fn parse(source: &str) -> Result<Self> {
        json5::from_str(source).wrap_err("Failed to parse profile document")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read profile document {}", path.display()))?;
        Self::parse(&source)
            .wrap_err_with(|| format!("Invalid profile document {}", path.display()))
    }

    /// The profile bundled with the binary
    pub fn sample() -> Result<Self> {
        Self::parse(SAMPLE)
    }

    /// Pick the document to show: an explicit path must exist; otherwise
    /// `profile.json5` in `config_dir`, then the bundled sample.
    pub fn resolve_in(explicit: Option<&Path>, config_dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(eyre!("Profile document {} does not exist", path.display()));
            }
            log::info!("Loading profile from {}", path.display());
            return Self::load(path);
        }

        let candidate = config_dir.join(PROFILE_FILE);
        if candidate.exists() {
            log::info!("Loading profile from {}", candidate.display());
            return Self::load(&candidate);
        }

        log::info!("No profile document found; showing the sample profile");
        Self::sample()
    }

    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self> {
        Self::resolve_in(explicit.as_deref(), &utils::get_config_dir())
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    /// Split into the title and the fields in document order
    pub fn into_parts(self) -> (String, Vec<Field>) {
        let title = self.title().to_string();
        (title, self.fields.into_iter().map(Field::from).collect())
    }
}
