use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::BulletField;

/// Structured startup facts entered by the user.
///
/// Bullet fields may hold empty or whitespace-only entries; consumers filter
/// them with [`StartupData::filled`] before embedding text.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StartupData {
    pub name: String,
    #[serde(default)]
    pub problem: Vec<String>,
    #[serde(default)]
    pub solution: Vec<String>,
    #[serde(default)]
    pub target: Vec<String>,
    #[serde(default)]
    pub unique: Vec<String>,
}

impl StartupData {
    /// Raw entries of one bullet field, empty strings included.
    #[must_use]
    pub fn bullets(&self, field: BulletField) -> &[String] {
        match field {
            BulletField::Problem => &self.problem,
            BulletField::Solution => &self.solution,
            BulletField::Target => &self.target,
            BulletField::Unique => &self.unique,
        }
    }

    /// Entries of one bullet field that are not blank, in display order.
    ///
    /// Kept entries are returned verbatim, surrounding whitespace included.
    pub fn filled(&self, field: BulletField) -> impl Iterator<Item = &str> {
        self.bullets(field)
            .iter()
            .map(String::as_str)
            .filter(|entry| !is_blank(entry))
    }

    /// First non-blank entry of a bullet field.
    #[must_use]
    pub fn first_filled(&self, field: BulletField) -> Option<&str> {
        self.filled(field).next()
    }
}

/// Whether `text` holds only whitespace, counting U+FEFF as whitespace.
#[must_use]
pub fn is_blank(text: &str) -> bool {
    text.chars().all(|c| c.is_whitespace() || c == '\u{feff}')
}
