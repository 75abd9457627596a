//! Editable startup form state.
//!
//! A `StartupForm` lives for one user session. Each bullet field always holds
//! at least one entry so there is somewhere to type; `submit` turns the form
//! into an immutable [`StartupData`] once the name is filled in.

use crate::entities::{StartupData, is_blank};
use crate::enums::BulletField;
use crate::errors::CoreError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupForm {
    data: StartupData,
}

impl Default for StartupForm {
    fn default() -> Self {
        Self::new()
    }
}

impl StartupForm {
    /// Blank form with one empty entry per bullet field.
    #[must_use]
    pub fn new() -> Self {
        Self {
            data: StartupData {
                name: String::new(),
                problem: vec![String::new()],
                solution: vec![String::new()],
                target: vec![String::new()],
                unique: vec![String::new()],
            },
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.data.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.data.name = name.into();
    }

    #[must_use]
    pub fn bullets(&self, field: BulletField) -> &[String] {
        self.data.bullets(field)
    }

    /// Append an empty entry to `field`.
    pub fn add_bullet(&mut self, field: BulletField) {
        self.field_mut(field).push(String::new());
    }

    /// Replace the entry at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when `index` is out of range.
    pub fn update_bullet(
        &mut self,
        field: BulletField,
        index: usize,
        value: impl Into<String>,
    ) -> Result<(), CoreError> {
        let entries = self.field_mut(field);
        let len = entries.len();
        let slot = entries
            .get_mut(index)
            .ok_or_else(|| out_of_range(field, index, len))?;
        *slot = value.into();
        Ok(())
    }

    /// Remove the entry at `index`.
    ///
    /// The last remaining entry is never removed; in that case nothing
    /// changes and `Ok(false)` is returned.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when `index` is out of range.
    pub fn remove_bullet(&mut self, field: BulletField, index: usize) -> Result<bool, CoreError> {
        let entries = self.field_mut(field);
        if index >= entries.len() {
            return Err(out_of_range(field, index, entries.len()));
        }
        if entries.len() == 1 {
            return Ok(false);
        }
        entries.remove(index);
        Ok(true)
    }

    /// Fill a bullet field from a list, replacing what is there.
    ///
    /// An empty list leaves a single empty entry behind.
    pub fn set_bullets<I, S>(&mut self, field: BulletField, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = self.field_mut(field);
        entries.clear();
        entries.extend(values.into_iter().map(Into::into));
        if entries.is_empty() {
            entries.push(String::new());
        }
    }

    /// Whether the form may be submitted (non-blank name).
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !is_blank(&self.data.name)
    }

    /// Snapshot the form as an input record.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when the startup name is blank.
    pub fn submit(&self) -> Result<StartupData, CoreError> {
        if !self.can_submit() {
            return Err(CoreError::Validation(
                "startup name must not be empty".to_string(),
            ));
        }
        Ok(self.data.clone())
    }

    /// Discard all edits.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn field_mut(&mut self, field: BulletField) -> &mut Vec<String> {
        match field {
            BulletField::Problem => &mut self.data.problem,
            BulletField::Solution => &mut self.data.solution,
            BulletField::Target => &mut self.data.target,
            BulletField::Unique => &mut self.data.unique,
        }
    }
}

fn out_of_range(field: BulletField, index: usize, len: usize) -> CoreError {
    CoreError::Validation(format!(
        "{field} bullet index {index} out of range (len {len})"
    ))
}

impl From<StartupData> for StartupForm {
    fn from(data: StartupData) -> Self {
        let mut form = Self { data };
        for field in BulletField::ALL {
            let entries = form.field_mut(field);
            if entries.is_empty() {
                entries.push(String::new());
            }
        }
        form
    }
}
