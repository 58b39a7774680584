use crate::constants::{DEFAULT_GLOB, REPLACE_TEXT};
use crate::{Error, Result};
use serde::Deserialize;
use serde_yaml_ng::Value;

/// A job exactly as written in the job file.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct RawJob {
    /// Job type. Only `replace_text` is acted on.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Explicit list of files. Takes precedence over `glob` when non-empty.
    #[serde(default)]
    pub files: Option<Vec<String>>,
    /// Recursive glob pattern, relative to the working root.
    #[serde(default)]
    pub glob: Option<String>,
    #[serde(default)]
    pub find: Option<String>,
    #[serde(default)]
    pub replace: Option<String>,
}

/// A validated job.
#[derive(Debug, Clone, PartialEq)]
pub enum Job {
    ReplaceText(ReplaceText),
    /// Any other job type, kept so the run can log it and move on.
    Ignored { kind: Option<String> },
}

impl Job {
    /// Builds the job found at position `index` of the job list.
    ///
    /// Only the `type` key is read before deciding: entries of any other type
    /// are ignored whatever shape their remaining fields have.
    ///
    /// # Errors
    /// Returns [`Error::InvalidJob`] if a `replace_text` entry has fields of the
    /// wrong type, or [`Error::JobSchema`] if it lacks `find` or `replace`.
    pub fn from_value(value: Value, index: usize) -> Result<Job> {
        let kind = value.get("type").and_then(Value::as_str).map(str::to_string);
        if kind.as_deref() != Some(REPLACE_TEXT) {
            return Ok(Job::Ignored { kind });
        }
        let raw: RawJob =
            serde_yaml_ng::from_value(value).map_err(|source| Error::InvalidJob { index, source })?;
        raw.validate(index)
    }
}

/// A literal find/replace over a set of files.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplaceText {
    pub files: Vec<String>,
    pub glob: String,
    pub find: String,
    pub replace: String,
}

impl ReplaceText {
    /// Returns true when the job names its files explicitly instead of globbing.
    pub fn has_explicit_files(&self) -> bool {
        !self.files.is_empty()
    }
}

impl RawJob {
    /// Validates the job found at position `index` of the job list.
    ///
    /// # Errors
    /// Returns [`Error::JobSchema`] if a `replace_text` job has no `find` or
    /// no `replace`.
    pub fn validate(self, index: usize) -> Result<Job> {
        if self.kind.as_deref() != Some(REPLACE_TEXT) {
            return Ok(Job::Ignored { kind: self.kind });
        }
        let find = self.find.ok_or(Error::JobSchema {
            index,
            field: "find",
        })?;
        let replace = self.replace.ok_or(Error::JobSchema {
            index,
            field: "replace",
        })?;
        Ok(Job::ReplaceText(ReplaceText {
            files: self.files.unwrap_or_default(),
            glob: self.glob.unwrap_or_else(|| DEFAULT_GLOB.to_string()),
            find,
            replace,
        }))
    }
}
