//! The job file.
//!
//! This module defines the on-disk shape of `ops/commands.yml` and turns it
//! into a list of validated jobs. Loading is all-or-nothing: a missing file,
//! malformed YAML or a malformed job stops the run before any file is touched.

use crate::job::Job;
use crate::{Error, Result};
use serde::Deserialize;
use serde_yaml_ng::Value;
use std::fs;
use std::path::Path;

/// The parsed job file.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct Application {
    /// Jobs in application order. A missing or `null` key means no jobs.
    /// Entries stay untyped until their `type` has been checked.
    #[serde(default)]
    pub jobs: Option<Vec<Value>>,
}

impl Application {
    /// Reads and parses the job file at `path`.
    ///
    /// # Errors
    /// Returns [`Error::ConfigRead`] if the file cannot be read and
    /// [`Error::ConfigParse`] if it is not a YAML mapping of the expected shape.
    pub fn load(path: &Path) -> Result<Self> {
        let yaml = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let app = Self::from_yaml(&yaml).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(
            "Loaded {} job(s) from {}",
            app.jobs.as_ref().map_or(0, Vec::len),
            path.display()
        );
        Ok(app)
    }

    fn from_yaml(yaml: &str) -> std::result::Result<Self, serde_yaml_ng::Error> {
        serde_yaml_ng::from_str(yaml)
    }

    /// Validates every job, in order.
    ///
    /// # Errors
    /// Returns the first [`Error::JobSchema`] or [`Error::InvalidJob`]
    /// encountered.
    pub fn into_jobs(self) -> Result<Vec<Job>> {
        self.jobs
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(index, value)| Job::from_value(value, index))
            .collect()
    }
}

/// Loads and validates the job file in one step.
pub fn load_jobs(path: &Path) -> Result<Vec<Job>> {
    Application::load(path)?.into_jobs()
}
