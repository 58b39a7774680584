//! Command-line interface definition for opsrun.
//!
//! This module defines the CLI arguments and drives a run: load the job file,
//! resolve each job's files and apply its replacement, one file at a time.

use crate::application;
use crate::constants::CONFIG_PATH;
use crate::file_util::{self, Outcome};
use crate::job::{Job, ReplaceText};
use crate::resolver;
use crate::Result;
use clap::{ArgAction, Parser};
use std::fmt;
use std::path::{Path, PathBuf};

/// Command-line interface definition for opsrun.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Working root: globs, explicit files and the default job file are relative to it.
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
    /// Job file. Defaults to `ops/commands.yml` under the working root.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Increase log verbosity (-v info, -vv debug). Logs go to stderr.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// The job file this invocation reads.
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(|| self.root.join(CONFIG_PATH))
    }
}

/// Result of a successful run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Number of file rewrites. A file rewritten by two jobs counts twice.
    pub changed_files: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "changed_files={}", self.changed_files)
    }
}

/// Loads the job file and runs every job in it.
///
/// # Errors
/// Returns the first configuration, schema or file access error. Jobs are all
/// validated before the first file is touched.
pub fn run(cli: &Cli) -> Result<Summary> {
    let jobs = application::load_jobs(&cli.config_path())?;
    run_jobs(&jobs, &cli.root)
}

/// Runs jobs in order against the tree under `root`.
pub fn run_jobs(jobs: &[Job], root: &Path) -> Result<Summary> {
    let mut summary = Summary::default();
    for (index, job) in jobs.iter().enumerate() {
        match job {
            Job::ReplaceText(job) => {
                summary.changed_files += run_job(job, index, root)?;
            }
            Job::Ignored { kind } => {
                tracing::debug!("Ignoring job #{index} of type {kind:?}");
            }
        }
    }
    Ok(summary)
}

/// Runs one `replace_text` job and returns how many files it rewrote.
pub fn run_job(job: &ReplaceText, index: usize, root: &Path) -> Result<usize> {
    let targets = resolver::resolve(job, index, root)?;
    tracing::info!("Job #{index}: {} candidate file(s)", targets.len());

    let mut changed = 0;
    for path in &targets {
        if file_util::replace_in_file(path, &job.find, &job.replace)? == Outcome::Rewritten {
            changed += 1;
        }
    }
    Ok(changed)
}
