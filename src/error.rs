use crate::sysexits;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Every way a run can fail. All of them are fatal: the run stops at the
/// first one and files already rewritten stay rewritten.
#[derive(Debug, Error)]
pub enum Error {
    /// The job file is missing or unreadable.
    #[error("failed to read config file '{}'", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The job file is not valid YAML or does not have the expected shape.
    #[error("failed to parse config file '{}'", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },
    /// A `replace_text` job lacks `find` or `replace`.
    #[error("job #{index} (replace_text) is missing required field `{field}`")]
    JobSchema { index: usize, field: &'static str },
    /// A `replace_text` job has a field of the wrong type.
    #[error("job #{index} (replace_text) is malformed")]
    InvalidJob {
        index: usize,
        #[source]
        source: serde_yaml_ng::Error,
    },
    #[error("job #{index} has an invalid glob pattern '{pattern}'")]
    InvalidGlob {
        index: usize,
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
    /// A resolved file could not be read, decoded as UTF-8 or written back.
    #[error("failed to access file '{}'", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// The process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::ConfigRead { .. } => sysexits::EX_NOINPUT,
            Error::ConfigParse { .. } => sysexits::EX_CONFIG,
            Error::JobSchema { .. } | Error::InvalidJob { .. } | Error::InvalidGlob { .. } => {
                sysexits::EX_DATAERR
            }
            Error::FileAccess { .. } => sysexits::EX_IOERR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let err = Error::JobSchema {
            index: 0,
            field: "find",
        };
        assert_eq!(err.exit_code(), 65);
        assert_eq!(
            err.to_string(),
            "job #0 (replace_text) is missing required field `find`"
        );

        let err = Error::ConfigRead {
            path: PathBuf::from("ops/commands.yml"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert_eq!(err.exit_code(), 66);
        assert!(err.to_string().contains("ops/commands.yml"));

        let err = Error::FileAccess {
            path: PathBuf::from("index.html"),
            source: io::Error::from(io::ErrorKind::InvalidData),
        };
        assert_eq!(err.exit_code(), 74);
    }
}
