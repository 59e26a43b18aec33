//! Error types for scanning and output

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot access '{}': No such file or directory", path.display())]
    NotFound { path: PathBuf },
    #[error("'{}' is not a directory", path.display())]
    NotADirectory { path: PathBuf },
    #[error("error reading '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid ignore pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
}

impl Error {
    /// Wrap an I/O failure together with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_include_path() {
        let err = Error::NotFound {
            path: PathBuf::from("/nope"),
        };
        assert_eq!(
            err.to_string(),
            "cannot access '/nope': No such file or directory"
        );

        let err = Error::io("/tmp/x", io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        assert!(err.to_string().contains("/tmp/x"));
        assert!(err.to_string().contains("denied"));
    }
}
