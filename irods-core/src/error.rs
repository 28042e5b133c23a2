use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("I/O error: {source} {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Incorrect format for input line {line}")]
    Format { line: String },

    #[error("field delimiter must not be empty")]
    EmptyDelimiter,

    #[error("group table: {source} {}", path.display())]
    GroupTable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading the input stream failed (path not yet attached).
    #[error("read error: {0}")]
    Read(#[source] std::io::Error),

    /// Writing the output stream failed (path not yet attached).
    #[error("write error: {0}")]
    Write(#[source] std::io::Error),
}

impl ReportError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        ReportError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Attach file paths to stream errors; other variants pass through.
    pub fn locate(self, input: &Path, output: &Path) -> Self {
        match self {
            ReportError::Read(source) => ReportError::io(input, source),
            ReportError::Write(source) => ReportError::io(output, source),
            other => other,
        }
    }
}

// Convenient crate-wide result type
pub type Result<T> = std::result::Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_locate_attaches_paths() {
        let input = Path::new("/tmp/in.txt");
        let output = Path::new("/tmp/out.txt");

        let err = ReportError::Read(Error::new(ErrorKind::InvalidData, "bad utf-8"));
        match err.locate(input, output) {
            ReportError::Io { path, .. } => assert_eq!(path, input),
            other => panic!("unexpected error: {other:?}"),
        }

        let err = ReportError::Write(Error::new(ErrorKind::Other, "disk full"));
        match err.locate(input, output) {
            ReportError::Io { path, .. } => assert_eq!(path, output),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_format_message_carries_line() {
        let err = ReportError::Format {
            line: "a>>b".into(),
        };
        assert_eq!(err.to_string(), "Incorrect format for input line a>>b");
    }

    #[test]
    fn test_io_message_names_path() {
        let err = ReportError::io(
            Path::new("/tmp/missing.txt"),
            Error::new(ErrorKind::NotFound, "no such file"),
        );
        assert!(err.to_string().ends_with("/tmp/missing.txt"));
    }
}
