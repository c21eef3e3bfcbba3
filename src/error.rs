use std::path::PathBuf;

use thiserror::Error;

use crate::types::Section;

/// Errors produced while loading, converting or plotting a graph.
#[derive(Debug, Error)]
pub enum Error {
    /// Not enough or unusable command line arguments.
    #[error("missing parameters: {0}")]
    Usage(String),

    /// The input path does not exist or is not a regular file.
    #[error("missing file: '{}' does not exist or is not a regular file", .0.display())]
    InputNotFound(PathBuf),

    #[error("line {line}: {kind}")]
    Parse { line: usize, kind: ParseErrorKind },

    #[error("cannot access '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config '{}': {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unsupported output format '{0}', expected .svg or .png")]
    UnsupportedFormat(String),

    #[error("render failed: {0}")]
    Render(String),

    /// An edge endpoint that does not sit on any node.
    #[error("edge {index} has an endpoint ({x}, {y}) without a node")]
    DanglingEdge { index: usize, x: f64, y: f64 },
}

/// What exactly was wrong with an input line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("{section} line has {found} fields, expected {expected}")]
    FieldCount {
        section: Section,
        expected: usize,
        found: usize,
    },

    #[error("field '{field}' is not an integer: '{token}'")]
    InvalidInteger { field: &'static str, token: String },

    #[error("field '{field}' is not a number: '{token}'")]
    InvalidFloat { field: &'static str, token: String },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns the parse failure kind, if this is a parse error.
    pub fn parse_kind(&self) -> Option<&ParseErrorKind> {
        match self {
            Error::Parse { kind, .. } => Some(kind),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_parameters_and_missing_file_differ() {
        let usage = Error::Usage("expected -input=<path> -output=<path>".into()).to_string();
        let missing = Error::InputNotFound(PathBuf::from("Graph.dat")).to_string();
        assert!(usage.starts_with("missing parameters"));
        assert!(missing.starts_with("missing file"));
        assert!(missing.contains("Graph.dat"));
    }

    #[test]
    fn test_parse_message_has_line() {
        let err = Error::Parse {
            line: 3,
            kind: ParseErrorKind::FieldCount {
                section: Section::Nodes,
                expected: 5,
                found: 4,
            },
        };
        assert_eq!(err.to_string(), "line 3: node line has 4 fields, expected 5");
    }
}
