//! Errors reported by CLI commands.

use std::io;
use std::path::PathBuf;

use hello_lexer_core::SourceLocation;
use thiserror::Error;

/// Failure of the `lex` command.
#[derive(Debug, Error)]
pub enum LexCommandError {
    /// The source file could not be read.
    #[error("{}", describe_read(.path, .source))]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// `--deny-unknown` was given and the scanner met a character outside
    /// the vocabulary.
    #[error("{}:{location}: unknown character {lexeme:?}", .path.display())]
    UnknownCharacter {
        path: PathBuf,
        lexeme: String,
        location: SourceLocation,
    },

    /// A flag the command does not recognize.
    #[error("unknown option '{0}'")]
    UnknownOption(String),

    /// No source path was given.
    #[error("missing file path")]
    MissingPath,

    /// Writing the token dump failed.
    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),
}

fn describe_read(path: &std::path::Path, err: &io::Error) -> String {
    let path = path.display();
    match err.kind() {
        io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_error(kind: io::ErrorKind) -> LexCommandError {
        LexCommandError::Read {
            path: PathBuf::from("main.hw"),
            source: io::Error::new(kind, "boom"),
        }
    }

    #[test]
    fn read_messages_by_kind() {
        assert_eq!(
            read_error(io::ErrorKind::NotFound).to_string(),
            "cannot find file 'main.hw'"
        );
        assert_eq!(
            read_error(io::ErrorKind::PermissionDenied).to_string(),
            "permission denied reading 'main.hw'"
        );
        assert_eq!(
            read_error(io::ErrorKind::InvalidData).to_string(),
            "'main.hw' contains invalid UTF-8 data"
        );
        assert_eq!(
            read_error(io::ErrorKind::Other).to_string(),
            "error reading 'main.hw': boom"
        );
    }

    #[test]
    fn read_error_keeps_source() {
        let err = read_error(io::ErrorKind::NotFound);
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn unknown_character_message() {
        let err = LexCommandError::UnknownCharacter {
            path: PathBuf::from("a.hw"),
            lexeme: "$".to_string(),
            location: SourceLocation::new(2, 1),
        };
        assert_eq!(err.to_string(), "a.hw:2:1: unknown character \"$\"");
    }

    #[test]
    fn unknown_option_message() {
        assert_eq!(
            LexCommandError::UnknownOption("--fast".to_string()).to_string(),
            "unknown option '--fast'"
        );
    }
}
