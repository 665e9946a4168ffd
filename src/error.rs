use std::io;

use thiserror::Error;

/// A line that is not blank, a comment, a section header, or an assignment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid INI syntax on line {line}: {text}")]
pub struct SyntaxError {
    /// 1-based line number.
    pub line: usize,
    /// The contents of the line, without leading or trailing whitespace.
    pub text: String,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("ini: decode into a missing target")]
    InvalidTarget,

    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error("ini: document does not fit the target: {0}")]
    Bridge(#[from] serde_json::Error),

    #[error("failed to write output: {source}")]
    Output {
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read data: {source}")]
    Read {
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syntax_error_message() {
        let err = SyntaxError {
            line: 3,
            text: "not an ini line".to_owned(),
        };

        assert_eq!(
            err.to_string(),
            "invalid INI syntax on line 3: not an ini line"
        );
    }

    #[test]
    fn syntax_error_passes_through() {
        let err = Error::from(SyntaxError {
            line: 1,
            text: "oops".to_owned(),
        });

        assert_eq!(err.to_string(), "invalid INI syntax on line 1: oops");
        assert!(matches!(err, Error::Syntax(SyntaxError { line: 1, .. })));
    }

    #[test]
    fn output_error_is_not_a_bridge_error() {
        let source = serde_json::from_str::<u8>("nope").expect_err("not a number");
        let err = Error::Output { source };

        assert!(err.to_string().starts_with("failed to write output: "));
        assert!(!err.to_string().contains("target"));
    }

    #[test]
    fn read_error_keeps_source() {
        let err = Error::Read {
            source: io::Error::other("disk on fire"),
        };

        let source = std::error::Error::source(&err).expect("read error should carry a source");
        assert_eq!(source.to_string(), "disk on fire");
    }
}
