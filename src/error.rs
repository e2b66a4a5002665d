//! Error types for KeyValues parsing, serialization and file I/O.
//!
//! ## Error Categories
//!
//! - **Syntax Errors**: Unexpected tokens with line/column information
//! - **Unexpected End of Input**: Unbalanced braces or a key without a value
//! - **Unterminated Strings**: A quoted token still open at end of input
//! - **Unrepresentable Tokens**: Text the serializer cannot write losslessly
//! - **I/O Errors**: File reading/writing failures
//!
//! Lookups that miss and typed reads that cannot coerce are not errors: they
//! surface as `None` or fall back to the caller's default.
//!
//! ## Examples
//!
//! ```rust
//! use keyvalues::{from_str, Error, SymbolTable};
//!
//! let symbols = SymbolTable::new();
//! let result = from_str(&symbols, "\"Root\"\n{\n    \"key\" \"value\"\n");
//!
//! match result {
//!     Err(Error::UnexpectedEof { expected, .. }) => assert_eq!(expected, "'}'"),
//!     other => panic!("unexpected result: {:?}", other),
//! }
//! ```

use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Represents all possible errors raised while reading or writing KeyValues text.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Syntax error with detailed context
    #[error("Syntax error at line {line}, column {col}:\n{context}\n{msg}{suggestion}")]
    Syntax {
        line: usize,
        col: usize,
        msg: String,
        context: String,
        suggestion: String,
    },

    /// Input ended while a block or a key/value pair was still open
    #[error(
        "Unexpected end of input at line {line}, column {col}\n{context}\nExpected: {expected}"
    )]
    UnexpectedEof {
        line: usize,
        col: usize,
        expected: String,
        context: String,
    },

    /// A quoted token was never closed
    #[error("Unterminated string starting at line {line}, column {col}")]
    UnterminatedString { line: usize, col: usize },

    /// The serializer cannot write a token so that it parses back unchanged
    #[error("Cannot serialize {what} {token:?}: {reason}")]
    Unrepresentable {
        what: String,
        token: String,
        reason: String,
    },

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a syntax error with line and column information.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyvalues::Error;
    ///
    /// let err = Error::syntax(10, 5, "unexpected '}'");
    /// assert!(err.to_string().contains("line 10"));
    /// ```
    pub fn syntax(line: usize, col: usize, msg: &str) -> Self {
        Error::Syntax {
            line,
            col,
            msg: msg.to_string(),
            context: String::new(),
            suggestion: String::new(),
        }
    }

    /// Creates a syntax error with the offending source line and an optional hint.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyvalues::Error;
    ///
    /// let err = Error::syntax_with_context(
    ///     3,
    ///     1,
    ///     "expected a key name",
    ///     "{",
    ///     Some("Nested blocks must be preceded by a key name"),
    /// );
    /// assert!(err.to_string().contains("Help:"));
    /// ```
    pub fn syntax_with_context(
        line: usize,
        col: usize,
        msg: &str,
        context: &str,
        suggestion: Option<&str>,
    ) -> Self {
        Error::Syntax {
            line,
            col,
            msg: msg.to_string(),
            context: context.to_string(),
            suggestion: suggestion
                .map(|s| format!("\nHelp: {}", s))
                .unwrap_or_default(),
        }
    }

    /// Creates an unexpected end-of-input error.
    pub fn unexpected_eof(line: usize, col: usize, expected: &str, context: &str) -> Self {
        Error::UnexpectedEof {
            line,
            col,
            expected: expected.to_string(),
            context: context.to_string(),
        }
    }

    /// Creates an error for a quoted token opened at `line`/`col` and never closed.
    pub fn unterminated_string(line: usize, col: usize) -> Self {
        Error::UnterminatedString { line, col }
    }

    /// Creates an error for a name or value the serializer cannot emit losslessly.
    pub fn unrepresentable(what: &str, token: &str, reason: &str) -> Self {
        Error::Unrepresentable {
            what: what.to_string(),
            token: token.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Creates an I/O error for file reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates an I/O error that names the file involved.
    pub fn io_at(path: &Path, err: &std::io::Error) -> Self {
        Error::Io(format!("{}: {}", path.display(), err))
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Returns `true` for errors produced while reading KeyValues text.
    #[must_use]
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Error::Syntax { .. } | Error::UnexpectedEof { .. } | Error::UnterminatedString { .. }
        )
    }

    /// Returns the 1-based `(line, column)` a parse error points at.
    #[must_use]
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            Error::Syntax { line, col, .. }
            | Error::UnexpectedEof { line, col, .. }
            | Error::UnterminatedString { line, col } => Some((*line, *col)),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
