//! KeyValues text parsing.
//!
//! This module provides the [`Parser`] that turns brace-delimited KeyValues
//! text into a [`KeyValues`] tree.
//!
//! ## Grammar
//!
//! ```text
//! document := name '{' entry* '}'
//! entry    := name value
//!           | name '{' entry* '}'
//! ```
//!
//! - Tokens are separated by whitespace. A token is either quoted
//!   (`"two words"`) or bare (`word`); bare tokens end at whitespace or at
//!   any of `{`, `}`, `"`.
//! - `//` starts a comment that runs to the end of the line.
//! - Every value is stored as a string; typed accessors convert on read.
//! - With escape sequences enabled, `\n`, `\t`, `\r`, `\\` and `\"` are
//!   decoded inside quoted tokens and any other backslash is kept as is.
//!   With them disabled, backslashes are ordinary characters and a quoted
//!   token ends at the next `"`.
//!
//! ## Usage
//!
//! ```rust
//! use keyvalues::{Parser, SymbolTable};
//!
//! let symbols = SymbolTable::new();
//! let kv = Parser::new("Root { line \"a\\nb\" }")
//!     .escape_sequences(true)
//!     .parse(&symbols)
//!     .unwrap();
//! assert_eq!(kv.get_string("line", ""), "a\nb");
//! ```

use crate::options::DEFAULT_MAX_DEPTH;
use crate::value::Value;
use crate::{Error, KeyValues, Result, SymbolTable};
use std::path::Path;

#[derive(Debug, PartialEq)]
enum TokenKind {
    Open,
    Close,
    Text(String),
}

#[derive(Debug)]
struct Token {
    kind: TokenKind,
    line: usize,
    col: usize,
}

/// The KeyValues parser.
///
/// Created via [`Parser::new`]; configure escape handling with
/// [`Parser::escape_sequences`], the nesting limit with
/// [`Parser::max_depth`], and run it with [`Parser::parse`].
pub struct Parser<'a> {
    input: &'a str,
    position: usize,
    line: usize,
    column: usize,
    escape_sequences: bool,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Parser {
            input: input.strip_prefix('\u{feff}').unwrap_or(input),
            position: 0,
            line: 1,
            column: 1,
            escape_sequences: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Enables or disables decoding of backslash escapes in quoted tokens.
    #[must_use]
    pub fn escape_sequences(mut self, enabled: bool) -> Self {
        self.escape_sequences = enabled;
        self
    }

    /// Sets how many blocks may be open at once, the root block included.
    ///
    /// Defaults to [`DEFAULT_MAX_DEPTH`]. A document nested deeper is
    /// rejected with a syntax error at the first block past the limit.
    #[must_use]
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Parses the whole input as one document rooted at a named block.
    ///
    /// The returned tree carries this parser's escape-sequence setting.
    ///
    /// # Errors
    ///
    /// Returns a parse error for an unterminated quoted token, a missing or
    /// unmatched brace, a key with no value, content after the root block, or
    /// blocks nested deeper than the configured limit.
    pub fn parse(mut self, symbols: &SymbolTable) -> Result<KeyValues> {
        let name = match self.next_token()? {
            Some(Token {
                kind: TokenKind::Text(name),
                ..
            }) => name,
            Some(token) => {
                return Err(self.syntax_error(&token, "expected a root key name", None));
            }
            None => {
                return Err(Error::unexpected_eof(
                    self.line,
                    self.column,
                    "a root key name",
                    "",
                ));
            }
        };

        let mut root = KeyValues::new(symbols, &name);
        root.uses_escape_sequences = self.escape_sequences;

        match self.next_token()? {
            Some(Token {
                kind: TokenKind::Open,
                line,
                col,
            }) => self.parse_block(&mut root, line, col, 1)?,
            Some(token) => {
                return Err(self.syntax_error(
                    &token,
                    "expected '{' after the root key name",
                    Some("A document is a single named block: \"Name\" { ... }"),
                ));
            }
            None => {
                return Err(Error::unexpected_eof(self.line, self.column, "'{'", ""));
            }
        }

        if let Some(token) = self.next_token()? {
            return Err(self.syntax_error(
                &token,
                "unexpected content after the root block",
                None,
            ));
        }

        tracing::debug!(
            root = %root.name(),
            keys = root.sub_key_count(),
            bytes = self.input.len(),
            "parsed keyvalues document"
        );
        Ok(root)
    }

    fn parse_block(
        &mut self,
        node: &mut KeyValues,
        open_line: usize,
        open_col: usize,
        depth: usize,
    ) -> Result<()> {
        if depth > self.max_depth {
            return Err(self.syntax_error_at(
                open_line,
                open_col,
                "nesting too deep",
                Some(&format!(
                    "At most {} nested blocks are allowed; raise Parser::max_depth for deeper documents",
                    self.max_depth
                )),
            ));
        }

        loop {
            let key = match self.next_token()? {
                Some(Token {
                    kind: TokenKind::Close,
                    ..
                }) => return Ok(()),
                Some(Token {
                    kind: TokenKind::Text(key),
                    ..
                }) => key,
                Some(token) => {
                    return Err(self.syntax_error(
                        &token,
                        "expected a key name",
                        Some("Nested blocks must be preceded by a key name"),
                    ));
                }
                None => {
                    return Err(Error::unexpected_eof(
                        self.line,
                        self.column,
                        "'}'",
                        &format!(
                            "block opened at line {}, column {} is never closed",
                            open_line, open_col
                        ),
                    ));
                }
            };

            match self.next_token()? {
                Some(Token {
                    kind: TokenKind::Text(text),
                    ..
                }) => node.create_key(&key).set_value(Value::String(text)),
                Some(Token {
                    kind: TokenKind::Open,
                    line,
                    col,
                }) => {
                    let child = node.create_key(&key);
                    self.parse_block(child, line, col, depth + 1)?;
                }
                Some(token) => {
                    return Err(self.syntax_error(
                        &token,
                        &format!("expected a value or '{{' after key {:?}", key),
                        None,
                    ));
                }
                None => {
                    return Err(Error::unexpected_eof(
                        self.line,
                        self.column,
                        "a value or '{'",
                        &format!("key {:?} has no value", key),
                    ));
                }
            }
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        if let Some(ch) = self.input[self.position..].chars().next() {
            self.position += ch.len_utf8();
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            Some(ch)
        } else {
            None
        }
    }

    /// Skips whitespace and `//` comments.
    fn skip_trivia(&mut self) {
        loop {
            match self.peek_char() {
                Some(ch) if ch.is_whitespace() => {
                    self.next_char();
                }
                Some('/') if self.input[self.position..].starts_with("//") => {
                    while let Some(ch) = self.next_char() {
                        if ch == '\n' {
                            break;
                        }
                    }
                }
                _ => break,
            }
        }
    }

    fn next_token(&mut self) -> Result<Option<Token>> {
        self.skip_trivia();
        let (line, col) = (self.line, self.column);

        let kind = match self.peek_char() {
            None => return Ok(None),
            Some('{') => {
                self.next_char();
                TokenKind::Open
            }
            Some('}') => {
                self.next_char();
                TokenKind::Close
            }
            Some('"') => {
                self.next_char();
                TokenKind::Text(self.read_quoted(line, col)?)
            }
            Some(_) => TokenKind::Text(self.read_bare()),
        };

        Ok(Some(Token { kind, line, col }))
    }

    fn read_quoted(&mut self, line: usize, col: usize) -> Result<String> {
        let mut result = String::new();

        loop {
            match self.next_char() {
                None => return Err(Error::unterminated_string(line, col)),
                Some('"') => return Ok(result),
                Some('\\') if self.escape_sequences => match self.next_char() {
                    Some('n') => result.push('\n'),
                    Some('t') => result.push('\t'),
                    Some('r') => result.push('\r'),
                    Some('\\') => result.push('\\'),
                    Some('"') => result.push('"'),
                    Some(other) => {
                        result.push('\\');
                        result.push(other);
                    }
                    None => return Err(Error::unterminated_string(line, col)),
                },
                Some(ch) => result.push(ch),
            }
        }
    }

    fn read_bare(&mut self) -> String {
        let start = self.position;
        while let Some(ch) = self.peek_char() {
            if ch.is_whitespace() || matches!(ch, '{' | '}' | '"') {
                break;
            }
            self.next_char();
        }
        self.input[start..self.position].to_string()
    }

    fn syntax_error(&self, token: &Token, msg: &str, suggestion: Option<&str>) -> Error {
        self.syntax_error_at(token.line, token.col, msg, suggestion)
    }

    fn syntax_error_at(
        &self,
        line: usize,
        col: usize,
        msg: &str,
        suggestion: Option<&str>,
    ) -> Error {
        let context = self.input.lines().nth(line - 1).unwrap_or_default();
        Error::syntax_with_context(line, col, msg, context, suggestion)
    }
}

impl KeyValues {
    /// Replaces this node with the document parsed from `text`.
    ///
    /// The node's own escape-sequence flag selects how quoted tokens are
    /// read. The node's name becomes the document's root name. On error the
    /// node is left untouched.
    ///
    /// # Errors
    ///
    /// Returns a parse error if `text` is not a valid document.
    pub fn load_from_buffer(&mut self, text: &str) -> Result<()> {
        let parsed = Parser::new(text)
            .escape_sequences(self.uses_escape_sequences)
            .parse(&self.symbols)?;
        *self = parsed;
        Ok(())
    }

    /// Replaces this node with the document stored in the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or a parse error if
    /// its contents are malformed. On error the node is left untouched.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io_at(path, &e))?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "loading keyvalues file");
        self.load_from_buffer(&text)
    }

    /// Reads a fresh tree from the file at `path`, with escape sequences disabled.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or a parse error if
    /// its contents are malformed.
    pub fn from_file(symbols: &SymbolTable, path: impl AsRef<Path>) -> Result<KeyValues> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io_at(path, &e))?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "loading keyvalues file");
        Parser::new(&text).parse(symbols)
    }
}
