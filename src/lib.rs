//! # keyvalues
//!
//! An order-preserving, case-insensitive key/value tree with typed accessors
//! and a brace-delimited text format.
//!
//! ## What is KeyValues?
//!
//! KeyValues is a small hierarchical data format used for configuration and
//! data interchange. A document is a tree of named nodes; each node either
//! holds a scalar or groups further nodes:
//!
//! ```text
//! "Config"
//! {
//!     "volume" "75"
//!     "Audio"
//!     {
//!         "enabled" "1"
//!     }
//! }
//! ```
//!
//! ## Key Features
//!
//! - **Ordered**: Children keep insertion order, duplicates included
//! - **Case-Insensitive Names**: Names are interned in a shared [`SymbolTable`]
//! - **Typed Accessors**: `get_int`, `get_float`, `get_color`, ... coerce on
//!   read and fall back to a caller-supplied default
//! - **Three Iteration Views**: all children, groups only, values only
//! - **Lossless Text Round-Trips**: Output parses back into an equivalent tree,
//!   with optional backslash escape sequences
//!
//! ## Quick Start
//!
//! ```rust
//! use keyvalues::{from_str, to_string, SymbolTable};
//!
//! let symbols = SymbolTable::new();
//! let text = r#"
//! "Config"
//! {
//!     "volume" "75"
//!     "Audio"
//!     {
//!         "enabled" "1"
//!     }
//! }
//! "#;
//!
//! let mut config = from_str(&symbols, text).unwrap();
//! assert_eq!(config.get_int("volume", 0), 75);
//! assert!(config.find_key("audio").unwrap().get_bool("enabled", false));
//!
//! config.set_float("Audio/gain", 0.5);
//! let saved = to_string(&config).unwrap();
//! let reloaded = from_str(&symbols, &saved).unwrap();
//! assert_eq!(reloaded.get_float("audio/gain", 0.0), 0.5);
//! ```
//!
//! ## Building Trees in Code
//!
//! ```rust
//! use keyvalues::{keyvalues, SymbolTable};
//!
//! let symbols = SymbolTable::new();
//! let kv = keyvalues!(symbols, "Player" {
//!     "name" => "Alice",
//!     "Stats" {
//!         "level" => 12
//!     }
//! });
//! assert_eq!(kv.get_int("stats/level", 0), 12);
//! ```
//!
//! ## Threading
//!
//! Trees and symbol tables are single-owner, single-threaded structures
//! (`!Send`). Share them across threads only behind external
//! synchronization of your own design.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`config.rs`** - Loading, editing and saving a config file
//! - **`iteration.rs`** - Walking values and groups
//! - **`escapes.rs`** - Escape-sequence handling
//!
//! Run any demo with: `cargo run --example <name>`

pub mod accessors;
pub mod de;
pub mod error;
pub mod iter;
pub mod macros;
pub mod node;
pub mod options;
pub mod ser;
pub mod symbol;
pub mod value;

pub use de::Parser;
pub use error::{Error, Result};
pub use iter::{SubKeys, TrueSubKeys, Values};
pub use node::KeyValues;
pub use options::{FormatOptions, Indent, DEFAULT_MAX_DEPTH};
pub use ser::Serializer;
pub use symbol::{Symbol, SymbolTable};
pub use value::{Color, ParseColorError, Value, ValueKind};

use std::io;

/// Serialize a tree to KeyValues text with default formatting (tab indentation).
///
/// Escape handling follows the tree's own flag.
///
/// # Errors
///
/// Returns [`Error::Unrepresentable`] if a token cannot be written losslessly.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string(kv: &KeyValues) -> Result<String> {
    to_string_with_options(kv, FormatOptions::default())
}

/// Serialize a tree to KeyValues text with custom options.
///
/// # Examples
///
/// ```rust
/// use keyvalues::{to_string_with_options, FormatOptions, Indent, KeyValues, SymbolTable};
///
/// let symbols = SymbolTable::new();
/// let kv = KeyValues::with_int(&symbols, "R", "n", 1);
/// let text = to_string_with_options(&kv, FormatOptions::new().with_indent(Indent::Spaces(2)))
///     .unwrap();
/// assert!(text.contains("  \"n\" \"1\""));
/// ```
///
/// # Errors
///
/// Returns [`Error::Unrepresentable`] if a token cannot be written losslessly.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options(kv: &KeyValues, options: FormatOptions) -> Result<String> {
    let mut serializer = Serializer::new(options);
    serializer.serialize(kv)?;
    Ok(serializer.into_inner())
}

/// Serialize a tree to a writer with default formatting.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(writer: W, kv: &KeyValues) -> Result<()>
where
    W: io::Write,
{
    to_writer_with_options(writer, kv, FormatOptions::default())
}

/// Serialize a tree to a writer with custom options.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W>(mut writer: W, kv: &KeyValues, options: FormatOptions) -> Result<()>
where
    W: io::Write,
{
    let text = to_string_with_options(kv, options)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Parse KeyValues text into a new tree, with escape sequences disabled.
///
/// Use [`Parser`] to enable escape sequences.
///
/// # Errors
///
/// Returns a parse error with line and column information if the text is malformed.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(symbols: &SymbolTable, s: &str) -> Result<KeyValues> {
    Parser::new(s).parse(symbols)
}

/// Parse KeyValues text from bytes.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8 or the text is malformed.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice(symbols: &SymbolTable, v: &[u8]) -> Result<KeyValues> {
    let s = std::str::from_utf8(v).map_err(Error::custom)?;
    from_str(symbols, s)
}

/// Parse KeyValues text from an I/O stream.
///
/// # Examples
///
/// ```rust
/// use keyvalues::{from_reader, SymbolTable};
/// use std::io::Cursor;
///
/// let symbols = SymbolTable::new();
/// let kv = from_reader(&symbols, Cursor::new(b"R { a 1 }")).unwrap();
/// assert_eq!(kv.get_int("a", 0), 1);
/// ```
///
/// # Errors
///
/// Returns an error if reading fails or the text is malformed.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R>(symbols: &SymbolTable, mut reader: R) -> Result<KeyValues>
where
    R: io::Read,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(symbols, &string)
}
