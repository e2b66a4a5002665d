//! Configuration options for KeyValues serialization.
//!
//! - [`FormatOptions`]: Main configuration struct
//! - [`Indent`]: Indentation unit written once per nesting level
//!
//! Escape-sequence handling is not an option here: it belongs to the tree
//! (see [`KeyValues::set_uses_escape_sequences`](crate::KeyValues::set_uses_escape_sequences)).
//!
//! ## Examples
//!
//! ```rust
//! use keyvalues::{to_string_with_options, FormatOptions, Indent, KeyValues, SymbolTable};
//!
//! let symbols = SymbolTable::new();
//! let kv = KeyValues::with_string(&symbols, "Root", "key", "value");
//!
//! let options = FormatOptions::new().with_indent(Indent::Spaces(4));
//! let text = to_string_with_options(&kv, options).unwrap();
//! assert_eq!(text, "\"Root\"\n{\n    \"key\" \"value\"\n}\n");
//! ```

/// Default limit on nested blocks, shared by [`Parser`](crate::Parser) and
/// the serializer.
pub const DEFAULT_MAX_DEPTH: usize = 1024;

/// Indentation written once per nesting level.
///
/// # Examples
///
/// ```rust
/// use keyvalues::Indent;
///
/// assert_eq!(Indent::Tab.unit(), "\t");
/// assert_eq!(Indent::Spaces(2).unit(), "  ");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Indent {
    #[default]
    Tab,
    Spaces(usize),
}

impl Indent {
    /// Returns the text of one indentation level.
    #[must_use]
    pub fn unit(&self) -> String {
        match self {
            Indent::Tab => "\t".to_string(),
            Indent::Spaces(n) => " ".repeat(*n),
        }
    }
}

/// Configuration options for KeyValues serialization.
#[derive(Clone, Debug)]
pub struct FormatOptions {
    pub indent: Indent,
    /// Deepest block nesting the serializer will write, the root block included.
    pub max_depth: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            indent: Indent::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl FormatOptions {
    /// Creates default options (tab indentation).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyvalues::{FormatOptions, Indent};
    ///
    /// let options = FormatOptions::new();
    /// assert_eq!(options.indent, Indent::Tab);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the indentation unit.
    #[must_use]
    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    /// Sets the nesting limit.
    ///
    /// Trees built in code can nest arbitrarily deep; writing one past the
    /// limit fails instead of exhausting the stack.
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}
