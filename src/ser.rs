//! KeyValues text serialization.
//!
//! This module provides the [`Serializer`] that writes a [`KeyValues`] tree
//! as brace-delimited text.
//!
//! ## Output Shape
//!
//! - Pre-order, one entry per line, one indentation unit per nesting level
//! - Every name and value is quoted
//! - Groups render as the name on its own line followed by a brace block
//! - Pointer values are process-local and are skipped
//!
//! Output parses back into an equivalent tree. When the tree has escape
//! sequences enabled, `"`, `\`, newlines, tabs and carriage returns are
//! escaped. When it does not, text is written verbatim, and a token
//! containing `"` is rejected because it could not be read back.
//!
//! ```rust
//! use keyvalues::{to_string, KeyValues, SymbolTable};
//!
//! let symbols = SymbolTable::new();
//! let mut kv = KeyValues::new(&symbols, "Config");
//! kv.set_int("volume", 75);
//! kv.set_bool("Audio/enabled", true);
//!
//! assert_eq!(
//!     to_string(&kv).unwrap(),
//!     "\"Config\"\n{\n\t\"volume\" \"75\"\n\t\"Audio\"\n\t{\n\t\t\"enabled\" \"1\"\n\t}\n}\n"
//! );
//! ```

use crate::value::ValueKind;
use crate::{Error, FormatOptions, KeyValues, Result};
use std::io::Write;
use std::path::Path;

/// The KeyValues serializer.
///
/// Created via [`Serializer::new`]; feed it a root with
/// [`Serializer::serialize`] and take the text with [`Serializer::into_inner`].
pub struct Serializer {
    output: String,
    indent_unit: String,
    escape_sequences: bool,
    max_depth: usize,
}

impl Serializer {
    #[must_use]
    pub fn new(options: FormatOptions) -> Self {
        Serializer {
            output: String::with_capacity(256),
            indent_unit: options.indent.unit(),
            escape_sequences: false,
            max_depth: options.max_depth,
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    /// Writes `root` as a document, using the root's escape-sequence setting.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unrepresentable`] if the root itself holds a value,
    /// if a name or value contains `"` while escape sequences are disabled,
    /// or if blocks nest deeper than [`FormatOptions::max_depth`].
    pub fn serialize(&mut self, root: &KeyValues) -> Result<()> {
        if !root.value.is_none() {
            let text = root.value.to_text().unwrap_or_default();
            return Err(Error::unrepresentable(
                "root value",
                &text,
                "a document root must be a block",
            ));
        }

        self.escape_sequences = root.uses_escape_sequences;
        self.write_node(root, 0)
    }

    fn write_node(&mut self, node: &KeyValues, depth: usize) -> Result<()> {
        let name = node.name();

        if let Some(text) = node.value.to_text() {
            self.write_indent(depth);
            self.write_token("name", &name)?;
            self.output.push(' ');
            self.write_token("value", &text)?;
            self.output.push('\n');
            return Ok(());
        }

        if node.value.kind() == ValueKind::Pointer {
            tracing::trace!(key = %name, "skipping pointer value");
            return Ok(());
        }

        if depth >= self.max_depth {
            return Err(Error::unrepresentable(
                "block",
                &name,
                &format!("nested deeper than {} blocks", self.max_depth),
            ));
        }

        self.write_indent(depth);
        self.write_token("name", &name)?;
        self.output.push('\n');
        self.write_indent(depth);
        self.output.push_str("{\n");
        for child in &node.children {
            self.write_node(child, depth + 1)?;
        }
        self.write_indent(depth);
        self.output.push_str("}\n");
        Ok(())
    }

    fn write_indent(&mut self, depth: usize) {
        for _ in 0..depth {
            self.output.push_str(&self.indent_unit);
        }
    }

    fn write_token(&mut self, what: &str, s: &str) -> Result<()> {
        self.output.push('"');
        if self.escape_sequences {
            for ch in s.chars() {
                match ch {
                    '"' => self.output.push_str("\\\""),
                    '\\' => self.output.push_str("\\\\"),
                    '\n' => self.output.push_str("\\n"),
                    '\r' => self.output.push_str("\\r"),
                    '\t' => self.output.push_str("\\t"),
                    _ => self.output.push(ch),
                }
            }
        } else if s.contains('"') {
            return Err(Error::unrepresentable(
                what,
                s,
                "contains '\"' while escape sequences are disabled",
            ));
        } else {
            self.output.push_str(s);
        }
        self.output.push('"');
        Ok(())
    }
}

impl KeyValues {
    /// Writes this tree to `path`, replacing any existing file.
    ///
    /// The text goes to a temporary file in the same directory first and is
    /// renamed into place, so the target is either fully written or left as
    /// it was.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be written, or
    /// [`Error::Unrepresentable`] if the tree cannot be serialized.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        self.save_to_file_with_options(path, FormatOptions::default())
    }

    /// Writes this tree to `path` with custom formatting options.
    ///
    /// # Errors
    ///
    /// See [`KeyValues::save_to_file`].
    pub fn save_to_file_with_options(
        &self,
        path: impl AsRef<Path>,
        options: FormatOptions,
    ) -> Result<()> {
        let path = path.as_ref();
        let text = crate::to_string_with_options(self, options)?;

        let dir = path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let mut file = tempfile::NamedTempFile::new_in(dir).map_err(|e| Error::io_at(path, &e))?;
        file.write_all(text.as_bytes())
            .map_err(|e| Error::io_at(path, &e))?;
        file.as_file()
            .sync_all()
            .map_err(|e| Error::io_at(path, &e))?;
        file.persist(path)
            .map_err(|e| Error::io_at(path, &e.error))?;

        tracing::debug!(path = %path.display(), bytes = text.len(), "saved keyvalues file");
        Ok(())
    }
}
