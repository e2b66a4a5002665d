//! Typed reads and writes keyed by name or path.
//!
//! Every `get_*` looks the key up without creating it. A missing key returns
//! the caller's default untouched; a present key is coerced with the
//! conversions on [`Value`], and a value that cannot be read as the requested
//! type also falls back to the default. `get_bool` is the one exception: once
//! the key exists its answer comes from the stored value alone.
//!
//! Every `set_*` creates the key when it is new (appending it) and otherwise
//! overwrites the value in place, keeping the key's position.

use crate::value::{Color, Value};
use crate::KeyValues;
use std::borrow::Cow;

impl KeyValues {
    #[must_use]
    pub fn get_int(&self, key: &str, default: i32) -> i32 {
        self.find_key(key)
            .and_then(|kv| kv.value.to_int())
            .unwrap_or(default)
    }

    #[must_use]
    pub fn get_uint64(&self, key: &str, default: u64) -> u64 {
        self.find_key(key)
            .and_then(|kv| kv.value.to_uint64())
            .unwrap_or(default)
    }

    #[must_use]
    pub fn get_float(&self, key: &str, default: f32) -> f32 {
        self.find_key(key)
            .and_then(|kv| kv.value.to_float())
            .unwrap_or(default)
    }

    /// Returns the text of the value at `key`.
    ///
    /// Strings are borrowed; numbers and colors are formatted the way the
    /// serializer writes them.
    #[must_use]
    pub fn get_string<'a>(&'a self, key: &str, default: &'a str) -> Cow<'a, str> {
        self.find_key(key)
            .and_then(|kv| kv.value.to_text())
            .unwrap_or(Cow::Borrowed(default))
    }

    /// Returns the value at `key` read as a boolean, or `default` if the key is missing.
    ///
    /// ```rust
    /// use keyvalues::{KeyValues, SymbolTable};
    ///
    /// let symbols = SymbolTable::new();
    /// let mut kv = KeyValues::new(&symbols, "flags");
    /// kv.set_string("enabled", "True");
    /// kv.set_string("label", "on");
    ///
    /// assert!(kv.get_bool("enabled", false));
    /// assert!(!kv.get_bool("label", true));
    /// assert!(kv.get_bool("missing", true));
    /// ```
    #[must_use]
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.find_key(key)
            .map_or(default, |kv| kv.value.to_bool())
    }

    #[must_use]
    pub fn get_color(&self, key: &str, default: Color) -> Color {
        self.find_key(key)
            .and_then(|kv| kv.value.to_color())
            .unwrap_or(default)
    }

    /// Returns the opaque pointer handle stored at `key`.
    #[must_use]
    pub fn get_ptr(&self, key: &str, default: usize) -> usize {
        self.find_key(key)
            .and_then(|kv| kv.value.to_ptr())
            .unwrap_or(default)
    }

    /// Stores any scalar at `key`, creating the key if needed.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.find_or_create_key(key).set_value(value);
    }

    pub fn set_string(&mut self, key: &str, value: &str) {
        self.set(key, value);
    }

    pub fn set_int(&mut self, key: &str, value: i32) {
        self.set(key, value);
    }

    pub fn set_uint64(&mut self, key: &str, value: u64) {
        self.set(key, value);
    }

    pub fn set_float(&mut self, key: &str, value: f32) {
        self.set(key, value);
    }

    pub fn set_color(&mut self, key: &str, value: Color) {
        self.set(key, value);
    }

    /// Stores a boolean as the integer `1` or `0`.
    pub fn set_bool(&mut self, key: &str, value: bool) {
        self.set(key, value);
    }

    pub fn set_ptr(&mut self, key: &str, value: usize) {
        self.set(key, Value::Pointer(value));
    }
}
