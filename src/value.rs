//! Scalar payloads stored in KeyValues nodes.
//!
//! A node holds at most one scalar: a [`Value`]. Typed reads go through the
//! `to_*` conversions here, which implement the coercion order used by the
//! accessors on [`KeyValues`](crate::KeyValues):
//!
//! 1. Native match
//! 2. Numeric cross-conversion (`Int` / `Float` / `UInt64`)
//! 3. Parsing a `String` with the textual grammar of the requested type
//! 4. Anything else is not coercible and yields `None`
//!
//! ```rust
//! use keyvalues::{Color, Value};
//!
//! assert_eq!(Value::from("42").to_int(), Some(42));
//! assert_eq!(Value::Float(2.9).to_int(), Some(2));
//! assert_eq!(Value::from("nope").to_int(), None);
//! assert_eq!(Value::from("255 128 0 255").to_color(), Some(Color::new(255, 128, 0, 255)));
//! ```

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// The kind tag of a [`Value`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ValueKind {
    #[default]
    None,
    String,
    Int,
    Float,
    UInt64,
    Color,
    Pointer,
}

impl ValueKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ValueKind::None => "none",
            ValueKind::String => "string",
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::UInt64 => "uint64",
            ValueKind::Color => "color",
            ValueKind::Pointer => "pointer",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An RGBA color with 8-bit components.
///
/// The packed form stores red in the lowest byte and alpha in the highest.
///
/// ```rust
/// use keyvalues::Color;
///
/// let c = Color::new(1, 2, 3, 4);
/// assert_eq!(c.to_packed(), 0x0403_0201);
/// assert_eq!(Color::from_packed(0x0403_0201), c);
/// assert_eq!(c.to_string(), "1 2 3 4");
/// assert_eq!("1 2 3 4".parse::<Color>(), Ok(c));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    #[must_use]
    pub const fn from_packed(raw: u32) -> Self {
        let [r, g, b, a] = raw.to_le_bytes();
        Color { r, g, b, a }
    }

    #[must_use]
    pub const fn to_packed(self) -> u32 {
        u32::from_le_bytes([self.r, self.g, self.b, self.a])
    }

    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Color { r, g, b, a }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.r, self.g, self.b, self.a)
    }
}

/// Error returned when text is not four whitespace-separated components in `0..=255`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseColorError;

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expected four color components in 0..=255")
    }
}

impl std::error::Error for ParseColorError {}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut components = [0u8; 4];
        let mut parts = s.split_whitespace();
        for slot in &mut components {
            *slot = parts
                .next()
                .and_then(|part| part.parse().ok())
                .ok_or(ParseColorError)?;
        }
        if parts.next().is_some() {
            return Err(ParseColorError);
        }
        Ok(Color::from(components))
    }
}

/// A scalar payload. `None` marks a node with no value of its own.
///
/// Numeric widths follow the KeyValues data model: `Int` is 32-bit signed,
/// `Float` is single precision, `UInt64` is 64-bit unsigned. `Pointer` is an
/// opaque, process-local handle and is never written to text.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    None,
    String(String),
    Int(i32),
    Float(f32),
    UInt64(u64),
    Color(Color),
    Pointer(usize),
}

impl Value {
    /// Returns the kind tag of this value.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Value::None => ValueKind::None,
            Value::String(_) => ValueKind::String,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::UInt64(_) => ValueKind::UInt64,
            Value::Color(_) => ValueKind::Color,
            Value::Pointer(_) => ValueKind::Pointer,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// If the value is a string, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Reads the value as a 32-bit integer.
    ///
    /// Floats truncate toward zero (saturating at the `i32` range), `UInt64`
    /// wraps to its low 32 bits, strings must hold a decimal integer.
    #[must_use]
    pub fn to_int(&self) -> Option<i32> {
        match self {
            Value::Int(i) => Some(*i),
            Value::Float(f) => Some(*f as i32),
            Value::UInt64(u) => Some(*u as i32),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Reads the value as an unsigned 64-bit integer.
    ///
    /// Negative integers keep their two's-complement bit pattern.
    #[must_use]
    pub fn to_uint64(&self) -> Option<u64> {
        match self {
            Value::UInt64(u) => Some(*u),
            Value::Int(i) => Some(*i as u64),
            Value::Float(f) => Some(*f as u64),
            Value::String(s) => {
                let s = s.trim();
                s.parse::<u64>()
                    .ok()
                    .or_else(|| s.parse::<i64>().ok().map(|i| i as u64))
            }
            _ => None,
        }
    }

    /// Reads the value as a single-precision float.
    #[must_use]
    pub fn to_float(&self) -> Option<f32> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f32),
            Value::UInt64(u) => Some(*u as f32),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Reads the value as a boolean.
    ///
    /// Nonzero numbers, `"true"` in any case, and numeric strings with a
    /// nonzero value are true. Everything else, including kinds with no
    /// numeric meaning, is false.
    #[must_use]
    pub fn to_bool(&self) -> bool {
        match self {
            Value::Int(i) => *i != 0,
            Value::Float(f) => *f != 0.0,
            Value::UInt64(u) => *u != 0,
            Value::String(s) => {
                let s = s.trim();
                s.eq_ignore_ascii_case("true") || s.parse::<f64>().map_or(false, |n| n != 0.0)
            }
            _ => false,
        }
    }

    /// Reads the value as a color.
    ///
    /// Integers are treated as packed RGBA; strings must hold four components.
    #[must_use]
    pub fn to_color(&self) -> Option<Color> {
        match self {
            Value::Color(c) => Some(*c),
            Value::Int(i) => Some(Color::from_packed(*i as u32)),
            Value::UInt64(u) => Some(Color::from_packed(*u as u32)),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// Reads the value as an opaque pointer handle. Only `Pointer` values qualify.
    #[must_use]
    pub fn to_ptr(&self) -> Option<usize> {
        match self {
            Value::Pointer(p) => Some(*p),
            _ => None,
        }
    }

    /// Renders the value as text, borrowing when it already is a string.
    ///
    /// This is the form written by the serializer. `None` and `Pointer`
    /// have no textual form.
    #[must_use]
    pub fn to_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Value::String(s) => Some(Cow::Borrowed(s)),
            Value::Int(i) => Some(Cow::Owned(i.to_string())),
            Value::Float(f) => Some(Cow::Owned(f.to_string())),
            Value::UInt64(u) => Some(Cow::Owned(u.to_string())),
            Value::Color(c) => Some(Cow::Owned(c.to_string())),
            Value::None | Value::Pointer(_) => None,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Int(i32::from(value))
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value as f32)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::UInt64(value)
    }
}

impl From<Color> for Value {
    fn from(value: Color) -> Self {
        Value::Color(value)
    }
}
