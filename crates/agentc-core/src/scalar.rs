//! Scalar formatting for front matter emission.
//!
//! Every front matter line that Agentc writes goes through [`format_scalar`],
//! which turns a key plus a [`Scalar`] value into one canonical YAML-compatible
//! line. The formatter is deliberately small: booleans and numbers are emitted
//! bare, multiline strings become block literals, and strings that a YAML
//! parser could misread are double-quoted. It is not a general YAML emitter.
//!
//! # Examples
//!
//! ```
//! use agentc_core::scalar::{format_scalar, Scalar};
//!
//! assert_eq!(format_scalar("model", &Scalar::from("claude-3-opus")), "model: claude-3-opus\n");
//! assert_eq!(format_scalar("background", &Scalar::Bool(true)), "background: true\n");
//! ```

use serde_json::{Number, Value as JsonValue};

use crate::error::Error;

/// Characters that force double-quoting wherever they appear in a string.
const RESERVED_ANYWHERE: &[char] = &[':', '#', '"', '\'', '`', '\t'];

/// Characters that force double-quoting only in the leading position, where
/// YAML treats them as indicators.
const RESERVED_LEADING: &[char] = &[
    '-', '?', '[', ']', '{', '}', '&', '*', '!', '|', '>', '%', '@', ',',
];

/// A single front matter value.
///
/// The compiler only ever emits booleans, numbers, and text. Anything else in
/// an entity definition (null, arrays-of-arrays, nested maps) is rejected at
/// conversion time with [`Error::UnsupportedScalar`].
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// Boolean, emitted as bare `true` / `false`
    Bool(bool),
    /// Number, emitted in canonical decimal form
    Number(Number),
    /// Text, emitted plain, quoted, or as a block literal
    Text(String),
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Number(Number::from(value))
    }
}

impl From<u64> for Scalar {
    fn from(value: u64) -> Self {
        Scalar::Number(Number::from(value))
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

impl TryFrom<&JsonValue> for Scalar {
    type Error = Error;

    fn try_from(value: &JsonValue) -> Result<Self, Error> {
        match value {
            JsonValue::Bool(b) => Ok(Scalar::Bool(*b)),
            JsonValue::Number(n) => Ok(Scalar::Number(n.clone())),
            JsonValue::String(s) => Ok(Scalar::Text(s.clone())),
            JsonValue::Null => Err(Error::UnsupportedScalar { kind: "null" }),
            JsonValue::Array(_) => Err(Error::UnsupportedScalar { kind: "array" }),
            JsonValue::Object(_) => Err(Error::UnsupportedScalar { kind: "object" }),
        }
    }
}

/// Returns true if `s` must be double-quoted to survive a YAML parse.
///
/// The check is conservative: empty strings, leading or trailing whitespace,
/// reserved punctuation, leading YAML indicators, and strings a parser would
/// read back as a non-string (`true`, `null`, `42`, ...) all trigger quoting.
pub fn needs_quoting(s: &str) -> bool {
    if s.is_empty() {
        return true;
    }
    if s.starts_with(char::is_whitespace) || s.ends_with(char::is_whitespace) {
        return true;
    }
    if s.contains(RESERVED_ANYWHERE) {
        return true;
    }
    if s.starts_with(RESERVED_LEADING) {
        return true;
    }
    is_ambiguous_literal(s)
}

/// Formats one front matter line for `key` and `value`.
///
/// The returned string always ends in a newline. Multiline text becomes a
/// block literal (`key: |`) with every line indented two spaces; text that
/// [`needs_quoting`] becomes a double-quoted string with `\` and `"` escaped.
pub fn format_scalar(key: &str, value: &Scalar) -> String {
    match value {
        Scalar::Bool(b) => format!("{}: {}\n", key, b),
        Scalar::Number(n) => format!("{}: {}\n", key, n),
        Scalar::Text(s) if s.contains('\n') => format_block_literal(key, s),
        Scalar::Text(s) if needs_quoting(s) => format!("{}: \"{}\"\n", key, escape_quoted(s)),
        Scalar::Text(s) => format!("{}: {}\n", key, s),
    }
}

/// Formats a block sequence for `key` and `items`.
///
/// Each item on its own `  - ` line, encoded with the same rules as
/// [`format_scalar`]. Callers should skip empty sequences entirely rather
/// than emit a dangling key.
pub fn format_sequence(key: &str, items: &[Scalar]) -> String {
    let mut out = format!("{}:\n", key);
    for item in items {
        out.push_str(&format_sequence_item(item));
    }
    out
}

fn format_block_literal(key: &str, value: &str) -> String {
    let mut out = format!("{}: |\n", key);
    for line in value.lines() {
        out.push_str("  ");
        out.push_str(line);
        out.push('\n');
    }
    out
}

fn format_sequence_item(item: &Scalar) -> String {
    match item {
        Scalar::Bool(b) => format!("  - {}\n", b),
        Scalar::Number(n) => format!("  - {}\n", n),
        Scalar::Text(s) if s.contains('\n') => {
            let mut out = String::from("  - |\n");
            for line in s.lines() {
                out.push_str("    ");
                out.push_str(line);
                out.push('\n');
            }
            out
        }
        Scalar::Text(s) if needs_quoting(s) => format!("  - \"{}\"\n", escape_quoted(s)),
        Scalar::Text(s) => format!("  - {}\n", s),
    }
}

fn escape_quoted(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

fn is_ambiguous_literal(s: &str) -> bool {
    let lower = s.to_ascii_lowercase();
    if matches!(
        lower.as_str(),
        "true" | "false" | "null" | "~" | "yes" | "no" | "on" | "off"
    ) {
        return true;
    }
    if s.parse::<f64>().is_ok() {
        return true;
    }
    // YAML numeric spellings Rust's float parser does not accept: radix
    // integers and the .inf/.nan family, with an optional sign.
    let unsigned = lower.strip_prefix(['+', '-']).unwrap_or(lower.as_str());
    matches!(unsigned, ".inf" | ".nan") || is_radix_integer(unsigned)
}

fn is_radix_integer(s: &str) -> bool {
    let (digits, radix) = if let Some(rest) = s.strip_prefix("0x") {
        (rest, 16)
    } else if let Some(rest) = s.strip_prefix("0o") {
        (rest, 8)
    } else if let Some(rest) = s.strip_prefix("0b") {
        (rest, 2)
    } else {
        return false;
    };
    !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix))
}
