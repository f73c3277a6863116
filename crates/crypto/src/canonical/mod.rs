// Path: crates/crypto/src/canonical/mod.rs
//! RFC 8785 JSON Canonicalization Scheme.
//!
//! Canonical bytes are the pre-image of every agent hash, so this module must
//! agree byte-for-byte with every other JCS implementation:
//!
//! - object members sorted by key code point, no insignificant whitespace;
//! - strings escape only `"`, `\` and the C0 controls (`\b \f \n \r \t` by
//!   name, the rest as lowercase `\u00xx`);
//! - non-integers use the ECMAScript `Number.prototype.toString` form.
//!
//! Integers parsed from text are kept as `i64`/`u64` and written exactly.

use agentid_types::error::CanonicalError;
use serde::Serialize;
use std::collections::BTreeMap;

/// A JSON number that remembers whether it was an integer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// A signed integer.
    Int(i64),
    /// An unsigned integer beyond `i64::MAX` or parsed as unsigned.
    UInt(u64),
    /// Any other number.
    Float(f64),
}

/// A JSON value in the shape the canonicalizer consumes.
///
/// Object members live in a `BTreeMap<String, _>`, whose byte order on UTF-8
/// keys is code point order.
#[derive(Debug, Clone, PartialEq)]
pub enum CanonicalValue {
    /// `null`
    Null,
    /// `true` or `false`
    Bool(bool),
    /// A number.
    Number(Number),
    /// A string.
    String(String),
    /// An ordered array.
    Array(Vec<CanonicalValue>),
    /// An object with unique keys.
    Object(BTreeMap<String, CanonicalValue>),
}

impl CanonicalValue {
    /// Builds an object from key/value pairs. Later duplicates replace earlier ones.
    pub fn object<K, I>(members: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, CanonicalValue)>,
    {
        Self::Object(members.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl From<&str> for CanonicalValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for CanonicalValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<bool> for CanonicalValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for CanonicalValue {
    fn from(n: i64) -> Self {
        Self::Number(Number::Int(n))
    }
}

impl From<u64> for CanonicalValue {
    fn from(n: u64) -> Self {
        Self::Number(Number::UInt(n))
    }
}

impl From<f64> for CanonicalValue {
    fn from(n: f64) -> Self {
        Self::Number(Number::Float(n))
    }
}

impl From<serde_json::Number> for Number {
    fn from(n: serde_json::Number) -> Self {
        if let Some(i) = n.as_i64() {
            Number::Int(i)
        } else if let Some(u) = n.as_u64() {
            Number::UInt(u)
        } else {
            Number::Float(n.as_f64().unwrap_or(f64::NAN))
        }
    }
}

impl From<serde_json::Value> for CanonicalValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => Self::Number(n.into()),
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            Value::Object(members) => Self::Object(
                members
                    .into_iter()
                    .map(|(k, v)| (k, Self::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<CanonicalValue> for serde_json::Value {
    /// Non-finite floats have no JSON form and become `null`.
    fn from(value: CanonicalValue) -> Self {
        use serde_json::Value;
        match value {
            CanonicalValue::Null => Value::Null,
            CanonicalValue::Bool(b) => Value::Bool(b),
            CanonicalValue::Number(Number::Int(i)) => Value::from(i),
            CanonicalValue::Number(Number::UInt(u)) => Value::from(u),
            CanonicalValue::Number(Number::Float(f)) => serde_json::Number::from_f64(f)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            CanonicalValue::String(s) => Value::String(s),
            CanonicalValue::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            CanonicalValue::Object(members) => Value::Object(
                members
                    .into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

/// Canonicalizes a value into its RFC 8785 byte form.
pub fn canonicalize(value: &CanonicalValue) -> Result<Vec<u8>, CanonicalError> {
    to_canonical_string(value).map(String::into_bytes)
}

/// Canonicalizes a value into its RFC 8785 text form.
pub fn to_canonical_string(value: &CanonicalValue) -> Result<String, CanonicalError> {
    let mut out = String::new();
    write_value(&mut out, value)?;
    Ok(out)
}

/// Parses JSON text and canonicalizes it. Trailing non-whitespace is rejected.
pub fn canonicalize_str(json: &str) -> Result<Vec<u8>, CanonicalError> {
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| CanonicalError::Parse(e.to_string()))?;
    canonicalize(&value.into())
}

/// Canonicalizes anything that serializes to JSON.
pub fn canonicalize_serializable<T: Serialize + ?Sized>(
    value: &T,
) -> Result<Vec<u8>, CanonicalError> {
    let value =
        serde_json::to_value(value).map_err(|e| CanonicalError::Serialize(e.to_string()))?;
    canonicalize(&value.into())
}

fn write_value(out: &mut String, value: &CanonicalValue) -> Result<(), CanonicalError> {
    match value {
        CanonicalValue::Null => out.push_str("null"),
        CanonicalValue::Bool(true) => out.push_str("true"),
        CanonicalValue::Bool(false) => out.push_str("false"),
        CanonicalValue::Number(n) => write_number(out, *n)?,
        CanonicalValue::String(s) => write_string(out, s),
        CanonicalValue::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(out, item)?;
            }
            out.push(']');
        }
        CanonicalValue::Object(members) => {
            out.push('{');
            for (i, (key, member)) in members.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_string(out, key);
                out.push(':');
                write_value(out, member)?;
            }
            out.push('}');
        }
    }
    Ok(())
}

fn write_number(out: &mut String, n: Number) -> Result<(), CanonicalError> {
    match n {
        Number::Int(i) => out.push_str(&i.to_string()),
        Number::UInt(u) => out.push_str(&u.to_string()),
        Number::Float(f) => {
            if !f.is_finite() {
                return Err(CanonicalError::NonFiniteNumber);
            }
            // -0 prints as 0.
            let f = if f == 0.0 { 0.0 } else { f };
            let mut buf = ryu_js::Buffer::new();
            out.push_str(buf.format_finite(f));
        }
    }
    Ok(())
}

fn write_string(out: &mut String, s: &str) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if u32::from(c) < 0x20 => out.push_str(&format!("\\u{:04x}", u32::from(c))),
            c => out.push(c),
        }
    }
    out.push('"');
}

#[cfg(test)]
mod tests;
