//! Utility functions and types.

use std::fmt::Debug;

/// Redacts secrets before they reach `Debug` output.
///
/// - Strings shorter than 12 characters are entirely redacted.
/// - Longer strings keep only their first and last three characters.
/// - Raw bytes never show any content, only their length.
///
/// Keys and salts end up in logs through `Debug` impls of configs and
/// credentials, so they must always be wrapped in `Redact`.
pub enum Redact<'a> {
    /// Textual secret, like a hex encoded key.
    Str(&'a str),
    /// Decoded binary secret.
    Bytes(&'a [u8]),
}

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact::Str(value)
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact::Str(value.as_str())
    }
}

impl<'a> From<&'a Option<String>> for Redact<'a> {
    fn from(value: &'a Option<String>) -> Self {
        match value {
            None => Redact::Str(""),
            Some(v) => Redact::Str(v),
        }
    }
}

impl<'a> From<&'a [u8]> for Redact<'a> {
    fn from(value: &'a [u8]) -> Self {
        Redact::Bytes(value)
    }
}

impl<'a> From<&'a Vec<u8>> for Redact<'a> {
    fn from(value: &'a Vec<u8>) -> Self {
        Redact::Bytes(value.as_slice())
    }
}

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Redact::Bytes(v) if v.is_empty() => f.write_str("EMPTY"),
            Redact::Bytes(v) => write!(f, "*** ({} bytes)", v.len()),
            Redact::Str(v) => {
                let length = v.len();
                if length == 0 {
                    f.write_str("EMPTY")
                } else if length < 12 || !v.is_char_boundary(3) || !v.is_char_boundary(length - 3)
                {
                    f.write_str("***")
                } else {
                    f.write_str(&v[..3])?;
                    f.write_str("***")?;
                    f.write_str(&v[length - 3..])
                }
            }
        }
    }
}
