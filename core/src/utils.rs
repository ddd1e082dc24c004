//! Utility functions and types.

use std::fmt::Debug;

use crate::{Error, Result};

/// Redacts secrets for `Debug` output.
///
/// Text values:
///
/// - If the input string has fewer than 12 characters, it should be entirely redacted.
/// - If the input string has 12 or more characters, only the first three and the last three.
///
/// Byte values never reveal content, only their length.
pub struct Redact<'a>(Secret<'a>);

enum Secret<'a> {
    Text(&'a str),
    Bytes(&'a [u8]),
}

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact(Secret::Text(value))
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact(Secret::Text(value.as_str()))
    }
}

impl<'a> From<&'a Option<String>> for Redact<'a> {
    fn from(value: &'a Option<String>) -> Self {
        match value {
            None => Redact(Secret::Text("")),
            Some(v) => Redact(Secret::Text(v)),
        }
    }
}

impl<'a> From<&'a [u8]> for Redact<'a> {
    fn from(value: &'a [u8]) -> Self {
        Redact(Secret::Bytes(value))
    }
}

impl<'a> From<&'a Vec<u8>> for Redact<'a> {
    fn from(value: &'a Vec<u8>) -> Self {
        Redact(Secret::Bytes(value.as_slice()))
    }
}

impl<'a> Debug for Redact<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Secret::Bytes(v) if v.is_empty() => f.write_str("EMPTY"),
            Secret::Bytes(v) => write!(f, "***({} bytes)", v.len()),
            Secret::Text(v) => {
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

/// Reject an empty required argument.
///
/// `scope` names the operation, `field` the argument, so the message reads
/// like `SASToken: url may not be empty`.
pub fn require_non_empty(scope: &str, field: &str, value: impl AsRef<[u8]>) -> Result<()> {
    if value.as_ref().is_empty() {
        return Err(Error::invalid_argument(format!(
            "{scope}: {field} may not be empty"
        )));
    }
    Ok(())
}
