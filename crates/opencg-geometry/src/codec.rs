//! JSON encoding and decoding of geometry values.
//!
//! The value types derive `serde` traits directly, so any serde format works.
//! This module pins JSON as the concrete wire format and turns
//! `serde_json` failures into crate errors.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::error::Category;

/// What went wrong while decoding.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DecodeErrorKind {
    /// Well-formed input with a missing field or a value of the wrong type.
    MissingOrInvalid,
    /// Malformed JSON.
    Syntax,
    /// Input ended before a complete value was read.
    Eof,
    /// Reading the input failed.
    Io,
}

/// A failure to decode a geometry record.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeError {
    pub kind: DecodeErrorKind,
    pub message: String,
    /// 1-based input line, 0 when not applicable.
    pub line: usize,
    /// 1-based input column, 0 when not applicable.
    pub col: usize,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "geometry decode error at {}:{}: {}", self.line, self.col, self.message)
    }
}

impl std::error::Error for DecodeError {}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        let kind = match err.classify() {
            Category::Data => DecodeErrorKind::MissingOrInvalid,
            Category::Syntax => DecodeErrorKind::Syntax,
            Category::Eof => DecodeErrorKind::Eof,
            Category::Io => DecodeErrorKind::Io,
        };
        Self {
            kind,
            message: err.to_string(),
            line: err.line(),
            col: err.column(),
        }
    }
}

/// A failure to encode a geometry value.
#[derive(Debug)]
pub struct EncodeError(serde_json::Error);

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "geometry encode error: {}", self.0)
    }
}

impl std::error::Error for EncodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

/// Encodes `value` as compact JSON.
///
/// Fails if any coordinate is NaN or infinite, since JSON has no spelling for
/// those and the record could not be decoded again.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, EncodeError> {
    serde_json::to_string(value).map_err(EncodeError)
}

pub fn to_json_value<T: Serialize>(value: &T) -> Result<serde_json::Value, EncodeError> {
    serde_json::to_value(value).map_err(EncodeError)
}

/// Decodes `T` from a JSON string.
///
/// Unknown fields are ignored; missing or mistyped fields fail, as do numbers
/// too large for `f32`.
pub fn from_json<T: DeserializeOwned>(src: &str) -> Result<T, DecodeError> {
    serde_json::from_str(src).map_err(|e| {
        let err = DecodeError::from(e);
        log::debug!("{err}");
        err
    })
}

pub fn from_json_value<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, DecodeError> {
    serde_json::from_value(value).map_err(|e| {
        let err = DecodeError::from(e);
        log::debug!("{err}");
        err
    })
}
