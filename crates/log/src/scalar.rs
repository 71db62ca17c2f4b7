use std::fmt;

use chrono::NaiveTime;
use serde::Serialize;

use crate::error::{ParseError, Result};
use crate::split::split_once_exact;

/// Separator between a field label and its value
const LABEL_SEPARATOR: &str = ": ";

/// Separator between a material name and its quantity
const MATERIAL_SEPARATOR: &str = " : ";

/// A numeric log value, kept integral where the log quoted an integer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Parse a decimal value, integer-first with a float fallback.
    pub fn parse(value: &str) -> Result<Self> {
        if let Ok(int) = value.parse::<i64>() {
            return Ok(Self::Int(int));
        }
        value
            .parse::<f64>()
            .map(Self::Float)
            .map_err(|_| ParseError::InvalidNumber {
                value: value.to_string(),
            })
    }

    /// The value widened for arithmetic
    #[must_use]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(value) => value as f64,
            Self::Float(value) => value,
        }
    }

    /// The integer value, if the log quoted an integer
    #[must_use]
    pub const fn as_int(self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(value),
            Self::Float(_) => None,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
        }
    }
}

/// Decode the bracketed `[HH:MM:SS] ` prefix of a raw log line.
///
/// Takes the prefix up to the first `"] "`, strips the leading bracket and
/// parses a strict 24-hour time of day. No date, no timezone.
pub fn decode_timestamp(line: &str) -> Result<NaiveTime> {
    let prefix = line.split_once("] ").map_or(line, |(prefix, _)| prefix);
    let text = prefix
        .strip_prefix('[')
        .ok_or_else(|| ParseError::InvalidTimestamp {
            text: prefix.to_string(),
        })?;
    NaiveTime::parse_from_str(text, "%H:%M:%S").map_err(|_| ParseError::InvalidTimestamp {
        text: text.to_string(),
    })
}

/// Decode a `label: value` payload into its numeric value.
pub fn decode_numeric(payload: &str) -> Result<Number> {
    let (_, value) = split_once_exact(payload, LABEL_SEPARATOR)?;
    Number::parse(value)
}

/// Decode a `name : quantity` payload; the quantity must be a decimal integer.
pub fn decode_material(payload: &str) -> Result<(String, i64)> {
    let (name, quantity) = split_once_exact(payload, MATERIAL_SEPARATOR)?;
    let quantity = quantity
        .parse::<i64>()
        .map_err(|_| ParseError::InvalidQuantity {
            value: quantity.to_string(),
        })?;
    Ok((name.to_string(), quantity))
}
