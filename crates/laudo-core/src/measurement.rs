use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// A linear measurement in millimetres, as typed by the sonographer.
///
/// The original spelling is kept for rendering (`"160"` stays `160`, `"12.50"`
/// stays `12.50`) so the report echoes what the clinician entered. Only plain
/// non-negative decimals are accepted: no sign, exponent or thousands separator.
/// A bare leading or trailing dot is completed (`".5"` becomes `0.5`, `"5."`
/// becomes `5`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, TS)]
#[ts(export)]
pub struct Measurement(String);

impl Measurement {
    /// Parse user input. Blank input means "not measured" and yields `None`.
    pub fn parse(input: &str) -> Result<Option<Self>, CoreError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        if !is_plain_decimal(trimmed) {
            return Err(CoreError::InvalidMeasurement(input.to_string()));
        }
        Ok(Some(Self(normalise(trimmed))))
    }

    /// Numeric value in millimetres.
    pub fn millimetres(&self) -> f64 {
        // Construction guarantees a plain decimal, which always parses.
        self.0.parse().unwrap_or_default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the measurement is strictly positive (usable in a volume).
    pub fn is_positive(&self) -> bool {
        self.millimetres() > 0.0
    }
}

fn is_plain_decimal(s: &str) -> bool {
    let mut digits = 0;
    let mut dots = 0;
    for c in s.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => dots += 1,
            _ => return false,
        }
    }
    digits > 0 && dots <= 1
}

fn normalise(s: &str) -> String {
    let s = s.strip_suffix('.').unwrap_or(s);
    if s.starts_with('.') { format!("0{s}") } else { s.to_string() }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Measurement {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Measurement::parse(&raw)
            .map_err(serde::de::Error::custom)?
            .ok_or_else(|| serde::de::Error::custom("blank measurement"))
    }
}

/// `deserialize_with` helper for optional measurement fields: `null` and
/// blank strings both mean "not measured".
pub fn optional<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Measurement>, D::Error> {
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => Measurement::parse(&raw).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Convenience for tests and fixtures: parse a literal known to be valid.
///
/// Returns `None` for blank or malformed input.
pub fn mm(input: &str) -> Option<Measurement> {
    Measurement::parse(input).ok().flatten()
}
