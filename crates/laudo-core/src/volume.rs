//! Ellipsoid volume approximation.
//!
//! `volume_ml = d1 * d2 * d3 * 0.00052` with dimensions in millimetres. The
//! UI calls [`ellipsoid_volume`] on every keystroke, so incomplete input is
//! never an error: it renders as `"0.0 ml"`.

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::measurement::Measurement;

/// Coefficient of the ellipsoid formula for millimetre inputs and millilitre output.
pub const ELLIPSOID_COEFFICIENT: f64 = 0.00052;

/// Rendered volume for any incomplete or invalid triple.
pub const ZERO_VOLUME: &str = "0.0 ml";

/// Volume from three raw dimension strings, rendered to one decimal place.
///
/// Any missing, non-numeric, zero or negative dimension yields [`ZERO_VOLUME`].
pub fn ellipsoid_volume(d1: &str, d2: &str, d3: &str) -> String {
    match (dimension(d1), dimension(d2), dimension(d3)) {
        (Some(a), Some(b), Some(c)) => format_ml(product(a, b, c)),
        _ => ZERO_VOLUME.to_string(),
    }
}

/// `"37.4 ml"` style rendering.
pub fn format_ml(volume: f64) -> String {
    format!("{volume:.1} ml")
}

fn dimension(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}

// Left-to-right so the float result matches the form's live preview exactly.
fn product(a: f64, b: f64, c: f64) -> f64 {
    a * b * c * ELLIPSOID_COEFFICIENT
}

/// Three orthogonal measurements of one bladder phase. On the wire each
/// element is a string, with `""` or `null` for a dimension not yet entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct VolumeTriple(pub [Option<Measurement>; 3]);

impl<'de> Deserialize<'de> for VolumeTriple {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let [d1, d2, d3] = <[Option<String>; 3]>::deserialize(deserializer)?;
        let parse = |raw: Option<String>| match raw {
            Some(raw) => Measurement::parse(&raw).map_err(serde::de::Error::custom),
            None => Ok(None),
        };
        Ok(Self([parse(d1)?, parse(d2)?, parse(d3)?]))
    }
}

impl VolumeTriple {
    pub fn new(d1: Option<Measurement>, d2: Option<Measurement>, d3: Option<Measurement>) -> Self {
        Self([d1, d2, d3])
    }

    /// Volume in millilitres when all three dimensions are positive.
    pub fn volume_ml(&self) -> Option<f64> {
        match &self.0 {
            [Some(a), Some(b), Some(c)]
                if a.is_positive() && b.is_positive() && c.is_positive() =>
            {
                Some(product(a.millimetres(), b.millimetres(), c.millimetres()))
            }
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }

    /// Some dimensions entered but no volume can be computed.
    pub fn is_partial(&self) -> bool {
        !self.is_empty() && self.volume_ml().is_none()
    }
}
