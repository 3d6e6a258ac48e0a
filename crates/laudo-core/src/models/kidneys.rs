use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::findings::{FindingId, FocalFinding};
use crate::measurement::Measurement;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Kidneys {
    pub right: Kidney,
    pub left: Kidney,
    /// Render the per-side measurement triples in the report.
    pub show_measurements: bool,
    pub bilateral_microlithiasis: bool,
    /// `None` when the collecting system is not dilated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dilation: Option<CollectingSystemDilation>,
}

impl Kidneys {
    pub fn side(&self, side: KidneySide) -> &Kidney {
        match side {
            KidneySide::Right => &self.right,
            KidneySide::Left => &self.left,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Kidney {
    pub present: bool,
    pub measurements: KidneyMeasurements,
    pub findings: Vec<RenalFinding>,
}

impl Default for Kidney {
    fn default() -> Self {
        Self {
            present: true,
            measurements: KidneyMeasurements::default(),
            findings: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct KidneyMeasurements {
    #[serde(
        default,
        deserialize_with = "crate::measurement::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub longitudinal: Option<Measurement>,
    #[serde(
        default,
        deserialize_with = "crate::measurement::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub parenchyma: Option<Measurement>,
    #[serde(
        default,
        deserialize_with = "crate::measurement::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub cortical: Option<Measurement>,
}

impl KidneyMeasurements {
    pub fn is_empty(&self) -> bool {
        self.longitudinal.is_none() && self.parenchyma.is_none() && self.cortical.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum KidneySide {
    #[serde(rename = "direito")]
    Right,
    #[serde(rename = "esquerdo")]
    Left,
}

impl KidneySide {
    pub const BOTH: [KidneySide; 2] = [KidneySide::Right, KidneySide::Left];

    /// Adjective agreeing with "rim" (masculine).
    pub fn label(self) -> &'static str {
        match self {
            Self::Right => "direito",
            Self::Left => "esquerdo",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RenalFinding {
    pub id: FindingId,
    #[serde(rename = "type")]
    pub kind: RenalFindingKind,
    #[serde(
        default,
        deserialize_with = "crate::measurement::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub size: Option<Measurement>,
    #[serde(default)]
    pub location: RenalThird,
}

impl RenalFinding {
    pub fn new(kind: RenalFindingKind) -> Self {
        Self {
            id: FindingId::new(),
            kind,
            size: None,
            location: RenalThird::default(),
        }
    }

    pub fn with_size(mut self, size: Option<Measurement>) -> Self {
        self.size = size;
        self
    }

    pub fn at(mut self, location: RenalThird) -> Self {
        self.location = location;
        self
    }
}

impl FocalFinding for RenalFinding {
    fn id(&self) -> FindingId {
        self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum RenalFindingKind {
    #[serde(rename = "cisto")]
    Cyst,
    #[serde(rename = "nodulo")]
    Nodule,
    #[serde(rename = "calculo")]
    Stone,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum RenalThird {
    #[serde(rename = "terço superior")]
    Upper,
    #[default]
    #[serde(rename = "terço médio")]
    Middle,
    #[serde(rename = "terço inferior")]
    Lower,
}

/// Side affected by a dilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Side {
    #[serde(rename = "direito")]
    Right,
    #[serde(rename = "esquerdo")]
    Left,
    #[serde(rename = "bilateral")]
    Bilateral,
}

/// Pyelocaliceal dilation with an independently chosen ureteral side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CollectingSystemDilation {
    pub pyelocaliceal: Side,
    /// `None` when the ureter is not dilated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ureteral: Option<Side>,
}
