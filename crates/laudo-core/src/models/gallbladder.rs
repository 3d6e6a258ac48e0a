use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::findings::{FindingId, FocalFinding};
use crate::measurement::Measurement;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Gallbladder {
    pub status: GallbladderStatus,
    pub findings: Vec<GallbladderFinding>,
    pub murphy_sign: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum GallbladderStatus {
    #[default]
    #[serde(rename = "normal")]
    Normal,
    /// Post-cholecystectomy.
    #[serde(rename = "ausente")]
    Absent,
    /// Empty or contracted, usually inadequate fasting.
    #[serde(rename = "vazia")]
    Contracted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GallbladderFinding {
    pub id: FindingId,
    #[serde(rename = "type")]
    pub kind: GallbladderFindingKind,
    #[serde(
        default,
        deserialize_with = "crate::measurement::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub size: Option<Measurement>,
}

impl GallbladderFinding {
    pub fn new(kind: GallbladderFindingKind) -> Self {
        Self {
            id: FindingId::new(),
            kind,
            size: None,
        }
    }

    pub fn with_size(mut self, size: Option<Measurement>) -> Self {
        self.size = size;
        self
    }
}

impl FocalFinding for GallbladderFinding {
    fn id(&self) -> FindingId {
        self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum GallbladderFindingKind {
    #[serde(rename = "calculo")]
    Stone,
    #[serde(rename = "polipo")]
    Polyp,
    #[serde(rename = "lama_biliar")]
    Sludge,
    #[serde(rename = "colesterolose")]
    Cholesterolosis,
    #[serde(rename = "espessamento_parietal")]
    WallThickening,
}
