use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::findings::{FindingId, FocalFinding};
use crate::measurement::Measurement;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Pancreas {
    pub status: PancreasStatus,
    pub findings: Vec<PancreaticFinding>,
    /// `None` when the main pancreatic duct is not dilated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wirsung_dilation: Option<WirsungDilation>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PancreasStatus {
    #[default]
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "parcialmente_acessivel")]
    PartiallyVisible,
    #[serde(rename = "inacessivel")]
    NotVisible,
    #[serde(rename = "sinais_pancreatite")]
    PancreatitisSigns,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WirsungDilation {
    #[serde(
        default,
        deserialize_with = "crate::measurement::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub measurement: Option<Measurement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PancreaticFinding {
    pub id: FindingId,
    #[serde(rename = "type")]
    pub kind: PancreaticFindingKind,
    #[serde(
        default,
        deserialize_with = "crate::measurement::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub size: Option<Measurement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<PancreaticRegion>,
}

impl PancreaticFinding {
    pub fn new(kind: PancreaticFindingKind) -> Self {
        Self {
            id: FindingId::new(),
            kind,
            size: None,
            location: None,
        }
    }

    pub fn with_size(mut self, size: Option<Measurement>) -> Self {
        self.size = size;
        self
    }

    pub fn at(mut self, location: PancreaticRegion) -> Self {
        self.location = Some(location);
        self
    }
}

impl FocalFinding for PancreaticFinding {
    fn id(&self) -> FindingId {
        self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PancreaticFindingKind {
    #[serde(rename = "cisto")]
    Cyst,
    #[serde(rename = "nodulo")]
    Nodule,
    #[serde(rename = "calcificacao")]
    Calcification,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PancreaticRegion {
    #[serde(rename = "cabeca")]
    Head,
    #[serde(rename = "corpo")]
    Body,
    #[serde(rename = "cauda")]
    Tail,
}
