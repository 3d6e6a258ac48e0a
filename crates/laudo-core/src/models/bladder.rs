use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::findings::{FindingId, FocalFinding};
use crate::measurement::Measurement;
use crate::volume::VolumeTriple;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Bladder {
    pub status: BladderStatus,
    pub findings: Vec<BladderFinding>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum BladderStatus {
    #[default]
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "trabeculada")]
    Trabeculated,
    #[serde(rename = "insuficiente")]
    Underfilled,
    /// Mobile echoes in suspension; triggers a suggested conclusion.
    #[serde(rename = "ecos_moveis")]
    MobileEchoes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BladderFinding {
    pub id: FindingId,
    #[serde(rename = "type")]
    pub kind: BladderFindingKind,
    #[serde(
        default,
        deserialize_with = "crate::measurement::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub size: Option<Measurement>,
}

impl BladderFinding {
    pub fn new(kind: BladderFindingKind) -> Self {
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

impl FocalFinding for BladderFinding {
    fn id(&self) -> FindingId {
        self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum BladderFindingKind {
    #[serde(rename = "calculo")]
    Stone,
    #[serde(rename = "lesao_vegetante")]
    VegetatingLesion,
    #[serde(rename = "diverticulo")]
    Diverticulum,
    #[serde(rename = "coagulo")]
    Clot,
}

/// Pre-void and post-void (residual) ellipsoid measurements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct BladderVolume {
    pub pre_void: VolumeTriple,
    pub post_void: VolumeTriple,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum VoidPhase {
    PreVoid,
    PostVoid,
}

impl BladderVolume {
    pub fn phase(&self, phase: VoidPhase) -> &VolumeTriple {
        match phase {
            VoidPhase::PreVoid => &self.pre_void,
            VoidPhase::PostVoid => &self.post_void,
        }
    }
}
