use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::findings::{FindingId, FocalFinding};
use crate::measurement::Measurement;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Liver {
    pub size: LiverSize,
    pub contour: LiverContour,
    pub texture: LiverTexture,
    /// `None` when there is no fatty infiltration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steatosis: Option<SteatosisGrade>,
    pub lesions: Vec<HepaticLesion>,
}

/// Lobe measurements only exist for an enlarged liver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "status")]
#[ts(export)]
pub enum LiverSize {
    #[default]
    #[serde(rename = "normais")]
    Normal,
    #[serde(rename = "aumentadas")]
    Enlarged {
        #[serde(
            default,
            deserialize_with = "crate::measurement::optional",
            skip_serializing_if = "Option::is_none"
        )]
        right_lobe: Option<Measurement>,
        #[serde(
            default,
            deserialize_with = "crate::measurement::optional",
            skip_serializing_if = "Option::is_none"
        )]
        left_lobe: Option<Measurement>,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum LiverContour {
    #[default]
    #[serde(rename = "regulares")]
    Regular,
    #[serde(rename = "irregulares")]
    Irregular,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum LiverTexture {
    #[default]
    #[serde(rename = "homogenea")]
    Homogeneous,
    #[serde(rename = "heterogenea")]
    Heterogeneous,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum SteatosisGrade {
    #[serde(rename = "discreta")]
    Mild,
    #[serde(rename = "moderada")]
    Moderate,
    #[serde(rename = "acentuada")]
    Marked,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HepaticLesion {
    pub id: FindingId,
    pub kind: HepaticLesionKind,
    #[serde(
        default,
        deserialize_with = "crate::measurement::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub size: Option<Measurement>,
    #[serde(default)]
    pub segment: HepaticSegment,
}

impl HepaticLesion {
    /// A freshly added lesion: new identity, no size, unspecified segment.
    pub fn new(kind: HepaticLesionKind) -> Self {
        Self {
            id: FindingId::new(),
            kind,
            size: None,
            segment: HepaticSegment::Unspecified,
        }
    }

    pub fn with_size(mut self, size: Option<Measurement>) -> Self {
        self.size = size;
        self
    }

    pub fn in_segment(mut self, segment: HepaticSegment) -> Self {
        self.segment = segment;
        self
    }
}

impl FocalFinding for HepaticLesion {
    fn id(&self) -> FindingId {
        self.id
    }
}

/// Free-text description only exists for lesions of kind `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type")]
#[ts(export)]
pub enum HepaticLesionKind {
    #[serde(rename = "cisto_simples")]
    SimpleCyst,
    #[serde(rename = "hemangioma")]
    Hemangioma,
    #[serde(rename = "nodulo_solido")]
    SolidNodule,
    #[serde(rename = "nodulo_hipoecoico")]
    HypoechoicNodule,
    #[serde(rename = "metastase")]
    Metastasis,
    #[serde(rename = "outro")]
    Other {
        #[serde(default)]
        description: String,
    },
}

/// Couinaud segment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum HepaticSegment {
    #[default]
    #[serde(rename = "nao_especificado")]
    Unspecified,
    I,
    II,
    III,
    IV,
    V,
    VI,
    VII,
    VIII,
}

impl HepaticSegment {
    /// Roman numeral, or `None` when unspecified.
    pub fn numeral(self) -> Option<&'static str> {
        match self {
            Self::Unspecified => None,
            Self::I => Some("I"),
            Self::II => Some("II"),
            Self::III => Some("III"),
            Self::IV => Some("IV"),
            Self::V => Some("V"),
            Self::VI => Some("VI"),
            Self::VII => Some("VII"),
            Self::VIII => Some("VIII"),
        }
    }

    /// Segment by number (1–8); 0 and out-of-range values are unspecified.
    pub fn from_number(n: u8) -> Self {
        match n {
            1 => Self::I,
            2 => Self::II,
            3 => Self::III,
            4 => Self::IV,
            5 => Self::V,
            6 => Self::VI,
            7 => Self::VII,
            8 => Self::VIII,
            _ => Self::Unspecified,
        }
    }
}
