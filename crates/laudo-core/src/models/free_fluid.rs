use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Free fluid location. Free text only exists for a focal accumulation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "location")]
#[ts(export)]
pub enum FreeFluid {
    #[default]
    #[serde(rename = "ausente")]
    Absent,
    #[serde(rename = "abdome")]
    Abdomen,
    #[serde(rename = "pelve")]
    Pelvis,
    #[serde(rename = "fossa_hepato_renal")]
    HepatorenalFossa,
    #[serde(rename = "flanco_direito")]
    RightFlank,
    #[serde(rename = "flanco_esquerdo")]
    LeftFlank,
    #[serde(rename = "fossa_iliaca_direita")]
    RightIliacFossa,
    #[serde(rename = "fossa_iliaca_esquerda")]
    LeftIliacFossa,
    #[serde(rename = "acumulo_focal")]
    FocalAccumulation {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        site: Option<String>,
    },
}

impl FreeFluid {
    /// The wire value of the location, as the form submits it.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::Absent => "ausente",
            Self::Abdomen => "abdome",
            Self::Pelvis => "pelve",
            Self::HepatorenalFossa => "fossa_hepato_renal",
            Self::RightFlank => "flanco_direito",
            Self::LeftFlank => "flanco_esquerdo",
            Self::RightIliacFossa => "fossa_iliaca_direita",
            Self::LeftIliacFossa => "fossa_iliaca_esquerda",
            Self::FocalAccumulation { .. } => "acumulo_focal",
        }
    }
}
