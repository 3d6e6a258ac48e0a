use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::measurement::Measurement;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "status")]
#[ts(export)]
pub enum Aorta {
    #[default]
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "ectasiada")]
    Ectatic {
        #[serde(
            default,
            deserialize_with = "crate::measurement::optional",
            skip_serializing_if = "Option::is_none"
        )]
        caliber: Option<Measurement>,
    },
    #[serde(rename = "ausente")]
    NotAssessable,
    #[serde(rename = "placas")]
    Plaques,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "status")]
#[ts(export)]
pub enum VenaCava {
    #[default]
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "dilatada")]
    Dilated {
        #[serde(
            default,
            deserialize_with = "crate::measurement::optional",
            skip_serializing_if = "Option::is_none"
        )]
        caliber: Option<Measurement>,
    },
    #[serde(rename = "comprimida")]
    Compressed,
    #[serde(rename = "trombose")]
    Thrombosed,
}
