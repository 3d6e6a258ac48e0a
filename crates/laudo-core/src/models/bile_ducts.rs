use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::measurement::Measurement;

/// Common bile duct. Caliber and stone only exist for a dilated duct.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "status")]
#[ts(export)]
pub enum BileDucts {
    #[default]
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "ectasiado")]
    Dilated {
        #[serde(
            default,
            deserialize_with = "crate::measurement::optional",
            skip_serializing_if = "Option::is_none"
        )]
        caliber: Option<Measurement>,
        #[serde(default)]
        stone: bool,
    },
}
