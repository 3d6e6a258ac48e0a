use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::measurement::Measurement;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "status")]
#[ts(export)]
pub enum Spleen {
    #[default]
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "aumentado")]
    Enlarged {
        #[serde(
            default,
            deserialize_with = "crate::measurement::optional",
            skip_serializing_if = "Option::is_none"
        )]
        longitudinal: Option<Measurement>,
    },
    /// Post-splenectomy.
    #[serde(rename = "ausente")]
    Absent,
}
