use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Technical limitations of the exam.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct TechnicalLimitations {
    pub body_habitus: bool,
    pub bowel_gas: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct FinalObservations {
    /// Suggest widening the propaedeutic work-up.
    pub suggest_further_workup: bool,
    pub gravid_abdomen: bool,
    pub free_text: String,
}
