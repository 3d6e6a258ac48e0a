use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::bile_ducts::BileDucts;
use super::bladder::{Bladder, BladderVolume};
use super::bowel::BowelLoops;
use super::free_fluid::FreeFluid;
use super::gallbladder::Gallbladder;
use super::kidneys::Kidneys;
use super::liver::Liver;
use super::observations::{FinalObservations, TechnicalLimitations};
use super::pancreas::Pancreas;
use super::spleen::Spleen;
use super::vessels::{Aorta, VenaCava};
use crate::error::CoreError;

/// Everything recorded about one abdominal exam.
///
/// The default value is a completely normal exam. Missing sub-records in the
/// JSON form are filled with their normal state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct FindingsRecord {
    pub limitations: TechnicalLimitations,
    pub liver: Liver,
    pub gallbladder: Gallbladder,
    pub bile_ducts: BileDucts,
    pub pancreas: Pancreas,
    pub spleen: Spleen,
    pub aorta: Aorta,
    pub vena_cava: VenaCava,
    pub bowel_loops: BowelLoops,
    pub kidneys: Kidneys,
    pub bladder: Bladder,
    pub bladder_volume: BladderVolume,
    pub free_fluid: FreeFluid,
    pub final_observations: FinalObservations,
}

impl FindingsRecord {
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
