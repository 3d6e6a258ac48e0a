use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum BowelLoops {
    /// Leave bowel loops out of the report entirely.
    #[default]
    #[serde(rename = "nao_citar")]
    DoNotMention,
    #[serde(rename = "apendicite")]
    Appendicitis,
    #[serde(rename = "diverticulite")]
    Diverticulitis,
    #[serde(rename = "apendice_nao_caracterizado")]
    AppendixNotSeen,
    #[serde(rename = "sem_alteracoes")]
    Unremarkable,
}
