use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::patient::PatientDetails;

/// A finished report kept in the local history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SavedReport {
    pub id: Uuid,
    #[serde(default)]
    pub exam_type: ExamType,
    pub patient: PatientDetails,
    pub report_html: String,
    pub created_at: jiff::Timestamp,
}

impl SavedReport {
    pub fn new(patient: PatientDetails, report_html: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            exam_type: ExamType::default(),
            patient,
            report_html,
            created_at: jiff::Timestamp::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ExamType {
    #[default]
    #[serde(rename = "Abdominal Total")]
    AbdominalTotal,
}

impl ExamType {
    pub fn label(self) -> &'static str {
        match self {
            Self::AbdominalTotal => "Abdominal Total",
        }
    }
}

impl fmt::Display for ExamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
