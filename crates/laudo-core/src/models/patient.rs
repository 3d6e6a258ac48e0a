use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientDetails {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sex: Option<Sex>,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub requesting_physician: String,
    pub exam_date: Date,
    #[serde(default)]
    pub sonographer: String,
    #[serde(default)]
    pub crm: String,
    #[serde(default)]
    pub rqe: String,
    #[serde(default)]
    pub clinical_history: String,
}

impl PatientDetails {
    /// Blank details for an exam performed on `exam_date`.
    pub fn new(exam_date: Date) -> Self {
        Self {
            name: String::new(),
            sex: None,
            age: String::new(),
            requesting_physician: String::new(),
            exam_date,
            sonographer: String::new(),
            crm: String::new(),
            rqe: String::new(),
            clinical_history: String::new(),
        }
    }

    /// Details for the next exam: patient fields are cleared, the
    /// sonographer's name and registrations carry over.
    pub fn reset_for_new_exam(&self, exam_date: Date) -> Self {
        Self {
            sonographer: self.sonographer.clone(),
            crm: self.crm.clone(),
            rqe: self.rqe.clone(),
            ..Self::new(exam_date)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Sex {
    #[serde(rename = "Masculino")]
    Male,
    #[serde(rename = "Feminino")]
    Female,
}

impl Sex {
    pub fn label(self) -> &'static str {
        match self {
            Self::Male => "Masculino",
            Self::Female => "Feminino",
        }
    }
}
