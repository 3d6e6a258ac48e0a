//! One exam being reported: the findings, the patient, and the report
//! as it moves from draft to saved.

use jiff::civil::Date;
use laudo_builder::{InputWarning, build_report_text, validate};
use laudo_core::FindingsRecord;
use laudo_core::models::patient::PatientDetails;
use laudo_core::models::report::{ExamType, SavedReport};
use laudo_drafting::error::DraftingError;
use laudo_drafting::{DraftRequest, DraftingService, SuggestionRequest};
use laudo_storage::HistoryStore;
use laudo_storage::error::StorageError;
use tracing::{info, warn};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Session {
    pub record: FindingsRecord,
    pub patient: PatientDetails,
    pub exam_type: ExamType,
    report_html: String,
    saved: bool,
}

impl Session {
    pub fn new(exam_date: Date) -> Self {
        Self::with_inputs(FindingsRecord::default(), PatientDetails::new(exam_date))
    }

    pub fn with_inputs(record: FindingsRecord, patient: PatientDetails) -> Self {
        Self {
            record,
            patient,
            exam_type: ExamType::default(),
            report_html: String::new(),
            saved: false,
        }
    }

    /// Reopen a report from history. The findings form starts over from the
    /// normal exam since only the finished HTML is kept.
    pub fn from_saved(report: SavedReport) -> Self {
        Self {
            record: FindingsRecord::default(),
            patient: report.patient,
            exam_type: report.exam_type,
            report_html: report.report_html,
            saved: true,
        }
    }

    pub fn report_html(&self) -> &str {
        &self.report_html
    }

    pub fn is_saved(&self) -> bool {
        self.saved
    }

    pub fn findings_text(&self) -> String {
        build_report_text(&self.record)
    }

    pub fn warnings(&self) -> Vec<InputWarning> {
        validate(&self.record)
    }

    /// Start the next exam: findings and report are cleared, the
    /// sonographer carries over.
    pub fn new_report(&mut self, exam_date: Date) {
        self.record = FindingsRecord::default();
        self.patient = self.patient.reset_for_new_exam(exam_date);
        self.report_html.clear();
        self.saved = false;
    }

    /// Draft the report from the current findings. On failure the previous
    /// report is kept untouched.
    pub fn generate(&mut self, service: &dyn DraftingService) -> Result<&str, DraftingError> {
        for warning in self.warnings() {
            warn!(%warning, "findings will be partly ignored");
        }

        let request = DraftRequest {
            findings_text: self.findings_text(),
            patient: self.patient.clone(),
            exam_type: self.exam_type,
        };
        let html = service.draft(&request)?;

        info!(chars = html.len(), "report drafted");
        self.report_html = html;
        self.saved = false;
        Ok(&self.report_html)
    }

    /// Technical wording for a clinician's note. A blank note asks nothing.
    pub fn suggest(
        &self,
        service: &dyn DraftingService,
        query: &str,
    ) -> Result<String, DraftingError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(String::new());
        }
        service.suggest(&SuggestionRequest {
            query: query.to_string(),
            current_report: self.report_html.clone(),
            patient: self.patient.clone(),
        })
    }

    /// Replace the report with hand-edited HTML.
    pub fn edit(&mut self, html: impl Into<String>) {
        self.report_html = html.into();
        self.saved = false;
    }

    pub fn save(&mut self, history: &HistoryStore) -> Result<Uuid, StorageError> {
        let mut report = SavedReport::new(self.patient.clone(), self.report_html.clone());
        report.exam_type = self.exam_type;
        let id = history.add(&report)?;
        self.saved = true;
        Ok(id)
    }
}
