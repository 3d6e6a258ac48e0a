//! laudo-drafting
//!
//! Turns the structured findings text into a finished HTML report, and
//! plain-language notes into technical phrasing, through a remote
//! language model.

pub mod clean;
pub mod error;
pub mod gemini;
pub mod prompt;

use laudo_core::models::patient::PatientDetails;
use laudo_core::models::report::ExamType;

use crate::error::DraftingError;

/// Input for drafting a complete report.
#[derive(Debug, Clone)]
pub struct DraftRequest {
    /// Output of `laudo_builder::build_report_text`.
    pub findings_text: String,
    pub patient: PatientDetails,
    pub exam_type: ExamType,
}

/// Input for rephrasing one clinician note.
#[derive(Debug, Clone)]
pub struct SuggestionRequest {
    pub query: String,
    /// Current report HTML, used as context.
    pub current_report: String,
    pub patient: PatientDetails,
}

/// A remote service that writes report prose.
pub trait DraftingService {
    /// Draft the full report HTML. Code fences are stripped from the result.
    fn draft(&self, request: &DraftRequest) -> Result<String, DraftingError>;

    /// Suggest technical wording for a plain-language note.
    fn suggest(&self, request: &SuggestionRequest) -> Result<String, DraftingError>;
}
