//! Word export: the letterhead and report wrapped in Office HTML, saved
//! with a `.doc` extension.

use laudo_core::models::patient::PatientDetails;
use laudo_core::models::settings::ClinicSettings;

use crate::error::ExportError;
use crate::render::{self, WORD_TEMPLATE};
use crate::styles::DocumentStyles;

pub fn render_word_document(
    report_html: &str,
    settings: &ClinicSettings,
) -> Result<String, ExportError> {
    render::render_document(WORD_TEMPLATE, report_html, settings, &DocumentStyles::default())
}

/// `Laudo_<patient name>_<exam date>.doc`, with spaces in the name replaced
/// by underscores. Unnamed patients are filed as `Paciente`.
pub fn export_file_name(patient: &PatientDetails) -> String {
    file_name(patient, "doc")
}

pub fn docx_file_name(patient: &PatientDetails) -> String {
    file_name(patient, "docx")
}

fn file_name(patient: &PatientDetails, extension: &str) -> String {
    let name = patient.name.trim();
    let name = if name.is_empty() {
        "Paciente".to_string()
    } else {
        name.split_whitespace().collect::<Vec<_>>().join("_")
    };
    format!("Laudo_{name}_{}.{extension}", patient.exam_date)
}
