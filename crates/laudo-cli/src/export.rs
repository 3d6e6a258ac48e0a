use std::path::Path;

use clap::ValueEnum;
use laudo_core::models::patient::PatientDetails;
use laudo_core::models::settings::ClinicSettings;
use laudo_export::error::ExportError;
use laudo_export::styles::DocumentStyles;
use laudo_export::{docx, render, word};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Standalone A4 HTML page for printing or saving as PDF.
    Print,
    /// Word-compatible `.doc`.
    Doc,
    Docx,
}

#[derive(Debug)]
pub struct ExportedFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

pub fn export_report(
    report_html: &str,
    patient: &PatientDetails,
    settings: &ClinicSettings,
    format: ExportFormat,
) -> Result<ExportedFile, ExportError> {
    let styles = DocumentStyles::default();
    let (file_name, bytes) = match format {
        ExportFormat::Print => {
            let doc_name = word::export_file_name(patient);
            let name = Path::new(&doc_name).with_extension("html");
            let html = render::render_print_document(report_html, settings, &styles)?;
            (name.to_string_lossy().into_owned(), html.into_bytes())
        }
        ExportFormat::Doc => (
            word::export_file_name(patient),
            word::render_word_document(report_html, settings)?.into_bytes(),
        ),
        ExportFormat::Docx => (
            word::docx_file_name(patient),
            docx::generate_docx(report_html, settings, &styles)?,
        ),
    };
    tracing::info!(file = %file_name, ?format, bytes = bytes.len(), "report exported");
    Ok(ExportedFile { file_name, bytes })
}
