use std::io::Cursor;

use docx_rs::{AlignmentType, BreakType, Docx, Paragraph, Run, RunFonts, Style, StyleType};

use laudo_core::models::settings::ClinicSettings;

use crate::error::ExportError;
use crate::html::{self, Align, Block, Segment};
use crate::styles::DocumentStyles;

const CLINIC_STYLE: &str = "ClinicName";

/// Generate a `.docx` document from report HTML.
///
/// The clinic letterhead becomes right-aligned paragraphs at the top. Each
/// report paragraph keeps its alignment, `<br>` line breaks and bold runs.
/// The logo is left out.
pub fn generate_docx(
    report_html: &str,
    settings: &ClinicSettings,
    styles: &DocumentStyles,
) -> Result<Vec<u8>, ExportError> {
    let mut docx = Docx::new().add_style(
        Style::new(CLINIC_STYLE, StyleType::Paragraph)
            .name("Clinic Name")
            .size(styles.heading_half_points())
            .bold(),
    );

    let clinic_name = settings.clinic_name.trim();
    if !clinic_name.is_empty() {
        docx = docx.add_paragraph(
            Paragraph::new()
                .style(CLINIC_STYLE)
                .align(AlignmentType::Right)
                .add_run(
                    Run::new()
                        .add_text(clinic_name)
                        .fonts(RunFonts::new().ascii(&styles.body_font).hi_ansi(&styles.body_font)),
                ),
        );
    }
    for line in [&settings.clinic_address, &settings.clinic_phone] {
        let line = line.trim();
        if !line.is_empty() {
            docx = docx.add_paragraph(
                Paragraph::new()
                    .align(AlignmentType::Right)
                    .add_run(text_run(line, false, styles)),
            );
        }
    }

    let blocks = html::parse_blocks(report_html);
    tracing::debug!(paragraphs = blocks.len(), "building docx");
    for block in &blocks {
        docx = docx.add_paragraph(block_paragraph(block, styles));
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    Ok(buf.into_inner())
}

fn block_paragraph(block: &Block, styles: &DocumentStyles) -> Paragraph {
    let mut para = Paragraph::new().align(alignment(block.align));
    for (i, line) in block.lines.iter().enumerate() {
        if i > 0 {
            para = para.add_run(Run::new().add_break(BreakType::TextWrapping));
        }
        for Segment { text, bold } in line {
            para = para.add_run(text_run(text, *bold, styles));
        }
    }
    para
}

fn text_run(text: &str, bold: bool, styles: &DocumentStyles) -> Run {
    let run = Run::new()
        .add_text(text)
        .size(styles.body_half_points())
        .fonts(RunFonts::new().ascii(&styles.body_font).hi_ansi(&styles.body_font));
    if bold { run.bold() } else { run }
}

fn alignment(align: Align) -> AlignmentType {
    match align {
        Align::Left => AlignmentType::Left,
        Align::Center => AlignmentType::Center,
        Align::Right => AlignmentType::Right,
    }
}
