use serde::Serialize;
use tera::{Context, Tera};

use laudo_core::models::settings::ClinicSettings;

use crate::error::ExportError;
use crate::logo;
use crate::styles::DocumentStyles;

pub const LETTERHEAD_TEMPLATE: &str = "letterhead.html";
pub const PRINT_TEMPLATE: &str = "print.html";
pub const WORD_TEMPLATE: &str = "word.html";

/// Title of the print window and of the saved PDF.
pub const PRINT_TITLE: &str = "Laudo de Ultrassonografia";

const LETTERHEAD: &str = r#"<div class="header" style="display: flex; align-items: center; justify-content: space-between; border-bottom: 1px solid #ddd; padding-bottom: 10px; margin-bottom: 20px; page-break-inside: avoid;">
{% if logo %}<img src="{{ logo | safe }}" alt="Clínica Logo" style="max-height: 60px; max-width: 200px; object-fit: contain;">{% else %}<div></div>{% endif %}
{% if clinic_name or clinic_address or clinic_phone %}<div class="header-info" style="text-align: right; font-size: 0.9em;">
{% if clinic_name %}<h2 style="margin: 0 0 5px 0; font-size: 1.2em;">{{ clinic_name }}</h2>{% endif %}
{% if clinic_address %}<p style="margin: 0;">{{ clinic_address }}</p>{% endif %}
{% if clinic_phone %}<p style="margin: 0;">{{ clinic_phone }}</p>{% endif %}
</div>{% endif %}
</div>
<div class="report-content">{{ report | safe }}</div>"#;

const PRINT: &str = r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
<meta charset="utf-8">
<title>{{ title }}</title>
<style>
@page { size: A4; margin: {{ styles.margin_cm }}cm; }
body { font-family: {{ styles.font_stack | safe }}; color: {{ styles.text_color | safe }}; font-size: {{ styles.body_size }}pt; line-height: {{ styles.line_height }}; }
.report-content p { margin: 0 0 0.8em 0; page-break-inside: avoid; }
.signature { text-align: right; page-break-inside: avoid; }
</style>
</head>
<body>
{% include "letterhead.html" %}
</body>
</html>
"#;

const WORD: &str = r#"<html xmlns:o='urn:schemas-microsoft-com:office:office' xmlns:w='urn:schemas-microsoft-com:office:word' xmlns='http://www.w3.org/TR/REC-html40'><head><meta charset='utf-8'><title>Laudo</title></head><body>{% include "letterhead.html" %}</body></html>"#;

#[derive(Debug, Serialize)]
struct DocumentContext<'a> {
    title: &'static str,
    logo: Option<&'a str>,
    clinic_name: &'a str,
    clinic_address: &'a str,
    clinic_phone: &'a str,
    report: &'a str,
    styles: &'a DocumentStyles,
}

impl<'a> DocumentContext<'a> {
    fn new(report: &'a str, settings: &'a ClinicSettings, styles: &'a DocumentStyles) -> Self {
        Self {
            title: PRINT_TITLE,
            logo: letterhead_logo(settings),
            clinic_name: settings.clinic_name.trim(),
            clinic_address: settings.clinic_address.trim(),
            clinic_phone: settings.clinic_phone.trim(),
            report,
            styles,
        }
    }
}

/// The configured logo, provided it is a usable image `data:` URL.
fn letterhead_logo(settings: &ClinicSettings) -> Option<&str> {
    if !settings.has_logo() {
        return None;
    }
    match logo::decode_data_url(&settings.logo) {
        Ok(_) => Some(settings.logo.trim()),
        Err(e) => {
            tracing::warn!(error = %e, "ignoring clinic logo");
            None
        }
    }
}

fn templates() -> Result<Tera, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        (LETTERHEAD_TEMPLATE, LETTERHEAD),
        (PRINT_TEMPLATE, PRINT),
        (WORD_TEMPLATE, WORD),
    ])
    .map_err(|e| ExportError::TemplateParse(e.to_string()))?;
    Ok(tera)
}

/// Render one of the built-in templates for a report.
///
/// `report_html` is inserted verbatim; clinic fields are escaped.
pub fn render_document(
    template_name: &str,
    report_html: &str,
    settings: &ClinicSettings,
    styles: &DocumentStyles,
) -> Result<String, ExportError> {
    let tera = templates()?;

    let value = serde_json::to_value(DocumentContext::new(report_html, settings, styles))?;
    let context = Context::from_value(value)
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    tracing::debug!(template = template_name, bytes = rendered.len(), "document rendered");
    Ok(rendered)
}

/// The letterhead followed by the report, as shown on screen.
pub fn render_letterhead(
    report_html: &str,
    settings: &ClinicSettings,
) -> Result<String, ExportError> {
    render_document(LETTERHEAD_TEMPLATE, report_html, settings, &DocumentStyles::default())
}

/// A standalone A4 page ready to print or save as PDF.
pub fn render_print_document(
    report_html: &str,
    settings: &ClinicSettings,
    styles: &DocumentStyles,
) -> Result<String, ExportError> {
    render_document(PRINT_TEMPLATE, report_html, settings, styles)
}
