use jiff::civil::date;
use laudo_core::models::patient::PatientDetails;
use laudo_core::models::settings::ClinicSettings;
use laudo_export::docx::generate_docx;
use laudo_export::logo;
use laudo_export::render::{render_letterhead, render_print_document};
use laudo_export::styles::DocumentStyles;
use laudo_export::word::{docx_file_name, export_file_name, render_word_document};

const REPORT: &str = r#"<p style="text-align: center;"><strong>ULTRASSONOGRAFIA DE ABDOME TOTAL</strong></p><p><strong>Fígado:</strong> normal.</p>"#;

fn clinic() -> ClinicSettings {
    ClinicSettings {
        clinic_name: "Clinica Boa Imagem".to_string(),
        clinic_address: "Rua das Flores 10".to_string(),
        clinic_phone: "(11) 5555-0000".to_string(),
        logo: String::new(),
    }
}

#[test]
fn letterhead_shows_clinic_fields_and_report() {
    let html = render_letterhead(REPORT, &clinic()).unwrap();
    assert!(html.contains("Clinica Boa Imagem</h2>"));
    assert!(html.contains("Rua das Flores 10</p>"));
    assert!(html.contains(r#"<div class="report-content"><p style="text-align: center;">"#));
    // No logo: an empty placeholder keeps the clinic block on the right.
    assert!(html.contains("<div></div>"));
    assert!(!html.contains("<img"));
}

#[test]
fn empty_settings_omit_the_clinic_block() {
    let html = render_letterhead(REPORT, &ClinicSettings::default()).unwrap();
    assert!(!html.contains("header-info"));
    assert!(html.contains(REPORT));
}

#[test]
fn clinic_fields_are_escaped() {
    let settings = ClinicSettings {
        clinic_name: "<script>x</script>".to_string(),
        ..ClinicSettings::default()
    };
    let html = render_letterhead(REPORT, &settings).unwrap();
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn valid_logo_is_embedded_and_invalid_logo_is_ignored() {
    let url = logo::to_data_url("image/png", &[0x89, b'P', b'N', b'G']).unwrap();
    let settings = ClinicSettings {
        logo: url.clone(),
        ..clinic()
    };
    let html = render_letterhead(REPORT, &settings).unwrap();
    assert!(html.contains(&format!(r#"<img src="{url}" alt="Clínica Logo""#)));

    let settings = ClinicSettings {
        logo: "javascript:alert(1)".to_string(),
        ..clinic()
    };
    let html = render_letterhead(REPORT, &settings).unwrap();
    assert!(!html.contains("<img"));
}

#[test]
fn logo_data_urls() {
    let url = logo::to_data_url("image/jpeg", b"abc").unwrap();
    assert_eq!(url, "data:image/jpeg;base64,YWJj");
    let (mime, bytes) = logo::decode_data_url(&url).unwrap();
    assert_eq!(mime, "image/jpeg");
    assert_eq!(bytes, b"abc");

    assert!(logo::to_data_url("text/html", b"abc").is_err());
    assert!(logo::decode_data_url("data:image/png;base64,@@@").is_err());
    assert_eq!(logo::mime_for_extension("PNG"), Some("image/png"));
    assert_eq!(logo::mime_for_extension("txt"), None);
}

#[test]
fn print_document_is_an_a4_page() {
    let html = render_print_document(REPORT, &clinic(), &DocumentStyles::default()).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Laudo de Ultrassonografia</title>"));
    assert!(html.contains("@page { size: A4; margin: 1.5cm; }"));
    assert!(html.contains("font-family: 'Helvetica Neue', Helvetica, Arial, sans-serif;"));
    assert!(html.contains(".signature { text-align: right;"));
    assert!(html.contains("Clinica Boa Imagem"));
    assert!(html.contains(REPORT));
}

#[test]
fn word_document_wraps_letterhead_in_office_html() {
    let doc = render_word_document(REPORT, &clinic()).unwrap();
    assert!(doc.starts_with(
        "<html xmlns:o='urn:schemas-microsoft-com:office:office' xmlns:w='urn:schemas-microsoft-com:office:word'"
    ));
    assert!(doc.contains("<title>Laudo</title></head><body><div class=\"header\""));
    assert!(doc.ends_with("</body></html>"));
    assert!(doc.contains(REPORT));
}

#[test]
fn file_names_use_patient_and_exam_date() {
    let mut patient = PatientDetails::new(date(2024, 3, 5));
    assert_eq!(export_file_name(&patient), "Laudo_Paciente_2024-03-05.doc");

    patient.name = "Maria da Silva".to_string();
    assert_eq!(export_file_name(&patient), "Laudo_Maria_da_Silva_2024-03-05.doc");
    assert_eq!(docx_file_name(&patient), "Laudo_Maria_da_Silva_2024-03-05.docx");
}

#[test]
fn docx_is_a_zip_package() {
    let bytes = generate_docx(REPORT, &clinic(), &DocumentStyles::default()).unwrap();
    assert!(bytes.starts_with(b"PK"));

    let empty = generate_docx("", &ClinicSettings::default(), &DocumentStyles::default()).unwrap();
    assert!(empty.starts_with(b"PK"));
}
