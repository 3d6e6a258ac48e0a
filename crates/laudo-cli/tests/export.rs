use jiff::civil::date;
use laudo_cli::export::{ExportFormat, export_report};
use laudo_cli::workspace::{SettingsUpdate, Workspace, apply_settings_update};
use laudo_core::models::patient::PatientDetails;
use laudo_core::models::settings::ClinicSettings;

const REPORT: &str = "<p><strong>Fígado:</strong> normal.</p><div class=\"signature\">Dr. Carlos</div>";

fn patient() -> PatientDetails {
    PatientDetails {
        name: "Ana Souza".to_string(),
        ..PatientDetails::new(date(2024, 3, 5))
    }
}

#[test]
fn each_format_gets_its_file_name() {
    let settings = ClinicSettings::default();

    let doc = export_report(REPORT, &patient(), &settings, ExportFormat::Doc).unwrap();
    assert_eq!(doc.file_name, "Laudo_Ana_Souza_2024-03-05.doc");
    assert!(String::from_utf8(doc.bytes).unwrap().ends_with("</body></html>"));

    let print = export_report(REPORT, &patient(), &settings, ExportFormat::Print).unwrap();
    assert_eq!(print.file_name, "Laudo_Ana_Souza_2024-03-05.html");
    assert!(String::from_utf8(print.bytes).unwrap().contains("size: A4"));

    let docx = export_report(REPORT, &patient(), &settings, ExportFormat::Docx).unwrap();
    assert_eq!(docx.file_name, "Laudo_Ana_Souza_2024-03-05.docx");
    assert!(docx.bytes.starts_with(b"PK"));
}

#[test]
fn settings_update_embeds_logo_and_persists() {
    let dir = tempfile::tempdir().unwrap();
    let workspace = Workspace::open(dir.path());
    let logo_path = dir.path().join("logo.png");
    std::fs::write(&logo_path, [0x89, b'P', b'N', b'G']).unwrap();

    let update = SettingsUpdate {
        clinic_name: Some("Clínica Boa Imagem".to_string()),
        logo_file: Some(logo_path),
        ..SettingsUpdate::default()
    };
    let updated = apply_settings_update(workspace.settings.load().unwrap(), update).unwrap();
    workspace.settings.save(&updated).unwrap();

    let stored = workspace.settings.load().unwrap();
    assert_eq!(stored.clinic_name, "Clínica Boa Imagem");
    assert!(stored.logo.starts_with("data:image/png;base64,"));

    let cleared = apply_settings_update(
        stored,
        SettingsUpdate {
            clear_logo: true,
            ..SettingsUpdate::default()
        },
    )
    .unwrap();
    assert!(!cleared.has_logo());
    assert_eq!(cleared.clinic_name, "Clínica Boa Imagem");
}

#[test]
fn unsupported_logo_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logo.txt");
    std::fs::write(&path, "not an image").unwrap();

    let update = SettingsUpdate {
        logo_file: Some(path),
        ..SettingsUpdate::default()
    };
    assert!(apply_settings_update(ClinicSettings::default(), update).is_err());
}
