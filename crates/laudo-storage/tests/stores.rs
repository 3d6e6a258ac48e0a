use jiff::civil::date;
use jiff::{Timestamp, ToSpan};
use laudo_core::models::patient::PatientDetails;
use laudo_core::models::report::SavedReport;
use laudo_core::models::settings::ClinicSettings;
use laudo_storage::error::StorageError;
use laudo_storage::history::SEARCH_LIMIT;
use laudo_storage::{HistoryStore, SettingsStore};

fn report(name: &str, created_at: Timestamp) -> SavedReport {
    let mut patient = PatientDetails::new(date(2025, 3, 1));
    patient.name = name.to_string();
    let mut report = SavedReport::new(patient, format!("<p>Laudo de {name}</p>"));
    report.created_at = created_at;
    report
}

fn base_time() -> Timestamp {
    "2025-03-01T12:00:00Z".parse().unwrap()
}

#[test]
fn settings_default_when_missing() {
    let dir = tempfile::tempdir().unwrap();
    let store = SettingsStore::new(dir.path());
    assert_eq!(store.load().unwrap(), ClinicSettings::default());
}

#[test]
fn settings_persist() {
    let dir = tempfile::tempdir().unwrap();
    let store = SettingsStore::new(dir.path());
    let settings = ClinicSettings {
        clinic_name: "Clínica Imagem".into(),
        clinic_address: "Rua das Flores, 10".into(),
        clinic_phone: "(11) 5555-0000".into(),
        logo: String::new(),
    };
    store.save(&settings).unwrap();

    assert_eq!(SettingsStore::new(dir.path()).load().unwrap(), settings);
    assert!(!dir.path().join("settings.json.tmp").exists());
}

#[test]
fn add_and_get() {
    let dir = tempfile::tempdir().unwrap();
    let store = HistoryStore::new(dir.path());
    let saved = report("Maria Souza", base_time());

    let id = store.add(&saved).unwrap();
    assert_eq!(id, saved.id);
    assert_eq!(store.get(id).unwrap(), saved);
}

#[test]
fn get_unknown_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let store = HistoryStore::new(dir.path());
    let err = store.get(uuid::Uuid::new_v4()).unwrap_err();
    assert!(matches!(err, StorageError::NotFound { .. }));
}

#[test]
fn add_rejects_missing_name_or_content() {
    let dir = tempfile::tempdir().unwrap();
    let store = HistoryStore::new(dir.path());

    let nameless = report("  ", base_time());
    assert!(matches!(store.add(&nameless), Err(StorageError::InvalidReport(_))));

    let mut empty = report("João", base_time());
    empty.report_html = " ".into();
    assert!(matches!(store.add(&empty), Err(StorageError::InvalidReport(_))));

    assert!(store.search("").unwrap().is_empty());
}

#[test]
fn search_is_newest_first_and_limited() {
    let dir = tempfile::tempdir().unwrap();
    let store = HistoryStore::new(dir.path());
    for i in 0..12 {
        let created = base_time().checked_add((i as i64).hours()).unwrap();
        store.add(&report(&format!("Paciente {i}"), created)).unwrap();
    }

    let found = store.search("").unwrap();
    assert_eq!(found.len(), SEARCH_LIMIT);
    assert_eq!(found[0].patient.name, "Paciente 11");
    assert_eq!(found[9].patient.name, "Paciente 2");
}

#[test]
fn search_matches_name_substring_ignoring_case() {
    let dir = tempfile::tempdir().unwrap();
    let store = HistoryStore::new(dir.path());
    store.add(&report("Maria Souza", base_time())).unwrap();
    store.add(&report("José Maria Lima", base_time().checked_add(1.hour()).unwrap())).unwrap();
    store.add(&report("Ana Costa", base_time())).unwrap();

    let found = store.search("  mAriA ").unwrap();
    let names: Vec<&str> = found.iter().map(|r| r.patient.name.as_str()).collect();
    assert_eq!(names, vec!["José Maria Lima", "Maria Souza"]);

    assert!(store.search("pedro").unwrap().is_empty());
}

#[test]
fn unreadable_entries_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let store = HistoryStore::new(dir.path());
    store.add(&report("Maria Souza", base_time())).unwrap();

    let bogus = format!("reports/{}.json", uuid::Uuid::new_v4());
    std::fs::write(dir.path().join(bogus), "not json").unwrap();
    std::fs::write(dir.path().join("reports/notes.json"), "{}").unwrap();

    assert_eq!(store.search("").unwrap().len(), 1);
}

#[test]
fn delete_removes_report() {
    let dir = tempfile::tempdir().unwrap();
    let store = HistoryStore::new(dir.path());
    let saved = report("Maria Souza", base_time());
    store.add(&saved).unwrap();

    store.delete(saved.id).unwrap();
    assert!(store.search("").unwrap().is_empty());
    store.delete(saved.id).unwrap();
}
