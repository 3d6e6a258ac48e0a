use jiff::civil::date;
use laudo_core::measurement::mm;
use laudo_core::models::bowel::BowelLoops;
use laudo_core::models::free_fluid::FreeFluid;
use laudo_core::models::kidneys::{CollectingSystemDilation, RenalThird, Side};
use laudo_core::models::liver::{HepaticLesionKind, HepaticSegment, LiverSize};
use laudo_core::models::patient::{PatientDetails, Sex};
use laudo_core::models::report::{ExamType, SavedReport};
use laudo_core::models::spleen::Spleen;
use laudo_core::models::vessels::Aorta;
use laudo_core::volume::VolumeTriple;
use laudo_core::{FindingsRecord, paths};
use serde_json::json;

#[test]
fn empty_object_is_a_normal_exam() {
    let record = FindingsRecord::from_json("{}").unwrap();
    assert_eq!(record, FindingsRecord::default());
    assert!(record.kidneys.right.present);
    assert!(record.kidneys.left.present);
    assert_eq!(record.bowel_loops, BowelLoops::DoNotMention);
}

#[test]
fn default_record_uses_portuguese_values() {
    let value = serde_json::to_value(FindingsRecord::default()).unwrap();
    assert_eq!(value["liver"]["size"], json!({ "status": "normais" }));
    assert_eq!(value["liver"]["contour"], "regulares");
    assert_eq!(value["gallbladder"]["status"], "normal");
    assert_eq!(value["bowel_loops"], "nao_citar");
    assert_eq!(value["free_fluid"], json!({ "location": "ausente" }));
    assert!(value["kidneys"].get("dilation").is_none());
}

#[test]
fn parses_a_filled_in_form() {
    let raw = json!({
        "liver": {
            "size": { "status": "aumentadas", "right_lobe": "160" },
            "texture": "heterogenea",
            "steatosis": "moderada",
            "lesions": [{
                "id": "6f1c1e0a-6f57-4d5e-9d43-3c3c8b1c2a11",
                "kind": { "type": "outro", "description": "imagem calcificada" },
                "size": "8",
                "segment": "VII"
            }]
        },
        "spleen": { "status": "aumentado", "longitudinal": "140" },
        "aorta": { "status": "ectasiada", "caliber": "28" },
        "kidneys": {
            "right": { "findings": [{
                "id": "0d6d0c52-52a8-4c1b-8b0e-6b6c5d9c43c2",
                "type": "calculo",
                "location": "terço inferior"
            }]},
            "dilation": { "pyelocaliceal": "direito", "ureteral": "direito" }
        },
        "free_fluid": { "location": "acumulo_focal", "site": "goteira parietocólica" }
    });

    let record: FindingsRecord = serde_json::from_value(raw).unwrap();

    assert_eq!(
        record.liver.size,
        LiverSize::Enlarged { right_lobe: mm("160"), left_lobe: None }
    );
    assert_eq!(
        record.liver.lesions[0].kind,
        HepaticLesionKind::Other { description: "imagem calcificada".into() }
    );
    assert_eq!(record.liver.lesions[0].segment, HepaticSegment::VII);
    assert_eq!(record.spleen, Spleen::Enlarged { longitudinal: mm("140") });
    assert_eq!(record.aorta, Aorta::Ectatic { caliber: mm("28") });
    assert_eq!(record.kidneys.right.findings[0].location, RenalThird::Lower);
    assert!(record.kidneys.right.findings[0].size.is_none());
    assert_eq!(
        record.kidneys.dilation,
        Some(CollectingSystemDilation { pyelocaliceal: Side::Right, ureteral: Some(Side::Right) })
    );
    assert_eq!(record.free_fluid.wire_name(), "acumulo_focal");
    assert!(matches!(record.free_fluid, FreeFluid::FocalAccumulation { site: Some(_) }));
}

#[test]
fn blank_strings_mean_not_measured() {
    let raw = json!({
        "liver": { "size": { "status": "aumentadas", "right_lobe": "160", "left_lobe": "" } },
        "kidneys": {
            "right": {
                "measurements": { "longitudinal": "105", "parenchyma": " ", "cortical": "" },
                "findings": [{
                    "id": "0d6d0c52-52a8-4c1b-8b0e-6b6c5d9c43c2",
                    "type": "cisto",
                    "size": "",
                    "location": "terço médio"
                }]
            }
        },
        "bladder_volume": { "pre_void": ["60", "40", ""], "post_void": ["", "", ""] }
    });
    let record = FindingsRecord::from_json(&raw.to_string()).unwrap();

    assert_eq!(
        record.liver.size,
        LiverSize::Enlarged { right_lobe: mm("160"), left_lobe: None }
    );
    assert_eq!(record.kidneys.right.measurements.longitudinal, mm("105"));
    assert!(record.kidneys.right.measurements.parenchyma.is_none());
    assert!(record.kidneys.right.measurements.cortical.is_none());
    assert!(record.kidneys.right.findings[0].size.is_none());
    assert_eq!(record.bladder_volume.pre_void, VolumeTriple::new(mm("60"), mm("40"), None));
    assert!(record.bladder_volume.post_void.is_empty());
}

#[test]
fn volume_triple_accepts_nulls_and_rejects_garbage() {
    let triple: VolumeTriple = serde_json::from_value(json!([null, "5.", ".5"])).unwrap();
    assert_eq!(triple, VolumeTriple::new(None, mm("5"), mm("0.5")));

    assert!(serde_json::from_value::<VolumeTriple>(json!(["60", "x", "30"])).is_err());
    assert!(serde_json::from_value::<VolumeTriple>(json!(["60", "40"])).is_err());
}

#[test]
fn unknown_enum_value_is_rejected() {
    let raw = json!({ "gallbladder": { "status": "inflamada" } });
    assert!(serde_json::from_value::<FindingsRecord>(raw).is_err());
}

#[test]
fn malformed_measurement_is_rejected() {
    let raw = json!({ "bile_ducts": { "status": "ectasiado", "caliber": "grande" } });
    assert!(serde_json::from_value::<FindingsRecord>(raw).is_err());
}

#[test]
fn reset_for_new_exam_keeps_sonographer() {
    let mut patient = PatientDetails::new(date(2025, 3, 1));
    patient.name = "Maria Souza".into();
    patient.sex = Some(Sex::Female);
    patient.clinical_history = "dor em hipocôndrio direito".into();
    patient.sonographer = "Dr. Paulo Lima".into();
    patient.crm = "12345".into();
    patient.rqe = "678".into();

    let next = patient.reset_for_new_exam(date(2025, 3, 2));
    assert!(next.name.is_empty());
    assert!(next.sex.is_none());
    assert!(next.clinical_history.is_empty());
    assert_eq!(next.exam_date, date(2025, 3, 2));
    assert_eq!(next.sonographer, "Dr. Paulo Lima");
    assert_eq!(next.crm, "12345");
    assert_eq!(next.rqe, "678");
}

#[test]
fn saved_report_json() {
    let report = SavedReport::new(PatientDetails::new(date(2025, 3, 1)), "<p>laudo</p>".into());
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["exam_type"], "Abdominal Total");
    assert_eq!(value["patient"]["exam_date"], "2025-03-01");
    assert_eq!(ExamType::AbdominalTotal.to_string(), "Abdominal Total");

    let back: SavedReport = serde_json::from_value(value).unwrap();
    assert_eq!(back, report);
}

#[test]
fn saved_report_paths() {
    let report = SavedReport::new(PatientDetails::new(date(2025, 3, 1)), String::new());
    let fragment = paths::saved_report(report.id);
    assert!(fragment.starts_with("reports/"));
    assert_eq!(paths::parse_saved_report(&fragment), Some(report.id));
    assert_eq!(paths::parse_saved_report("settings.json"), None);
}
