use laudo_builder::{InputWarning, build_report_text, validate};
use laudo_core::FindingsRecord;
use laudo_core::measurement::mm;
use laudo_core::models::bladder::VoidPhase;
use laudo_core::models::gallbladder::{
    GallbladderFinding, GallbladderFindingKind, GallbladderStatus,
};
use laudo_core::models::kidneys::{KidneySide, RenalFinding, RenalFindingKind};
use laudo_core::models::liver::{HepaticLesion, HepaticLesionKind};
use laudo_core::volume::VolumeTriple;

#[test]
fn normal_record_has_no_warnings() {
    assert!(validate(&FindingsRecord::default()).is_empty());
}

#[test]
fn absent_kidney_with_findings_is_reported_and_dropped() {
    let mut record = FindingsRecord::default();
    record.kidneys.left.present = false;
    record.kidneys.left.findings = vec![
        RenalFinding::new(RenalFindingKind::Stone),
        RenalFinding::new(RenalFindingKind::Cyst),
    ];

    assert_eq!(
        validate(&record),
        vec![InputWarning::FindingsOnAbsentKidney { side: KidneySide::Left, count: 2 }]
    );

    let text = build_report_text(&record);
    assert!(text.contains("Rim esquerdo ausente."));
    assert!(!text.contains("cálculo"));
    assert!(!text.contains("cisto"));
}

#[test]
fn absent_gallbladder_with_findings_and_murphy() {
    let mut record = FindingsRecord::default();
    record.gallbladder.status = GallbladderStatus::Absent;
    record.gallbladder.findings = vec![GallbladderFinding::new(GallbladderFindingKind::Stone)];
    record.gallbladder.murphy_sign = true;

    assert_eq!(
        validate(&record),
        vec![
            InputWarning::FindingsOnAbsentGallbladder { count: 1 },
            InputWarning::MurphySignOnAbsentGallbladder,
        ]
    );
}

#[test]
fn undescribed_other_lesion() {
    let mut record = FindingsRecord::default();
    let lesion = HepaticLesion::new(HepaticLesionKind::Other { description: "  ".into() });
    let id = lesion.id;
    record.liver.lesions = vec![
        HepaticLesion::new(HepaticLesionKind::Other { description: "imagem nodular".into() }),
        lesion,
    ];

    assert_eq!(validate(&record), vec![InputWarning::UndescribedHepaticLesion { id }]);
}

#[test]
fn partial_bladder_volume() {
    let mut record = FindingsRecord::default();
    record.bladder_volume.post_void = VolumeTriple::new(mm("30"), None, None);

    let warnings = validate(&record);
    assert_eq!(warnings, vec![InputWarning::PartialBladderVolume { phase: VoidPhase::PostVoid }]);
    assert_eq!(
        warnings[0].to_string(),
        "medidas de volume vesical incompletas (pós-miccional)"
    );
}

#[test]
fn warnings_serialize_with_kind_tag() {
    let warning = InputWarning::FindingsOnAbsentKidney { side: KidneySide::Right, count: 1 };
    let value = serde_json::to_value(&warning).unwrap();
    assert_eq!(value["kind"], "findings_on_absent_kidney");
    assert_eq!(value["side"], "direito");
    assert_eq!(
        warning.to_string(),
        "rim direito marcado como ausente, mas com 1 achado(s) registrado(s)"
    );
}
