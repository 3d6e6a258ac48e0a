use laudo_core::models::bladder::VoidPhase;
use laudo_core::models::gallbladder::GallbladderStatus;
use laudo_core::models::kidneys::KidneySide;
use laudo_core::models::liver::HepaticLesionKind;
use laudo_core::{FindingId, FindingsRecord};
use serde::Serialize;
use thiserror::Error;
use ts_rs::TS;

/// Representable but inconsistent input. The builder ignores the offending
/// data; the UI decides whether to block, warn or clean up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum InputWarning {
    #[error("rim {} marcado como ausente, mas com {count} achado(s) registrado(s)", side.label())]
    FindingsOnAbsentKidney { side: KidneySide, count: usize },

    #[error("vesícula biliar ausente, mas com {count} achado(s) registrado(s)")]
    FindingsOnAbsentGallbladder { count: usize },

    #[error("vesícula biliar ausente, mas com sinal de Murphy positivo")]
    MurphySignOnAbsentGallbladder,

    #[error("lesão hepática do tipo \"outro\" sem descrição")]
    UndescribedHepaticLesion { id: FindingId },

    #[error("medidas de volume vesical incompletas ({})", phase_label(*phase))]
    PartialBladderVolume { phase: VoidPhase },
}

fn phase_label(phase: VoidPhase) -> &'static str {
    match phase {
        VoidPhase::PreVoid => "pré-miccional",
        VoidPhase::PostVoid => "pós-miccional",
    }
}

/// Check a record for input the report text will silently drop.
pub fn validate(record: &FindingsRecord) -> Vec<InputWarning> {
    let mut warnings = Vec::new();

    for side in KidneySide::BOTH {
        let kidney = record.kidneys.side(side);
        if !kidney.present && !kidney.findings.is_empty() {
            warnings.push(InputWarning::FindingsOnAbsentKidney {
                side,
                count: kidney.findings.len(),
            });
        }
    }

    let gallbladder = &record.gallbladder;
    if gallbladder.status == GallbladderStatus::Absent {
        if !gallbladder.findings.is_empty() {
            warnings.push(InputWarning::FindingsOnAbsentGallbladder {
                count: gallbladder.findings.len(),
            });
        }
        if gallbladder.murphy_sign {
            warnings.push(InputWarning::MurphySignOnAbsentGallbladder);
        }
    }

    for lesion in &record.liver.lesions {
        if let HepaticLesionKind::Other { description } = &lesion.kind
            && description.trim().is_empty()
        {
            warnings.push(InputWarning::UndescribedHepaticLesion { id: lesion.id });
        }
    }

    for phase in [VoidPhase::PreVoid, VoidPhase::PostVoid] {
        if record.bladder_volume.phase(phase).is_partial() {
            warnings.push(InputWarning::PartialBladderVolume { phase });
        }
    }

    if !warnings.is_empty() {
        tracing::debug!(count = warnings.len(), "findings record has input warnings");
    }
    warnings
}
