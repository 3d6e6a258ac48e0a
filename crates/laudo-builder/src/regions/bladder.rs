use laudo_core::models::bladder::{
    Bladder, BladderFinding, BladderFindingKind, BladderStatus, BladderVolume,
};
use laudo_core::volume::format_ml;

use crate::grammar::{and_before_last, size_suffix};
use crate::{Region, SUGGESTED_CONCLUSION_MARKER};

const MOBILE_ECHOES: &str = "conteúdo vesical apresenta ecos móveis em suspensão (corpos em \
flutuação), podendo corresponder a detritos celulares ou piúria, achado que sugere processo \
infeccioso urinário. Recomenda-se correlação com exame de urina EAS + Urocultura";

const MOBILE_ECHOES_CONCLUSION: &str = "Presença de ecos móveis em suspensão no interior da \
bexiga, sugestivos de infecção urinária (cistite).";

impl Region for Bladder {
    fn heading(&self) -> &'static str {
        "Bexiga"
    }

    /// The bladder line, followed by a suggested-conclusion line when the
    /// content shows mobile echoes.
    fn compose(&self) -> Vec<String> {
        let findings = (!self.findings.is_empty()).then(|| {
            let described: Vec<String> = self.findings.iter().map(describe).collect();
            format!("notando-se ainda {}", described.join(", "))
        });

        let status = match self.status {
            BladderStatus::Normal if self.findings.is_empty() => {
                Some("com boa repleção, paredes finas e regulares, conteúdo anecogênico")
            }
            BladderStatus::Normal => None,
            BladderStatus::Trabeculated => Some("difusamente trabeculada (bexiga de esforço)"),
            BladderStatus::Underfilled => {
                Some("com repleção insuficiente, avaliação prejudicada")
            }
            BladderStatus::MobileEchoes => None,
        };

        let body = match (self.status, findings) {
            // The echoes sentence has commas of its own; only the findings list is joined.
            (BladderStatus::MobileEchoes, None) => MOBILE_ECHOES.to_string(),
            (BladderStatus::MobileEchoes, Some(findings)) => {
                format!("{MOBILE_ECHOES} e {}", and_before_last(&findings))
            }
            (_, findings) => {
                let parts: Vec<String> =
                    status.map(str::to_string).into_iter().chain(findings).collect();
                and_before_last(&parts.join(", "))
            }
        };

        let mut lines = vec![format!("{}: {body}.", self.heading())];
        if self.status == BladderStatus::MobileEchoes {
            lines.push(format!("{SUGGESTED_CONCLUSION_MARKER} {MOBILE_ECHOES_CONCLUSION}"));
        }
        lines
    }
}

fn describe(finding: &BladderFinding) -> String {
    let size = size_suffix(finding.size.as_ref());
    match finding.kind {
        BladderFindingKind::Stone => format!("presença de cálculo em seu interior{size}"),
        BladderFindingKind::VegetatingLesion => {
            format!("presença de lesão vegetante em seu interior{size}")
        }
        BladderFindingKind::Diverticulum => format!("presença de divertículo{size}"),
        BladderFindingKind::Clot => format!("presença de coágulo{size}"),
    }
}

impl Region for BladderVolume {
    fn heading(&self) -> &'static str {
        "Volume Vesical"
    }

    fn compose(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(volume) = self.pre_void.volume_ml() {
            lines.push(format!("Volume vesical pré-miccional: {}.", format_ml(volume)));
        }
        if let Some(volume) = self.post_void.volume_ml() {
            lines.push(format!("Resíduo pós-miccional: {}.", format_ml(volume)));
        }
        lines
    }
}
