use laudo_core::models::gallbladder::{
    Gallbladder, GallbladderFinding, GallbladderFindingKind, GallbladderStatus,
};

use crate::Region;
use crate::grammar::{join_list, size_suffix};

const NORMAL: &str = "com forma e dimensões normais, paredes finas e regulares, \
apresentando conteúdo anecogênico sem imagens calculosas.";

impl Region for Gallbladder {
    fn heading(&self) -> &'static str {
        "Vesícula Biliar"
    }

    fn compose(&self) -> Vec<String> {
        let findings: Vec<String> = self.findings.iter().map(describe).collect();

        let mut text = match self.status {
            GallbladderStatus::Absent => {
                return vec![format!(
                    "{}: ausente (status pós-colecistectomia).",
                    self.heading()
                )];
            }
            GallbladderStatus::Normal if findings.is_empty() => NORMAL.to_string(),
            GallbladderStatus::Normal => format!("apresentando {}.", join_list(&findings)),
            GallbladderStatus::Contracted if findings.is_empty() => {
                "vazia/contraída (jejum inadequado?).".to_string()
            }
            GallbladderStatus::Contracted => format!(
                "vazia/contraída (jejum inadequado?). Observa-se ainda: {}.",
                join_list(&findings)
            ),
        };

        if self.murphy_sign {
            text.push_str(" Sinal de Murphy ecográfico positivo.");
        }
        vec![format!("{}: {text}", self.heading())]
    }
}

fn describe(finding: &GallbladderFinding) -> String {
    let size = size_suffix(finding.size.as_ref());
    match finding.kind {
        GallbladderFindingKind::Stone => format!("presença de cálculo{size}"),
        GallbladderFindingKind::Polyp => format!("presença de pólipo{size}"),
        GallbladderFindingKind::Sludge => "presença de lama biliar".to_string(),
        GallbladderFindingKind::Cholesterolosis => "sinais de colesterolose".to_string(),
        GallbladderFindingKind::WallThickening => format!("espessamento parietal difuso{size}"),
    }
}
