use laudo_core::models::pancreas::{
    Pancreas, PancreasStatus, PancreaticFinding, PancreaticFindingKind, PancreaticRegion,
};

use crate::Region;
use crate::grammar::{join_list, measured, size_suffix};

impl Region for Pancreas {
    fn heading(&self) -> &'static str {
        "Pâncreas"
    }

    fn compose(&self) -> Vec<String> {
        let mut parts: Vec<String> = Vec::new();

        match self.status {
            PancreasStatus::Normal => {}
            PancreasStatus::PartiallyVisible => {
                parts.push("parcialmente acessível/visualizado, sem alterações evidentes".into())
            }
            PancreasStatus::NotVisible => {
                parts.push("inacessível/prejudicado pela interposição gasosa".into())
            }
            PancreasStatus::PancreatitisSigns => parts.push("sinais de pancreatite aguda".into()),
        }

        parts.extend(self.findings.iter().map(describe));

        if let Some(dilation) = &self.wirsung_dilation {
            parts.push(format!(
                "ducto de Wirsung ectasiado{}",
                measured(dilation.measurement.as_ref(), "")
            ));
        }

        let text = if parts.is_empty() {
            "aspecto normal.".to_string()
        } else {
            format!("{}.", join_list(&parts))
        };
        vec![format!("{}: {text}", self.heading())]
    }
}

fn describe(finding: &PancreaticFinding) -> String {
    let base = match finding.kind {
        PancreaticFindingKind::Cyst => "imagem cística",
        PancreaticFindingKind::Nodule => "nódulo",
        PancreaticFindingKind::Calcification => "calcificação parenquimatosa",
    };
    let location = finding.location.map(location).unwrap_or_default();
    format!("{base}{location}{}", size_suffix(finding.size.as_ref()))
}

fn location(region: PancreaticRegion) -> &'static str {
    match region {
        PancreaticRegion::Head => " na cabeça",
        PancreaticRegion::Body => " no corpo",
        PancreaticRegion::Tail => " na cauda",
    }
}
