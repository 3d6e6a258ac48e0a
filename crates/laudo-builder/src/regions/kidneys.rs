use laudo_core::models::kidneys::{
    CollectingSystemDilation, Kidney, KidneySide, Kidneys, RenalFinding, RenalFindingKind,
    RenalThird, Side,
};

use crate::Region;
use crate::grammar::{join_list, size_suffix};

impl Region for Kidneys {
    fn heading(&self) -> &'static str {
        "Rins e Ureteres"
    }

    /// Always a single line: every sentence about both kidneys and the
    /// collecting system, joined by spaces.
    fn compose(&self) -> Vec<String> {
        let mut sentences = Vec::new();

        if self.show_measurements
            && let Some(measurements) = measurements(self)
        {
            sentences.push(measurements);
        }

        let right = describe_side(KidneySide::Right, &self.right);
        let left = describe_side(KidneySide::Left, &self.left);
        let right_normal = self.right.present && right.is_none();
        let left_normal = self.left.present && left.is_none();

        sentences.extend(right);
        sentences.extend(left);

        if right_normal && left_normal {
            sentences.push("Rins de aspecto normal bilateralmente.".to_string());
        } else if right_normal {
            sentences.push("Rim direito de aspecto normal.".to_string());
        } else if left_normal {
            sentences.push("Rim esquerdo de aspecto normal.".to_string());
        }

        if self.bilateral_microlithiasis {
            sentences.push("Presença de microcálculos renais bilaterais.".to_string());
        }

        if let Some(dilation) = &self.dilation {
            sentences.push(format!("Presença de {}.", describe_dilation(dilation)));
        }

        vec![format!("{}: {}", self.heading(), sentences.join(" "))]
    }
}

/// `None` for a present kidney without findings.
fn describe_side(side: KidneySide, kidney: &Kidney) -> Option<String> {
    if !kidney.present {
        return Some(format!("Rim {} ausente.", side.label()));
    }
    if kidney.findings.is_empty() {
        return None;
    }
    let findings: Vec<String> = kidney.findings.iter().map(describe_finding).collect();
    Some(format!("Rim {} apresentando {}.", side.label(), join_list(&findings)))
}

fn describe_finding(finding: &RenalFinding) -> String {
    let kind = match finding.kind {
        RenalFindingKind::Cyst => "cisto",
        RenalFindingKind::Nodule => "nódulo",
        RenalFindingKind::Stone => "cálculo",
    };
    let third = match finding.location {
        RenalThird::Upper => "terço superior",
        RenalThird::Middle => "terço médio",
        RenalThird::Lower => "terço inferior",
    };
    format!("{kind} no {third}{}", size_suffix(finding.size.as_ref()))
}

fn measurements(kidneys: &Kidneys) -> Option<String> {
    let sides: Vec<String> = KidneySide::BOTH
        .into_iter()
        .filter_map(|side| {
            let kidney = kidneys.side(side);
            if !kidney.present || kidney.measurements.is_empty() {
                return None;
            }
            let m = &kidney.measurements;
            let values: Vec<String> = [
                ("longitudinal", &m.longitudinal),
                ("parênquima", &m.parenchyma),
                ("cortical", &m.cortical),
            ]
            .into_iter()
            .filter_map(|(label, value)| value.as_ref().map(|v| format!("{label} {v} mm")))
            .collect();
            Some(format!("Rim {}: {}", side.label(), values.join(", ")))
        })
        .collect();

    if sides.is_empty() {
        None
    } else {
        Some(format!("Medidas renais: {}.", sides.join("; ")))
    }
}

fn describe_dilation(dilation: &CollectingSystemDilation) -> String {
    match dilation.ureteral {
        Some(ureteral) if ureteral == dilation.pyelocaliceal => {
            format!("dilatação pieloureteral {}", side(dilation.pyelocaliceal))
        }
        Some(ureteral) => format!(
            "dilatação pielocalicial {} e dilatação ureteral {}",
            side(dilation.pyelocaliceal),
            side(ureteral)
        ),
        None => format!("dilatação pielocalicial {}", side(dilation.pyelocaliceal)),
    }
}

fn side(side: Side) -> &'static str {
    match side {
        Side::Right => "à direita",
        Side::Left => "à esquerda",
        Side::Bilateral => "bilateral",
    }
}
