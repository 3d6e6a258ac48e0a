use laudo_core::models::liver::{
    HepaticLesion, HepaticLesionKind, HepaticSegment, Liver, LiverContour, LiverSize, LiverTexture,
    SteatosisGrade,
};

use crate::Region;
use crate::grammar::{join_list, size_suffix};

const NORMAL: &str = "com dimensões normais, contornos regulares, bordas finas e ecotextura homogênea. \
Veia porta e veias hepáticas sem alterações.";

const VEINS_PRESERVED: &str = "Veia porta e veias hepáticas com calibre e fluxo preservados.";

impl Region for Liver {
    fn heading(&self) -> &'static str {
        "Fígado"
    }

    fn compose(&self) -> Vec<String> {
        if is_normal(self) {
            return vec![format!("{}: {NORMAL}", self.heading())];
        }

        let mut text = format!(
            "{}: com {}, contornos {} e {}.",
            self.heading(),
            dimensions(&self.size),
            contour(self.contour),
            parenchyma(self.texture, self.steatosis),
        );

        if !self.lesions.is_empty() {
            let lesions: Vec<String> = self.lesions.iter().map(describe_lesion).collect();
            // Lesion descriptions contain commas of their own.
            text.push_str(&format!(" Observa-se ainda: {}.", lesions.join("; ")));
        }

        text.push(' ');
        text.push_str(VEINS_PRESERVED);
        vec![text]
    }
}

fn is_normal(liver: &Liver) -> bool {
    liver.size == LiverSize::Normal
        && liver.contour == LiverContour::Regular
        && liver.texture == LiverTexture::Homogeneous
        && liver.steatosis.is_none()
        && liver.lesions.is_empty()
}

fn dimensions(size: &LiverSize) -> String {
    match size {
        LiverSize::Normal => "dimensões normais".to_string(),
        LiverSize::Enlarged { right_lobe, left_lobe } => {
            let mut lobes = Vec::new();
            if let Some(right) = right_lobe {
                lobes.push(format!(
                    "lobo direito medindo {right} mm no seu maior eixo longitudinal"
                ));
            }
            if let Some(left) = left_lobe {
                lobes.push(format!("lobo esquerdo medindo {left} mm"));
            }
            if lobes.is_empty() {
                "dimensões aumentadas (hepatomegalia)".to_string()
            } else {
                format!("dimensões aumentadas (hepatomegalia), com {}", join_list(&lobes))
            }
        }
    }
}

fn contour(contour: LiverContour) -> &'static str {
    match contour {
        LiverContour::Regular => "regulares",
        LiverContour::Irregular => "irregulares/serrilhados",
    }
}

fn parenchyma(texture: LiverTexture, steatosis: Option<SteatosisGrade>) -> String {
    match steatosis {
        Some(grade) => format!(
            "parênquima com ecotextura difusamente heterogênea e aumento da ecogenicidade, \
             compatível com infiltração gordurosa {}",
            steatosis_grade(grade)
        ),
        None => match texture {
            LiverTexture::Homogeneous => "parênquima de ecotextura homogênea".to_string(),
            LiverTexture::Heterogeneous => {
                "parênquima de ecotextura heterogênea difusamente".to_string()
            }
        },
    }
}

fn steatosis_grade(grade: SteatosisGrade) -> &'static str {
    match grade {
        SteatosisGrade::Mild => "leve (grau I)",
        SteatosisGrade::Moderate => "moderada (grau II)",
        SteatosisGrade::Marked => "acentuada (grau III)",
    }
}

fn describe_lesion(lesion: &HepaticLesion) -> String {
    let base = match &lesion.kind {
        HepaticLesionKind::SimpleCyst => "imagem cística simples",
        HepaticLesionKind::Hemangioma => {
            "nódulo hiperecogênico, de contornos regulares, compatível com hemangioma"
        }
        HepaticLesionKind::SolidNodule => "nódulo sólido",
        HepaticLesionKind::HypoechoicNodule => "nódulo hipoecogênico",
        HepaticLesionKind::Metastasis => {
            "nódulo com características de lesão secundária (metástase)"
        }
        HepaticLesionKind::Other { description } if description.trim().is_empty() => {
            "nódulo não especificado"
        }
        HepaticLesionKind::Other { description } => description.trim(),
    };
    format!("{base}{}{}", segment(lesion.segment), size_suffix(lesion.size.as_ref()))
}

fn segment(segment: HepaticSegment) -> String {
    segment
        .numeral()
        .map(|n| format!(" em segmento {n}"))
        .unwrap_or_default()
}
