use laudo_core::models::vessels::{Aorta, VenaCava};

use crate::Region;
use crate::grammar::measured;

const BOTH_NORMAL: &str = "Aorta e Veia Cava Inferior com calibre e trajeto preservados.";

const PRESERVED: &str = "com calibre e trajeto preservados.";

/// Aorta and inferior vena cava share one sentence while both are normal.
pub struct Vessels<'a> {
    pub aorta: &'a Aorta,
    pub vena_cava: &'a VenaCava,
}

impl<'a> Vessels<'a> {
    pub fn new(aorta: &'a Aorta, vena_cava: &'a VenaCava) -> Self {
        Self { aorta, vena_cava }
    }
}

impl Region for Vessels<'_> {
    fn heading(&self) -> &'static str {
        "Aorta e Veia Cava Inferior"
    }

    fn compose(&self) -> Vec<String> {
        if *self.aorta == Aorta::Normal && *self.vena_cava == VenaCava::Normal {
            return vec![BOTH_NORMAL.to_string()];
        }
        vec![
            format!("Aorta: {}", aorta(self.aorta)),
            format!("Veia Cava Inferior: {}", vena_cava(self.vena_cava)),
        ]
    }
}

fn aorta(aorta: &Aorta) -> String {
    match aorta {
        Aorta::Normal => PRESERVED.to_string(),
        Aorta::Ectatic { caliber } => {
            format!("ectasiada{}.", measured(caliber.as_ref(), " de diâmetro"))
        }
        Aorta::NotAssessable => "não avaliável.".to_string(),
        Aorta::Plaques => {
            "apresentando placas de ateroma calcificadas em suas paredes.".to_string()
        }
    }
}

fn vena_cava(vena_cava: &VenaCava) -> String {
    match vena_cava {
        VenaCava::Normal => PRESERVED.to_string(),
        VenaCava::Dilated { caliber } => {
            format!("dilatada{}.", measured(caliber.as_ref(), " de diâmetro"))
        }
        VenaCava::Compressed => "comprimida, por aparente efeito de massa extrínseco.".to_string(),
        VenaCava::Thrombosed => {
            "com material ecogênico em seu interior, sugestivo de trombose.".to_string()
        }
    }
}
