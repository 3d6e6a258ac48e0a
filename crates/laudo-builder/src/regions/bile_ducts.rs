use laudo_core::models::bile_ducts::BileDucts;

use crate::Region;
use crate::grammar::measured;

impl Region for BileDucts {
    fn heading(&self) -> &'static str {
        "Vias Biliares"
    }

    fn compose(&self) -> Vec<String> {
        let text = match self {
            BileDucts::Normal => "colédoco com calibre normal.".to_string(),
            BileDucts::Dilated { caliber, stone } => {
                let mut text = format!("colédoco ectasiado{}.", measured(caliber.as_ref(), ""));
                if *stone {
                    text.push_str(" Presença de cálculo em seu interior.");
                }
                text
            }
        };
        vec![format!("{}: {text}", self.heading())]
    }
}
