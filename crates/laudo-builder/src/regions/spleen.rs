use laudo_core::models::spleen::Spleen;

use crate::Region;
use crate::grammar::measured;

impl Region for Spleen {
    fn heading(&self) -> &'static str {
        "Baço"
    }

    fn compose(&self) -> Vec<String> {
        let text = match self {
            Spleen::Normal => "com dimensões normais e ecotextura homogênea.".to_string(),
            Spleen::Enlarged { longitudinal } => format!(
                "com dimensões aumentadas (esplenomegalia){}.",
                measured(longitudinal.as_ref(), " no seu maior eixo longitudinal")
            ),
            Spleen::Absent => "ausente (status pós-esplenectomia).".to_string(),
        };
        vec![format!("{}: {text}", self.heading())]
    }
}
