use laudo_core::models::observations::TechnicalLimitations;

use crate::Region;
use crate::grammar::join_list;

impl Region for TechnicalLimitations {
    fn heading(&self) -> &'static str {
        "Limitações Técnicas"
    }

    fn compose(&self) -> Vec<String> {
        let mut causes = Vec::new();
        if self.body_habitus {
            causes.push("biotipo do paciente");
        }
        if self.bowel_gas {
            causes.push("meteorismo intestinal");
        }
        if causes.is_empty() {
            return Vec::new();
        }
        vec![format!("{}: Exame prejudicado por {}.", self.heading(), join_list(&causes))]
    }
}
