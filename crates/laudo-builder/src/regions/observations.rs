use laudo_core::models::observations::FinalObservations;

use crate::Region;

const FURTHER_WORKUP: &str = "Sugere-se aumentar a gama propedêutica para elucidação diagnóstica \
e correlacionar com a clínica.";

const GRAVID_ABDOMEN: &str = "Observa-se abdome gravídico, com útero aumentado conforme esperado \
para gestação. Avaliação obstétrica detalhada deve ser realizada por exame ultrassonográfico \
específico obstétrico, caso necessário.";

impl Region for FinalObservations {
    fn heading(&self) -> &'static str {
        "Observações Finais"
    }

    fn compose(&self) -> Vec<String> {
        let mut sentences = Vec::new();
        if self.suggest_further_workup {
            sentences.push(FURTHER_WORKUP);
        }
        if self.gravid_abdomen {
            sentences.push(GRAVID_ABDOMEN);
        }
        let free_text = self.free_text.trim();
        if !free_text.is_empty() {
            sentences.push(free_text);
        }
        if sentences.is_empty() {
            return Vec::new();
        }
        vec![format!("{}: {}", self.heading(), sentences.join(" "))]
    }
}
