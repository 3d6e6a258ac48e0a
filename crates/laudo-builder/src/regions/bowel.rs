use laudo_core::models::bowel::BowelLoops;

use crate::Region;

const APPENDIX_NOT_SEEN: &str = "Apêndice cecal não visualizado à ultrassonografia, o que pode estar \
relacionado à presença de interposição gasosa, limitações técnicas do exame, biotipo corporal do \
paciente e variações anatômicas na posição do apêndice. Sugere-se a complementação da investigação \
diagnóstica conforme a correlação com os achados clínicos e laboratoriais.";

impl Region for BowelLoops {
    fn heading(&self) -> &'static str {
        "Alças Intestinais"
    }

    fn compose(&self) -> Vec<String> {
        let text = match self {
            BowelLoops::DoNotMention => return Vec::new(),
            BowelLoops::Appendicitis => "Sinais de apendicite.",
            BowelLoops::Diverticulitis => "Sinais de diverticulite.",
            BowelLoops::AppendixNotSeen => APPENDIX_NOT_SEEN,
            BowelLoops::Unremarkable => "sem alterações ecográficas evidentes.",
        };
        vec![format!("{}: {text}", self.heading())]
    }
}
