use laudo_core::models::free_fluid::FreeFluid;

use crate::Region;

impl Region for FreeFluid {
    fn heading(&self) -> &'static str {
        "Líquido Livre"
    }

    fn compose(&self) -> Vec<String> {
        let text = match self {
            FreeFluid::Absent => "ausente.".to_string(),
            FreeFluid::FocalAccumulation { site } => {
                let site = site
                    .as_deref()
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .unwrap_or("localização não especificada");
                format!("presença de acúmulo focal de líquido livre em {site}.")
            }
            located => format!(
                "presença de líquido livre em {}.",
                located.wire_name().replace('_', " ")
            ),
        };
        vec![format!("{}: {text}", self.heading())]
    }
}
