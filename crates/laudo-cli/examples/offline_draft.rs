//! Walks one exam through the whole flow without network access: build the
//! findings text, "draft" it with a stand-in service, save it to a scratch
//! history and export the `.doc`.
//!
//! Run with: cargo run -p laudo-cli --example offline_draft

use laudo_cli::export::{ExportFormat, export_report};
use laudo_cli::session::Session;
use laudo_cli::workspace::Workspace;
use laudo_core::measurement::mm;
use laudo_core::models::kidneys::{RenalFinding, RenalFindingKind, RenalThird};
use laudo_drafting::error::DraftingError;
use laudo_drafting::{DraftRequest, DraftingService, SuggestionRequest};

/// Wraps each findings line in a paragraph.
struct Echo;

impl DraftingService for Echo {
    fn draft(&self, request: &DraftRequest) -> Result<String, DraftingError> {
        Ok(request
            .findings_text
            .lines()
            .map(|line| format!("<p>{line}</p>"))
            .collect())
    }

    fn suggest(&self, request: &SuggestionRequest) -> Result<String, DraftingError> {
        Ok(request.query.clone())
    }
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let scratch = std::env::temp_dir().join("laudo-offline-draft");
    let workspace = Workspace::open(&scratch);

    let mut session = Session::new(jiff::Zoned::now().date());
    session.patient.name = "Paciente Exemplo".to_string();
    session.record.kidneys.left.findings =
        vec![RenalFinding::new(RenalFindingKind::Stone).with_size(mm("6")).at(RenalThird::Lower)];

    println!("{}\n", session.findings_text());

    session.generate(&Echo)?;
    let id = session.save(&workspace.history)?;
    println!("saved {id}");

    let settings = workspace.settings.load()?;
    let file =
        export_report(session.report_html(), &session.patient, &settings, ExportFormat::Doc)?;
    let path = scratch.join(&file.file_name);
    std::fs::write(&path, &file.bytes)?;
    println!("wrote {}", path.display());

    Ok(())
}
