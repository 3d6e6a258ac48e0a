use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use eyre::{Result, WrapErr};
use laudo_core::FindingsRecord;
use laudo_core::models::patient::PatientDetails;
use laudo_core::volume::ellipsoid_volume;
use laudo_drafting::DraftingService;
use laudo_drafting::gemini::GeminiClient;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use laudo_cli::config::{self, LaudoConfig};
use laudo_cli::export::{ExportFormat, export_report};
use laudo_cli::session::Session;
use laudo_cli::workspace::{SettingsUpdate, Workspace, apply_settings_update};

/// Abdominal ultrasound report builder.
#[derive(Parser, Debug)]
#[command(name = "laudo", version)]
#[command(about = "Gera laudos de ultrassonografia de abdome total")]
struct Cli {
    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the structured findings text for a findings file.
    Text {
        /// Findings JSON; `-` reads stdin.
        findings: PathBuf,
    },
    /// List findings the report will ignore.
    Validate { findings: PathBuf },
    /// Ellipsoid volume of three dimensions in millimetres.
    Volume { d1: String, d2: String, d3: String },
    /// Print a blank input document to fill in.
    Template {
        #[arg(value_enum, default_value = "findings")]
        kind: TemplateKind,
    },
    /// Draft the report with the language model.
    Draft(DraftArgs),
    /// Suggest technical wording for a note.
    Suggest {
        query: String,
        /// Current report HTML, used as context.
        #[arg(long)]
        report: Option<PathBuf>,
        #[arg(long)]
        patient: Option<PathBuf>,
    },
    /// Saved reports.
    #[command(subcommand)]
    History(HistoryCommand),
    /// Clinic letterhead.
    #[command(subcommand)]
    Settings(SettingsCommand),
    /// Stored configuration.
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum TemplateKind {
    Findings,
    Patient,
}

#[derive(Args, Debug)]
struct DraftArgs {
    findings: PathBuf,
    #[arg(long)]
    patient: Option<PathBuf>,
    /// Add the drafted report to the history.
    #[arg(long)]
    save: bool,
    /// Also write the report in this format.
    #[arg(long, value_enum)]
    export: Option<ExportFormat>,
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

#[derive(Subcommand, Debug)]
enum HistoryCommand {
    /// Most recent reports, filtered by patient name.
    Search {
        #[arg(default_value = "")]
        query: String,
    },
    Show { id: Uuid },
    Delete { id: Uuid },
    /// Write a saved report to a file.
    Export {
        id: Uuid,
        #[arg(long, value_enum, default_value = "doc")]
        format: ExportFormat,
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
enum SettingsCommand {
    Show,
    Set {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        /// Image file embedded as the letterhead logo.
        #[arg(long)]
        logo: Option<PathBuf>,
        #[arg(long, conflicts_with = "logo")]
        clear_logo: bool,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    Show,
    Set {
        #[arg(long)]
        api_key: Option<String>,
        #[arg(long)]
        model: Option<String>,
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if cli.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    let config = config::load_config()?;
    run(cli.command, &config)
}

fn run(command: Command, config: &LaudoConfig) -> Result<()> {
    match command {
        Command::Text { findings } => {
            let record: FindingsRecord = read_json(&findings)?;
            println!("{}", laudo_builder::build_report_text(&record));
        }
        Command::Validate { findings } => {
            let record: FindingsRecord = read_json(&findings)?;
            let warnings = laudo_builder::validate(&record);
            if warnings.is_empty() {
                println!("Nenhum achado será ignorado.");
            }
            for warning in warnings {
                println!("- {warning}");
            }
        }
        Command::Volume { d1, d2, d3 } => println!("{}", ellipsoid_volume(&d1, &d2, &d3)),
        Command::Template { kind } => {
            let json = match kind {
                TemplateKind::Findings => FindingsRecord::default().to_json_pretty()?,
                TemplateKind::Patient => {
                    serde_json::to_string_pretty(&PatientDetails::new(today()))?
                }
            };
            println!("{json}");
        }
        Command::Draft(args) => draft(args, config)?,
        Command::Suggest { query, report, patient } => {
            let mut session = Session::new(today());
            if let Some(path) = patient {
                session.patient = read_json(&path)?;
            }
            if let Some(path) = report {
                session.edit(read_input(&path)?);
            }
            let client = drafting_client(config)?;
            match session.suggest(&client, &query) {
                Ok(suggestion) => println!("{suggestion}"),
                Err(e) => {
                    tracing::error!(error = ?e, "suggestion failed");
                    eprintln!("Falha ao obter sugestão da IA.");
                }
            }
        }
        Command::History(command) => history(command, &workspace(config)?)?,
        Command::Settings(command) => settings(command, &workspace(config)?)?,
        Command::Config(command) => config_command(command, config)?,
    }
    Ok(())
}

fn draft(args: DraftArgs, config: &LaudoConfig) -> Result<()> {
    let record: FindingsRecord = read_json(&args.findings)?;
    let patient = match &args.patient {
        Some(path) => read_json(path)?,
        None => PatientDetails::new(today()),
    };
    let mut session = Session::with_inputs(record, patient);
    for warning in session.warnings() {
        eprintln!("Aviso: {warning}");
    }

    let client = drafting_client(config)?;
    if let Err(e) = session.generate(&client) {
        tracing::error!(error = ?e, "drafting failed");
        return Err(eyre::eyre!("{e}"));
    }
    println!("{}", session.report_html());

    let workspace = workspace(config)?;
    if args.save {
        let id = session.save(&workspace.history)?;
        eprintln!("Laudo salvo: {id}");
    }
    if let Some(format) = args.export {
        let settings = workspace.settings.load()?;
        let file = export_report(session.report_html(), &session.patient, &settings, format)?;
        write_export(&args.out_dir, &file.file_name, &file.bytes)?;
    }
    Ok(())
}

fn history(command: HistoryCommand, workspace: &Workspace) -> Result<()> {
    match command {
        HistoryCommand::Search { query } => {
            for report in workspace.history.search(&query)? {
                println!(
                    "{}  {}  {}  {}",
                    report.id, report.created_at, report.patient.exam_date, report.patient.name
                );
            }
        }
        HistoryCommand::Show { id } => {
            let report = workspace.history.get(id)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        HistoryCommand::Delete { id } => workspace.history.delete(id)?,
        HistoryCommand::Export { id, format, out_dir } => {
            let session = Session::from_saved(workspace.history.get(id)?);
            let settings = workspace.settings.load()?;
            let file = export_report(session.report_html(), &session.patient, &settings, format)?;
            write_export(&out_dir, &file.file_name, &file.bytes)?;
        }
    }
    Ok(())
}

fn settings(command: SettingsCommand, workspace: &Workspace) -> Result<()> {
    match command {
        SettingsCommand::Show => {
            let mut settings = workspace.settings.load()?;
            if settings.has_logo() {
                settings.logo = format!("<{} bytes>", settings.logo.len());
            }
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
        SettingsCommand::Set { name, address, phone, logo, clear_logo } => {
            let update = SettingsUpdate {
                clinic_name: name,
                clinic_address: address,
                clinic_phone: phone,
                logo_file: logo,
                clear_logo,
            };
            let updated = apply_settings_update(workspace.settings.load()?, update)?;
            workspace.settings.save(&updated)?;
        }
    }
    Ok(())
}

fn config_command(command: ConfigCommand, config: &LaudoConfig) -> Result<()> {
    let path = config::config_path()?;
    match command {
        ConfigCommand::Show => {
            let info = config::config_info(config, &path);
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
        ConfigCommand::Set { api_key, model, data_dir } => {
            // Edit the stored file, not the copy with environment overrides.
            let mut stored = config::load_config_from(&path)?;
            if let Some(key) = api_key {
                stored.gemini.api_key = key;
            }
            if let Some(model) = model {
                stored.gemini.model = model;
            }
            if let Some(dir) = data_dir {
                stored.data_dir = Some(dir);
            }
            config::save_config_to(&path, &stored)?;
        }
    }
    Ok(())
}

fn drafting_client(config: &LaudoConfig) -> Result<impl DraftingService> {
    GeminiClient::new(config.gemini_config())
        .wrap_err_with(|| {
            format!("set {} or run `laudo config set --api-key`", config::API_KEY_ENV)
        })
}

fn workspace(config: &LaudoConfig) -> Result<Workspace> {
    Ok(Workspace::open(config.data_dir()?))
}

fn today() -> jiff::civil::Date {
    jiff::Zoned::now().date()
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).wrap_err_with(|| format!("failed to read {}", path.display()))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = read_input(path)?;
    serde_json::from_str(&contents).wrap_err_with(|| format!("invalid JSON in {}", path.display()))
}

fn write_export(dir: &Path, file_name: &str, bytes: &[u8]) -> Result<()> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    std::fs::write(&path, bytes).wrap_err_with(|| format!("failed to write {}", path.display()))?;
    eprintln!("Arquivo gerado: {}", path.display());
    Ok(())
}
