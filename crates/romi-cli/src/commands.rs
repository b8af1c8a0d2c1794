use std::path::Path;

use romi_cli::config::{self, RomiConfig};
use romi_cli::wizard::{self, WizardOutcome};
use romi_core::models::draft::ReportDraft;
use romi_intake::{IntakeSession, Notice};
use romi_intake::summary::summarize;
use romi_storage::FileStore;
use romi_storage::prefs::{load_prefs, save_prefs};
use romi_storage::submission::load_last_submission;
use romi_submit::DemoSubmitter;

use crate::cli::{Cli, Command, ConfigArgs, DraftArgs, PrefsArgs, TriageArgs};

const NO_SUBMISSION: &str = "No hay registros guardados.";

/// Run the selected command and return the process exit code.
pub async fn run(cli: Cli) -> eyre::Result<i32> {
    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => config::default_config_path()?,
    };
    let mut config = config::load_config(&config_path)?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = Some(dir);
    }
    let store = FileStore::new(config.data_dir()?);
    tracing::debug!(data_dir = %store.root().display(), "using data directory");

    match cli.command {
        Command::Check(args) => run_check(&args),
        Command::Triage(args) => run_triage(&args),
        Command::Submit(args) => run_submit(&args, &config, &store).await,
        Command::Intake => run_intake(&config, &store).await,
        Command::Last => run_last(&store),
        Command::Prefs(args) => run_prefs(&args, &store),
        Command::Config(args) => run_config(&args, &config, &config_path),
    }
}

fn read_draft(path: &Path) -> eyre::Result<ReportDraft> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read draft at {}: {e}", path.display()))?;
    let draft = serde_json::from_str(&contents)
        .map_err(|e| eyre::eyre!("draft at {} is not valid JSON: {e}", path.display()))?;
    Ok(draft)
}

fn run_check(args: &DraftArgs) -> eyre::Result<i32> {
    let draft = read_draft(&args.draft)?;
    match romi_schema::validate_report(&draft) {
        Ok(_) => {
            println!("Sin errores.");
            Ok(0)
        }
        Err(errors) => {
            for entry in summarize(&errors) {
                println!("{}  (#{})", entry.text, entry.anchor);
            }
            Ok(1)
        }
    }
}

fn run_triage(args: &TriageArgs) -> eyre::Result<i32> {
    let draft = read_draft(&args.draft.draft)?;
    let decision = romi_triage::triage_draft(&draft);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&decision)?);
    } else {
        println!("Nivel: {} · {}", decision.level.as_str().to_uppercase(), decision.reason);
        if let Some(recommendation) = &decision.recommendation {
            println!("{recommendation}");
        }
    }
    Ok(0)
}

async fn run_submit(args: &DraftArgs, config: &RomiConfig, store: &FileStore) -> eyre::Result<i32> {
    let draft = read_draft(&args.draft)?;
    let submitter = DemoSubmitter::new(config.submission.clone());
    let mut session = IntakeSession::with_draft(draft);

    let notice = session.submit(&submitter, store).await;
    println!("{notice}");
    for entry in session.summary() {
        println!("  - {}", entry.text);
    }
    if let Some(receipt) = session.receipt() {
        println!("{} ({})", receipt.message, receipt.id);
    }
    Ok(if notice.is_error() { 1 } else { 0 })
}

async fn run_intake(config: &RomiConfig, store: &FileStore) -> eyre::Result<i32> {
    let submitter = DemoSubmitter::new(config.submission.clone());
    let mut session = IntakeSession::resume(store);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    let outcome = wizard::run_intake(
        &mut session,
        &submitter,
        store,
        &mut stdin.lock(),
        &mut stdout.lock(),
    )
    .await?;
    Ok(match outcome {
        WizardOutcome::Submitted => 0,
        WizardOutcome::Abandoned => 1,
    })
}

fn run_last(store: &FileStore) -> eyre::Result<i32> {
    match load_last_submission(store) {
        Some(report) => println!("{}", serde_json::to_string_pretty(&report)?),
        None => println!("{}", Notice::info(NO_SUBMISSION)),
    }
    Ok(0)
}

fn run_prefs(args: &PrefsArgs, store: &FileStore) -> eyre::Result<i32> {
    let mut prefs = load_prefs(store);
    let before = prefs;
    if let Some(font) = args.font {
        prefs.font = font;
    }
    if let Some(contrast) = args.contrast {
        prefs.contrast = contrast;
    }
    if let Some(motion) = args.motion {
        prefs.motion = motion;
    }
    if prefs != before {
        save_prefs(store, &prefs);
    }
    println!("{}", serde_json::to_string_pretty(&prefs)?);
    Ok(0)
}

fn run_config(args: &ConfigArgs, config: &RomiConfig, path: &Path) -> eyre::Result<i32> {
    if args.write {
        config::save_config(path, config)?;
    }
    println!("# {}", path.display());
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(0)
}
