//! CLI argument definitions for `romi`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use romi_core::models::prefs::{Contrast, FontSize, Motion};

#[derive(Parser)]
#[command(
    name = "romi",
    version,
    about = "ROMI symptom intake: validation and local triage",
    long_about = "ROMI symptom intake: validation and local triage.\n\n\
                  Drafts are JSON files using the web form's camelCase field names.\n\
                  The triage is a local, non-clinical estimate."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Config file (default: <config dir>/romi/config.json).
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the last submission and preferences. Overrides the
    /// config file.
    #[arg(long = "data-dir", value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Log filter, in RUST_LOG syntax (e.g. `debug`, `romi_storage=trace`).
    #[arg(long = "log-level", value_name = "FILTER", global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines.
    #[arg(long = "log-json", global = true)]
    pub log_json: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a draft and print the error summary. Exits 1 when invalid.
    Check(DraftArgs),

    /// Print the triage estimate for a draft, valid or not.
    Triage(TriageArgs),

    /// Validate, submit and, on acceptance, save a draft.
    Submit(DraftArgs),

    /// Fill in the intake interactively, starting from the last submission.
    Intake,

    /// Print the last accepted submission.
    Last,

    /// Show or change accessibility preferences.
    Prefs(PrefsArgs),

    /// Show the effective config.
    Config(ConfigArgs),
}

#[derive(Parser)]
pub struct DraftArgs {
    /// Draft JSON file.
    #[arg(value_name = "DRAFT")]
    pub draft: PathBuf,
}

#[derive(Parser)]
pub struct TriageArgs {
    #[command(flatten)]
    pub draft: DraftArgs,

    /// Print the decision as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser)]
pub struct PrefsArgs {
    /// Font size: md, lg or xl.
    #[arg(long)]
    pub font: Option<FontSize>,

    /// Contrast: normal or high.
    #[arg(long)]
    pub contrast: Option<Contrast>,

    /// Motion: normal or reduced.
    #[arg(long)]
    pub motion: Option<Motion>,
}

#[derive(Parser)]
pub struct ConfigArgs {
    /// Write the effective config back to the config file, upgrading it to
    /// the current version.
    #[arg(long)]
    pub write: bool,
}
