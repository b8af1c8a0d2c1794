use clap::Parser;
use eyre::Result;

mod cli;
mod commands;

use crate::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    romi_cli::logging::init_logging(cli.log_level.as_deref(), cli.log_json)?;

    let code = commands::run(cli).await?;
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
