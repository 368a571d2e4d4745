use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser as _;

fn main() -> ExitCode {
    if let Err(err) = try_main() {
        eprintln!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn try_main() -> anyhow::Result<()> {
    deepwiki_fetch::logging::init().context("init logging")?;

    let cli = deepwiki_fetch::cli::Cli::parse();
    tracing::debug!(?cli, "parsed cli");

    let config = deepwiki_fetch::run::RunConfig::from_cli(&cli)?;
    let mut stdout = std::io::stdout().lock();
    let summary = deepwiki_fetch::run::run(&config, &mut stdout).context("fetch pages")?;
    tracing::debug!(
        succeeded = summary.succeeded,
        failed = summary.failed.len(),
        complete = summary.is_complete(),
        "run finished"
    );

    Ok(())
}
