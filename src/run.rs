use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context as _;
use url::Url;

use crate::cli::Cli;
use crate::fetch::{Fetcher, PageOutcome};
use crate::pages::{PAGES, REQUEST_DELAY, REQUEST_TIMEOUT, USER_AGENT};

const RULE_WIDTH: usize = 60;

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub base_url: Url,
    pub out_dir: PathBuf,
    pub timeout: Duration,
    pub delay: Duration,
    pub user_agent: String,
    pub pages: Vec<String>,
}

impl RunConfig {
    /// The fixed page list against `base_url`, with the default timeout and delay.
    pub fn new(base_url: Url, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_url,
            out_dir: out_dir.into(),
            timeout: REQUEST_TIMEOUT,
            delay: REQUEST_DELAY,
            user_agent: USER_AGENT.to_owned(),
            pages: PAGES.iter().map(|page| (*page).to_owned()).collect(),
        }
    }

    pub fn from_cli(cli: &Cli) -> anyhow::Result<Self> {
        let base_url = crate::pages::parse_base_url(&cli.base_url).context("parse --base-url")?;
        let mut config = Self::new(base_url, &cli.out);
        config.timeout = Duration::from_secs(cli.timeout_secs);
        config.delay = Duration::from_millis(cli.delay_ms);
        if !cli.pages.is_empty() {
            config.pages = cli.pages.clone();
        }
        Ok(config)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: Vec<String>,
}

impl RunSummary {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Fetches every configured page once, in order, writing progress to `out`.
///
/// Retrieval failures are recorded in the summary and the loop continues.
/// Output directory and write errors abort the run.
pub fn run<W: Write>(config: &RunConfig, out: &mut W) -> anyhow::Result<RunSummary> {
    crate::store::ensure_output_dir(&config.out_dir)?;

    let fetcher = Fetcher::new(config.base_url.clone(), config.timeout, &config.user_agent)?;
    let total = config.pages.len();
    let rule = "-".repeat(RULE_WIDTH);

    writeln!(out, "Fetching {total} DeepWiki pages...")?;
    writeln!(out, "Output directory: {}", config.out_dir.display())?;
    writeln!(out, "{rule}")?;

    let mut summary = RunSummary {
        total,
        ..RunSummary::default()
    };

    for (index, page) in config.pages.iter().enumerate() {
        write!(out, "[{}/{total}] Fetching {page}... ", index + 1)?;
        out.flush()?;

        match fetcher.process(page) {
            PageOutcome::Fetched { markdown } => {
                crate::store::write_page(&config.out_dir, page, &markdown)
                    .with_context(|| format!("save page {page}"))?;
                writeln!(out, "OK ({} chars)", markdown.chars().count())?;
                summary.succeeded += 1;
            }
            PageOutcome::Failed { error } => {
                let error = format!("{error:#}");
                tracing::warn!(page = %page, error = %error, "page fetch failed");
                writeln!(out, "FAILED")?;
                summary.failed.push(page.clone());
            }
        }

        if !config.delay.is_zero() {
            std::thread::sleep(config.delay);
        }
    }

    writeln!(out, "{rule}")?;
    writeln!(out, "Completed: {}/{total} pages", summary.succeeded)?;

    if !summary.failed.is_empty() {
        writeln!(out)?;
        writeln!(out, "Failed pages ({}):", summary.failed.len())?;
        for page in &summary.failed {
            writeln!(out, "  - {page}")?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Files saved to: {}", config.out_dir.display())?;
    out.flush()?;

    Ok(summary)
}
