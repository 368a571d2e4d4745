use clap::Parser;

use crate::pages::{BASE_URL, DEFAULT_OUTPUT_DIR, REQUEST_DELAY, REQUEST_TIMEOUT};

/// Mirror the Zed DeepWiki pages as local markdown files.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Output directory for the markdown files.
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub out: String,

    /// Base URL the page identifiers are appended to.
    #[arg(long, default_value = BASE_URL)]
    pub base_url: String,

    /// Per-request timeout.
    #[arg(long, default_value_t = REQUEST_TIMEOUT.as_secs())]
    pub timeout_secs: u64,

    /// Delay after each page (politeness).
    #[arg(long, default_value_t = REQUEST_DELAY.as_millis() as u64)]
    pub delay_ms: u64,

    /// Fetch only these page identifiers, in the given order (repeatable).
    #[arg(long = "page", value_name = "ID")]
    pub pages: Vec<String>,
}
