use std::time::Duration;

use anyhow::Context as _;
use reqwest::header::ACCEPT;
use url::Url;

use crate::convert::{clean_markdown, to_markdown};

/// Result of fetching and converting one page.
#[derive(Debug)]
pub enum PageOutcome {
    Fetched { markdown: String },
    Failed { error: anyhow::Error },
}

#[derive(Debug)]
pub struct Fetcher {
    client: reqwest::blocking::Client,
    base_url: Url,
}

impl Fetcher {
    pub fn new(base_url: Url, timeout: Duration, user_agent: &str) -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .context("build page http client")?;
        Ok(Self { client, base_url })
    }

    pub fn page_url(&self, identifier: &str) -> anyhow::Result<Url> {
        crate::pages::page_url(&self.base_url, identifier)
    }

    /// One GET, no retries. Non-2xx statuses and bodies that are not valid
    /// UTF-8 are errors.
    pub fn fetch_html(&self, url: &Url) -> anyhow::Result<String> {
        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8")
            .send()
            .with_context(|| format!("GET {url}"))?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("GET {url}: HTTP {status}");
        }

        let body = response
            .bytes()
            .with_context(|| format!("read response body: {url}"))?;
        String::from_utf8(body.to_vec()).with_context(|| format!("decode response body: {url}"))
    }

    /// Fetches, converts and cleans `identifier`. Retrieval errors are returned
    /// as [`PageOutcome::Failed`] so the caller can move on to the next page.
    pub fn process(&self, identifier: &str) -> PageOutcome {
        match self.fetch_markdown(identifier) {
            Ok(markdown) => PageOutcome::Fetched { markdown },
            Err(error) => PageOutcome::Failed { error },
        }
    }

    fn fetch_markdown(&self, identifier: &str) -> anyhow::Result<String> {
        let url = self.page_url(identifier)?;
        let html = self.fetch_html(&url)?;
        let markdown = to_markdown(&html);
        Ok(clean_markdown(&markdown, identifier, &url))
    }
}
