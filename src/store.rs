use std::fs::OpenOptions;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Context as _;

const UNSAFE_FILENAME_CHARS: &[char] = &['(', ')', '/', '\\', ':', '*', '?', '"', '<', '>', '|'];

pub fn sanitize(identifier: &str) -> String {
    identifier
        .chars()
        .filter(|ch| !UNSAFE_FILENAME_CHARS.contains(ch))
        .collect()
}

pub fn output_filename(identifier: &str) -> String {
    format!("{}.md", sanitize(identifier))
}

pub fn ensure_output_dir(dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("create output dir: {}", dir.display()))
}

/// Writes `markdown` to `<dir>/<output_filename(identifier)>`, replacing any
/// previous copy.
pub fn write_page(dir: &Path, identifier: &str, markdown: &str) -> anyhow::Result<PathBuf> {
    ensure_output_dir(dir)?;

    let path = dir.join(output_filename(identifier));
    let mut file = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(&path)
        .with_context(|| format!("open output page: {}", path.display()))?;
    file.write_all(markdown.as_bytes())
        .with_context(|| format!("write output page: {}", path.display()))?;
    file.flush()
        .with_context(|| format!("flush output page: {}", path.display()))?;

    tracing::debug!(path = %path.display(), bytes = markdown.len(), "wrote page");
    Ok(path)
}
