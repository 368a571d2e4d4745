use std::time::Duration;

use anyhow::Context as _;
use url::Url;

pub const BASE_URL: &str = "https://deepwiki.com/zed-industries/zed";
pub const DEFAULT_OUTPUT_DIR: &str = "zed-deepwiki-docs";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const REQUEST_DELAY: Duration = Duration::from_millis(500);

/// Sent instead of reqwest's default agent; the site rejects obvious bots.
pub const USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36";

/// DeepWiki table of contents for `zed-industries/zed`, in reading order.
pub const PAGES: &[&str] = &[
    "1-overview",
    // Core architecture
    "2-core-architecture",
    "2.1-application-initialization-and-lifecycle",
    "2.2-gpui-framework",
    "2.3-window-and-platform-abstraction",
    "2.4-event-flow-and-input-handling",
    "2.5-keybinding-and-action-system",
    "2.6-focus-management-and-hit-testing",
    // Editor
    "3-editor-architecture",
    "3.1-editor-component-and-ui",
    "3.2-buffer-system-and-text-storage",
    "3.3-display-pipeline-and-rendering",
    "3.4-selections-and-editing-operations",
    "3.5-code-intelligence-integration",
    "3.6-diff-integration",
    // Workspace and panels
    "4-workspace-and-panel-system",
    "4.1-workspace-organization",
    "4.2-item-system-and-lifecycle",
    "4.3-pane-management",
    "4.4-search-system",
    // Project management
    "5-project-management",
    "5.1-project-orchestration",
    "5.2-worktree-and-file-system",
    "5.3-buffer-store",
    // Language intelligence
    "6-language-intelligence",
    "6.1-lsp-store-architecture",
    "6.2-language-server-lifecycle",
    "6.3-completions-and-diagnostics",
    "6.4-multi-language-server-coordination",
    // Settings
    "7-settings-and-configuration",
    "7.1-settings-store-and-layering",
    "7.2-settings-ui",
    "7.3-settings-migration",
    "7.4-keymap-system",
    // Git
    "8-git-integration",
    "8.1-git-panel-and-ui",
    "8.2-git-store-and-state-management",
    "8.3-repository-operations",
    "8.4-diff-system",
    // Terminal and tasks
    "9-terminal-and-task-execution",
    "9.1-terminal-core",
    "9.2-terminal-view-and-rendering",
    "9.3-task-system",
    // Vim
    "10-vim-mode",
    "10.1-mode-state-machine",
    "10.2-operators-motions-and-objects",
    "10.3-visual-mode",
    "10.4-helix-mode-integration",
    // Agent
    "11-ai-agent-system",
    "11.1-agent-communication-protocol-(acp)",
    "11.2-agent-ui-and-thread-management",
    "11.3-agent-connection-and-implementations",
    "11.4-tool-system",
    "11.5-mention-system-and-context",
    "11.6-legacy-agent-thread-system",
    // Remote and collaboration
    "12-remote-development-and-collaboration",
    "12.1-local-vs-remote-architecture",
    "12.2-remote-project-architecture",
    "12.3-collaboration-features",
    "12.4-crdt-and-synchronization",
];

pub fn parse_base_url(input: &str) -> anyhow::Result<Url> {
    let url = Url::parse(input).with_context(|| format!("parse base url: {input}"))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        anyhow::bail!("base url must be http/https: {url}");
    }
    Ok(url)
}

/// `{base}/{identifier}`, with exactly one slash in between.
pub fn page_url(base: &Url, identifier: &str) -> anyhow::Result<Url> {
    let base = base.as_str().trim_end_matches('/');
    let joined = format!("{base}/{identifier}");
    Url::parse(&joined).with_context(|| format!("build page url: {joined}"))
}
