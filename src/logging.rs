use anyhow::Context as _;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// HTTP stack targets held at `info` unless `RUST_LOG` names them, so a
/// `RUST_LOG=debug` run shows page progress rather than connection pool noise.
const QUIET_TARGETS: &[&str] = &["hyper_util", "reqwest", "rustls"];

/// Logs go to stderr; stdout carries the progress report.
pub fn init() -> anyhow::Result<()> {
    let spec = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(spec.as_deref()).context("build log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("initialize tracing subscriber: {err}"))?;

    Ok(())
}

fn build_filter(spec: Option<&str>) -> anyhow::Result<EnvFilter> {
    let spec = spec.map(str::trim).filter(|spec| !spec.is_empty());
    let mut filter = match spec.map(EnvFilter::try_new) {
        Some(Ok(filter)) => filter,
        Some(Err(err)) => {
            eprintln!("ignoring invalid {}: {err}", EnvFilter::DEFAULT_ENV);
            EnvFilter::try_new(DEFAULT_FILTER)?
        }
        None => EnvFilter::try_new(DEFAULT_FILTER)?,
    };

    for target in QUIET_TARGETS {
        if spec.is_some_and(|spec| spec.contains(target)) {
            continue;
        }
        let directive = format!("{target}=info");
        filter = filter.add_directive(
            directive
                .parse()
                .with_context(|| format!("parse log directive: {directive}"))?,
        );
    }

    Ok(filter)
}
