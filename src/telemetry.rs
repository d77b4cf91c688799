use std::io::{self, IsTerminal};
use std::str::FromStr;

use tracing::Level;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt};

/// Targets of the workspace crates; `RACE_ENGINEER_LOG` raises them all at once.
const WORKSPACE_TARGETS: [&str; 6] = [
    "race_engineer",
    "api",
    "pit_wall",
    "kb_client",
    "web_search",
    "ai_llm_service",
];

/// RFC3339 UTC timer implemented via `chrono`.
/// Example output: `2025-09-12T10:20:30Z`
#[derive(Clone, Debug, Default)]
struct ChronoRfc3339Utc;

impl FormatTime for ChronoRfc3339Utc {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        let now = chrono::Utc::now();
        // No fractional seconds, Z-suffix
        let s = now.to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
        w.write_str(&s)
    }
}

/// Level directives for every workspace crate, e.g. `pit_wall=debug`.
fn workspace_directives(level: Level) -> impl Iterator<Item = Directive> {
    WORKSPACE_TARGETS.into_iter().filter_map(move |target| {
        Directive::from_str(&format!("{target}={}", level.as_str().to_lowercase())).ok()
    })
}

/// `RUST_LOG` (or `default`), plus an optional workspace-wide level from
/// `RACE_ENGINEER_LOG` (`debug`, `trace`, ...).
fn env_filter(default: &str) -> EnvFilter {
    let base = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    match std::env::var("RACE_ENGINEER_LOG")
        .ok()
        .and_then(|v| Level::from_str(v.trim()).ok())
    {
        Some(level) => workspace_directives(level).fold(base, EnvFilter::add_directive),
        None => base,
    }
}

/// Installs the global subscriber: compact single-line events, RFC3339 UTC
/// timestamps, span-close durations, ANSI only on a terminal.
pub fn init(default_filter: &str) -> Result<(), TryInitError> {
    let layer = fmt::layer()
        .with_timer(ChronoRfc3339Utc)
        .with_level(true)
        .with_target(true)
        .with_ansi(io::stdout().is_terminal())
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter(default_filter))
        .with(layer)
        .try_init()
}
