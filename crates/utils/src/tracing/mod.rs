use polyrun_core::POLYRUN_LOG_VAR;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// Re-export tracing macros for convenience
pub use tracing::{debug, error, info, instrument, span, trace, warn, Level, Span};

/// Initialize the tracing system.
///
/// Logs always go to stderr because the generated program owns stdout.
/// `POLYRUN_LOG` takes `EnvFilter` directives; without it the level is
/// `warn`, or `debug` for polyrun crates when `verbose` is set.
pub fn init(verbose: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let filter = EnvFilter::try_from_env(POLYRUN_LOG_VAR)
        .or_else(|_| EnvFilter::try_new(default_directives(verbose)))?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(is_tty())
        .compact()
        .with_target(verbose)
        .with_thread_ids(false)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "warn,polyrun=debug,polyrun_cache=debug,polyrun_translate=debug,polyrun_sandbox=debug,polyrun_utils=debug"
    } else {
        "warn"
    }
}

/// Check if stderr is attached to a terminal
fn is_tty() -> bool {
    std::io::IsTerminal::is_terminal(&std::io::stderr())
}

/// Create a span covering one pipeline run for a source unit
pub fn pipeline_span(source_id: &str) -> Span {
    span!(Level::INFO, "pipeline", source_id = %source_id)
}

/// Emit a structured event for cache lookups
pub fn cache_event(source_id: &str, key: &str, hit: bool) {
    if hit {
        debug!(source_id = %source_id, key = %key, "cache_hit");
    } else {
        debug!(source_id = %source_id, key = %key, "cache_miss");
    }
}
