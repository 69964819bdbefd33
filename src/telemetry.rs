//! Tracing initialization logic.

use crate::cli::LogFormat;
use crate::config::Config;
use tracing::{debug, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber: an `EnvFilter` plus a stderr fmt layer,
/// rendered as text or JSON depending on `cfg.log_format`.
pub fn init_tracing(cfg: &Config) {
    let filter = EnvFilter::try_new(&cfg.log_filter).unwrap_or_else(|e| {
        eprintln!("Warning: Invalid log filter '{}': {e}", cfg.log_filter);
        EnvFilter::new("startwatch=info") // Default filter on parse error
    });

    let registry = tracing_subscriber::registry().with(filter);

    match cfg.log_format {
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(cfg.verbose)
                    .with_level(true),
            )
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
    }

    info!(
        version = env!("CARGO_PKG_VERSION"),
        // Use option_env! for build info to avoid build errors outside a git checkout
        git_sha = option_env!("VERGEN_GIT_SHA").unwrap_or("unknown"),
        build_ts = option_env!("VERGEN_BUILD_TIMESTAMP").unwrap_or("unknown"),
        "startwatch starting"
    );

    debug!(
        log_filter = %cfg.log_filter,
        log_format = ?cfg.log_format,
        json = cfg.json,
        verbose = cfg.verbose,
        "Configuration loaded"
    );
}
