//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset, blank or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Build the log filter from `RUST_LOG`-style directives.
pub fn env_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    // JSON logs on stderr; stdout carries the headless grid dump.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(directives.as_deref()))
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    fn level(directives: Option<&str>) -> Option<LevelFilter> {
        env_filter(directives).max_level_hint()
    }

    #[test]
    fn falls_back_to_info() {
        assert_eq!(level(None), Some(LevelFilter::INFO));
        assert_eq!(level(Some("  ")), Some(LevelFilter::INFO));
        assert_eq!(level(Some("techstore=loud")), Some(LevelFilter::INFO));
    }

    #[test]
    fn honours_valid_directives() {
        assert_eq!(level(Some("debug")), Some(LevelFilter::DEBUG));
        assert_eq!(level(Some(" warn ")), Some(LevelFilter::WARN));
    }

    #[test]
    fn init_is_idempotent() {
        init();
        init();
    }
}
