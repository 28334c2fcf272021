use tracing_subscriber::{fmt, EnvFilter};

/// Output format for the process-wide subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines for interactive terminals.
    #[default]
    Human,
    /// JSON lines, suitable for Vector / Loki / ELK shippers.
    Json,
}

/// Install the global tracing subscriber for a fieldhud binary.
///
/// The `RUST_LOG` environment variable wins when set; otherwise
/// `default_level` applies (e.g. "info", "fh_monitor=debug,warn").
///
/// Safe to call multiple times (e.g. in tests) -- subsequent calls are
/// no-ops.
pub fn init(service_name: &str, default_level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_level(true);

    let installed = match format {
        LogFormat::Human => builder.with_thread_ids(false).try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.ok();

    tracing::info!(service = service_name, ?format, "logging initialised");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_a_noop() {
        init("fh-test", "warn", LogFormat::Human);
        init("fh-test", "warn", LogFormat::Json);
        init("fh-test", "debug", LogFormat::Human);
    }
}
