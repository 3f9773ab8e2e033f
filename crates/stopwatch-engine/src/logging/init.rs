use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info", "warn",
/// "stopwatch_engine=debug").
///
/// `write_style` controls ANSI coloring behavior.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Filter applied when neither `env_filter` nor `RUST_LOG` is set.
    pub const DEFAULT_LEVEL: log::LevelFilter = log::LevelFilter::Info;

    fn builder(self, rust_log: Option<String>) -> env_logger::Builder {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = self.env_filter {
            builder.parse_filters(&filter);
        } else if let Some(filter) = rust_log {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(Self::DEFAULT_LEVEL);
        }

        builder.write_style(self.write_style);
        builder
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// This function is idempotent; subsequent calls are ignored. Output goes
/// to stderr so it never interleaves with a terminal display on stdout.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = config.builder(std::env::var("RUST_LOG").ok());
        builder.target(env_logger::Target::Stderr);

        if builder.try_init().is_err() {
            // Another logger was installed by the host; keep it.
            return;
        }

        log::debug!("logging initialized");
    });
}
