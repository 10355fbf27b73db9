use slog::{o, Drain, Logger};
use slog_async::Async;
use slog_term::{FullFormat, TermDecorator};
use tracing_subscriber::EnvFilter;

/// Configuration for setting up the logger
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    async_buffer_size: usize,
    use_color: bool,
}

impl LoggerConfig {
    pub fn async_buffer_size(mut self, size: usize) -> Self {
        self.async_buffer_size = size;
        self
    }

    pub fn use_color(mut self, enabled: bool) -> Self {
        self.use_color = enabled;
        self
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            async_buffer_size: 1024,
            use_color: true,
        }
    }
}

/// Sets up the structured logger handed to services at construction
pub fn setup_logger(config: LoggerConfig) -> Logger {
    let decorator = {
        let builder = TermDecorator::new();
        let builder = if config.use_color {
            builder.force_color()
        } else {
            builder
        };
        builder.build()
    };

    let drain = FullFormat::new(decorator).build().fuse();

    let drain = Async::new(drain)
        .chan_size(config.async_buffer_size)
        .build()
        .fuse();

    Logger::root(drain, o!("version" => env!("CARGO_PKG_VERSION")))
}

/// A logger that swallows everything, for tests and benches
pub fn discard_logger() -> Logger {
    Logger::root(slog::Discard, o!())
}

/// Installs a global tracing subscriber honoring the configured level.
///
/// Safe to call more than once; later calls are no-ops so embedded and
/// test setups do not fight over the global default.
pub fn init_tracing(log_level: &str, json: bool) {
    let filter =
        EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if json {
        let _ = tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .try_init();
    } else {
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    }
}
