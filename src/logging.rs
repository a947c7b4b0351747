use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Level {
    /// Suppress all tracing output by default (overrideable by `RUST_LOG`).
    #[default]
    Default,
    /// Show debug messages by default (overrideable by `RUST_LOG`).
    Verbose,
}

/// Configure `tracing` for the given [`Level`], taking `RUST_LOG` into account.
///
/// All log output goes to stderr so it never mixes with command output.
pub(crate) fn setup_logging(level: Level) {
    let filter = match level {
        Level::Default => EnvFilter::builder()
            .with_default_directive(LevelFilter::OFF.into())
            .from_env_lossy(),
        Level::Verbose => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("semanver=debug")),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_target(level == Level::Verbose)
                .with_writer(std::io::stderr),
        )
        .init();
}
