use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with optional quiet mode.
///
/// Events go to stderr so stdout carries only the rendered output.
/// `RUST_LOG` directives are honored on top of the default level.
pub fn init_logging(quiet: bool) {
    let directive = if quiet { "picklist=error" } else { "picklist=info" };
    let filter = EnvFilter::from_default_env().add_directive(
        directive
            .parse()
            .unwrap_or_else(|_| tracing_subscriber::filter::LevelFilter::INFO.into()),
    );

    // A global subscriber may already be set (e.g. by an embedding test); keep it.
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .with(filter)
        .try_init();
}
