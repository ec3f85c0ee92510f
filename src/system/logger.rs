use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Filter variables checked in order before falling back to the verbosity
/// flag.
const LOG_ENV_VARS: [&str; 2] = ["PETCLINIC_LOAD_LOG", "RUST_LOG"];

fn default_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    }
}

fn filter_from_env(verbose: bool) -> EnvFilter {
    LOG_ENV_VARS
        .iter()
        .find_map(|name| std::env::var(name).ok())
        .map_or_else(
            || default_filter(verbose),
            |value| EnvFilter::try_new(value).unwrap_or_else(|_| default_filter(verbose)),
        )
}

/// Installs the global subscriber. Log lines go to stderr so the metrics
/// report on stdout stays clean.
pub fn init_logging(verbose: bool, no_color: bool) {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter_from_env(verbose))
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set global default subscriber: {}", err);
    }
}
