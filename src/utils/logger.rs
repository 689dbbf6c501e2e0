use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

static INIT: Once = Once::new();

/// Installs the global `tracing` subscriber
///
/// The level is read from the `LOGLEVEL` environment variable
/// (`DEBUG`, `INFO`, `WARN`, `ERROR`, `TRACE`) and defaults to `INFO`.
/// Calling it more than once is harmless: only the first call installs anything,
/// and an already installed subscriber from the host application is left alone.
pub fn setup_logger() {
    INIT.call_once(|| {
        let level = env::var("LOGLEVEL")
            .map(|value| parse_level(&value))
            .unwrap_or(Level::INFO);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .with_target(false)
            .finish();

        if tracing::subscriber::set_global_default(subscriber).is_ok() {
            tracing::debug!("Log level set to: {}", level);
        }
    });
}

fn parse_level(value: &str) -> Level {
    match value.trim().to_uppercase().as_str() {
        "TRACE" => Level::TRACE,
        "DEBUG" => Level::DEBUG,
        "WARN" => Level::WARN,
        "ERROR" => Level::ERROR,
        _ => Level::INFO,
    }
}
