use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use typed_builder::TypedBuilder;

#[derive(TypedBuilder, Debug)]
pub struct TracingConfig {
    // Filled in by the binary so the reported name matches the executable
    pub package: &'static str,
    pub version: &'static str,
    #[builder(setter(into), default = String::from("dev"))]
    pub env: String,
    #[builder(default = LevelFilter::INFO)]
    pub default_level: LevelFilter,
    #[builder(default)]
    pub ansi: Option<bool>,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    TracingInit(#[from] tracing_subscriber::util::TryInitError),
}

/// Installs the global subscriber. `RUST_LOG` overrides the configured default level.
pub fn setup(config: TracingConfig) -> Result<(), Error> {
    let fmt_layer = tracing_subscriber::fmt::layer();
    let fmt_layer = match config.ansi {
        Some(ansi) => fmt_layer.with_ansi(ansi),
        None => fmt_layer,
    };

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(
            EnvFilter::builder()
                .with_default_directive(config.default_level.into())
                .from_env_lossy(),
        )
        .try_init()?;

    tracing::info!(
        package = config.package,
        version = config.version,
        env = %config.env,
        "tracing initialized"
    );
    Ok(())
}
