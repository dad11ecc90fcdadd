//! largeint — pooled digit-list big-integer demonstration driver.

use anyhow::Result;
use largeint_lib::{app, config};

fn main() -> Result<()> {
    // Log to stderr, WARN unless RUST_LOG overrides
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    app::run(&config::AppConfig::parse())
}
