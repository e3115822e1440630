//! Stinote
//!
//! A borderless sticky note editor. On X11 the note is kept above other
//! windows and parked in the top-right corner of the focused monitor.

mod app;
mod config;
mod editor;
mod placement;
mod shared;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "stinote=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Stinote is a simple sticky note application");

    let config = config::Config::load()
        .context("Failed to load configuration")?;

    let placement = placement::select(&config.placement);
    info!("Window placement provider: {}", placement.name());

    app::run(config, placement).context("Editor window failed")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use anyhow::Context;

    #[test]
    fn test_window_error_keeps_its_source() {
        let failed: iced::Result = Err(iced::Error::WindowCreationFailed(Box::new(
            std::io::Error::new(std::io::ErrorKind::Other, "no display"),
        )));

        let err = failed.context("Editor window failed").unwrap_err();
        assert_eq!(err.to_string(), "Editor window failed");
        assert!(err.downcast_ref::<iced::Error>().is_some());
    }
}
