use std::path::PathBuf;

use anyhow::{Context, Result};

use logsession::{LogSession, SessionConfig};

fn main() -> Result<()> {
    // Diagnostics from the library go to stderr so they don't mix with log lines
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "logsession=warn".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // Optional config file as the first argument
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = match config_path {
        Some(path) => SessionConfig::load(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => SessionConfig::new("./log", "main"),
    };

    let mut logger = LogSession::new(config).context("Failed to start log session")?;

    logger.debug("This is a debug message.");
    logger.info("This is an info message.");
    logger.warning("This is a warning message.");
    logger.error("This is an error message.");
    logger.fatal("This is a fatal message.");

    Ok(())
}
