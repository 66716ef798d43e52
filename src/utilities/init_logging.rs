use anyhow::{Context, Result};
use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global `tracing` subscriber writing to stderr.
///
/// `level` is an `EnvFilter` directive such as `warn` or
/// `neynar_page_meta=debug`. Calling this again after a subscriber is set
/// is a no-op.
pub fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level).with_context(|| format!("Invalid log level: {}", level))?;

    // A subscriber may already be installed (tests call this repeatedly)
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .ok();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_levels_and_repeated_calls() {
        init_logging("warn").unwrap();
        init_logging("neynar_page_meta=debug").unwrap();
    }

    #[test]
    fn rejects_unknown_level() {
        assert!(init_logging("neynar_page_meta=loud").is_err());
    }
}
