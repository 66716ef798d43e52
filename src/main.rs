use std::io::{self, IsTerminal, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};

use crate::config::{load_config, SETTINGS_FILE};
use crate::fetch_and_extract::fetch_and_extract;
use crate::print_metadata::{print_error, print_metadata};
use crate::utilities::init_logging::init_logging;

// Import modules
mod config;
mod fetch_and_extract;
mod print_metadata;
mod scraping;
mod utilities;

/// The one page this tool downloads.
const TARGET_URL: &str = "https://docs.neynar.com/docs/mini-app-virality-guide";

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let stdout = io::stdout();
    match run(Path::new(SETTINGS_FILE), TARGET_URL, &mut stdout.lock()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&mut io::stderr().lock(), &e).ok();
            ExitCode::FAILURE
        }
    }
}

async fn run<W: Write>(settings_path: &Path, url: &str, out: &mut W) -> Result<()> {
    // Load configuration settings
    let config = load_config(settings_path).context("Failed to load configuration")?;
    init_logging(&config.log.level)?;

    // Plain output when piped
    if !io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let (saved_path, metadata) = fetch_and_extract(&config, url).await?;

    print_metadata(out, &saved_path, &metadata).context("Failed to write report")?;

    Ok(())
}
