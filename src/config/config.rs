use std::path::{Path, PathBuf};
use std::time::Duration;

use ::config::{Config, ConfigError, File, FileFormat};
use serde::Deserialize;

/// Settings file looked up in the working directory. Missing is fine.
pub const SETTINGS_FILE: &str = "Settings.toml";

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub fetch: FetchConfig,
    pub file: FileConfig,
    pub log: LogConfig,
}

#[derive(Debug, Deserialize)]
pub struct FetchConfig {
    pub timeout_secs: u64,
    pub user_agent: String,
}

#[derive(Debug, Deserialize)]
pub struct FileConfig {
    pub output_dir: String,
    pub output_file: String,
}

#[derive(Debug, Deserialize)]
pub struct LogConfig {
    pub level: String,
}

impl FetchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl FileConfig {
    /// Full path the fetched document is written to.
    pub fn output_path(&self) -> PathBuf {
        Path::new(&self.output_dir).join(&self.output_file)
    }
}

/// Builds the configuration from built-in defaults, overlaid with the
/// optional TOML file at `settings_path`.
pub fn load_config(settings_path: &Path) -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        .set_default("fetch.timeout_secs", 60)?
        .set_default(
            "fetch.user_agent",
            concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")),
        )?
        .set_default("file.output_dir", "downloads")?
        .set_default("file.output_file", "neynar-mini-app-virality.html")?
        .set_default("log.level", "warn")?
        .add_source(File::new(&settings_path.to_string_lossy(), FileFormat::Toml).required(false))
        .build()?;

    settings.try_deserialize::<AppConfig>()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn defaults_apply_without_settings_file() {
        let dir = tempdir().unwrap();
        let config = load_config(&dir.path().join("Settings.toml")).unwrap();

        assert_eq!(config.fetch.timeout_secs, 60);
        assert_eq!(config.fetch.timeout(), Duration::from_secs(60));
        assert!(config.fetch.user_agent.starts_with("neynar_page_meta/"));
        assert_eq!(
            config.file.output_path(),
            Path::new("downloads").join("neynar-mini-app-virality.html")
        );
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn settings_file_overrides_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Settings.toml");
        fs::write(
            &path,
            "[fetch]\ntimeout_secs = 5\n\n[file]\noutput_dir = \"out\"\n\n[log]\nlevel = \"debug\"\n",
        )
        .unwrap();

        let config = load_config(&path).unwrap();

        assert_eq!(config.fetch.timeout_secs, 5);
        assert_eq!(config.file.output_dir, "out");
        // Keys absent from the file keep their defaults
        assert_eq!(config.file.output_file, "neynar-mini-app-virality.html");
        assert_eq!(config.log.level, "debug");
    }

    #[test]
    fn malformed_settings_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Settings.toml");
        fs::write(&path, "[fetch\ntimeout_secs = ").unwrap();

        assert!(load_config(&path).is_err());
    }
}
