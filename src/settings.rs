//! Application settings
//!
//! Settings that shape how the tool runs (logging, where artifacts go,
//! whether audit errors are fatal). Device fields live in `input`.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Root settings structure
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Artifact output settings
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Log level, overridden by RUST_LOG
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    /// Directory receiving `<hostname>_config.txt`
    #[serde(default = "default_output_dir")]
    pub directory: PathBuf,

    /// Refuse to write a configuration when the audit reports an error
    #[serde(default)]
    pub strict: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_dir(),
            strict: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Settings {
    /// Load settings from an explicit path, or from the first file found in
    /// the standard locations, or fall back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let config_paths = vec![
            PathBuf::from("iosgen.toml"),
            PathBuf::from("/etc/iosgen/config.toml"),
            dirs::home_dir()
                .map(|h| h.join(".config/iosgen/config.toml"))
                .unwrap_or_default(),
        ];

        for path in &config_paths {
            if path.is_file() {
                return Self::from_file(path);
            }
        }

        Ok(Self::default())
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let cfg = Settings::default();
        assert_eq!(cfg.logging.level, "info");
        assert_eq!(cfg.output.directory, PathBuf::from("."));
        assert!(!cfg.output.strict);
    }

    #[test]
    fn test_load_explicit_partial_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[output]\nstrict = true").unwrap();

        let cfg = Settings::load(Some(file.path())).unwrap();
        assert!(cfg.output.strict);
        assert_eq!(cfg.output.directory, PathBuf::from("."));
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn test_load_explicit_missing_file_fails() {
        assert!(Settings::load(Some(Path::new("/nonexistent/iosgen.toml"))).is_err());
    }

    #[test]
    fn test_load_rejects_bad_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[output]\nstrict = \"maybe\"").unwrap();
        assert!(Settings::load(Some(file.path())).is_err());
    }
}
