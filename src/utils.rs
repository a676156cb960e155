//! Helpers for the rendered artifact

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Download name for a rendered configuration: `<hostname>_config.txt`
pub fn artifact_filename(hostname: &str) -> String {
    format!("{hostname}_config.txt")
}

/// Write a rendered configuration into `dir`, returning the file path
pub fn write_artifact(dir: &Path, hostname: &str, contents: &str) -> Result<PathBuf> {
    crate::validate::require_hostname(hostname)?;

    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let path = dir.join(artifact_filename(hostname));
    std::fs::write(&path, contents)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_artifact_filename() {
        assert_eq!(artifact_filename("SW-CORE-01"), "SW-CORE-01_config.txt");
    }

    #[test]
    fn test_write_artifact_creates_directory() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("out");

        let path = write_artifact(&dir, "SW-CORE-01", "hostname SW-CORE-01\n").unwrap();
        assert_eq!(path, dir.join("SW-CORE-01_config.txt"));
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "hostname SW-CORE-01\n"
        );
    }

    #[test]
    fn test_write_artifact_stays_in_directory() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("out");

        assert!(write_artifact(&dir, "../escaped", "end\n").is_err());
        assert!(!tmp.path().join("escaped_config.txt").exists());
    }
}
