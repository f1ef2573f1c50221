//! Environment loading
//!
//! `.env` in the current directory wins over `~/.showbook/.env`; neither
//! overrides variables already set in the process environment.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

/// Files that were loaded, in load order.
#[derive(Debug, Default)]
pub struct LoadedEnv {
    pub files: Vec<PathBuf>,
    pub errors: Vec<String>,
}

/// Per-user configuration directory (`~/.showbook`).
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".showbook"))
}

/// Load `.env` files. Runs before logging is set up, so the outcome is
/// returned for [`report_dotenv`] to log afterwards.
pub fn load_dotenv() -> LoadedEnv {
    let mut loaded = LoadedEnv::default();

    if let Ok(path) = dotenvy::dotenv() {
        loaded.files.push(path);
    }

    if let Some(dir) = config_dir() {
        load_env_file(&dir.join(".env"), &mut loaded);
    }

    loaded
}

fn load_env_file(path: &Path, loaded: &mut LoadedEnv) {
    if !path.exists() {
        return;
    }
    match dotenvy::from_path(path) {
        Ok(()) => loaded.files.push(path.to_path_buf()),
        Err(e) => loaded
            .errors
            .push(format!("Failed to load {}: {}", path.display(), e)),
    }
}

pub fn report_dotenv(loaded: &LoadedEnv) {
    for path in &loaded.files {
        debug!("Loaded .env from {}", path.display());
    }
    for error in &loaded.errors {
        debug!("{}", error);
    }
    if loaded.files.is_empty() {
        info!("Using environment variables only (no .env file found)");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_file_sets_missing_variables() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "SHOWBOOK_CONFIG_TEST_VAR=from-file\n").unwrap();

        let mut loaded = LoadedEnv::default();
        load_env_file(&path, &mut loaded);

        assert_eq!(loaded.files, vec![path]);
        assert_eq!(
            std::env::var("SHOWBOOK_CONFIG_TEST_VAR").as_deref(),
            Ok("from-file")
        );
    }

    #[test]
    fn missing_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let mut loaded = LoadedEnv::default();
        load_env_file(&dir.path().join(".env"), &mut loaded);
        assert!(loaded.files.is_empty());
        assert!(loaded.errors.is_empty());
    }

    #[test]
    fn test_load_dotenv_doesnt_panic() {
        let _ = load_dotenv();
    }
}
