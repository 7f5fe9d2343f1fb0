//! `.env` loading
//!
//! Priority order (highest to lowest):
//! 1. Variables already set in the process environment
//! 2. ./.env in the current directory
//! 3. ~/.hellopg/.env

use std::path::{Path, PathBuf};

use tracing::info;

/// Get the hellopg config directory path (~/.hellopg)
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".hellopg"))
}

/// Load `.env` files and return the ones that were read.
///
/// Runs before argument parsing (clap reads `HELLOPG_BIND`) and therefore
/// before tracing exists; call [`log_loaded`] once the subscriber is up.
/// Existing variables are never overwritten.
pub fn load_dotenv() -> Vec<PathBuf> {
    let mut loaded_from = Vec::new();

    if let Ok(path) = dotenvy::dotenv() {
        loaded_from.push(path);
    }

    if let Some(env_file) = config_dir().map(|dir| dir.join(".env")) {
        if load_file(&env_file) {
            loaded_from.push(env_file);
        }
    }

    loaded_from
}

pub fn log_loaded(loaded_from: &[PathBuf]) {
    if loaded_from.is_empty() {
        info!("Using environment variables only (no .env file found)");
    } else {
        let paths: Vec<String> = loaded_from.iter().map(|p| p.display().to_string()).collect();
        info!("Loaded configuration from: {}", paths.join(", "));
    }
}

fn load_file(path: &Path) -> bool {
    path.exists() && dotenvy::from_path(path).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn config_dir_is_under_home() {
        if let Some(dir) = config_dir() {
            assert!(dir.ends_with(".hellopg"));
        }
    }

    #[test]
    fn load_file_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!load_file(&dir.path().join(".env")));
    }

    #[test]
    fn load_file_does_not_override_existing_vars() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "HELLOPG_TEST_PRESET=from-file").unwrap();
        writeln!(file, "HELLOPG_TEST_FRESH=from-file").unwrap();

        std::env::set_var("HELLOPG_TEST_PRESET", "from-env");
        assert!(load_file(&path));

        assert_eq!(std::env::var("HELLOPG_TEST_PRESET").unwrap(), "from-env");
        assert_eq!(std::env::var("HELLOPG_TEST_FRESH").unwrap(), "from-file");
    }
}
