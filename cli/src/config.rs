// SPDX-FileCopyrightText: 2026 Calboard contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use calboard_core::APP_NAME;

const CONFIG_ENV: &str = "CALBOARD_CONFIG";

/// Configuration for the calboard CLI.
#[derive(Debug, Default, Clone, serde::Deserialize)]
pub struct Config {
    /// Where the session file lives. Defaults to the platform state
    /// directory when unset.
    pub session_path: Option<PathBuf>,
}

impl Config {
    /// Resolves and parses the config file: explicit path, then the
    /// `CALBOARD_CONFIG` environment variable, then the platform config
    /// directory. A missing default config is not an error; the defaults
    /// apply.
    pub fn parse(path: Option<PathBuf>) -> Result<Self, Box<dyn Error>> {
        let path = if let Some(path) = path {
            path
        } else if let Ok(env_path) = std::env::var(CONFIG_ENV) {
            PathBuf::from(env_path)
        } else {
            let config = config_dir()?.join(format!("{APP_NAME}/config.toml"));
            if !config.exists() {
                return Ok(Self::default());
            }
            config
        };

        fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read config file at {}: {e}", path.display()))?
            .parse()
    }

    /// The session file backing the event mirror.
    pub fn session_file(&self) -> Result<PathBuf, Box<dyn Error>> {
        if let Some(path) = &self.session_path {
            return Ok(path.clone());
        }
        Ok(state_dir()?.join(format!("{APP_NAME}/session.json")))
    }
}

impl FromStr for Config {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

fn config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific config directory not found".into())
}

fn state_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let state_dir = xdg::BaseDirectories::new().get_state_home();
    #[cfg(windows)]
    let state_dir = dirs::data_local_dir();
    state_dir.ok_or_else(|| "User-specific state directory not found".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_explicit_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "session_path = \"/tmp/board/session.json\"\n").unwrap();

        let config = Config::parse(Some(path)).unwrap();
        assert_eq!(
            config.session_file().unwrap(),
            PathBuf::from("/tmp/board/session.json")
        );
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        assert!(Config::parse(Some(path)).is_err());
    }

    #[test]
    fn test_default_session_file_location() {
        let config = Config::default();
        let path = config.session_file().unwrap();
        assert!(path.ends_with("calboard/session.json"));
    }
}
