use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::core::ops::{Level, Mode};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatrixlabConfig {
    /// "beginner" or "experienced"
    pub mode: String,
    /// Learning level 1-4 (beginner mode only)
    pub level: u8,
    /// Show step-by-step traces for add/subtract/multiply
    pub show_steps: bool,
}

impl Default for MatrixlabConfig {
    fn default() -> Self {
        MatrixlabConfig {
            mode: "beginner".to_string(),
            level: 1,
            show_steps: false,
        }
    }
}

impl MatrixlabConfig {
    /// Mode the shell starts in. Unknown values fall back to beginner L1.
    pub fn startup_mode(&self) -> Mode {
        if self.mode.eq_ignore_ascii_case("experienced") {
            Mode::Experienced
        } else {
            Mode::Beginner {
                level: Level::from_number(self.level).unwrap_or(Level::One),
            }
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    // ~/.matrixlab/config.toml
    dirs_next::home_dir().map(|h| h.join(".matrixlab").join("config.toml"))
}

pub fn resolve_config_path(cli_path: &Option<PathBuf>) -> Option<PathBuf> {
    if let Some(p) = cli_path {
        return Some(p.clone());
    }
    default_config_path()
}

/// Missing file means defaults; a present but malformed file is an error.
pub fn load(path: &Option<PathBuf>) -> Result<MatrixlabConfig> {
    let Some(path) = path else {
        return Ok(MatrixlabConfig::default());
    };
    if !path.exists() {
        return Ok(MatrixlabConfig::default());
    }
    let raw =
        std::fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("parse config {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_start_in_beginner_level_one() {
        let cfg = MatrixlabConfig::default();
        assert_eq!(cfg.startup_mode(), Mode::Beginner { level: Level::One });
        assert!(!cfg.show_steps);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let cfg: MatrixlabConfig = toml::from_str("mode = \"experienced\"").unwrap();
        assert_eq!(cfg.startup_mode(), Mode::Experienced);
        assert_eq!(cfg.level, 1);
    }

    #[test]
    fn out_of_range_level_falls_back() {
        let cfg: MatrixlabConfig = toml::from_str("level = 9").unwrap();
        assert_eq!(cfg.startup_mode(), Mode::Beginner { level: Level::One });
    }
}
