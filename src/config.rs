//! Configuration for dochub
//!
//! Loaded from YAML with a fallback chain: explicit path, then
//! `~/.config/dochub/dochub.yml`, then `./dochub.yml`, then defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_level: Option<String>,
    pub simulation: SimulationConfig,
    pub tui: TuiConfig,
}

/// Simulated processing latency per completion rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub generated_document_ms: u64,
    pub extracted_text_ms: u64,
    pub file_output_ms: u64,
    pub generic_ms: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            generated_document_ms: 2000,
            extracted_text_ms: 2500,
            file_output_ms: 2000,
            generic_ms: 600,
        }
    }
}

impl SimulationConfig {
    /// No simulated latency at all
    pub fn instant() -> Self {
        Self {
            generated_document_ms: 0,
            extracted_text_ms: 0,
            file_output_ms: 0,
            generic_ms: 0,
        }
    }

    /// Same latency for every rule
    pub fn uniform(ms: u64) -> Self {
        Self {
            generated_document_ms: ms,
            extracted_text_ms: ms,
            file_output_ms: ms,
            generic_ms: ms,
        }
    }

    pub fn generated_document(&self) -> Duration {
        Duration::from_millis(self.generated_document_ms)
    }

    pub fn extracted_text(&self) -> Duration {
        Duration::from_millis(self.extracted_text_ms)
    }

    pub fn file_output(&self) -> Duration {
        Duration::from_millis(self.file_output_ms)
    }

    pub fn generic(&self) -> Duration {
        Duration::from_millis(self.generic_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    pub tick_rate_ms: u64,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self { tick_rate_ms: 250 }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: Some("info".to_string()),
            simulation: SimulationConfig::default(),
            tui: TuiConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // An explicit path must load
        if let Some(path) = config_path {
            return Self::load_from_file(path);
        }

        let project_name = env!("CARGO_PKG_NAME");

        // Try primary location: ~/.config/<project>/<project>.yml
        if let Some(config_dir) = dirs::config_dir() {
            let primary_config = config_dir.join(project_name).join(format!("{}.yml", project_name));
            if primary_config.exists() {
                match Self::load_from_file(&primary_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        log::warn!("Failed to load config from {}: {}", primary_config.display(), e);
                    }
                }
            }
        }

        // Try fallback location: ./<project>.yml
        let fallback_config = PathBuf::from(format!("{}.yml", project_name));
        if fallback_config.exists() {
            match Self::load_from_file(&fallback_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    log::warn!("Failed to load config from {}: {}", fallback_config.display(), e);
                }
            }
        }

        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Load configuration from one YAML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        log::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.log_level.as_deref(), Some("info"));
        assert_eq!(config.simulation.generated_document_ms, 2000);
        assert_eq!(config.simulation.extracted_text_ms, 2500);
        assert_eq!(config.simulation.file_output_ms, 2000);
        assert_eq!(config.simulation.generic_ms, 600);
        assert_eq!(config.tui.tick_rate_ms, 250);
    }

    #[test]
    fn test_instant_simulation() {
        let sim = SimulationConfig::instant();
        assert_eq!(sim.generic(), Duration::ZERO);
        assert_eq!(sim.extracted_text(), Duration::ZERO);
    }

    #[test]
    fn test_uniform_simulation() {
        let sim = SimulationConfig::uniform(40);
        assert_eq!(sim.generated_document(), Duration::from_millis(40));
        assert_eq!(sim.file_output(), Duration::from_millis(40));
    }

    #[test]
    fn test_load_partial_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "simulation:\n  generic_ms: 10\ntui:\n  tick_rate_ms: 100").unwrap();

        let config = Config::load(Some(&file.path().to_path_buf())).unwrap();
        assert_eq!(config.simulation.generic_ms, 10);
        assert_eq!(config.simulation.file_output_ms, 2000);
        assert_eq!(config.tui.tick_rate_ms, 100);
        assert_eq!(config.log_level.as_deref(), Some("info"));
    }

    #[test]
    fn test_load_explicit_missing_file_fails() {
        let path = PathBuf::from("/nonexistent/dochub.yml");
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_load_invalid_yaml_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "simulation: [not, a, map").unwrap();
        let result = Config::load_from_file(file.path());
        assert!(matches!(result, Err(crate::error::DocHubError::Yaml(_))));
    }
}
