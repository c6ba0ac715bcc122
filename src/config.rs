//! Configuration loading for suppression-guard
//!
//! Supports TOML configuration with embedded defaults.

use serde::Deserialize;
use std::path::PathBuf;

/// General configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Scanner sources whose rules this engine validates
    ///
    /// Rules from any other product pass through untouched.
    pub products: Vec<String>,

    /// Enable audit logging
    pub audit_log: bool,

    /// Path to audit log file
    pub audit_path: Option<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            products: vec!["inspector".to_string()],
            audit_log: true,
            audit_path: Some("~/.config/suppression-guard/audit.jsonl".to_string()),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load() -> Self {
        let config_paths = [
            // User-specific config
            dirs::home_dir().map(|p| p.join(".config/suppression-guard/config.toml")),
            // System-wide config
            Some(PathBuf::from("/etc/suppression-guard/config.toml")),
        ];

        for path in config_paths.into_iter().flatten() {
            if path.exists() {
                if let Ok(content) = std::fs::read_to_string(&path) {
                    match toml::from_str(&content) {
                        Ok(config) => return config,
                        Err(e) => {
                            eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                        }
                    }
                }
            }
        }

        Config::default()
    }

    /// Load from a specific path
    pub fn load_from(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Expand ~ in path strings
    pub fn expand_path(path: &str) -> PathBuf {
        if path.starts_with("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(&path[2..]);
            }
        }
        PathBuf::from(path)
    }

    /// Get the audit log path (expanded)
    pub fn audit_path(&self) -> Option<PathBuf> {
        self.general.audit_path.as_ref().map(|p| Self::expand_path(p))
    }
}

/// Embedded default configuration
pub const DEFAULT_CONFIG_TOML: &str = r#"
[general]
products = ["inspector"]
audit_log = true
audit_path = "~/.config/suppression-guard/audit.jsonl"
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.general.products, vec!["inspector".to_string()]);
        assert!(config.general.audit_log);
        assert!(config.general.audit_path.is_some());
    }

    #[test]
    fn test_parse_embedded_config() {
        let config: Config = toml::from_str(DEFAULT_CONFIG_TOML).unwrap();
        assert_eq!(config.general.products, vec!["inspector".to_string()]);
        assert!(config.general.audit_log);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str("[general]\naudit_log = false\n").unwrap();
        assert!(!config.general.audit_log);
        assert_eq!(config.general.products, vec!["inspector".to_string()]);
    }

    #[test]
    fn test_expand_path() {
        let expanded = Config::expand_path("~/.config/suppression-guard/audit.jsonl");
        assert!(!expanded.to_string_lossy().starts_with('~'));

        let absolute = Config::expand_path("/var/log/suppression-guard.jsonl");
        assert_eq!(absolute, PathBuf::from("/var/log/suppression-guard.jsonl"));
    }
}
