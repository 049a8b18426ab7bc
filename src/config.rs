//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`EULE_SECTION__KEY`)

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Main configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EuleConfig {
    /// Approximate comparison settings
    #[serde(default)]
    pub comparison: ComparisonConfig,
    /// Random generator settings
    #[serde(default)]
    pub random: RandomConfig,
    /// Demo scenario settings
    #[serde(default)]
    pub demo: DemoConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl EuleConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`EULE_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            log::debug!("Applying user config from {}", user_path.display());
            figment = figment.merge(Toml::file(&user_path));
        }

        // EULE_RANDOM__SEED=7 -> random.seed = 7
        figment = figment.merge(Env::prefixed("EULE_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Approximate comparison configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonConfig {
    /// Tolerance for the demo's inverse check. Library comparisons
    /// (`approx_eq`, quaternion equality) always use `DEFAULT_EPSILON`.
    pub epsilon: f64,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            epsilon: eule_math::math::DEFAULT_EPSILON,
        }
    }
}

/// Random generator configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RandomConfig {
    /// Fixed seed; OS entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Demo scenario configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Prism rotation as [roll, pitch, yaw] in degrees
    pub euler_angles: [f64; 3],
    /// Half edge length of the sampled box
    pub half_extent: f64,
    /// Number of random points to classify
    pub sample_count: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            euler_angles: [0.0, 0.0, 45.0],
            half_extent: 1.0,
            sample_count: 10_000,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or did not match the schema
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EuleConfig::default();
        assert_eq!(config.comparison.epsilon, 0.00001);
        assert_eq!(config.random.seed, None);
        assert_eq!(config.demo.sample_count, 10_000);
        assert_eq!(config.debug.log_level, "info");
    }

    #[test]
    fn test_config_serialization() {
        let config = EuleConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("epsilon"));
        assert!(toml.contains("euler_angles"));
        assert!(toml.contains("log_level"));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: EuleConfig = toml::from_str("[random]\nseed = 99\n").unwrap();
        assert_eq!(config.random.seed, Some(99));
        assert_eq!(config.demo, DemoConfig::default());
    }

    #[test]
    fn test_config_error_display() {
        let err: ConfigError = figment::Figment::new()
            .merge(figment::providers::Toml::string("[demo]\nsample_count = \"many\""))
            .extract::<EuleConfig>()
            .unwrap_err()
            .into();
        assert!(err.to_string().starts_with("Configuration error"));
    }
}
