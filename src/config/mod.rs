//! Configuration system with YAML schema and validation.
//!
//! Mistake-proofing happens in three layers:
//! - Type-safe configuration structs (`deny_unknown_fields`)
//! - Range validation via `validator`
//! - Semantic validation beyond the schema

use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

use crate::error::{RunoffError, RunoffResult};
use crate::model::{ParamKind, SimulationParameters};

/// Embedded default configuration, used on launch and by the reset action.
pub const DEFAULT_CONFIG_YAML: &str = include_str!("../../configs/default.yaml");

/// Top-level runoff-lab configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct RunoffConfig {
    /// Schema version for forward compatibility.
    #[validate(length(min = 1))]
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    /// Scenario name shown in titles.
    #[serde(default)]
    pub name: String,

    /// Model parameters.
    #[validate(nested)]
    #[serde(default)]
    pub parameters: SimulationParameters,
}

fn default_schema_version() -> String {
    "1.0".to_string()
}

impl RunoffConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - YAML parsing fails
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> RunoffResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&content)?;
        tracing::info!(path = %path.display(), name = %config.name, "loaded configuration");
        Ok(config)
    }

    /// Parse configuration from YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> RunoffResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        config.validate_semantic()?;
        Ok(config)
    }

    /// The embedded default configuration.
    ///
    /// Falls back to the compiled defaults if the embedded YAML is unusable.
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_yaml(DEFAULT_CONFIG_YAML).unwrap_or_else(|err| {
            tracing::warn!(%err, "embedded configuration rejected, using compiled defaults");
            Self::default()
        })
    }

    /// Serialize to YAML.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_yaml(&self) -> RunoffResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Create a builder for configuration.
    #[must_use]
    pub fn builder() -> RunoffConfigBuilder {
        RunoffConfigBuilder::default()
    }

    /// Validate constraints the range checks cannot express.
    fn validate_semantic(&self) -> RunoffResult<()> {
        for kind in ParamKind::ALL {
            let value = self.parameters.get(kind);
            if !value.is_finite() {
                return Err(RunoffError::config(format!(
                    "{} must be finite, got {value}",
                    kind.name()
                )));
            }
        }

        if self.parameters.rain_center > self.parameters.duration {
            tracing::warn!(
                rain_center = self.parameters.rain_center,
                duration = self.parameters.duration,
                "rain center lies beyond the simulated duration"
            );
        }

        Ok(())
    }
}

impl Default for RunoffConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            name: "default-storm".to_string(),
            parameters: SimulationParameters::default(),
        }
    }
}

/// Configuration builder for programmatic construction.
#[derive(Debug, Default)]
pub struct RunoffConfigBuilder {
    name: Option<String>,
    parameters: Option<SimulationParameters>,
    overrides: Vec<(ParamKind, f64)>,
}

impl RunoffConfigBuilder {
    /// Set the scenario name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replace all parameters.
    #[must_use]
    pub const fn parameters(mut self, parameters: SimulationParameters) -> Self {
        self.parameters = Some(parameters);
        self
    }

    /// Override a single parameter.
    #[must_use]
    pub fn param(mut self, kind: ParamKind, value: f64) -> Self {
        self.overrides.push((kind, value));
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> RunoffConfig {
        let mut config = RunoffConfig::default();

        if let Some(name) = self.name {
            config.name = name;
        }

        if let Some(parameters) = self.parameters {
            config.parameters = parameters;
        }

        for (kind, value) in self.overrides {
            config.parameters = config.parameters.with(kind, value);
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_matches_defaults() {
        let config = RunoffConfig::embedded();
        assert_eq!(config.parameters, SimulationParameters::default());
        assert_eq!(config.name, "default-storm");
        assert_eq!(config.schema_version, "1.0");
    }

    #[test]
    fn test_from_yaml_full() {
        let yaml = r#"
schema_version: "1.0"
name: "flash-flood"
parameters:
  k_nl: 0.5
  n: 2.0
  rain_peak: 40.0
  rain_center: 3.0
  rain_width: 0.5
  duration: 8.0
"#;
        let config = RunoffConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.name, "flash-flood");
        assert_eq!(config.parameters.k_nl, 0.5);
        assert_eq!(config.parameters.rain_peak, 40.0);
    }

    #[test]
    fn test_from_yaml_defaults_missing_sections() {
        let config = RunoffConfig::from_yaml("name: bare\n").unwrap();
        assert_eq!(config.schema_version, "1.0");
        assert_eq!(config.parameters, SimulationParameters::default());
    }

    #[test]
    fn test_from_yaml_rejects_unknown_field() {
        let yaml = "name: x\nseed: 42\n";
        assert!(matches!(
            RunoffConfig::from_yaml(yaml),
            Err(RunoffError::YamlParse(_))
        ));
    }

    #[test]
    fn test_from_yaml_rejects_partial_parameters() {
        let yaml = "parameters:\n  k_nl: 2.0\n";
        assert!(RunoffConfig::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_from_yaml_rejects_out_of_range() {
        let yaml = r"
parameters:
  k_nl: 20.0
  n: 1.5
  rain_peak: 15.0
  rain_center: 5.0
  rain_width: 2.0
  duration: 10.0
";
        assert!(matches!(
            RunoffConfig::from_yaml(yaml),
            Err(RunoffError::Validation(_))
        ));
    }

    #[test]
    fn test_from_yaml_rejects_empty_schema_version() {
        let yaml = "schema_version: \"\"\n";
        assert!(matches!(
            RunoffConfig::from_yaml(yaml),
            Err(RunoffError::Validation(_))
        ));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = RunoffConfig::builder()
            .name("roundtrip")
            .param(ParamKind::N, 2.5)
            .build();
        let yaml = config.to_yaml().unwrap();
        assert_eq!(RunoffConfig::from_yaml(&yaml).unwrap(), config);
    }

    #[test]
    fn test_builder_overrides_apply_after_parameters() {
        let base = SimulationParameters::new(1.0, 1.0, 10.0, 2.0, 1.0, 6.0);
        let config = RunoffConfig::builder()
            .parameters(base)
            .param(ParamKind::RainPeak, 30.0)
            .build();
        assert_eq!(config.parameters.k_nl, 1.0);
        assert_eq!(config.parameters.rain_peak, 30.0);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storm.yaml");
        std::fs::write(&path, DEFAULT_CONFIG_YAML).unwrap();
        let config = RunoffConfig::load(&path).unwrap();
        assert_eq!(config.parameters, SimulationParameters::default());
    }

    #[test]
    fn test_load_missing_file() {
        let result = RunoffConfig::load("/nonexistent/storm.yaml");
        assert!(matches!(result, Err(RunoffError::Io(_))));
    }
}
