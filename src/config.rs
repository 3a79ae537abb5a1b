use crate::error::{NexusError, NexusResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Inclusive range of readings considered normal by the json adapter
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct NormalRange {
    pub min: f64,
    pub max: f64,
}

impl NormalRange {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl Default for NormalRange {
    fn default() -> Self {
        Self {
            min: 18.0,
            max: 28.0,
        }
    }
}

/// Runtime configuration for the demonstrations
///
/// Every field has a default, so a JSON file only needs the keys it changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NexusConfig {
    /// Informational throughput figure printed by the manager
    pub manager_capacity: u32,

    /// Normal range for temperature readings
    pub normal_range: NormalRange,

    /// Default log filter when `NEXUS_LOG` is unset
    pub log_level: String,

    /// Plants the watering system knows how to water
    pub waterable_plants: Vec<String>,

    /// Target file for the archive creation exercise
    pub archive_path: PathBuf,

    /// Number of synthetic game events to stream
    pub event_count: u32,

    /// Seed for the game event stream
    pub event_seed: u64,

    /// Minimum level counted as a high-level player
    pub high_level_threshold: u8,
}

impl Default for NexusConfig {
    fn default() -> Self {
        Self {
            manager_capacity: 1000,
            normal_range: NormalRange::default(),
            log_level: "warn".to_string(),
            waterable_plants: ["Fern", "Cactus", "Bamboo", "Orchid", "Tomato", "Lettuce", "Carrot"]
                .iter()
                .map(|p| p.to_string())
                .collect(),
            archive_path: PathBuf::from("new_discovery.txt"),
            event_count: 1000,
            event_seed: 42,
            high_level_threshold: 10,
        }
    }
}

impl NexusConfig {
    /// Load configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> NexusResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| NexusError::from_io(e, path))?;
        let config: NexusConfig = serde_json::from_str(&raw).map_err(|e| {
            NexusError::ConfigError(format!("{}: {}", path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field invariants
    pub fn validate(&self) -> NexusResult<()> {
        if self.normal_range.min > self.normal_range.max {
            return Err(NexusError::ConfigError(format!(
                "normal_range min {} exceeds max {}",
                self.normal_range.min, self.normal_range.max
            )));
        }
        if self.manager_capacity == 0 {
            return Err(NexusError::ConfigError(
                "manager_capacity must be positive".to_string(),
            ));
        }
        if self.waterable_plants.is_empty() {
            return Err(NexusError::ConfigError(
                "waterable_plants must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for constructing NexusConfig instances with a fluent API
///
/// # Example
/// ```
/// use nexus_lib::config::NexusConfigBuilder;
///
/// let config = NexusConfigBuilder::new()
///     .manager_capacity(500)
///     .normal_range(15.0, 25.0)
///     .build()
///     .unwrap();
/// assert_eq!(config.manager_capacity, 500);
/// ```
#[derive(Debug, Default)]
pub struct NexusConfigBuilder {
    config: NexusConfig,
}

impl NexusConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn manager_capacity(mut self, capacity: u32) -> Self {
        self.config.manager_capacity = capacity;
        self
    }

    pub fn normal_range(mut self, min: f64, max: f64) -> Self {
        self.config.normal_range = NormalRange { min, max };
        self
    }

    pub fn log_level(mut self, level: impl Into<String>) -> Self {
        self.config.log_level = level.into();
        self
    }

    pub fn waterable_plants<I, S>(mut self, plants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.waterable_plants = plants.into_iter().map(Into::into).collect();
        self
    }

    pub fn archive_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.archive_path = path.into();
        self
    }

    pub fn event_stream(mut self, count: u32, seed: u64) -> Self {
        self.config.event_count = count;
        self.config.event_seed = seed;
        self
    }

    pub fn high_level_threshold(mut self, threshold: u8) -> Self {
        self.config.high_level_threshold = threshold;
        self
    }

    /// Build the NexusConfig instance
    ///
    /// # Errors
    /// Returns `NexusError::BuilderError` if the configuration is inconsistent
    pub fn build(self) -> NexusResult<NexusConfig> {
        self.config
            .validate()
            .map_err(|e| NexusError::BuilderError(e.to_string()))?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = NexusConfig::default();
        assert_eq!(config.manager_capacity, 1000);
        assert_eq!(config.normal_range, NormalRange { min: 18.0, max: 28.0 });
        assert_eq!(config.waterable_plants.len(), 7);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_normal_range_is_inclusive() {
        let range = NormalRange::default();
        assert!(range.contains(18.0));
        assert!(range.contains(28.0));
        assert!(!range.contains(28.1));
        assert!(!range.contains(17.9));
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"manager_capacity": 250}}"#).unwrap();

        let config = NexusConfig::load(file.path()).unwrap();
        assert_eq!(config.manager_capacity, 250);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_load_missing_file() {
        let result = NexusConfig::load("/nonexistent/nexus.json");
        assert!(matches!(result, Err(NexusError::FileNotFound(_))));
    }

    #[test]
    fn test_load_malformed_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let result = NexusConfig::load(file.path());
        assert!(matches!(result, Err(NexusError::ConfigError(_))));
    }

    #[test]
    fn test_builder_success() {
        let config = NexusConfigBuilder::new()
            .manager_capacity(10)
            .normal_range(0.0, 5.0)
            .waterable_plants(["Rose"])
            .event_stream(50, 7)
            .build()
            .unwrap();

        assert_eq!(config.manager_capacity, 10);
        assert_eq!(config.waterable_plants, vec!["Rose".to_string()]);
        assert_eq!(config.event_count, 50);
        assert_eq!(config.event_seed, 7);
    }

    #[test]
    fn test_builder_rejects_inverted_range() {
        let result = NexusConfigBuilder::new().normal_range(30.0, 10.0).build();
        assert!(matches!(result, Err(NexusError::BuilderError(_))));
    }

    #[test]
    fn test_builder_rejects_empty_catalog() {
        let result = NexusConfigBuilder::new()
            .waterable_plants(Vec::<String>::new())
            .build();
        assert!(result.is_err());
    }
}
