//! Registry configuration
//!
//! Loaded from TOML:
//!
//! ```toml
//! capacity = 8
//! name_width = 20
//! ```
//!
//! Both keys are optional and fall back to the defaults below.

use crate::error::{RegistryError, Result};
use crate::record::DEFAULT_NAME_WIDTH;
use crate::registry::MAX_ARR;
use crate::validation::MAX_NAME_LEN;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
    /// Maximum number of records (1..=MAX_ARR)
    pub capacity: usize,

    /// Width of the name column when rendering (1..=MAX_NAME_LEN)
    pub name_width: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        RegistryConfig {
            capacity: MAX_ARR,
            name_width: DEFAULT_NAME_WIDTH,
        }
    }
}

impl RegistryConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: RegistryConfig = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let input = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&input)?;
        tracing::info!(
            "Loaded registry config from {:?}: capacity {}, name width {}",
            path,
            config.capacity,
            config.name_width
        );
        Ok(config)
    }

    /// Check that every value is within bounds
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 || self.capacity > MAX_ARR {
            return Err(RegistryError::InvalidConfig(format!(
                "capacity {} must be between 1 and {}",
                self.capacity, MAX_ARR
            )));
        }

        if self.name_width == 0 || self.name_width > MAX_NAME_LEN {
            return Err(RegistryError::InvalidConfig(format!(
                "name_width {} must be between 1 and {}",
                self.name_width, MAX_NAME_LEN
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = RegistryConfig::default();
        assert_eq!(config.capacity, MAX_ARR);
        assert_eq!(config.name_width, DEFAULT_NAME_WIDTH);
        config.validate().unwrap();
    }

    #[test]
    fn test_partial_toml() {
        let config = RegistryConfig::from_toml_str("capacity = 4").unwrap();
        assert_eq!(config.capacity, 4);
        assert_eq!(config.name_width, DEFAULT_NAME_WIDTH);

        let config = RegistryConfig::from_toml_str("").unwrap();
        assert_eq!(config, RegistryConfig::default());
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        assert!(matches!(
            RegistryConfig::from_toml_str("capacity = 0"),
            Err(RegistryError::InvalidConfig(_))
        ));
        assert!(RegistryConfig::from_toml_str(&format!("capacity = {}", MAX_ARR + 1)).is_err());
        assert!(RegistryConfig::from_toml_str("name_width = 0").is_err());
        assert!(RegistryConfig::from_toml_str("name_width = 32").is_err());
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            RegistryConfig::from_toml_str("capacity = \"lots\""),
            Err(RegistryError::ConfigParse(_))
        ));
        assert!(matches!(
            RegistryConfig::from_toml_str("colour = 3"),
            Err(RegistryError::ConfigParse(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "capacity = 6").unwrap();
        writeln!(file, "name_width = 10").unwrap();

        let config = RegistryConfig::load(file.path()).unwrap();
        assert_eq!(config.capacity, 6);
        assert_eq!(config.name_width, 10);
    }

    #[test]
    fn test_load_missing_file() {
        let result = RegistryConfig::load("/nonexistent/registry.toml");
        assert!(matches!(result, Err(RegistryError::Io(_))));
    }
}
