//! # Subsys Registry - Fixed-Capacity Subsystem Status Registry
//!
//! `subsys-registry` keeps a small, bounded list of named subsystems. Each
//! subsystem carries:
//!
//! - **A packed status byte** with six independent fields (power, data,
//!   activity, error, performance, resource)
//! - **An optional pending data word**, present exactly when the DATA status
//!   bit is set
//!
//! The registry supports ordered append, first-match lookup by name, stable
//! removal, and wildcard bitmask filtering that produces a new registry.
//!
//! ## Quick Start
//!
//! ```rust
//! use subsys_registry::{Record, Registry, StatusField, Result};
//!
//! # fn main() -> Result<()> {
//! let mut registry = Registry::new();
//!
//! let mut sensor = Record::new("SENSOR", 0x00);
//! sensor.set_field(StatusField::Power, 1)?;
//! sensor.set_field(StatusField::Resource, 3)?;
//! registry.append(sensor)?;
//!
//! // Queue and consume pending data through the registry
//! let index = registry.find("SENSOR").unwrap();
//! registry.get_mut(index)?.set_data(0xDEADBEEF);
//! assert_eq!(registry.get(index).unwrap().status().bits(), 0xC3);
//!
//! // Powered subsystems with pending data
//! let busy = registry.filter("11******")?;
//! assert_eq!(busy.len(), 1);
//!
//! assert_eq!(registry.get_mut(index)?.take_data()?, 0xDEADBEEF);
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use subsys_registry::{Registry, RegistryConfig};
//!
//! # fn main() -> subsys_registry::Result<()> {
//! let config = RegistryConfig::from_toml_str("capacity = 4")?;
//! let registry = Registry::with_config(&config)?;
//! assert_eq!(registry.capacity(), 4);
//! # Ok(())
//! # }
//! ```

pub mod console;
pub mod core;

// Re-export core modules internally so crate:: paths in core still work
#[allow(unused_imports)]
pub(crate) use self::core::{config, error, filter, record, registry, shared, status, validation};

pub use crate::core::{
    config::RegistryConfig,
    error::{RegistryError, Result},
    filter::{StatusMask, MASK_LEN},
    record::{Record, DEFAULT_NAME_WIDTH},
    registry::{Registry, MAX_ARR},
    shared::SharedRegistry,
    status::{Status, StatusField},
    validation::{SubsystemName, MAX_NAME_LEN},
};
