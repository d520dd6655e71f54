use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Registry is full (capacity {capacity})")]
    Full { capacity: usize },

    #[error("Index {index} out of range (registry holds {len} records)")]
    OutOfRange { index: isize, len: usize },

    #[error("Subsystem not found: {0}")]
    NotFound(String),

    #[error("Invalid status update: field {field}, value {value}")]
    InvalidField { field: u8, value: u8 },

    #[error("Unknown status field: {0}")]
    UnknownField(String),

    #[error("Invalid filter mask: {0} (must be 8 characters of 0, 1 or *)")]
    InvalidMask(String),

    #[error("No pending data available")]
    NoData,

    #[error("Invalid registry configuration: {0}")]
    InvalidConfig(String),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RegistryError>;
