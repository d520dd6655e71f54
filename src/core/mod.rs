//! Core registry engine
//!
//! - [`status`] - packed status byte and its field descriptors
//! - [`record`] - one named subsystem with optional pending data
//! - [`registry`] - fixed-capacity ordered collection of records
//! - [`filter`] - 8-character wildcard masks over status bytes
//! - [`config`] - TOML-backed registry limits
//! - [`shared`] - lock-guarded handle for cross-thread use

pub mod config;
pub mod error;
pub mod filter;
pub mod record;
pub mod registry;
pub mod shared;
pub mod status;
pub mod validation;
