//! Packed subsystem status byte
//!
//! Six independent sub-fields share one byte. Each field is described by its
//! lowest bit position and its width; every read and write goes through that
//! descriptor so no field can touch another field's bits.
//!
//! # Layout
//!
//! ```text
//! bit   7     6     5     4     3  2   1  0
//!     +-----+-----+-----+-----+------+------+
//!     | PWR | DATA| ACT | ERR | PERF | RES  |
//!     +-----+-----+-----+-----+------+------+
//! ```

use crate::error::{RegistryError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One sub-field of the status byte
///
/// The discriminant is the field's lowest bit position, which is also the
/// numeric status id accepted from callers.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusField {
    /// Resource utilisation level (0-3)
    Resource = 0,
    /// Performance level (0-3)
    Performance = 2,
    /// Error flag
    Error = 4,
    /// Activity flag
    Activity = 5,
    /// Pending-data presence flag
    Data = 6,
    /// Power flag
    Power = 7,
}

impl StatusField {
    /// All fields, in the order they are rendered
    pub const ALL: [StatusField; 6] = [
        StatusField::Power,
        StatusField::Data,
        StatusField::Activity,
        StatusField::Error,
        StatusField::Performance,
        StatusField::Resource,
    ];

    /// Look up a field by its numeric status id
    ///
    /// Ids that do not name a field's lowest bit (1, 3, 8+) return `None`.
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(Self::Resource),
            2 => Some(Self::Performance),
            4 => Some(Self::Error),
            5 => Some(Self::Activity),
            6 => Some(Self::Data),
            7 => Some(Self::Power),
            _ => None,
        }
    }

    /// Numeric status id (lowest bit position)
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Bit offset of the field inside the status byte
    pub const fn offset(self) -> u8 {
        self as u8
    }

    /// Width of the field in bits
    pub const fn width(self) -> u8 {
        match self {
            Self::Resource | Self::Performance => 2,
            _ => 1,
        }
    }

    /// Largest value the field can hold
    pub const fn max_value(self) -> u8 {
        (1 << self.width()) - 1
    }

    /// Mask selecting the field's bits in place
    pub const fn mask(self) -> u8 {
        self.max_value() << self.offset()
    }

    /// Short label used when rendering
    pub const fn label(self) -> &'static str {
        match self {
            Self::Power => "PWR",
            Self::Data => "DATA",
            Self::Activity => "ACT",
            Self::Error => "ERR",
            Self::Performance => "PERF",
            Self::Resource => "RES",
        }
    }
}

impl fmt::Display for StatusField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StatusField {
    type Err = RegistryError;

    /// Accepts a numeric id, a full field name or a render label (case-insensitive)
    fn from_str(s: &str) -> Result<Self> {
        if let Ok(id) = s.parse::<u8>() {
            return Self::from_id(id).ok_or_else(|| RegistryError::UnknownField(s.to_string()));
        }

        match s.to_ascii_lowercase().as_str() {
            "power" | "pwr" => Ok(Self::Power),
            "data" => Ok(Self::Data),
            "activity" | "act" => Ok(Self::Activity),
            "error" | "err" => Ok(Self::Error),
            "performance" | "perf" => Ok(Self::Performance),
            "resource" | "res" => Ok(Self::Resource),
            _ => Err(RegistryError::UnknownField(s.to_string())),
        }
    }
}

/// Packed 8-bit subsystem status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Status(u8);

impl Status {
    /// Wrap a raw status byte. Every bit pattern is valid.
    pub const fn from_bits(bits: u8) -> Self {
        Status(bits)
    }

    /// Raw status byte
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Read one field, shifted down to start at bit 0
    pub const fn get(self, field: StatusField) -> u8 {
        (self.0 & field.mask()) >> field.offset()
    }

    /// True if the field holds a non-zero value
    pub const fn is_set(self, field: StatusField) -> bool {
        self.get(field) != 0
    }

    /// Replace one field's bits, leaving all other bits untouched
    ///
    /// # Errors
    ///
    /// Returns `InvalidField` if `value` does not fit in the field. The status
    /// is unchanged in that case.
    pub fn set(&mut self, field: StatusField, value: u8) -> Result<()> {
        if value > field.max_value() {
            return Err(RegistryError::InvalidField {
                field: field.id(),
                value,
            });
        }

        self.0 = (self.0 & !field.mask()) | ((value << field.offset()) & field.mask());
        Ok(())
    }

    /// Fill or clear every bit of a field
    pub fn set_flag(&mut self, field: StatusField, on: bool) {
        if on {
            self.0 |= field.mask();
        } else {
            self.0 &= !field.mask();
        }
    }

    /// Set a field by numeric status id
    ///
    /// # Errors
    ///
    /// Returns `InvalidField` for an unknown id or an out-of-range value.
    pub fn set_by_id(&mut self, id: u8, value: u8) -> Result<()> {
        let field =
            StatusField::from_id(id).ok_or(RegistryError::InvalidField { field: id, value })?;
        self.set(field, value)
    }
}

impl From<u8> for Status {
    fn from(bits: u8) -> Self {
        Status(bits)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for field in StatusField::ALL {
            if !first {
                f.write_str(" | ")?;
            }
            write!(f, "{}: {}", field.label(), self.get(field))?;
            first = false;
        }
        Ok(())
    }
}
