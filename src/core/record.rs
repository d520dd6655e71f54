//! Subsystem records
//!
//! A record pairs a bounded name with a packed [`Status`] and a pending data
//! word. The DATA status bit is the only presence flag for that word.

use crate::error::{RegistryError, Result};
use crate::status::{Status, StatusField};
use crate::validation::SubsystemName;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default width of the name column when rendering
pub const DEFAULT_NAME_WIDTH: usize = 16;

/// One named subsystem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "RecordRepr", from = "RecordRepr")]
pub struct Record {
    name: SubsystemName,
    status: Status,
    /// Only meaningful while the DATA bit is set
    data: u32,
}

/// Serialized form: `data` is present only while the DATA bit is set
#[derive(Serialize, Deserialize)]
struct RecordRepr {
    name: SubsystemName,
    status: Status,
    #[serde(default)]
    data: Option<u32>,
}

impl From<Record> for RecordRepr {
    fn from(record: Record) -> Self {
        RecordRepr {
            data: record.peek_data(),
            name: record.name,
            status: record.status,
        }
    }
}

impl From<RecordRepr> for Record {
    fn from(repr: RecordRepr) -> Self {
        let mut record = Record {
            name: repr.name,
            status: repr.status,
            data: 0,
        };
        if let Some(value) = repr.data {
            record.data = value;
            record.status.set_flag(StatusField::Data, true);
        }
        record
    }
}

impl Record {
    /// Create a record with a raw initial status and no pending data
    ///
    /// The status byte is taken as-is. A set DATA bit in it exposes a
    /// pending value of 0.
    pub fn new(name: impl Into<SubsystemName>, status: u8) -> Self {
        Record {
            name: name.into(),
            status: Status::from_bits(status),
            data: 0,
        }
    }

    pub fn name(&self) -> &SubsystemName {
        &self.name
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Read one status field
    pub fn field(&self, field: StatusField) -> u8 {
        self.status.get(field)
    }

    /// Set one status field
    ///
    /// Setting DATA directly only flips presence; the stored word is left
    /// alone.
    ///
    /// # Errors
    ///
    /// Returns `InvalidField` if `value` is wider than the field.
    pub fn set_field(&mut self, field: StatusField, value: u8) -> Result<()> {
        self.status.set(field, value)?;
        tracing::debug!(
            "Subsystem '{}': {} set to {} (status {:#04X})",
            self.name,
            field,
            value,
            self.status.bits()
        );
        Ok(())
    }

    /// Set one status field by numeric status id
    ///
    /// # Errors
    ///
    /// Returns `InvalidField` for an unknown id or an out-of-range value.
    pub fn set_field_by_id(&mut self, id: u8, value: u8) -> Result<()> {
        let field =
            StatusField::from_id(id).ok_or(RegistryError::InvalidField { field: id, value })?;
        self.set_field(field, value)
    }

    /// True if pending data is present
    pub fn has_data(&self) -> bool {
        self.status.is_set(StatusField::Data)
    }

    /// Store a pending value and mark it present
    ///
    /// Returns the value it replaced, if one was present.
    pub fn set_data(&mut self, value: u32) -> Option<u32> {
        let old = self.peek_data();
        self.data = value;
        self.status.set_flag(StatusField::Data, true);
        tracing::debug!("Subsystem '{}': data set to {:08X}", self.name, value);
        old
    }

    /// Consume the pending value
    ///
    /// # Errors
    ///
    /// Returns `NoData` if the DATA bit is clear.
    pub fn take_data(&mut self) -> Result<u32> {
        if !self.has_data() {
            return Err(RegistryError::NoData);
        }

        let value = self.data;
        self.data = 0;
        self.status.set_flag(StatusField::Data, false);
        tracing::debug!("Subsystem '{}': data {:08X} taken", self.name, value);
        Ok(value)
    }

    /// Read the pending value without consuming it
    pub fn peek_data(&self) -> Option<u32> {
        self.has_data().then_some(self.data)
    }

    /// Render the record on one line with a custom name column width
    pub fn render_with_width(&self, name_width: usize) -> String {
        let mut line = format!(
            " - [Name: {:<width$}, Status: ({}",
            self.name,
            self.status,
            width = name_width
        );
        if let Some(data) = self.peek_data() {
            line.push_str(&format!(" | Data: {:08X}", data));
        }
        line.push_str(")]");
        line
    }

    /// Render the record on one line
    ///
    /// Pending data is shown but never consumed.
    pub fn render(&self) -> String {
        self.render_with_width(DEFAULT_NAME_WIDTH)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
