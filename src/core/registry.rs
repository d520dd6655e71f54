//! Fixed-capacity registry of subsystem records
//!
//! Records are kept in insertion order. The registry never grows past its
//! capacity, removal shifts later records left so relative order is stable,
//! and filtering always produces a new registry.

use crate::config::RegistryConfig;
use crate::error::{RegistryError, Result};
use crate::filter::StatusMask;
use crate::record::{Record, DEFAULT_NAME_WIDTH};
use crate::status::StatusField;
use tracing::{debug, warn};

/// Largest number of records any registry can hold
pub const MAX_ARR: usize = 12;

/// Bounded, insertion-ordered collection of [`Record`]s
///
/// Duplicate names are allowed; name lookups return the first match.
///
/// # Examples
///
/// ```
/// use subsys_registry::{Record, Registry, StatusField};
///
/// # fn main() -> subsys_registry::Result<()> {
/// let mut registry = Registry::new();
/// registry.append(Record::new("GPS", 0x00))?;
/// registry.append(Record::new("RADIO", 0x00))?;
///
/// let index = registry.find("RADIO").unwrap();
/// registry.get_mut(index)?.set_field(StatusField::Power, 1)?;
///
/// let powered = registry.filter("1*******")?;
/// assert_eq!(powered.len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    records: Vec<Record>,
    capacity: usize,
    name_width: usize,
}

impl Registry {
    /// Create an empty registry holding up to [`MAX_ARR`] records
    pub fn new() -> Self {
        Registry {
            records: Vec::with_capacity(MAX_ARR),
            capacity: MAX_ARR,
            name_width: DEFAULT_NAME_WIDTH,
        }
    }

    /// Create an empty registry from a configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the configuration is out of bounds.
    pub fn with_config(config: &RegistryConfig) -> Result<Self> {
        config.validate()?;
        Ok(Registry {
            records: Vec::with_capacity(config.capacity),
            capacity: config.capacity,
            name_width: config.name_width,
        })
    }

    /// Empty registry with the same limits as `self`
    fn empty_like(&self) -> Self {
        Registry {
            records: Vec::with_capacity(self.capacity),
            capacity: self.capacity,
            name_width: self.name_width,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.records.len() >= self.capacity
    }

    /// Width of the name column used by [`Registry::render`]
    pub fn name_width(&self) -> usize {
        self.name_width
    }

    /// Add a record at the end
    ///
    /// # Errors
    ///
    /// Returns `Full` if the registry is at capacity. The registry is
    /// unchanged in that case.
    pub fn append(&mut self, record: Record) -> Result<()> {
        if self.is_full() {
            warn!(
                "Cannot append '{}': registry full ({} records)",
                record.name(),
                self.capacity
            );
            return Err(RegistryError::Full {
                capacity: self.capacity,
            });
        }

        debug!(
            "Appended subsystem '{}' at index {}",
            record.name(),
            self.records.len()
        );
        self.records.push(record);
        Ok(())
    }

    /// Index of the first record whose name matches exactly
    pub fn find(&self, name: &str) -> Option<usize> {
        self.records
            .iter()
            .position(|record| record.name().as_str() == name)
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Mutable access to the record at `index`
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `index >= len()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut Record> {
        let len = self.records.len();
        self.records
            .get_mut(index)
            .ok_or(RegistryError::OutOfRange {
                index: isize::try_from(index).unwrap_or(isize::MAX),
                len,
            })
    }

    /// First record with the given name
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no record has that name.
    pub fn lookup(&self, name: &str) -> Result<&Record> {
        self.find(name)
            .and_then(|index| self.records.get(index))
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))
    }

    /// Mutable access to the first record with the given name
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no record has that name.
    pub fn lookup_mut(&mut self, name: &str) -> Result<&mut Record> {
        let index = self
            .find(name)
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))?;
        self.get_mut(index)
    }

    /// Set a status field on the record at `index`
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` for a bad index or `InvalidField` for a value
    /// that does not fit the field.
    pub fn set_field(&mut self, index: usize, field: StatusField, value: u8) -> Result<()> {
        self.get_mut(index)?.set_field(field, value)
    }

    /// Remove the record at `index`, shifting later records left
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `index` is negative or not below `len()`.
    pub fn remove(&mut self, index: isize) -> Result<Record> {
        let len = self.records.len();
        if index < 0 || index as usize >= len {
            return Err(RegistryError::OutOfRange { index, len });
        }

        // Vec::remove shifts the tail left, keeping relative order
        let record = self.records.remove(index as usize);
        debug!("Removed subsystem '{}' from index {}", record.name(), index);
        Ok(record)
    }

    /// Remove the first record with the given name
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no record has that name.
    pub fn remove_named(&mut self, name: &str) -> Result<Record> {
        let index = self
            .find(name)
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))?;
        self.remove(index as isize)
    }

    /// Drop every record
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// New registry holding copies of the records matching `spec`
    ///
    /// The mask is fully parsed before any destination is created.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMask` for a malformed mask string, or `Full` if the
    /// matches do not fit in the destination.
    pub fn filter(&self, spec: &str) -> Result<Registry> {
        let mask = StatusMask::parse(spec)?;
        self.filter_mask(&mask)
    }

    /// New registry holding copies of the records matching `mask`
    ///
    /// # Errors
    ///
    /// Returns `Full` if the matches do not fit in the destination. No
    /// partial result is returned.
    pub fn filter_mask(&self, mask: &StatusMask) -> Result<Registry> {
        self.filter_into(mask, self.empty_like())
    }

    /// Append copies of the records matching `mask` to `filtered`
    pub(crate) fn filter_into(
        &self,
        mask: &StatusMask,
        mut filtered: Registry,
    ) -> Result<Registry> {
        for record in self.records.iter().filter(|r| mask.matches(r.status())) {
            if let Err(e) = filtered.append(record.clone()) {
                warn!("Filter {} overflowed destination registry", mask);
                return Err(e);
            }
        }

        debug!(
            "Filter {} matched {} of {} subsystems",
            mask,
            filtered.len(),
            self.records.len()
        );
        Ok(filtered)
    }

    /// Records in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Render every record, one line each
    ///
    /// Pending data is shown but never consumed.
    pub fn render(&self) -> String {
        self.records
            .iter()
            .map(|record| record.render_with_width(self.name_width))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
