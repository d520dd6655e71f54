//! Bitmask filters over status bytes
//!
//! A filter is written as 8 characters, most significant bit first:
//! - `1` - bit must be set
//! - `0` - bit must be clear
//! - `*` - bit is ignored
//!
//! `"1*******"` selects powered subsystems, `"*1******"` those with pending
//! data, `"********"` everything.

use crate::error::{RegistryError, Result};
use crate::status::Status;
use std::fmt;
use std::str::FromStr;

/// Number of characters in a mask string
pub const MASK_LEN: usize = 8;

/// Parsed status filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusMask {
    /// Bits that must be set
    required: u8,
    /// Bits that are ignored
    dont_care: u8,
}

impl StatusMask {
    /// Mask that matches every status
    pub const ANY: StatusMask = StatusMask {
        required: 0,
        dont_care: 0xFF,
    };

    /// Parse a mask string
    ///
    /// The whole string is checked before a mask is produced.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMask` if the string is not exactly 8 characters
    /// or contains anything other than `0`, `1` and `*`.
    ///
    /// # Examples
    /// ```
    /// use subsys_registry::{Status, StatusMask};
    ///
    /// let mask = StatusMask::parse("1*******").unwrap();
    /// assert!(mask.matches(Status::from_bits(0x80)));
    /// assert!(!mask.matches(Status::from_bits(0x40)));
    /// assert!(StatusMask::parse("1x******").is_err());
    /// ```
    pub fn parse(spec: &str) -> Result<Self> {
        if spec.chars().count() != MASK_LEN {
            return Err(RegistryError::InvalidMask(spec.to_string()));
        }

        let mut required = 0u8;
        let mut dont_care = 0u8;

        for (i, c) in spec.chars().enumerate() {
            let bit = 1u8 << (MASK_LEN - 1 - i);
            match c {
                '1' => required |= bit,
                '*' => dont_care |= bit,
                '0' => {}
                _ => return Err(RegistryError::InvalidMask(spec.to_string())),
            }
        }

        Ok(StatusMask {
            required,
            dont_care,
        })
    }

    /// Bits that must be set
    pub fn required(&self) -> u8 {
        self.required
    }

    /// Bits that are ignored
    pub fn dont_care(&self) -> u8 {
        self.dont_care
    }

    /// Check whether a status satisfies the mask
    ///
    /// A bit passes when it agrees with the required bit or is marked
    /// don't-care: `(!required ^ status) | dont_care == 0xFF`.
    pub fn matches(&self, status: Status) -> bool {
        ((!self.required ^ status.bits()) | self.dont_care) == 0xFF
    }
}

impl FromStr for StatusMask {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for StatusMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in (0..MASK_LEN).rev() {
            let bit = 1u8 << i;
            let c = if self.dont_care & bit != 0 {
                '*'
            } else if self.required & bit != 0 {
                '1'
            } else {
                '0'
            };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
