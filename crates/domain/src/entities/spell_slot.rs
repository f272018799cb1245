//! Spell slot attribute record.
//!
//! Owned and mutated by the character-sheet data collaborator; the status
//! engine only ever reads a list of these per character.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// One spell slot row.
///
/// `level` is the slot's tier. A row with no tier carries no aggregation
/// signal and is skipped entirely by status computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellSlot {
    level: Option<u8>,
    max: u32,
    used: u32,
}

impl SpellSlot {
    /// Create a slot row. `used` may not exceed `max`. A level of zero is
    /// normalized to "no level" to match the source data, where an unset
    /// tier arrives as zero.
    pub fn new(level: Option<u8>, max: u32, used: u32) -> Result<Self, DomainError> {
        if used > max {
            return Err(DomainError::validation(format!(
                "used slots ({used}) exceed capacity ({max})"
            )));
        }
        Ok(Self {
            level: level.filter(|level| *level > 0),
            max,
            used,
        })
    }

    /// Slot tier, if any.
    pub fn level(&self) -> Option<u8> {
        self.level
    }

    /// Total capacity.
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Consumed count.
    pub fn used(&self) -> u32 {
        self.used
    }

    /// Fraction of this pool still available: `(max - used) / max`, or 0
    /// for a pool with no capacity.
    pub fn remaining_fraction(&self) -> f64 {
        if self.max == 0 {
            0.0
        } else {
            f64::from(self.max - self.used) / f64::from(self.max)
        }
    }
}
