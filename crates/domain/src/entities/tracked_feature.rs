//! Tracked feature attribute record.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A character feature flagged for limited-use tracking on the sheet.
///
/// Only the use counter matters to status computation. A feature that was
/// never granted uses (`max_uses == 0`) is skipped the same way a level-less
/// spell slot is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedFeature {
    name: String,
    max_uses: u32,
    used: u32,
}

impl TrackedFeature {
    /// Create a tracked feature row. `used` may not exceed `max_uses`.
    pub fn new(name: impl Into<String>, max_uses: u32, used: u32) -> Result<Self, DomainError> {
        if used > max_uses {
            return Err(DomainError::validation(format!(
                "used count ({used}) exceeds maximum uses ({max_uses})"
            )));
        }
        Ok(Self {
            name: name.into(),
            max_uses,
            used,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn max_uses(&self) -> u32 {
        self.max_uses
    }

    pub fn used(&self) -> u32 {
        self.used
    }

    /// Fraction of uses still available, or 0 for a feature with no uses.
    pub fn remaining_fraction(&self) -> f64 {
        if self.max_uses == 0 {
            0.0
        } else {
            f64::from(self.max_uses - self.used) / f64::from(self.max_uses)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_used_over_max() {
        assert!(TrackedFeature::new("Rage", 3, 4).is_err());
    }

    #[test]
    fn test_remaining_fraction() {
        let feature = TrackedFeature::new("Rage", 3, 1).expect("valid feature");
        assert_eq!(feature.remaining_fraction(), 2.0 / 3.0);
    }

    #[test]
    fn test_remaining_fraction_without_uses() {
        let feature = TrackedFeature::new("Darkvision", 0, 0).expect("valid feature");
        assert_eq!(feature.remaining_fraction(), 0.0);
    }
}
