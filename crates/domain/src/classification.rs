//! Per-domain classification of weighted means into severity bands.
//!
//! Each metric domain carries an ordered threshold table partitioning
//! `[0, 1]` into named bands. Boundaries are lower-inclusive: a value exactly
//! at a band's minimum falls into that band, and 1.0 falls into the last
//! band. Classification is total and deterministic.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::Severity;

/// A metric domain for which one status component computes one aggregate
/// status record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatusDomain {
    Magical,
    Tracked,
}

impl StatusDomain {
    /// The persistence identifier keying this domain's status record.
    pub fn identifier(&self) -> &'static str {
        match self {
            Self::Magical => "Status.Magical",
            Self::Tracked => "Status.Tracked",
        }
    }
}

impl fmt::Display for StatusDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier())
    }
}

/// One band of a threshold table. Applies to values from `min` (inclusive)
/// up to the next band's minimum (exclusive).
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdBand {
    min: f64,
    label: &'static str,
    severity: Severity,
}

impl ThresholdBand {
    pub fn new(min: f64, label: &'static str, severity: Severity) -> Self {
        Self {
            min,
            label,
            severity,
        }
    }

    /// Inclusive lower bound of the band.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Display phrase for statuses in this band.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Severity class for statuses in this band.
    pub fn severity(&self) -> Severity {
        self.severity
    }
}

/// Ordered severity bands partitioning `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdTable {
    bands: Vec<ThresholdBand>,
}

impl ThresholdTable {
    /// Build a table, validating total coverage: the first band must start
    /// at 0.0 and minimums must strictly increase while staying below 1.0.
    pub fn new(bands: Vec<ThresholdBand>) -> Result<Self, DomainError> {
        let Some(first) = bands.first() else {
            return Err(DomainError::validation(
                "threshold table requires at least one band",
            ));
        };
        if first.min != 0.0 {
            return Err(DomainError::validation(format!(
                "first band must start at 0.0, got {}",
                first.min
            )));
        }
        for pair in bands.windows(2) {
            if pair[1].min <= pair[0].min {
                return Err(DomainError::validation(format!(
                    "band minimums must strictly increase: {} then {}",
                    pair[0].min, pair[1].min
                )));
            }
        }
        if bands.iter().any(|band| band.min >= 1.0) {
            return Err(DomainError::validation(
                "band minimums must stay below 1.0",
            ));
        }

        Ok(Self { bands })
    }

    /// Classify a weighted mean into its band. Inputs outside `[0, 1]` are
    /// clamped first, keeping the function total.
    pub fn classify(&self, value: f64) -> &ThresholdBand {
        let value = value.clamp(0.0, 1.0);
        // Construction guarantees the first band starts at 0.0, so a match
        // always exists.
        self.bands
            .iter()
            .rev()
            .find(|band| band.min <= value)
            .unwrap_or(&self.bands[0])
    }
}

/// Classification bands for the magical domain (spell slot potential).
pub fn magical_thresholds() -> ThresholdTable {
    ThresholdTable::new(vec![
        ThresholdBand::new(0.0, "Drained", Severity::Critical),
        ThresholdBand::new(0.15, "Diminished", Severity::Low),
        ThresholdBand::new(0.4, "Steady", Severity::Guarded),
        ThresholdBand::new(0.7, "Potent", Severity::Stable),
        ThresholdBand::new(0.9, "Brimming", Severity::Peak),
    ])
    .expect("static magical threshold table is valid")
}

/// Classification bands for the tracked domain (limited-use features).
pub fn tracked_thresholds() -> ThresholdTable {
    ThresholdTable::new(vec![
        ThresholdBand::new(0.0, "Exhausted", Severity::Critical),
        ThresholdBand::new(0.15, "Depleted", Severity::Low),
        ThresholdBand::new(0.4, "Rationed", Severity::Guarded),
        ThresholdBand::new(0.7, "Ready", Severity::Stable),
        ThresholdBand::new(0.9, "Fresh", Severity::Peak),
    ])
    .expect("static tracked threshold table is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_tables_construct() {
        // The expect() calls above rely on this.
        assert_eq!(magical_thresholds().bands.len(), 5);
        assert_eq!(tracked_thresholds().bands.len(), 5);
    }

    #[test]
    fn test_identifier_keys() {
        assert_eq!(StatusDomain::Magical.identifier(), "Status.Magical");
        assert_eq!(StatusDomain::Tracked.identifier(), "Status.Tracked");
    }

    #[test]
    fn test_classify_is_deterministic() {
        let table = magical_thresholds();
        let first = table.classify(0.234375).clone();
        let second = table.classify(0.234375).clone();
        assert_eq!(first, second);
        assert_eq!(first.label(), "Diminished");
        assert_eq!(first.severity(), Severity::Low);
    }

    #[test]
    fn test_boundaries_are_lower_inclusive() {
        let table = magical_thresholds();
        assert_eq!(table.classify(0.15).label(), "Diminished");
        assert_eq!(table.classify(0.4).label(), "Steady");
        assert_eq!(table.classify(0.7).label(), "Potent");
        assert_eq!(table.classify(0.9).label(), "Brimming");
    }

    #[test]
    fn test_classify_covers_full_range() {
        let table = tracked_thresholds();
        assert_eq!(table.classify(0.0).severity(), Severity::Critical);
        assert_eq!(table.classify(1.0).severity(), Severity::Peak);
        // Out-of-range inputs clamp rather than panic.
        assert_eq!(table.classify(-0.5).severity(), Severity::Critical);
        assert_eq!(table.classify(7.0).severity(), Severity::Peak);
    }

    #[test]
    fn test_table_rejects_gap_at_zero() {
        let result = ThresholdTable::new(vec![ThresholdBand::new(
            0.1,
            "Late start",
            Severity::Low,
        )]);
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_table_rejects_non_monotonic_bands() {
        let result = ThresholdTable::new(vec![
            ThresholdBand::new(0.0, "A", Severity::Critical),
            ThresholdBand::new(0.5, "B", Severity::Guarded),
            ThresholdBand::new(0.5, "C", Severity::Peak),
        ]);
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_table_rejects_empty() {
        assert!(ThresholdTable::new(vec![]).is_err());
    }
}
